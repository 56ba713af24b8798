//! Unit tests for the container context.
