//! Unit tests for the ledger context.
