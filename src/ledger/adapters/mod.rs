//! Adapter implementations of the ledger ports.

pub mod memory;
