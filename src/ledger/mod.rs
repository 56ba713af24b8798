//! Ledger/runtime adapter context.
//!
//! The host ledger executes entry points, exposes the caller identity and
//! attached value, and lets a contract schedule chained asynchronous
//! sub-calls whose outcome is delivered to a callback entry point on a
//! later, separate invocation. This module models that boundary:
//!
//! - Domain value types in [`domain`] (accounts, balances, call context,
//!   promise batches and outcomes)
//! - Port contracts in [`ports`] (instance storage, promise scheduling)
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
