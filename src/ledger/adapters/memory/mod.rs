//! In-memory ledger adapters for tests.
//!
//! These adapters simulate the runtime boundary without a ledger: one
//! [`InMemoryStorage`] per simulated instance models isolated durable
//! storage, and [`InMemoryScheduler`] records scheduled batches so a
//! test harness can inspect them and deliver callback invocations
//! itself, the way the runtime would on a later call.

mod scheduler;
mod storage;

pub use scheduler::{InMemoryScheduler, ScheduledBatch};
pub use storage::InMemoryStorage;
