//! Scheduling port for asynchronous cross-instance call chains.

use crate::ledger::domain::{PromiseBatch, ReceiptId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for promise scheduling operations.
pub type PromiseSchedulerResult<T> = Result<T, PromiseSchedulerError>;

/// Non-blocking submission of promise batches to the runtime.
///
/// Scheduling returns as soon as the runtime accepts the batch; the
/// batch outcome is delivered later, to the chained callback entry
/// point, as a separate invocation. Nothing in the core ever waits on a
/// receipt.
#[async_trait]
pub trait PromiseScheduler: Send + Sync {
    /// Hands a batch to the runtime for asynchronous execution.
    ///
    /// # Errors
    ///
    /// Returns [`PromiseSchedulerError::Runtime`] when the runtime
    /// refuses the batch; the invoking operation aborts with no state
    /// change.
    async fn schedule(&self, batch: PromiseBatch) -> PromiseSchedulerResult<ReceiptId>;
}

/// Errors returned by promise scheduler implementations.
#[derive(Debug, Clone, Error)]
pub enum PromiseSchedulerError {
    /// Runtime-layer failure.
    #[error("scheduler runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl PromiseSchedulerError {
    /// Wraps a runtime error.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
