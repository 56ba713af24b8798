//! In-memory promise scheduler for tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::ledger::domain::{PromiseBatch, ReceiptId};
use crate::ledger::ports::{PromiseScheduler, PromiseSchedulerError, PromiseSchedulerResult};

/// A batch accepted by the in-memory scheduler, keyed by its receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledBatch {
    /// Correlation identifier assigned at scheduling time.
    pub receipt: ReceiptId,
    /// The scheduled batch, verbatim.
    pub batch: PromiseBatch,
}

/// Promise scheduler that records batches instead of executing them.
///
/// Delivery stays in the harness's hands: tests read the recorded batch,
/// pick an outcome, and invoke the chained callback entry point
/// themselves, which is exactly how the runtime separates scheduling
/// from outcome delivery.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScheduler {
    scheduled: Arc<RwLock<Vec<ScheduledBatch>>>,
}

impl InMemoryScheduler {
    /// Creates a scheduler with no recorded batches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded batches in scheduling order.
    ///
    /// # Errors
    ///
    /// Returns [`PromiseSchedulerError::Runtime`] when the record lock is
    /// poisoned.
    pub fn scheduled(&self) -> PromiseSchedulerResult<Vec<ScheduledBatch>> {
        let scheduled = self
            .scheduled
            .read()
            .map_err(|err| PromiseSchedulerError::runtime(std::io::Error::other(err.to_string())))?;
        Ok(scheduled.clone())
    }

    /// Returns the most recently recorded batch, if any.
    ///
    /// # Errors
    ///
    /// Returns [`PromiseSchedulerError::Runtime`] when the record lock is
    /// poisoned.
    pub fn last_scheduled(&self) -> PromiseSchedulerResult<Option<ScheduledBatch>> {
        Ok(self.scheduled()?.pop())
    }
}

#[async_trait]
impl PromiseScheduler for InMemoryScheduler {
    async fn schedule(&self, batch: PromiseBatch) -> PromiseSchedulerResult<ReceiptId> {
        let mut scheduled = self
            .scheduled
            .write()
            .map_err(|err| PromiseSchedulerError::runtime(std::io::Error::other(err.to_string())))?;
        let receipt = ReceiptId::new();
        scheduled.push(ScheduledBatch { receipt, batch });
        Ok(receipt)
    }
}
