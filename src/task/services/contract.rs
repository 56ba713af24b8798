//! Entry points of a single task instance.

use crate::ledger::domain::{
    AccountId, Balance, CALLBACK_GAS, CallContext, FunctionCall, MINIMUM_INIT_DEPOSIT,
    PromiseBatch, PromiseOutcome, ReceiptId,
};
use crate::ledger::ports::{
    InstanceStorage, InstanceStorageError, PromiseScheduler, PromiseSchedulerError,
};
use crate::task::domain::{TaskDomainError, TaskRecord};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Storage key holding the singleton task record; its presence is the
/// initialization flag.
const TASK_RECORD_KEY: &str = "task";

/// Entry point the reward transfer chains back to.
const TRANSFER_CALLBACK_METHOD: &str = "on_transfer_completed";

/// Service-level errors for task entry points.
#[derive(Debug, Error)]
pub enum TaskContractError {
    /// The instance already holds a task record.
    #[error("task instance is already initialized")]
    AlreadyInitialized,

    /// The instance has no task record yet.
    #[error("task instance is not initialized")]
    NotInitialized,

    /// The attached value is below the staking floor.
    #[error("attached deposit {attached} is below the staking floor {required}")]
    InsufficientDeposit {
        /// The staking floor.
        required: Balance,
        /// The value actually attached.
        attached: Balance,
    },

    /// Domain validation or transition failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Instance storage failed.
    #[error(transparent)]
    Storage(#[from] InstanceStorageError),

    /// The runtime refused the scheduled batch.
    #[error(transparent)]
    Scheduler(#[from] PromiseSchedulerError),

    /// The stored record could not be encoded or decoded.
    #[error("record codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Result type for task entry points.
pub type TaskContractResult<T> = Result<T, TaskContractError>;

/// A deployed task instance: the singleton record behind the storage
/// port plus the reward-release protocol over the scheduler port.
///
/// Every entry point loads the full record, applies one transition to a
/// local copy, and writes the full record back, so each invocation is
/// all-or-nothing.
#[derive(Clone)]
pub struct TaskContract<S, P>
where
    S: InstanceStorage,
    P: PromiseScheduler,
{
    account: AccountId,
    storage: Arc<S>,
    scheduler: Arc<P>,
}

impl<S, P> TaskContract<S, P>
where
    S: InstanceStorage,
    P: PromiseScheduler,
{
    /// Creates the contract facade for the instance at `account`.
    #[must_use]
    pub const fn new(account: AccountId, storage: Arc<S>, scheduler: Arc<P>) -> Self {
        Self {
            account,
            storage,
            scheduler,
        }
    }

    /// Returns the instance's own account.
    #[must_use]
    pub const fn account(&self) -> &AccountId {
        &self.account
    }

    /// Creates the task record.
    ///
    /// The caller becomes the owner and the attached value becomes the
    /// escrow.
    ///
    /// # Errors
    ///
    /// Returns [`TaskContractError::AlreadyInitialized`] on a second
    /// call, [`TaskContractError::InsufficientDeposit`] when the attached
    /// value is below the staking floor, or a
    /// [`TaskDomainError::BlankTaskName`](crate::task::domain::TaskDomainError)
    /// for a blank name.
    pub async fn initialize(
        &self,
        ctx: &CallContext,
        name: &str,
        description: &str,
    ) -> TaskContractResult<TaskRecord> {
        if self.storage.contains(TASK_RECORD_KEY).await? {
            return Err(TaskContractError::AlreadyInitialized);
        }
        ensure_staking_floor(ctx)?;

        let record = TaskRecord::new(
            ctx.caller().clone(),
            name,
            description,
            ctx.attached_deposit(),
        )?;
        self.save_record(&record).await?;
        Ok(record)
    }

    /// Returns the current task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskContractError::NotInitialized`] before
    /// initialization.
    pub async fn get_task(&self) -> TaskContractResult<TaskRecord> {
        self.load_record().await
    }

    /// Claims the task for the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AlreadyAssigned`] once any assignee is
    /// recorded.
    pub async fn assign_to_self(&self, ctx: &CallContext) -> TaskContractResult<TaskRecord> {
        let mut record = self.load_record().await?;
        record.assign(ctx.caller().clone())?;
        self.save_record(&record).await?;
        Ok(record)
    }

    /// Moves the task from `Open` to `InProgress`.
    ///
    /// # Errors
    ///
    /// Returns a [`TaskDomainError`] when the caller is not the assignee
    /// or the status does not permit the transition.
    pub async fn start_processing(&self, ctx: &CallContext) -> TaskContractResult<TaskRecord> {
        let mut record = self.load_record().await?;
        record.start_processing(ctx.caller())?;
        self.save_record(&record).await?;
        Ok(record)
    }

    /// Moves the task from `InProgress` to `WaitingForReview`.
    ///
    /// # Errors
    ///
    /// Returns a [`TaskDomainError`] when the caller is not the assignee
    /// or the status does not permit the transition.
    pub async fn submit_for_review(&self, ctx: &CallContext) -> TaskContractResult<TaskRecord> {
        let mut record = self.load_record().await?;
        record.submit_for_review(ctx.caller())?;
        self.save_record(&record).await?;
        Ok(record)
    }

    /// Starts the reward-release protocol.
    ///
    /// Schedules the transfer of the escrow minus the execution-fee
    /// reserve to the assignee, chained to [`Self::on_transfer_completed`]
    /// on this instance. The record is not modified here; only the
    /// callback advances the status, once the transfer outcome is known.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotOwner`] for any caller but the
    /// owner, [`TaskDomainError::NotAssigned`] when there is no assignee
    /// to pay, or a [`PromiseSchedulerError`] when the runtime refuses
    /// the batch (in which case nothing was scheduled and nothing
    /// changed).
    pub async fn complete(&self, ctx: &CallContext) -> TaskContractResult<ReceiptId> {
        let record = self.load_record().await?;
        record.ensure_owner(ctx.caller())?;
        let beneficiary = record.reward_beneficiary()?.clone();

        let batch = PromiseBatch::new(beneficiary)
            .transfer(record.reward_amount())
            .then(
                self.account.clone(),
                FunctionCall::new(TRANSFER_CALLBACK_METHOD, json!({})).with_gas(CALLBACK_GAS),
            );
        let receipt = self.scheduler.schedule(batch).await?;
        Ok(receipt)
    }

    /// Callback carrying the outcome of the scheduled reward transfer.
    ///
    /// Persists `Completed` only on a `Succeeded` outcome. `Pending` and
    /// `Failed` outcomes are logged and leave the record untouched: a
    /// pending chain is expected to be redelivered by the runtime, and a
    /// failed transfer leaves the escrow where it was.
    ///
    /// # Errors
    ///
    /// Returns [`TaskContractError::NotInitialized`] before
    /// initialization, or a storage/codec error when persisting the
    /// confirmed record fails.
    pub async fn on_transfer_completed(
        &self,
        outcome: PromiseOutcome,
    ) -> TaskContractResult<TaskRecord> {
        let mut record = self.load_record().await?;
        match outcome {
            PromiseOutcome::Pending => {
                info!(account = %self.account, task = %record.name(), "reward transfer is pending");
            }
            PromiseOutcome::Succeeded => {
                record.confirm_completed();
                self.save_record(&record).await?;
                info!(account = %self.account, task = %record.name(), "reward transfer succeeded");
            }
            PromiseOutcome::Failed => {
                warn!(account = %self.account, task = %record.name(), "reward transfer failed");
            }
        }
        Ok(record)
    }

    async fn load_record(&self) -> TaskContractResult<TaskRecord> {
        let bytes = self
            .storage
            .read(TASK_RECORD_KEY)
            .await?
            .ok_or(TaskContractError::NotInitialized)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn save_record(&self, record: &TaskRecord) -> TaskContractResult<()> {
        let bytes = serde_json::to_vec(record)?;
        self.storage.write(TASK_RECORD_KEY, &bytes).await?;
        Ok(())
    }
}

/// Checks the staking floor on the attached value.
fn ensure_staking_floor(ctx: &CallContext) -> TaskContractResult<()> {
    if ctx.attached_deposit() < MINIMUM_INIT_DEPOSIT {
        return Err(TaskContractError::InsufficientDeposit {
            required: MINIMUM_INIT_DEPOSIT,
            attached: ctx.attached_deposit(),
        });
    }
    Ok(())
}
