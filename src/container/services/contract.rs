//! Entry points of a container instance.

use crate::container::domain::TaskIndex;
use crate::ledger::domain::{
    AccountId, Balance, CALLBACK_GAS, CallContext, ContractCode, FunctionCall,
    LedgerDomainError, MINIMUM_INIT_DEPOSIT, PromiseBatch, PromiseOutcome, ReceiptId,
};
use crate::ledger::ports::{
    InstanceStorage, InstanceStorageError, PromiseScheduler, PromiseSchedulerError,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Storage key holding the singleton container record; its presence is
/// the initialization flag.
const CONTAINER_RECORD_KEY: &str = "task-container";

/// Entry point invoked on the freshly created task instance.
const TASK_INIT_METHOD: &str = "initialize";

/// Entry point the creation chain chains back to on this container.
const TASK_CREATED_CALLBACK_METHOD: &str = "on_task_created";

/// Arguments forwarded to the new task instance's initializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInitArgs {
    /// Task name.
    pub name: String,
    /// Task description.
    pub description: String,
}

/// Arguments carried by the creation callback: the computed address of
/// the attempted task instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCreatedArgs {
    /// Fully-qualified task account.
    pub task_account: AccountId,
}

/// Service-level errors for container entry points.
#[derive(Debug, Error)]
pub enum ContainerContractError {
    /// The instance already holds a container record.
    #[error("container instance is already initialized")]
    AlreadyInitialized,

    /// The instance has no container record yet.
    #[error("container instance is not initialized")]
    NotInitialized,

    /// The attached value is below the staking floor.
    #[error("attached deposit {attached} is below the staking floor {required}")]
    InsufficientDeposit {
        /// The staking floor.
        required: Balance,
        /// The value actually attached.
        attached: Balance,
    },

    /// The computed task address is already indexed.
    #[error("task {0} already exists")]
    DuplicateTask(AccountId),

    /// The runtime supplied no sender public key to grant access to.
    #[error("caller has no public key to grant access to")]
    MissingSenderPublicKey,

    /// The computed task address is not a valid account identifier.
    #[error(transparent)]
    Ledger(#[from] LedgerDomainError),

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

/// Result type for container entry points.
pub type ContainerContractResult<T> = Result<T, ContainerContractError>;

/// A deployed container instance: the task index behind the storage port
/// plus the task-creation protocol over the scheduler port.
#[derive(Clone)]
pub struct ContainerContract<S, P>
where
    S: InstanceStorage,
    P: PromiseScheduler,
{
    account: AccountId,
    code: ContractCode,
    storage: Arc<S>,
    scheduler: Arc<P>,
}

impl<S, P> ContainerContract<S, P>
where
    S: InstanceStorage,
    P: PromiseScheduler,
{
    /// Creates the contract facade for the instance at `account`,
    /// carrying the task executable payload it deploys to new
    /// sub-accounts.
    #[must_use]
    pub const fn new(
        account: AccountId,
        code: ContractCode,
        storage: Arc<S>,
        scheduler: Arc<P>,
    ) -> Self {
        Self {
            account,
            code,
            storage,
            scheduler,
        }
    }

    /// Returns the instance's own account.
    #[must_use]
    pub const fn account(&self) -> &AccountId {
        &self.account
    }

    /// Creates the empty task index.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerContractError::AlreadyInitialized`] on a second
    /// call, or [`ContainerContractError::InsufficientDeposit`] when the
    /// attached value is below the staking floor.
    pub async fn initialize(&self, ctx: &CallContext) -> ContainerContractResult<()> {
        if self.storage.contains(CONTAINER_RECORD_KEY).await? {
            return Err(ContainerContractError::AlreadyInitialized);
        }
        if ctx.attached_deposit() < MINIMUM_INIT_DEPOSIT {
            return Err(ContainerContractError::InsufficientDeposit {
                required: MINIMUM_INIT_DEPOSIT,
                attached: ctx.attached_deposit(),
            });
        }

        self.save_index(&TaskIndex::new()).await?;
        info!(account = %self.account, "task container created");
        Ok(())
    }

    /// Returns the confirmed task addresses.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerContractError::NotInitialized`] before
    /// initialization.
    pub async fn get_task_list(&self) -> ContainerContractResult<Vec<AccountId>> {
        Ok(self.load_index().await?.accounts())
    }

    /// Starts the task-creation protocol for `task_id`.
    ///
    /// Computes the fully-qualified address `<task_id>.<container>`, then
    /// schedules one chain against it: account creation, deployment of
    /// the task payload, a full-access grant for the caller's key, and
    /// the task initialization call carrying the attached value. The
    /// chain ends with [`Self::on_task_created`] on this container; the
    /// index is not touched until that callback confirms success.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerContractError::NotInitialized`] before
    /// initialization, a [`LedgerDomainError`] when the composed address
    /// is not a valid account identifier,
    /// [`ContainerContractError::DuplicateTask`] when the address is
    /// already indexed, [`ContainerContractError::MissingSenderPublicKey`]
    /// when the runtime supplied no key, or a [`PromiseSchedulerError`]
    /// when the runtime refuses the batch.
    pub async fn add_task(
        &self,
        ctx: &CallContext,
        task_id: &str,
        name: &str,
        description: &str,
    ) -> ContainerContractResult<ReceiptId> {
        let index = self.load_index().await?;

        let task_account = self.account.sub_account(task_id)?;
        if index.contains(&task_account) {
            return Err(ContainerContractError::DuplicateTask(task_account));
        }
        let sender_key = ctx
            .sender_public_key()
            .ok_or(ContainerContractError::MissingSenderPublicKey)?;

        info!(account = %self.account, task = %task_account, "attempting to create task");

        let init_args = serde_json::to_value(TaskInitArgs {
            name: name.to_owned(),
            description: description.to_owned(),
        })?;
        let callback_args = serde_json::to_value(TaskCreatedArgs {
            task_account: task_account.clone(),
        })?;

        let batch = PromiseBatch::new(task_account)
            .create_account()
            .deploy_contract(self.code.clone())
            .add_full_access_key(sender_key.clone())
            .function_call(
                FunctionCall::new(TASK_INIT_METHOD, init_args)
                    .with_deposit(ctx.attached_deposit())
                    .with_gas(CALLBACK_GAS),
            )
            .then(
                self.account.clone(),
                FunctionCall::new(TASK_CREATED_CALLBACK_METHOD, callback_args)
                    .with_gas(CALLBACK_GAS),
            );
        let receipt = self.scheduler.schedule(batch).await?;
        Ok(receipt)
    }

    /// Callback carrying the outcome of a scheduled creation chain.
    ///
    /// Indexes `task_account` only on a `Succeeded` outcome. `Pending`
    /// and `Failed` outcomes are logged and leave the index untouched;
    /// no retry is scheduled and the attempt's deposit is not recovered
    /// here.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerContractError::NotInitialized`] before
    /// initialization, or a storage/codec error when persisting the
    /// updated index fails.
    pub async fn on_task_created(
        &self,
        task_account: &AccountId,
        outcome: PromiseOutcome,
    ) -> ContainerContractResult<()> {
        let mut index = self.load_index().await?;
        match outcome {
            PromiseOutcome::Pending => {
                info!(account = %self.account, task = %task_account, "task creation is pending");
            }
            PromiseOutcome::Succeeded => {
                index.register(task_account.clone());
                self.save_index(&index).await?;
                info!(account = %self.account, task = %task_account, "task creation succeeded");
            }
            PromiseOutcome::Failed => {
                warn!(account = %self.account, task = %task_account, "task creation failed");
            }
        }
        Ok(())
    }

    async fn load_index(&self) -> ContainerContractResult<TaskIndex> {
        let bytes = self
            .storage
            .read(CONTAINER_RECORD_KEY)
            .await?
            .ok_or(ContainerContractError::NotInitialized)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn save_index(&self, index: &TaskIndex) -> ContainerContractResult<()> {
        let bytes = serde_json::to_vec(index)?;
        self.storage.write(CONTAINER_RECORD_KEY, &bytes).await?;
        Ok(())
    }
}
