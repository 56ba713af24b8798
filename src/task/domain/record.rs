//! Task aggregate root.

use super::{TaskDomainError, TaskStatus};
use crate::ledger::domain::{AccountId, Balance, EXECUTION_FEE_RESERVE};
use serde::{Deserialize, Serialize};

/// Singleton task record persisted by one task instance.
///
/// `owner`, `name`, `description`, and `escrow` are fixed at creation;
/// `assigner` is set by exactly one successful assignment and `status`
/// only ever moves forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    owner: AccountId,
    assigner: Option<AccountId>,
    name: String,
    description: String,
    escrow: Balance,
    status: TaskStatus,
}

impl TaskRecord {
    /// Creates an open, unassigned record owned by the creating account.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::BlankTaskName`] when the name is empty
    /// after trimming.
    pub fn new(
        owner: AccountId,
        name: impl Into<String>,
        description: impl Into<String>,
        escrow: Balance,
    ) -> Result<Self, TaskDomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TaskDomainError::BlankTaskName);
        }

        Ok(Self {
            owner,
            assigner: None,
            name,
            description: description.into(),
            escrow,
            status: TaskStatus::Open,
        })
    }

    /// Returns the account that created the task.
    #[must_use]
    pub const fn owner(&self) -> &AccountId {
        &self.owner
    }

    /// Returns the assignee, once one has claimed the task.
    #[must_use]
    pub const fn assigner(&self) -> Option<&AccountId> {
        self.assigner.as_ref()
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the escrowed value fixed at creation.
    #[must_use]
    pub const fn escrow(&self) -> Balance {
        self.escrow
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Claims the task for `assignee`.
    ///
    /// Assignment does not advance the status; downstream operations gate
    /// on the assignee identity instead.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AlreadyAssigned`] when an assignee is
    /// already recorded, regardless of who asks.
    pub fn assign(&mut self, assignee: AccountId) -> Result<(), TaskDomainError> {
        if let Some(current) = &self.assigner {
            return Err(TaskDomainError::AlreadyAssigned(current.clone()));
        }
        self.assigner = Some(assignee);
        Ok(())
    }

    /// Moves the task from `Open` to `InProgress`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotAssignee`] when `caller` is not the
    /// recorded assignee (the owner included), or
    /// [`TaskDomainError::InvalidStatus`] when the task is not `Open`.
    pub fn start_processing(&mut self, caller: &AccountId) -> Result<(), TaskDomainError> {
        self.ensure_assignee(caller)?;
        self.ensure_status(TaskStatus::Open)?;
        self.status = TaskStatus::InProgress;
        Ok(())
    }

    /// Moves the task from `InProgress` to `WaitingForReview`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotAssignee`] when `caller` is not the
    /// recorded assignee, or [`TaskDomainError::InvalidStatus`] when the
    /// task is not `InProgress`.
    pub fn submit_for_review(&mut self, caller: &AccountId) -> Result<(), TaskDomainError> {
        self.ensure_assignee(caller)?;
        self.ensure_status(TaskStatus::InProgress)?;
        self.status = TaskStatus::WaitingForReview;
        Ok(())
    }

    /// Checks that `caller` is the task owner.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotOwner`] otherwise.
    pub fn ensure_owner(&self, caller: &AccountId) -> Result<(), TaskDomainError> {
        if &self.owner != caller {
            return Err(TaskDomainError::NotOwner(caller.clone()));
        }
        Ok(())
    }

    /// Returns the account the reward is released to.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotAssigned`] when the task was never
    /// assigned; there is no transfer target to build.
    pub fn reward_beneficiary(&self) -> Result<&AccountId, TaskDomainError> {
        self.assigner.as_ref().ok_or(TaskDomainError::NotAssigned)
    }

    /// Returns the escrow minus the execution-fee reserve.
    ///
    /// The staking floor enforced at initialization keeps the escrow well
    /// above the reserve.
    #[must_use]
    pub const fn reward_amount(&self) -> Balance {
        self.escrow.saturating_sub(EXECUTION_FEE_RESERVE)
    }

    /// Records the confirmed completion of the reward transfer.
    ///
    /// Only the transfer callback calls this, and only on a `Succeeded`
    /// outcome; that confirmation is the sole authority for the terminal
    /// status.
    pub const fn confirm_completed(&mut self) {
        self.status = TaskStatus::Completed;
    }

    fn ensure_assignee(&self, caller: &AccountId) -> Result<(), TaskDomainError> {
        if self.assigner.as_ref() != Some(caller) {
            return Err(TaskDomainError::NotAssignee(caller.clone()));
        }
        Ok(())
    }

    fn ensure_status(&self, expected: TaskStatus) -> Result<(), TaskDomainError> {
        if self.status != expected {
            return Err(TaskDomainError::InvalidStatus {
                expected,
                actual: self.status,
            });
        }
        Ok(())
    }
}
