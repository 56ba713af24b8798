//! Error types for task domain validation and transitions.

use super::TaskStatus;
use crate::ledger::domain::AccountId;
use thiserror::Error;

/// Errors returned while constructing or advancing a task record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name may not be blank")]
    BlankTaskName,

    /// The task already has an assignee.
    #[error("task is already assigned to {0}")]
    AlreadyAssigned(AccountId),

    /// The caller is not the task's assignee.
    #[error("task is not assigned to {0}")]
    NotAssignee(AccountId),

    /// The task has no assignee to receive the reward.
    #[error("task has no assignee")]
    NotAssigned,

    /// The caller is not the task's owner.
    #[error("only the owner may complete the task, not {0}")]
    NotOwner(AccountId),

    /// The requested transition is not available from the current status.
    #[error("invalid task status {actual}, expected {expected}")]
    InvalidStatus {
        /// Status the operation requires.
        expected: TaskStatus,
        /// Status the record currently holds.
        actual: TaskStatus,
    },
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
