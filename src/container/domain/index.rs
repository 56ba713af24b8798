//! Membership index of confirmed task instances.

use crate::ledger::domain::AccountId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Singleton container record: the set of task addresses whose creation
/// the runtime confirmed.
///
/// Membership is the only semantics; an address is never added
/// speculatively and never removed. Registration is idempotent so racing
/// creation attempts for one address collapse to a single entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskIndex {
    tasks: BTreeSet<AccountId>,
}

impl TaskIndex {
    /// Creates an empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: BTreeSet::new(),
        }
    }

    /// Returns whether `account` is already indexed.
    #[must_use]
    pub fn contains(&self, account: &AccountId) -> bool {
        self.tasks.contains(account)
    }

    /// Records a confirmed task address.
    ///
    /// Returns `false` when the address was already present.
    pub fn register(&mut self, account: AccountId) -> bool {
        self.tasks.insert(account)
    }

    /// Returns the indexed task addresses.
    #[must_use]
    pub fn accounts(&self) -> Vec<AccountId> {
        self.tasks.iter().cloned().collect()
    }

    /// Returns the number of indexed tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
