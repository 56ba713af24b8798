//! In-memory instance storage for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ledger::ports::{InstanceStorage, InstanceStorageError, InstanceStorageResult};

/// Thread-safe in-memory record storage for one simulated instance.
///
/// Cloning shares the underlying map; create a separate value per
/// simulated contract account to model per-instance isolation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    cells: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryStorage {
    /// Creates an empty storage instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InstanceStorage for InMemoryStorage {
    async fn read(&self, key: &str) -> InstanceStorageResult<Option<Vec<u8>>> {
        let cells = self.cells.read().map_err(|err| {
            InstanceStorageError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(cells.get(key).cloned())
    }

    async fn write(&self, key: &str, bytes: &[u8]) -> InstanceStorageResult<()> {
        let mut cells = self.cells.write().map_err(|err| {
            InstanceStorageError::persistence(std::io::Error::other(err.to_string()))
        })?;
        cells.insert(key.to_owned(), bytes.to_vec());
        Ok(())
    }

    async fn contains(&self, key: &str) -> InstanceStorageResult<bool> {
        let cells = self.cells.read().map_err(|err| {
            InstanceStorageError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(cells.contains_key(key))
    }
}
