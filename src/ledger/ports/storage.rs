//! Storage port for an instance's durable singleton record.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for instance storage operations.
pub type InstanceStorageResult<T> = Result<T, InstanceStorageError>;

/// Durable per-instance record storage.
///
/// Each instance persists exactly one record under a fixed well-known
/// key; presence of that key is the initialization flag. The stored
/// record is the sole source of truth between invocations — every
/// operation reads the full record, mutates a copy, and writes it back.
#[async_trait]
pub trait InstanceStorage: Send + Sync {
    /// Returns the raw record bytes stored under `key`.
    ///
    /// Returns `None` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceStorageError::Persistence`] when the underlying
    /// store fails.
    async fn read(&self, key: &str) -> InstanceStorageResult<Option<Vec<u8>>>;

    /// Writes the full record bytes under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceStorageError::Persistence`] when the underlying
    /// store fails.
    async fn write(&self, key: &str, bytes: &[u8]) -> InstanceStorageResult<()>;

    /// Returns whether `key` has been written.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceStorageError::Persistence`] when the underlying
    /// store fails.
    async fn contains(&self, key: &str) -> InstanceStorageResult<bool>;
}

/// Errors returned by instance storage implementations.
#[derive(Debug, Clone, Error)]
pub enum InstanceStorageError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl InstanceStorageError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
