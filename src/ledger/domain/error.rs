//! Error types for ledger domain validation and decoding.

use thiserror::Error;

/// Errors returned while constructing ledger domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerDomainError {
    /// The account identifier is empty after trimming.
    #[error("account identifier must not be empty")]
    EmptyAccountId,

    /// The account identifier exceeds the 64-character bound.
    #[error("account identifier '{0}' exceeds 64 characters")]
    AccountIdTooLong(String),

    /// The account identifier violates the account grammar.
    #[error("invalid account identifier '{0}'")]
    InvalidAccountId(String),
}

/// Error returned while decoding a raw promise outcome code.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("unknown promise outcome code: {0}")]
pub struct ParsePromiseOutcomeError(pub u32);
