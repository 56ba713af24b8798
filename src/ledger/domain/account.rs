//! Validated ledger account identifier.

use super::LedgerDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum length of a ledger account identifier.
const MIN_ACCOUNT_LENGTH: usize = 2;

/// Maximum length of a ledger account identifier.
const MAX_ACCOUNT_LENGTH: usize = 64;

/// Validated, address-addressable ledger account identifier.
///
/// Accounts are dot-separated lowercase parts (e.g. `alpha.market`).
/// Within a part, alphanumeric runs may be joined by single `-` or `_`
/// separators; a part never starts or ends with a separator and
/// separators never repeat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Creates a validated account identifier.
    ///
    /// The input is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerDomainError::EmptyAccountId`] when the value is
    /// empty after trimming, [`LedgerDomainError::AccountIdTooLong`] when
    /// it exceeds 64 characters, or
    /// [`LedgerDomainError::InvalidAccountId`] when it violates the
    /// account grammar.
    pub fn new(value: impl Into<String>) -> Result<Self, LedgerDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(LedgerDomainError::EmptyAccountId);
        }

        if normalized.len() > MAX_ACCOUNT_LENGTH {
            return Err(LedgerDomainError::AccountIdTooLong(raw));
        }

        let is_valid =
            normalized.len() >= MIN_ACCOUNT_LENGTH && normalized.split('.').all(part_is_valid);

        if !is_valid {
            return Err(LedgerDomainError::InvalidAccountId(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Composes the sub-account `<label>.<self>` and validates it.
    ///
    /// This is the task address naming convention: a task created by a
    /// container lives at a label-prefixed sub-account of the container.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerDomainError`] when the composed identifier
    /// violates the account grammar or length bounds.
    pub fn sub_account(&self, label: &str) -> Result<Self, LedgerDomainError> {
        Self::new(format!("{label}.{self}"))
    }

    /// Returns the account identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Checks one dot-separated part against the account grammar.
fn part_is_valid(part: &str) -> bool {
    let mut expecting_alphanumeric = true;
    for c in part.chars() {
        match c {
            'a'..='z' | '0'..='9' => expecting_alphanumeric = false,
            '-' | '_' => {
                if expecting_alphanumeric {
                    return false;
                }
                expecting_alphanumeric = true;
            }
            _ => return false,
        }
    }
    // Rejects the empty part and a trailing separator alike.
    !expecting_alphanumeric
}
