//! Per-invocation call environment.

use super::{AccountId, Balance};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque public key material as delivered by the runtime.
///
/// The container grants full access to the creating caller's key on the
/// freshly created task account; the key encoding is a runtime concern
/// and is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicKey(String);

impl PublicKey {
    /// Wraps runtime-provided key material.
    #[must_use]
    pub fn new(material: impl Into<String>) -> Self {
        Self(material.into())
    }

    /// Returns the key material as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Environment of a single entry-point invocation.
///
/// The runtime constructs one per call; contracts never consult ambient
/// globals. The attached deposit defaults to zero and the sender public
/// key is only present when the runtime supplies one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    caller: AccountId,
    attached_deposit: Balance,
    sender_public_key: Option<PublicKey>,
}

impl CallContext {
    /// Creates a context for a call from `caller` with no attached value.
    #[must_use]
    pub const fn new(caller: AccountId) -> Self {
        Self {
            caller,
            attached_deposit: Balance::ZERO,
            sender_public_key: None,
        }
    }

    /// Sets the attached deposit.
    #[must_use]
    pub const fn with_attached_deposit(mut self, deposit: Balance) -> Self {
        self.attached_deposit = deposit;
        self
    }

    /// Sets the sender's public key.
    #[must_use]
    pub fn with_sender_public_key(mut self, key: PublicKey) -> Self {
        self.sender_public_key = Some(key);
        self
    }

    /// Returns the calling account.
    #[must_use]
    pub const fn caller(&self) -> &AccountId {
        &self.caller
    }

    /// Returns the value attached to this invocation.
    #[must_use]
    pub const fn attached_deposit(&self) -> Balance {
        self.attached_deposit
    }

    /// Returns the sender's public key, when the runtime supplied one.
    #[must_use]
    pub const fn sender_public_key(&self) -> Option<&PublicKey> {
        self.sender_public_key.as_ref()
    }
}
