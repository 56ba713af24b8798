//! Promise batches, chained callbacks, and asynchronous outcomes.
//!
//! A promise batch is the unit of cross-instance work a contract hands to
//! the runtime: an ordered list of actions against one receiver, plus an
//! optional chained callback that the runtime invokes — as a separate,
//! later entry-point call — once the batch outcome is known. Scheduling
//! never blocks; the [`ReceiptId`] is the only link between the two
//! invocations.

use super::{AccountId, Balance, Gas, ParsePromiseOutcomeError, PublicKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Correlation identifier for a scheduled promise batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Creates a new random receipt identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a receipt identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque executable payload deployed to a freshly created account.
///
/// Packaging the task executable is an external concern; the container is
/// constructed with the payload bytes and forwards them verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct ContractCode(Vec<u8>);

impl ContractCode {
    /// Wraps an executable payload.
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Returns the payload bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the payload size in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the payload is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ContractCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContractCode({} bytes)", self.0.len())
    }
}

/// One call scheduled against a receiver: entry-point name, structured
/// arguments, attached deposit, and prepaid gas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    method: String,
    args: serde_json::Value,
    deposit: Balance,
    gas: Gas,
}

impl FunctionCall {
    /// Creates a call with no attached deposit and no prepaid gas.
    #[must_use]
    pub fn new(method: impl Into<String>, args: serde_json::Value) -> Self {
        Self {
            method: method.into(),
            args,
            deposit: Balance::ZERO,
            gas: Gas::new(0),
        }
    }

    /// Sets the deposit forwarded with the call.
    #[must_use]
    pub const fn with_deposit(mut self, deposit: Balance) -> Self {
        self.deposit = deposit;
        self
    }

    /// Sets the prepaid gas.
    #[must_use]
    pub const fn with_gas(mut self, gas: Gas) -> Self {
        self.gas = gas;
        self
    }

    /// Returns the entry-point name.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the structured call arguments.
    #[must_use]
    pub const fn args(&self) -> &serde_json::Value {
        &self.args
    }

    /// Returns the deposit forwarded with the call.
    #[must_use]
    pub const fn deposit(&self) -> Balance {
        self.deposit
    }

    /// Returns the prepaid gas.
    #[must_use]
    pub const fn gas(&self) -> Gas {
        self.gas
    }
}

/// One action within a promise batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromiseAction {
    /// Create the receiver account.
    CreateAccount,
    /// Deploy an executable payload to the receiver.
    DeployContract(ContractCode),
    /// Grant a key full access to the receiver.
    AddFullAccessKey(PublicKey),
    /// Transfer value to the receiver.
    Transfer(Balance),
    /// Invoke an entry point on the receiver.
    FunctionCall(FunctionCall),
}

/// Chained callback delivered once the batch outcome is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromiseCallback {
    receiver: AccountId,
    call: FunctionCall,
}

impl PromiseCallback {
    /// Returns the account the callback is delivered to.
    #[must_use]
    pub const fn receiver(&self) -> &AccountId {
        &self.receiver
    }

    /// Returns the callback entry-point call.
    #[must_use]
    pub const fn call(&self) -> &FunctionCall {
        &self.call
    }
}

/// Ordered batch of actions against one receiver, with an optional
/// chained callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromiseBatch {
    receiver: AccountId,
    actions: Vec<PromiseAction>,
    callback: Option<PromiseCallback>,
}

impl PromiseBatch {
    /// Creates an empty batch against `receiver`.
    #[must_use]
    pub const fn new(receiver: AccountId) -> Self {
        Self {
            receiver,
            actions: Vec::new(),
            callback: None,
        }
    }

    /// Appends an account-creation action.
    #[must_use]
    pub fn create_account(mut self) -> Self {
        self.actions.push(PromiseAction::CreateAccount);
        self
    }

    /// Appends a contract-deployment action.
    #[must_use]
    pub fn deploy_contract(mut self, code: ContractCode) -> Self {
        self.actions.push(PromiseAction::DeployContract(code));
        self
    }

    /// Appends a full-access key grant.
    #[must_use]
    pub fn add_full_access_key(mut self, key: PublicKey) -> Self {
        self.actions.push(PromiseAction::AddFullAccessKey(key));
        self
    }

    /// Appends a value transfer.
    #[must_use]
    pub fn transfer(mut self, amount: Balance) -> Self {
        self.actions.push(PromiseAction::Transfer(amount));
        self
    }

    /// Appends an entry-point invocation.
    #[must_use]
    pub fn function_call(mut self, call: FunctionCall) -> Self {
        self.actions.push(PromiseAction::FunctionCall(call));
        self
    }

    /// Chains a callback invoked once the batch outcome is known.
    ///
    /// The last `then` wins; batches in this system chain exactly one.
    #[must_use]
    pub fn then(mut self, receiver: AccountId, call: FunctionCall) -> Self {
        self.callback = Some(PromiseCallback { receiver, call });
        self
    }

    /// Returns the batch receiver.
    #[must_use]
    pub const fn receiver(&self) -> &AccountId {
        &self.receiver
    }

    /// Returns the batch actions in scheduling order.
    #[must_use]
    pub fn actions(&self) -> &[PromiseAction] {
        &self.actions
    }

    /// Returns the chained callback, if any.
    #[must_use]
    pub const fn callback(&self) -> Option<&PromiseCallback> {
        self.callback.as_ref()
    }
}

/// Outcome of a scheduled promise batch, observed inside a callback.
///
/// `Pending` is transitional: the runtime may deliver the callback before
/// the chain has resolved, and is expected to redeliver with a final
/// outcome. Handlers tolerate it without treating it as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromiseOutcome {
    /// The chain has not resolved yet.
    Pending,
    /// The chain resolved successfully.
    Succeeded,
    /// The chain resolved with a failure.
    Failed,
}

impl PromiseOutcome {
    /// Returns the canonical textual representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PromiseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u32> for PromiseOutcome {
    type Error = ParsePromiseOutcomeError;

    /// Decodes the runtime's raw result-slot code.
    ///
    /// Unrecognised codes are rejected at this boundary so callback
    /// handlers only ever match the closed variant set.
    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Succeeded),
            2 => Ok(Self::Failed),
            other => Err(ParsePromiseOutcomeError(other)),
        }
    }
}
