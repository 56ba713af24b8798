//! Domain value types shared with the host ledger.
//!
//! These types cross the runtime boundary: account identifiers, attached
//! balances, the per-invocation call context, and the promise batches a
//! contract schedules against other instances.

mod account;
mod balance;
mod context;
mod economics;
mod error;
mod promise;

pub use account::AccountId;
pub use balance::{Balance, Gas};
pub use context::{CallContext, PublicKey};
pub use economics::{CALLBACK_GAS, EXECUTION_FEE_RESERVE, MINIMUM_INIT_DEPOSIT};
pub use error::{LedgerDomainError, ParsePromiseOutcomeError};
pub use promise::{
    ContractCode, FunctionCall, PromiseAction, PromiseBatch, PromiseCallback, PromiseOutcome,
    ReceiptId,
};
