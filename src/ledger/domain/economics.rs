//! Economic constants shared by both contracts.

use super::{Balance, Gas};

/// Minimum attached value required to initialise an instance.
///
/// Persisting the instance record locks part of the account balance as
/// storage staking; initialisation refuses deposits below this floor.
pub const MINIMUM_INIT_DEPOSIT: Balance = Balance::new(3_000_000_000_000_000_000_000_000);

/// Gas attached to each chained cross-instance call.
pub const CALLBACK_GAS: Gas = Gas::new(20_000_000_000_000);

/// Flat reserve withheld from the escrow when the reward is released,
/// covering the transfer call and its confirmation callback.
pub const EXECUTION_FEE_RESERVE: Balance = Balance::new(2 * CALLBACK_GAS.value() as u128);
