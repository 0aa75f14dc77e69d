//! Balance composition: total = spot + still-vesting + still-locked.
//!
//! Nothing here unlocks tokens explicitly; the locked parts shrink as `now`
//! passes the recorded checkpoints, and `spot` grows by the same amount.

use soroban_sdk::{Address, Env};

use crate::errors::TokenError;
use crate::lockup::LockupLedger;
use crate::storage::{read_balance, read_total_supply, write_balance, write_total_supply};
use crate::supply::TokenState;
use crate::vesting::VestingLedger;

/// Breakdown of one account's balance at a given time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Composition {
    pub total: i128,
    pub vesting: i128,
    pub lockup: i128,
}

impl Composition {
    pub fn spot(&self) -> i128 {
        self.total - self.vesting - self.lockup
    }
}

pub fn compose(env: &Env, state: &TokenState, id: &Address, now: u64) -> Composition {
    let vesting = match state {
        TokenState::Initialized(config) => {
            VestingLedger::locked_amount(env, id, &config.vesting, now)
        }
        TokenState::Uninitialized => 0,
    };
    Composition {
        total: read_balance(env, id),
        vesting,
        lockup: LockupLedger::locked_amount(env, id, now),
    }
}

pub fn spot(env: &Env, state: &TokenState, id: &Address, now: u64) -> i128 {
    compose(env, state, id, now).spot()
}

/// Fails unless `amount` fits in the spot balance of `id`.
pub fn require_spendable(
    env: &Env,
    state: &TokenState,
    id: &Address,
    amount: i128,
    now: u64,
) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::InvalidAmount);
    }
    if amount > spot(env, state, id, now) {
        return Err(TokenError::InsufficientSpotBalance);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Raw balance moves. Callers check spendability first.
// ---------------------------------------------------------------------------

pub fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) {
    if from == to || amount == 0 {
        return;
    }
    write_balance(env, from, read_balance(env, from) - amount);
    write_balance(env, to, read_balance(env, to) + amount);
}

pub fn mint(env: &Env, to: &Address, amount: i128) {
    write_balance(env, to, read_balance(env, to) + amount);
    write_total_supply(env, read_total_supply(env) + amount);
}

pub fn destroy(env: &Env, from: &Address, amount: i128) {
    write_balance(env, from, read_balance(env, from) - amount);
    write_total_supply(env, read_total_supply(env) - amount);
}
