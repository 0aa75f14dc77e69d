use soroban_sdk::{contracttype, Address, Env, String};

use crate::lockup::LockupGrant;
use crate::supply::TokenState;
use crate::vesting::VestingGrant;

// ---------------------------------------------------------------------------
// Storage keys
// ---------------------------------------------------------------------------

/// Contract-wide entries live in instance storage, per-account entries in
/// persistent storage.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    State,
    TotalSupply,
    Balance(Address),
    Allowance(Address, Address),
    Vesting(Address),
    Lockup(Address),
}

/// Strkey of the all-zero ed25519 account, used as the null recipient.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn null_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_ACCOUNT))
}

pub fn is_null(env: &Env, id: &Address) -> bool {
    *id == null_address(env)
}

// ---------------------------------------------------------------------------
// Lifecycle and supply
// ---------------------------------------------------------------------------

pub fn read_state(env: &Env) -> TokenState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or(TokenState::Uninitialized)
}

pub fn write_state(env: &Env, state: &TokenState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &amount);
}

// ---------------------------------------------------------------------------
// Balances and allowances
// ---------------------------------------------------------------------------

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

pub fn write_balance(env: &Env, id: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(id.clone()), &amount);
}

pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Allowance(from.clone(), spender.clone()))
        .unwrap_or(0)
}

pub fn write_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
    }
}

// ---------------------------------------------------------------------------
// Grants
// ---------------------------------------------------------------------------

pub fn read_vesting(env: &Env, id: &Address) -> Option<VestingGrant> {
    env.storage()
        .persistent()
        .get(&DataKey::Vesting(id.clone()))
}

pub fn write_vesting(env: &Env, id: &Address, grant: &VestingGrant) {
    env.storage()
        .persistent()
        .set(&DataKey::Vesting(id.clone()), grant);
}

pub fn read_lockup(env: &Env, id: &Address) -> Option<LockupGrant> {
    env.storage()
        .persistent()
        .get(&DataKey::Lockup(id.clone()))
}

pub fn write_lockup(env: &Env, id: &Address, grant: &LockupGrant) {
    env.storage()
        .persistent()
        .set(&DataKey::Lockup(id.clone()), grant);
}
