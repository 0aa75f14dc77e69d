#![no_std]

mod balance;
mod errors;
mod events;
mod lockup;
mod schedule;
mod storage;
mod supply;
mod vesting;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

pub use crate::errors::TokenError;
pub use crate::lockup::LockupGrant;
pub use crate::storage::NULL_ACCOUNT;
pub use crate::supply::{
    Config, TokenState, DECIMALS, REFERRAL_SUPPLY, SALES_SUPPLY, TEAM_SUPPLY, TOTAL_SUPPLY, UNIT,
};
pub use crate::vesting::{VestingGrant, VestingSchedule};

use crate::balance::{compose, move_balance, require_spendable};
use crate::lockup::LockupLedger;
use crate::storage::{is_null, read_allowance, read_state, read_total_supply, write_allowance};
use crate::supply::{read_config, SupplyController};
use crate::vesting::VestingLedger;

const NAME: &str = "Sale Token";
const SYMBOL: &str = "SALE";

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

#[contract]
pub struct SaleToken;

#[contractimpl]
impl SaleToken {
    // -----------------------------------------------------------------------
    // Initialisation
    // -----------------------------------------------------------------------

    /// One-time setup. `owner` receives the team allocation, locked until
    /// `team_release`; `sale` receives the sale and referral allocation.
    /// `v1..v4` are the global vesting checkpoints.
    pub fn init(
        env: Env,
        owner: Address,
        sale: Address,
        team_release: u64,
        v1: u64,
        v2: u64,
        v3: u64,
        v4: u64,
    ) -> Result<(), TokenError> {
        owner.require_auth();

        let now = env.ledger().timestamp();
        let vesting = VestingSchedule {
            first: v1,
            second: v2,
            third: v3,
            fourth: v4,
        };
        let config = SupplyController::init(&env, &owner, &sale, team_release, vesting, now)?;

        events::publish_initialized(&env, config.sale, config.team, config.team_release);
        Ok(())
    }

    pub fn is_initialized(env: Env) -> bool {
        read_state(&env) != TokenState::Uninitialized
    }

    pub fn sale(env: Env) -> Result<Address, TokenError> {
        Ok(read_config(&env)?.sale)
    }

    pub fn team(env: Env) -> Result<Address, TokenError> {
        Ok(read_config(&env)?.team)
    }

    pub fn team_release(env: Env) -> Result<u64, TokenError> {
        Ok(read_config(&env)?.team_release)
    }

    /// Vesting checkpoint `index` (0 to 3).
    pub fn vesting_release(env: Env, index: u32) -> Result<u64, TokenError> {
        read_config(&env)?
            .vesting
            .release(index)
            .ok_or(TokenError::InvalidReleaseIndex)
    }

    // -----------------------------------------------------------------------
    // Metadata and supply
    // -----------------------------------------------------------------------

    pub fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn sales_supply(_env: Env) -> i128 {
        SALES_SUPPLY
    }

    pub fn referral_supply(_env: Env) -> i128 {
        REFERRAL_SUPPLY
    }

    pub fn team_supply(_env: Env) -> i128 {
        TEAM_SUPPLY
    }

    // -----------------------------------------------------------------------
    // Balance views
    // -----------------------------------------------------------------------

    /// Total balance, locked parts included.
    pub fn balance(env: Env, id: Address) -> i128 {
        storage::read_balance(&env, &id)
    }

    /// Part of the balance that can be moved right now.
    pub fn balance_spot(env: Env, id: Address) -> i128 {
        let now = env.ledger().timestamp();
        compose(&env, &read_state(&env), &id, now).spot()
    }

    /// Part of the balance still waiting for a vesting checkpoint.
    pub fn balance_vested(env: Env, id: Address) -> i128 {
        let now = env.ledger().timestamp();
        compose(&env, &read_state(&env), &id, now).vesting
    }

    pub fn vested_amount(env: Env, id: Address) -> i128 {
        Self::balance_vested(env, id)
    }

    /// Part of the balance held by a lockup that has not been released.
    pub fn balance_locked_up(env: Env, id: Address) -> i128 {
        let now = env.ledger().timestamp();
        LockupLedger::locked_amount(&env, &id, now)
    }

    pub fn has_vested(env: Env, id: Address) -> bool {
        let now = env.ledger().timestamp();
        match read_state(&env) {
            TokenState::Initialized(config) => {
                VestingLedger::has_vested(&env, &id, &config.vesting, now)
            }
            TokenState::Uninitialized => false,
        }
    }

    pub fn has_locked_up(env: Env, id: Address) -> bool {
        let now = env.ledger().timestamp();
        LockupLedger::has_locked_up(&env, &id, now)
    }

    // -----------------------------------------------------------------------
    // Standard token operations, limited to the spot balance
    // -----------------------------------------------------------------------

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&env, &from, &spender)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        from.require_auth();

        if amount < 0 {
            return Err(TokenError::InvalidAmount);
        }
        write_allowance(&env, &from, &spender, amount);

        events::publish_approve(&env, from, spender, amount);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();

        let now = env.ledger().timestamp();
        if is_null(&env, &to) {
            return Err(TokenError::InvalidAddress);
        }
        require_spendable(&env, &read_state(&env), &from, amount, now)?;

        move_balance(&env, &from, &to, amount);
        events::publish_transfer(&env, from, to, amount);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();

        let now = env.ledger().timestamp();
        if is_null(&env, &to) {
            return Err(TokenError::InvalidAddress);
        }
        require_spendable(&env, &read_state(&env), &from, amount, now)?;
        let allowance = read_allowance(&env, &from, &spender);
        if amount > allowance {
            return Err(TokenError::InsufficientAllowance);
        }

        write_allowance(&env, &from, &spender, allowance - amount);
        move_balance(&env, &from, &to, amount);
        events::publish_transfer(&env, from, to, amount);
        Ok(())
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();

        let now = env.ledger().timestamp();
        require_spendable(&env, &read_state(&env), &from, amount, now)?;

        balance::destroy(&env, &from, amount);
        events::publish_burn(&env, from, amount);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Sale-only operations
    // -----------------------------------------------------------------------

    /// Move `amount` from the sale account to `to`, vesting it over the
    /// global checkpoints.
    pub fn transfer_with_vesting(
        env: Env,
        caller: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        caller.require_auth();

        let now = env.ledger().timestamp();
        let state = read_state(&env);
        let config = Self::require_sale(state.clone(), &caller)?;
        Self::require_not_sale(&config, &to)?;
        VestingLedger::validate(&env, &to, amount)?;
        require_spendable(&env, &state, &config.sale, amount, now)?;

        move_balance(&env, &config.sale, &to, amount);
        let grant = VestingLedger::grant(&env, &to, amount)?;

        events::publish_transfer(&env, config.sale, to.clone(), amount);
        events::publish_vested(&env, to, amount, grant.amount);
        Ok(())
    }

    /// Move `amount` from the sale account to `to`, locked until
    /// `release_time`. A `release_time` of 0 transfers without a lock.
    pub fn transfer_with_lockup(
        env: Env,
        caller: Address,
        to: Address,
        amount: i128,
        release_time: u64,
    ) -> Result<(), TokenError> {
        caller.require_auth();

        let now = env.ledger().timestamp();
        let state = read_state(&env);
        let config = Self::require_sale(state.clone(), &caller)?;
        Self::require_not_sale(&config, &to)?;
        LockupLedger::validate(&env, &to, amount, release_time, now)?;
        require_spendable(&env, &state, &config.sale, amount, now)?;

        move_balance(&env, &config.sale, &to, amount);
        let grant = LockupLedger::lock(&env, &to, amount, release_time, now)?;

        events::publish_transfer(&env, config.sale, to.clone(), amount);
        if let Some(grant) = grant {
            events::publish_locked(&env, to, amount, grant.release_time);
        }
        Ok(())
    }

    /// Burn whatever the sale account can still spend. Returns the amount
    /// burned, zero once nothing is left.
    pub fn burn_sale_tokens(env: Env, caller: Address) -> Result<i128, TokenError> {
        caller.require_auth();

        let now = env.ledger().timestamp();
        let state = read_state(&env);
        let config = Self::require_sale(state.clone(), &caller)?;

        let unsold = balance::spot(&env, &state, &config.sale, now);
        if unsold > 0 {
            balance::destroy(&env, &config.sale, unsold);
            log!(&env, "sale tokens burned", unsold);
            events::publish_sale_burn(&env, config.sale, unsold);
        }
        Ok(unsold)
    }

    fn require_sale(state: TokenState, caller: &Address) -> Result<Config, TokenError> {
        let config = state.config()?;
        if *caller != config.sale {
            return Err(TokenError::Unauthorized);
        }
        Ok(config)
    }

    /// A grant on the sale account itself would survive `burn_sale_tokens`.
    fn require_not_sale(config: &Config, to: &Address) -> Result<(), TokenError> {
        if *to == config.sale {
            return Err(TokenError::InvalidAddress);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Unit Tests
// ---------------------------------------------------------------------------
