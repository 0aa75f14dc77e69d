//! Fixed supply split and the one-shot initialization that distributes it.

use soroban_sdk::{contracttype, log, Address, Env};

use crate::balance;
use crate::errors::TokenError;
use crate::lockup::LockupLedger;
use crate::storage::{is_null, read_state, write_state};
use crate::vesting::VestingSchedule;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const DECIMALS: u32 = 7;
pub const UNIT: i128 = 10_000_000;

pub const SALES_SUPPLY: i128 = 130_000_000 * UNIT;
pub const REFERRAL_SUPPLY: i128 = 20_000_000 * UNIT;
pub const TEAM_SUPPLY: i128 = 50_000_000 * UNIT;
pub const TOTAL_SUPPLY: i128 = SALES_SUPPLY + REFERRAL_SUPPLY + TEAM_SUPPLY;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Only account allowed to grant vesting/lockup and burn unsold tokens.
    pub sale: Address,
    /// Holder of the team allocation, the account that ran `init`.
    pub team: Address,
    pub team_release: u64,
    pub vesting: VestingSchedule,
}

/// `Uninitialized -> Initialized` is the only transition.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenState {
    Uninitialized,
    Initialized(Config),
}

impl TokenState {
    pub fn config(self) -> Result<Config, TokenError> {
        match self {
            TokenState::Initialized(config) => Ok(config),
            TokenState::Uninitialized => Err(TokenError::NotInitialized),
        }
    }
}

pub fn read_config(env: &Env) -> Result<Config, TokenError> {
    read_state(env).config()
}

// ---------------------------------------------------------------------------
// Initialization
// ---------------------------------------------------------------------------

pub struct SupplyController;

impl SupplyController {
    pub fn validate(
        env: &Env,
        team: &Address,
        sale: &Address,
        team_release: u64,
        vesting: &VestingSchedule,
        now: u64,
    ) -> Result<(), TokenError> {
        if read_state(env) != TokenState::Uninitialized {
            return Err(TokenError::AlreadyInitialized);
        }
        if is_null(env, sale) || is_null(env, team) {
            return Err(TokenError::InvalidAddress);
        }
        // zero stands for "unset" and is never a usable timestamp
        if team_release == 0 || vesting.checkpoints().contains(&0) {
            return Err(TokenError::InvalidReleaseTime);
        }
        if team_release <= now || vesting.first <= now {
            return Err(TokenError::InvalidReleaseTime);
        }
        if !vesting.is_strictly_increasing() {
            return Err(TokenError::InvalidSchedule);
        }
        Ok(())
    }

    /// Mint the sale and referral allocation to `sale`, lock the team
    /// allocation on `team` until `team_release`, record the vesting schedule.
    pub fn init(
        env: &Env,
        team: &Address,
        sale: &Address,
        team_release: u64,
        vesting: VestingSchedule,
        now: u64,
    ) -> Result<Config, TokenError> {
        Self::validate(env, team, sale, team_release, &vesting, now)?;

        balance::mint(env, sale, SALES_SUPPLY + REFERRAL_SUPPLY);
        balance::mint(env, team, TEAM_SUPPLY);
        LockupLedger::lock(env, team, TEAM_SUPPLY, team_release, now)?;

        let config = Config {
            sale: sale.clone(),
            team: team.clone(),
            team_release,
            vesting,
        };
        write_state(env, &TokenState::Initialized(config.clone()));

        log!(env, "initialized", sale.clone(), team.clone(), team_release);
        Ok(config)
    }
}
