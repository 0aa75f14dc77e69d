//! Vesting ledger: per-account grants released in quarters at the four
//! global checkpoints recorded by `init`.

use soroban_sdk::{contracttype, log, Address, Env};

use crate::errors::TokenError;
use crate::schedule::locked_portion;
use crate::storage::{is_null, read_vesting, write_vesting};

/// The four global vesting checkpoints, strictly increasing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingSchedule {
    pub first: u64,
    pub second: u64,
    pub third: u64,
    pub fourth: u64,
}

impl VestingSchedule {
    pub fn checkpoints(&self) -> [u64; 4] {
        [self.first, self.second, self.third, self.fourth]
    }

    pub fn release(&self, index: u32) -> Option<u64> {
        self.checkpoints().get(index as usize).copied()
    }

    pub fn is_strictly_increasing(&self) -> bool {
        self.first < self.second && self.second < self.third && self.third < self.fourth
    }
}

/// Tokens granted to one account under the global schedule.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingGrant {
    pub amount: i128,
}

pub struct VestingLedger;

impl VestingLedger {
    pub fn validate(env: &Env, account: &Address, amount: i128) -> Result<(), TokenError> {
        if is_null(env, account) {
            return Err(TokenError::InvalidAddress);
        }
        if amount <= 0 {
            return Err(TokenError::InvalidAmount);
        }
        Ok(())
    }

    /// Record `amount` as vesting for `account`. A second grant adds to the
    /// first; the schedule is global so merged grants release together.
    pub fn grant(env: &Env, account: &Address, amount: i128) -> Result<VestingGrant, TokenError> {
        Self::validate(env, account, amount)?;

        let grant = match read_vesting(env, account) {
            Some(existing) => {
                log!(env, "vesting grant merged", account.clone(), existing.amount, amount);
                VestingGrant {
                    amount: existing.amount + amount,
                }
            }
            None => VestingGrant { amount },
        };
        write_vesting(env, account, &grant);
        Ok(grant)
    }

    pub fn locked_amount(
        env: &Env,
        account: &Address,
        schedule: &VestingSchedule,
        now: u64,
    ) -> i128 {
        read_vesting(env, account)
            .map(|grant| locked_portion(grant.amount, now, &schedule.checkpoints()))
            .unwrap_or(0)
    }

    pub fn has_vested(env: &Env, account: &Address, schedule: &VestingSchedule, now: u64) -> bool {
        Self::locked_amount(env, account, schedule, now) > 0
    }
}
