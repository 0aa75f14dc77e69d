//! Lockup ledger: per-account amount held back until a single release time.

use soroban_sdk::{contracttype, log, Address, Env};

use crate::errors::TokenError;
use crate::schedule::locked_portion;
use crate::storage::{is_null, read_lockup, write_lockup};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockupGrant {
    pub amount: i128,
    pub release_time: u64,
}

impl LockupGrant {
    pub fn locked_at(&self, now: u64) -> i128 {
        locked_portion(self.amount, now, &[self.release_time])
    }

    pub fn is_active(&self, now: u64) -> bool {
        now < self.release_time
    }
}

pub struct LockupLedger;

impl LockupLedger {
    /// A `release_time` of 0 means "no lock" and always passes.
    pub fn validate(
        env: &Env,
        account: &Address,
        amount: i128,
        release_time: u64,
        now: u64,
    ) -> Result<(), TokenError> {
        if is_null(env, account) {
            return Err(TokenError::InvalidAddress);
        }
        if amount <= 0 {
            return Err(TokenError::InvalidAmount);
        }
        if release_time != 0 && release_time <= now {
            return Err(TokenError::InvalidReleaseTime);
        }
        Ok(())
    }

    /// Lock `amount` on `account` until `release_time`.
    ///
    /// An outstanding lock is merged: amounts add and the whole sum releases at
    /// the later of the two release times. A lock is never shortened, but an
    /// earlier amount is held until a later grant's release time. An expired
    /// lock is replaced.
    /// Returns `None` when `release_time` is 0 and nothing was recorded.
    pub fn lock(
        env: &Env,
        account: &Address,
        amount: i128,
        release_time: u64,
        now: u64,
    ) -> Result<Option<LockupGrant>, TokenError> {
        Self::validate(env, account, amount, release_time, now)?;
        if release_time == 0 {
            return Ok(None);
        }

        let grant = match read_lockup(env, account) {
            Some(existing) if existing.is_active(now) => {
                log!(env, "lockup merged", account.clone(), existing.amount, amount);
                LockupGrant {
                    amount: existing.amount + amount,
                    release_time: existing.release_time.max(release_time),
                }
            }
            _ => LockupGrant {
                amount,
                release_time,
            },
        };
        write_lockup(env, account, &grant);
        Ok(Some(grant))
    }

    pub fn locked_amount(env: &Env, account: &Address, now: u64) -> i128 {
        read_lockup(env, account)
            .map(|grant| grant.locked_at(now))
            .unwrap_or(0)
    }

    pub fn has_locked_up(env: &Env, account: &Address, now: u64) -> bool {
        read_lockup(env, account)
            .map(|grant| grant.is_active(now))
            .unwrap_or(false)
    }
}
