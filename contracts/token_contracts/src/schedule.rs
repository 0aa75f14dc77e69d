//! Time gate shared by the vesting and lockup ledgers.
//!
//! A schedule is an ascending list of release checkpoints. Each checkpoint
//! that `now` has reached releases an equal share of a grant; the last one
//! releases whatever integer division left behind.

/// Number of checkpoints reached at `now`.
pub fn released_steps(now: u64, checkpoints: &[u64]) -> u32 {
    checkpoints.iter().take_while(|&&at| now >= at).count() as u32
}

/// Part of `amount` still locked at `now`.
///
/// Released shares use floor division, so an amount that does not split
/// evenly keeps its remainder locked until the final checkpoint, where the
/// locked part is exactly zero.
pub fn locked_portion(amount: i128, now: u64, checkpoints: &[u64]) -> i128 {
    let total = checkpoints.len() as i128;
    if total == 0 {
        return 0;
    }
    let steps = released_steps(now, checkpoints) as i128;
    amount - amount * steps / total
}
