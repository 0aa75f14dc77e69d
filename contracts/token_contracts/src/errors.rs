use soroban_sdk::contracterror;

/// Rejection reasons for every fallible entry point. Missing authorization is
/// reported by the host through `require_auth`, not through this enum.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum TokenError {
    /// `init` was already called once.
    AlreadyInitialized = 1,
    /// The operation needs the configuration written by `init`.
    NotInitialized = 2,
    /// The null account was given where a real recipient is required.
    InvalidAddress = 3,
    /// Zero or negative amount where a positive one is required.
    InvalidAmount = 4,
    /// Release timestamp is zero or not in the future.
    InvalidReleaseTime = 5,
    /// Vesting checkpoints are not strictly increasing.
    InvalidSchedule = 6,
    /// Caller is not the recorded sale account.
    Unauthorized = 7,
    /// Amount exceeds the spot (unlocked) balance of the sender.
    InsufficientSpotBalance = 8,
    /// Amount exceeds the spender's allowance.
    InsufficientAllowance = 9,
    /// Vesting checkpoint index outside 0..=3.
    InvalidReleaseIndex = 10,
}
