use soroban_sdk::contracterror;

/// Errors returned by every guard operation.
///
/// A failed invocation is rolled back as a whole, so callers never observe a
/// partially applied operation next to one of these codes.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GuardError {
    /// `initialize` was already called
    AlreadyInitialized = 1,
    /// The guard has no owner yet
    NotInitialized = 2,
    /// Caller is not the current owner
    NotOwner = 3,
    /// Caller is not a flagged guardian
    NotGuardian = 4,
    /// The null identity was given where a concrete address is required
    InvalidAddress = 5,
    /// Guardian already voted for this candidate in the open proposal
    AlreadyVoted = 6,
    /// Non-owner spender has no allowance
    NotAllowed = 7,
    /// Non-owner transfer exceeds the remaining allowance
    InsufficientAllowance = 8,
    /// Token movement or recipient hook failed
    TransferExecutionFailed = 9,
    /// Negative (or, for deposits, non-positive) amount
    InvalidAmount = 10,
    /// Configuration value out of range
    InvalidConfig = 11,
}
