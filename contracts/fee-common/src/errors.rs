//! Error codes shared by every fee handler contract.

use soroban_sdk::contracterror;

/// Failure reasons surfaced by the fee handlers.
///
/// Every variant aborts the enclosing invocation; nothing is retried or
/// recovered inside the contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FeeError {
    /// Caller does not hold the admin role.
    Unauthorized = 1,
    /// Requested value is identical to the stored one.
    NoOpChange = 2,
    /// Minimum fee would exceed maximum fee.
    BoundsViolation = 3,
    /// An intermediate fee or total does not fit the numeric range.
    FeeArithmeticOverflow = 4,
    /// Attached value differs from the exact fee owed.
    FeeValueMismatch = 5,
    /// Payer balance or allowance cannot cover the fee.
    FeeTransferFailed = 6,
    /// Withdrawal recipients and amounts differ in length.
    ArityMismatch = 7,
    /// Withdrawal batch exceeds the held custody balance.
    InsufficientTreasuryBalance = 8,
    AlreadyInitialized = 9,
    NotInitialized = 10,
    /// Transfer payload is too short to carry a principal amount.
    MalformedPayload = 11,
    /// Negative amount supplied where only non-negative amounts are valid.
    InvalidAmount = 12,
    /// No fee asset has been bound to the resource.
    ResourceNotRegistered = 13,
    /// Percentage above 10 000 bps.
    FeePercentOutOfRange = 14,
}
