use anchor_lang::prelude::*;

/// Custom error codes for the vesting ledger program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: operator signature required")]
    Unauthorized,

    #[msg("Batch input arrays have different lengths")]
    ArityMismatch,

    #[msg("Invalid schedule (allocation must be > 0 and period >= cliff > 0)")]
    InvalidSchedule,

    #[msg("Allocations would exceed deposited pool")]
    InsufficientPool,

    #[msg("Vesting schedule not found")]
    NotFound,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Batch is empty or too large")]
    InvalidBatchSize,

    #[msg("Recipient already has a vesting schedule")]
    DuplicateRecipient,

    #[msg("Ledger is full")]
    LedgerFull,

    #[msg("Claim already in progress")]
    ReentrantClaim,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,
}
