use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Rate table must hold 1-10 entries with non-zero sources summing to 10000 bps")]
    InvalidConfiguration,

    #[msg("Settlement address count must match the rate table")]
    LengthMismatch,

    #[msg("Address cannot be zero")]
    InvalidAddress,

    #[msg("Rate table failed re-validation at payout time")]
    InvalidSplitConfiguration,

    #[msg("Rate table entry has no settlement address")]
    UnboundRecipient,

    #[msg("Transfer to settlement account failed")]
    TransferFailure,

    #[msg("Settlement account does not exist")]
    SettlementAccountMissing,

    #[msg("Settlement account does not match the bound settlement address")]
    SettlementAccountInvalid,

    #[msg("Invalid token program")]
    InvalidTokenProgram,

    #[msg("Not enough accounts provided in remaining_accounts")]
    InsufficientRemainingAccounts,

    #[msg("Batch authority record is invalid for this plugin")]
    InvalidBatchAuthorityRecord,

    #[msg("Custody balance too low for this operation")]
    InsufficientCustody,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("No pending ownership transfer")]
    NoPendingTransfer,
}
