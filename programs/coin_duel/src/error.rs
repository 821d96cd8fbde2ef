use anchor_lang::prelude::*;

#[error_code]
pub enum DuelError {
    #[msg("Operation is not valid in the game's current state")]
    InvalidState,

    #[msg("Caller is not authorized to perform this action")]
    Unauthorized,

    #[msg("Cannot join a game you created")]
    SelfPlay,

    #[msg("Wager amount must be greater than zero")]
    AmountMismatch,

    #[msg("Insufficient lamports to cover the stake")]
    InsufficientFunds,

    #[msg("Resolution slot has not been reached yet")]
    TooEarly,

    #[msg("Resolution window has not lapsed yet")]
    TimeoutNotElapsed,

    #[msg("Arithmetic overflow in payout math")]
    ArithmeticOverflow,

    #[msg("Global config has already been initialized")]
    AlreadyInitialized,

    #[msg("Fee rate cannot exceed 10000 basis points")]
    InvalidFeeRate,

    #[msg("Seed slot is no longer present in the SlotHashes sysvar")]
    SeedUnavailable,

    #[msg("Payout account does not match a game participant")]
    InvalidWinnerAccount,

    #[msg("Fee recipient account does not match the config")]
    InvalidFeeRecipient,
}
