use anchor_lang::prelude::*;

#[error_code]
pub enum ArbitratorError {
    #[msg("INVALID_DISPUTE_FEE")]
    InvalidFee,
    #[msg("FORBIDDEN")]
    Forbidden,
    #[msg("ZERO_FEE")]
    ZeroFee,
    #[msg("WRONG_ARBITRATOR")]
    WrongArbitrator,
    #[msg("FINALIZED_QUESTION")]
    FinalizedQuestion,
    #[msg("NO_REALITIOPROXY_ADDRESS")]
    NoProxyConfigured,
    #[msg("ACCOUNT_MISMATCH")]
    AccountMismatch,
    #[msg("INSUFFICIENT_FUNDS")]
    InsufficientFunds,
    #[msg("OVERFLOW")]
    Overflow,
    #[msg("INVALID_CALLBACK")]
    InvalidCallback,
}

#[error_code]
pub enum ProxyError {
    #[msg("FORBIDDEN")]
    Forbidden,
    #[msg("ACCOUNT_MISMATCH")]
    AccountMismatch,
}
