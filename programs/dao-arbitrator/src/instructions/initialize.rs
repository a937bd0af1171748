use anchor_lang::prelude::*;

use crate::state::ArbitratorConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitializeArbitrator {
    pub oracle: Pubkey,
    pub owner: Pubkey,
    pub dispute_fee: u64,
    pub proposal_description_hash: String,
    pub meta_data: String,
    pub fee_recipient: Pubkey,
    pub governance_plugin: Pubkey,
}

pub fn handler(key: Pubkey, args: InitializeArbitrator) -> Result<ArbitratorConfig> {
    let config = ArbitratorConfig::new(
        args.oracle,
        args.owner,
        args.dispute_fee,
        args.proposal_description_hash,
        args.meta_data,
        args.fee_recipient,
        args.governance_plugin,
    )?;

    msg!("Arbitrator {} initialized with owner: {}", key, config.owner);
    msg!("Dispute fee: {}", config.dispute_fee);
    msg!("Fee recipient: {}", config.fee_recipient);

    Ok(config)
}
