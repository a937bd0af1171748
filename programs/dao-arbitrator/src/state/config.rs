use anchor_lang::prelude::*;

use crate::{constants::DEFAULT_EXCESS_POLICY, errors::ArbitratorError};

/// Where the part of a payment not owed as dispute fee ends up.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExcessPolicy {
    ForwardToFeeRecipient,
    RefundRequester,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ArbitratorConfig {
    pub owner: Pubkey,
    pub oracle: Pubkey,
    pub dispute_fee: u64,
    pub fee_recipient: Pubkey,
    pub proposal_description_hash: String,
    pub meta_data: String,
    pub governance_plugin: Pubkey,
    pub question_proxy: Option<Pubkey>,
    pub excess_policy: ExcessPolicy,
}

impl ArbitratorConfig {
    pub fn new(
        oracle: Pubkey,
        owner: Pubkey,
        dispute_fee: u64,
        proposal_description_hash: String,
        meta_data: String,
        fee_recipient: Pubkey,
        governance_plugin: Pubkey,
    ) -> Result<Self> {
        require!(dispute_fee > 0, ArbitratorError::InvalidFee);

        Ok(Self {
            owner,
            oracle,
            dispute_fee,
            fee_recipient,
            proposal_description_hash,
            meta_data,
            governance_plugin,
            question_proxy: None,
            excess_policy: DEFAULT_EXCESS_POLICY,
        })
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }

    /// Splits a payment that admits a case into `(to_fee_recipient, to_requester)`.
    pub fn split_admitting_payment(&self, paid: u64) -> (u64, u64) {
        let excess = paid.saturating_sub(self.dispute_fee);
        let fee = paid - excess;
        self.route_excess(fee, excess)
    }

    /// Routes a payment that buys nothing beyond an already admitted case.
    pub fn split_surplus_payment(&self, paid: u64) -> (u64, u64) {
        self.route_excess(0, paid)
    }

    fn route_excess(&self, fee: u64, excess: u64) -> (u64, u64) {
        match self.excess_policy {
            ExcessPolicy::ForwardToFeeRecipient => (fee + excess, 0),
            ExcessPolicy::RefundRequester => (fee, excess),
        }
    }
}
