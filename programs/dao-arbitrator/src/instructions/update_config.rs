use anchor_lang::prelude::*;

use crate::{
    errors::ArbitratorError,
    events::{
        SetDisputeFee, SetExcessPolicy, SetFeeRecipient, SetGovernancePlugin, SetMetaData,
        SetOracle, SetOwner, SetProposalDescriptionHash, SetQuestionProxy,
    },
    state::ExcessPolicy,
    Arbitrator,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigUpdate {
    Oracle(Pubkey),
    GovernancePlugin(Pubkey),
    DisputeFee(u64),
    MetaData(String),
    FeeRecipient(Pubkey),
    ProposalDescriptionHash(String),
    Owner(Pubkey),
    QuestionProxy(Pubkey),
    ExcessPolicy(ExcessPolicy),
}

impl ConfigUpdate {
    pub fn validate(&self) -> Result<()> {
        if let ConfigUpdate::DisputeFee(fee) = self {
            require!(*fee > 0, ArbitratorError::ZeroFee);
        }
        Ok(())
    }
}

pub fn handler(arbitrator: &mut Arbitrator, authority: Pubkey, update: ConfigUpdate) -> Result<()> {
    require!(
        arbitrator.config.is_owner(&authority),
        ArbitratorError::Forbidden
    );
    update.validate()?;

    let summary = format!("{:?}", update);
    match update {
        ConfigUpdate::Oracle(oracle) => {
            arbitrator.config.oracle = oracle;
            arbitrator.record(SetOracle { oracle });
        }
        ConfigUpdate::GovernancePlugin(governance_plugin) => {
            arbitrator.config.governance_plugin = governance_plugin;
            arbitrator.record(SetGovernancePlugin { governance_plugin });
        }
        ConfigUpdate::DisputeFee(fee) => {
            arbitrator.config.dispute_fee = fee;
            arbitrator.record(SetDisputeFee { fee });
        }
        ConfigUpdate::MetaData(meta_data) => {
            arbitrator.config.meta_data = meta_data.clone();
            arbitrator.record(SetMetaData { meta_data });
        }
        ConfigUpdate::FeeRecipient(recipient) => {
            arbitrator.config.fee_recipient = recipient;
            arbitrator.record(SetFeeRecipient { recipient });
        }
        ConfigUpdate::ProposalDescriptionHash(description_hash) => {
            arbitrator.config.proposal_description_hash = description_hash.clone();
            arbitrator.record(SetProposalDescriptionHash { description_hash });
        }
        ConfigUpdate::Owner(owner) => {
            arbitrator.config.owner = owner;
            arbitrator.record(SetOwner { owner });
        }
        ConfigUpdate::QuestionProxy(question_proxy) => {
            arbitrator.config.question_proxy = Some(question_proxy);
            arbitrator.record(SetQuestionProxy { question_proxy });
        }
        ConfigUpdate::ExcessPolicy(policy) => {
            arbitrator.config.excess_policy = policy;
            arbitrator.record(SetExcessPolicy { policy });
        }
    }

    msg!("Config updated by {}: {}", authority, summary);

    Ok(())
}
