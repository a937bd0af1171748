use anchor_lang::prelude::*;

use crate::{
    interfaces::{Answer, ProposalId, QuestionId},
    state::ExcessPolicy,
};

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct SetOracle {
    pub oracle: Pubkey,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct SetGovernancePlugin {
    pub governance_plugin: Pubkey,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct SetDisputeFee {
    pub fee: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct SetMetaData {
    pub meta_data: String,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct SetFeeRecipient {
    pub recipient: Pubkey,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct SetProposalDescriptionHash {
    pub description_hash: String,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct SetOwner {
    pub owner: Pubkey,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct SetQuestionProxy {
    pub question_proxy: Pubkey,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct SetExcessPolicy {
    pub policy: ExcessPolicy,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct ArbitrationRequested {
    pub question_id: QuestionId,
    pub requester: Pubkey,
    pub paid: u64,
    pub admitted: bool,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct ProposalCreated {
    pub scheme_address: Pubkey,
    pub question_id: QuestionId,
    pub proposal_ids: Vec<ProposalId>,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct DisputeSettled {
    pub question_id: QuestionId,
    pub answer: Answer,
    pub answerer: Pubkey,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct ActivateAnswerStorage {
    pub arbitrator: Pubkey,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct DeactivateAnswerStorage {
    pub arbitrator: Pubkey,
}

macro_rules! journal {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub enum $name {
            $($variant($variant),)*
        }

        $(
            impl From<$variant> for $name {
                fn from(event: $variant) -> Self {
                    Self::$variant(event)
                }
            }
        )*
    };
}

journal! {
    /// Journal entry for everything an [`Arbitrator`](crate::Arbitrator) emits.
    ArbitratorEvent {
        SetOracle,
        SetGovernancePlugin,
        SetDisputeFee,
        SetMetaData,
        SetFeeRecipient,
        SetProposalDescriptionHash,
        SetOwner,
        SetQuestionProxy,
        SetExcessPolicy,
        ArbitrationRequested,
        ProposalCreated,
        DisputeSettled,
    }
}

journal! {
    /// Journal entry for everything a [`QuestionProxy`](crate::QuestionProxy) emits.
    ProxyEvent {
        SetOracle,
        ActivateAnswerStorage,
        DeactivateAnswerStorage,
    }
}
