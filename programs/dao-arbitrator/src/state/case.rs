use anchor_lang::prelude::*;

use crate::interfaces::ProposalId;

/// Per-question arbitration record.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ArbitrationCase {
    pub requested: bool,
    pub requester: Option<Pubkey>,
    pub proposal_ids: Vec<ProposalId>,
    pub notifications: u32,
    pub settled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseStatus {
    Unrequested,
    Requested,
    Settled,
}

impl ArbitrationCase {
    pub fn status(&self) -> CaseStatus {
        if self.settled {
            CaseStatus::Settled
        } else if self.requested {
            CaseStatus::Requested
        } else {
            CaseStatus::Unrequested
        }
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// First funded request wins; later ones only notify.
    pub fn can_admit(&self, paid: u64, fee: u64) -> bool {
        !self.requested && !self.settled && paid >= fee
    }

    pub fn admit(&mut self, requester: Pubkey) {
        self.requested = true;
        self.requester = Some(requester);
    }

    /// Whether `answerer` is the requester whose payment opened this case.
    pub fn is_admitted_for(&self, answerer: &Pubkey) -> bool {
        self.requested && self.requester.as_ref() == Some(answerer)
    }

    pub fn record_notification(&mut self) {
        self.notifications = self.notifications.saturating_add(1);
    }

    pub fn settle(&mut self) {
        self.settled = true;
    }
}
