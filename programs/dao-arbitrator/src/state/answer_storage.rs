use std::collections::{BTreeMap, BTreeSet};

use anchor_lang::prelude::*;

use crate::interfaces::QuestionId;

/// Allowed-answer text kept by the question proxy for arbitrators that opted in.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerStorageRegistry {
    enabled: BTreeSet<Pubkey>,
    answers: BTreeMap<QuestionId, Vec<String>>,
}

impl AnswerStorageRegistry {
    pub fn is_enabled(&self, arbitrator: &Pubkey) -> bool {
        self.enabled.contains(arbitrator)
    }

    pub fn set_enabled(&mut self, arbitrator: Pubkey, enabled: bool) {
        if enabled {
            self.enabled.insert(arbitrator);
        } else {
            self.enabled.remove(&arbitrator);
        }
    }

    /// Records answers for a question unless some were recorded already.
    /// Returns whether anything was written.
    pub fn record(&mut self, question_id: QuestionId, answers: Vec<String>) -> bool {
        if self.answers.contains_key(&question_id) {
            return false;
        }
        self.answers.insert(question_id, answers);
        true
    }

    pub fn answers(&self, question_id: &QuestionId) -> &[String] {
        self.answers
            .get(question_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
