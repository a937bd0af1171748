use anchor_lang::prelude::*;

use crate::{
    events::ProxyEvent,
    instructions::{self, AskQuestion, ProxyUpdate},
    interfaces::{AskQuestionArgs, QuestionId},
    state::AnswerStorageRegistry,
};

/// Front door to the oracle's question creation that can keep the allowed
/// answers of each question for arbitrators that opted in.
#[derive(Clone, Debug)]
pub struct QuestionProxy {
    pub(crate) key: Pubkey,
    pub(crate) owner: Pubkey,
    pub(crate) oracle: Pubkey,
    pub(crate) registry: AnswerStorageRegistry,
    pub(crate) events: Vec<ProxyEvent>,
}

impl QuestionProxy {
    pub fn new(key: Pubkey, owner: Pubkey, oracle: Pubkey) -> Self {
        Self {
            key,
            owner,
            oracle,
            registry: AnswerStorageRegistry::default(),
            events: Vec::new(),
        }
    }

    pub fn key(&self) -> Pubkey {
        self.key
    }

    pub fn owner(&self) -> Pubkey {
        self.owner
    }

    pub fn oracle(&self) -> Pubkey {
        self.oracle
    }

    pub fn events(&self) -> &[ProxyEvent] {
        &self.events
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }

    pub fn ask_question(
        &mut self,
        ctx: AskQuestion,
        args: AskQuestionArgs,
        allowed_answers: Vec<String>,
    ) -> Result<QuestionId> {
        instructions::ask_question::handler(self, ctx, args, allowed_answers)
    }

    pub fn set_oracle(&mut self, authority: Pubkey, oracle: Pubkey) -> Result<()> {
        instructions::update_proxy::handler(self, authority, ProxyUpdate::Oracle(oracle))
    }

    pub fn activate_answer_storage(&mut self, authority: Pubkey, arbitrator: Pubkey) -> Result<()> {
        instructions::update_proxy::handler(
            self,
            authority,
            ProxyUpdate::ActivateAnswerStorage(arbitrator),
        )
    }

    pub fn deactivate_answer_storage(
        &mut self,
        authority: Pubkey,
        arbitrator: Pubkey,
    ) -> Result<()> {
        instructions::update_proxy::handler(
            self,
            authority,
            ProxyUpdate::DeactivateAnswerStorage(arbitrator),
        )
    }

    pub fn is_answer_storage_active(&self, arbitrator: &Pubkey) -> bool {
        self.registry.is_enabled(arbitrator)
    }

    pub fn get_answers_by_question_id(&self, question_id: &QuestionId) -> &[String] {
        self.registry.answers(question_id)
    }

    pub(crate) fn record<E>(&mut self, event: E)
    where
        E: anchor_lang::Event + Into<ProxyEvent>,
    {
        emit!(event);
        self.events.push(event.into());
    }
}
