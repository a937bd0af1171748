use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::{
    errors::ArbitratorError,
    events::ArbitratorEvent,
    instructions::{self, ConfigUpdate, InitializeArbitrator, RequestArbitration, SubmitAnswer},
    interfaces::{Answer, QuestionId},
    state::{ArbitrationCase, ArbitratorConfig, ExcessPolicy},
};

/// Escalates disputed oracle answers to DAO governance and writes the
/// governance decision back to the oracle.
///
/// Every call either commits fully or leaves the arbitrator untouched.
#[derive(Clone, Debug)]
pub struct Arbitrator {
    pub(crate) key: Pubkey,
    pub(crate) config: ArbitratorConfig,
    pub(crate) cases: BTreeMap<QuestionId, ArbitrationCase>,
    pub(crate) events: Vec<ArbitratorEvent>,
}

impl Arbitrator {
    pub fn new(key: Pubkey, args: InitializeArbitrator) -> Result<Self> {
        let config = instructions::initialize::handler(key, args)?;
        Ok(Self {
            key,
            config,
            cases: BTreeMap::new(),
            events: Vec::new(),
        })
    }

    pub fn key(&self) -> Pubkey {
        self.key
    }

    pub fn config(&self) -> &ArbitratorConfig {
        &self.config
    }

    pub fn case(&self, question_id: &QuestionId) -> Option<&ArbitrationCase> {
        self.cases.get(question_id)
    }

    pub fn events(&self) -> &[ArbitratorEvent] {
        &self.events
    }

    pub fn update_config(&mut self, authority: Pubkey, update: ConfigUpdate) -> Result<()> {
        instructions::update_config::handler(self, authority, update)
    }

    pub fn set_oracle(&mut self, authority: Pubkey, oracle: Pubkey) -> Result<()> {
        self.update_config(authority, ConfigUpdate::Oracle(oracle))
    }

    pub fn set_governance_plugin(&mut self, authority: Pubkey, plugin: Pubkey) -> Result<()> {
        self.update_config(authority, ConfigUpdate::GovernancePlugin(plugin))
    }

    pub fn set_dispute_fee(&mut self, authority: Pubkey, fee: u64) -> Result<()> {
        self.update_config(authority, ConfigUpdate::DisputeFee(fee))
    }

    pub fn set_meta_data(&mut self, authority: Pubkey, meta_data: String) -> Result<()> {
        self.update_config(authority, ConfigUpdate::MetaData(meta_data))
    }

    pub fn set_fee_recipient(&mut self, authority: Pubkey, recipient: Pubkey) -> Result<()> {
        self.update_config(authority, ConfigUpdate::FeeRecipient(recipient))
    }

    pub fn set_proposal_description_hash(
        &mut self,
        authority: Pubkey,
        description_hash: String,
    ) -> Result<()> {
        self.update_config(
            authority,
            ConfigUpdate::ProposalDescriptionHash(description_hash),
        )
    }

    pub fn set_owner(&mut self, authority: Pubkey, owner: Pubkey) -> Result<()> {
        self.update_config(authority, ConfigUpdate::Owner(owner))
    }

    pub fn set_question_proxy(&mut self, authority: Pubkey, question_proxy: Pubkey) -> Result<()> {
        self.update_config(authority, ConfigUpdate::QuestionProxy(question_proxy))
    }

    pub fn set_excess_policy(&mut self, authority: Pubkey, policy: ExcessPolicy) -> Result<()> {
        self.update_config(authority, ConfigUpdate::ExcessPolicy(policy))
    }

    pub fn request_arbitration(
        &mut self,
        ctx: RequestArbitration,
        question_id: QuestionId,
        max_previous: u64,
        paid_amount: u64,
    ) -> Result<()> {
        self.transact(question_id, |arbitrator| {
            instructions::request_arbitration::handler(
                arbitrator,
                ctx,
                question_id,
                max_previous,
                paid_amount,
            )
        })
    }

    pub fn submit_answer_by_arbitrator(
        &mut self,
        ctx: SubmitAnswer,
        question_id: QuestionId,
        answer: Answer,
        answerer: Pubkey,
    ) -> Result<()> {
        self.transact(question_id, |arbitrator| {
            instructions::submit_answer::handler(arbitrator, ctx, question_id, answer, answerer)
        })
    }

    /// Runs a passed governance proposal's callback. `answer` is only consulted
    /// for open proposals that did not fix one.
    pub fn execute_callback(
        &mut self,
        ctx: SubmitAnswer,
        encoded: &[u8],
        answer: Option<Answer>,
    ) -> Result<()> {
        let (callback, answer) = instructions::submit_answer::resolve_callback(self, encoded, answer)?;
        self.submit_answer_by_arbitrator(ctx, callback.question_id, answer, callback.answerer)
    }

    /// Witness for governance: the question id once its case is settled.
    pub fn dispute_resolution_notification(&self, question_id: &QuestionId) -> Option<QuestionId> {
        self.cases
            .get(question_id)
            .filter(|case| case.is_settled())
            .map(|_| *question_id)
    }

    pub(crate) fn ensure_open(&self, question_id: &QuestionId) -> Result<()> {
        let settled = self
            .cases
            .get(question_id)
            .is_some_and(ArbitrationCase::is_settled);
        require!(!settled, ArbitratorError::FinalizedQuestion);
        Ok(())
    }

    pub(crate) fn record<E>(&mut self, event: E)
    where
        E: anchor_lang::Event + Into<ArbitratorEvent>,
    {
        emit!(event);
        self.events.push(event.into());
    }

    /// Restores the question's case and the event journal if `call` fails.
    fn transact<T>(
        &mut self,
        question_id: QuestionId,
        call: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let case = self.cases.get(&question_id).cloned();
        let journal_len = self.events.len();

        let result = call(self);
        if result.is_err() {
            match case {
                Some(case) => {
                    self.cases.insert(question_id, case);
                }
                None => {
                    self.cases.remove(&question_id);
                }
            }
            self.events.truncate(journal_len);
        }
        result
    }
}
