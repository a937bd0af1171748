//! Seams to the two systems the arbitrator coordinates but does not own: the
//! question/answer oracle and the DAO proposal engine.
//!
//! Both are reached through `&mut dyn` handles passed in with each call, the
//! same way an instruction receives the program accounts it touches.

use anchor_lang::prelude::*;

use crate::{
    constants::{INDEX_OFFSET, WORD_LEN},
    errors::ArbitratorError,
};

pub type QuestionId = [u8; WORD_LEN];
pub type Answer = [u8; WORD_LEN];
pub type ProposalId = [u8; WORD_LEN];

/// Oracle view of a question.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub arbitrator: Pubkey,
    pub best_answer: Option<Answer>,
    pub finalized: bool,
}

impl Question {
    pub fn has_answer(&self) -> bool {
        self.best_answer.is_some()
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AskQuestionArgs {
    pub template_id: u32,
    pub question: String,
    pub arbitrator: Pubkey,
    pub timeout: u32,
    pub opening_ts: u32,
    pub nonce: u64,
}

pub trait Oracle {
    fn key(&self) -> Pubkey;

    fn ask_question(&mut self, asker: Pubkey, args: &AskQuestionArgs) -> Result<QuestionId>;

    /// Bonded answer. Not used by the arbitrator itself.
    fn submit_answer(
        &mut self,
        answerer: Pubkey,
        question_id: &QuestionId,
        answer: Answer,
        max_previous: u64,
        bond: u64,
    ) -> Result<()>;

    fn notify_of_arbitration_request(
        &mut self,
        arbitrator: Pubkey,
        question_id: &QuestionId,
        requester: Pubkey,
        max_previous: u64,
    ) -> Result<()>;

    /// Privileged final-answer write. Only the designated arbitrator may call it.
    fn submit_answer_by_arbitrator(
        &mut self,
        arbitrator: Pubkey,
        question_id: &QuestionId,
        answer: Answer,
        answerer: Pubkey,
    ) -> Result<()>;

    fn question(&self, question_id: &QuestionId) -> Option<Question>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProposalRequest {
    pub description_hash: String,
    pub meta_data: String,
    pub callback: Vec<u8>,
}

pub trait GovernancePlugin {
    fn key(&self) -> Pubkey;

    fn propose(&mut self, proposer: Pubkey, request: ProposalRequest) -> Result<ProposalId>;
}

/// Call a governance proposal performs once it passes.
///
/// `answer` is `None` for an open proposal, where the executor supplies the
/// answer at execution time.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ArbitrationCallback {
    pub arbitrator: Pubkey,
    pub question_id: QuestionId,
    pub answer: Option<Answer>,
    pub answerer: Pubkey,
}

impl ArbitrationCallback {
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        self.serialize(&mut data)
            .map_err(|_| error!(ArbitratorError::InvalidCallback))?;
        Ok(data)
    }

    pub fn decode(mut data: &[u8]) -> Result<Self> {
        let callback = Self::deserialize(&mut data)
            .map_err(|_| error!(ArbitratorError::InvalidCallback))?;
        require!(data.is_empty(), ArbitratorError::InvalidCallback);
        Ok(callback)
    }
}

/// Oracle answer selecting the `index`-th allowed answer.
pub fn answer_from_index(index: u64) -> Answer {
    let mut answer = [0u8; WORD_LEN];
    answer[INDEX_OFFSET..].copy_from_slice(&index.to_be_bytes());
    answer
}
