#![allow(dead_code)]

use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use dao_arbitrator::{
    Answer, Arbitrator, AskQuestion, AskQuestionArgs, GovernancePlugin, InitializeArbitrator,
    Ledger, Oracle, ProposalId, ProposalRequest, Question, QuestionId, QuestionProxy,
    RequestArbitration, SubmitAnswer,
};

pub const DISPUTE_FEE: u64 = 1_000_000;
pub const DESCRIPTION_HASH: &str = "QmZSDGCPixwn1UrqnmcscYcXq2HARgMFwfP7JJNXUsW9uU";
pub const META_DATA: &str = "MetaData";
pub const QUESTION: &str = "TheQuestion\u{241f}\"A0\",\"A1\",\"A2\",\"A3\"\u{241f}Business & Finance\u{241f}en_US";
pub const STARTING_BALANCE: u64 = 200 * DISPUTE_FEE;

pub fn key(n: u8) -> Pubkey {
    Pubkey::new_from_array([n; 32])
}

fn word(n: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&n.to_be_bytes());
    word
}

pub fn reason(err: &anchor_lang::error::Error) -> &str {
    match err {
        anchor_lang::error::Error::AnchorError(err) => err.error_msg.as_str(),
        anchor_lang::error::Error::ProgramError(_) => "",
    }
}

pub fn assert_err<T: std::fmt::Debug>(
    result: Result<T>,
    expected: impl Into<anchor_lang::error::Error>,
) {
    assert_eq!(result.unwrap_err(), expected.into());
}

#[error_code]
pub enum OracleError {
    #[msg("question must exist")]
    QuestionMissing,
    #[msg("question must not be finalized")]
    Finalized,
    #[msg("Question must already have an answer when arbitration is requested.")]
    MustHaveAnswer,
    #[msg("msg.sender must be arbitrator")]
    NotArbitrator,
    #[msg("question must be pending arbitration")]
    NotPending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub question_id: QuestionId,
    pub requester: Pubkey,
    pub max_previous: u64,
}

/// Bare-bones oracle: no bonds, no timeouts.
#[derive(Debug)]
pub struct MockOracle {
    key: Pubkey,
    next_id: u64,
    questions: BTreeMap<QuestionId, (Question, bool)>,
    pub asked: Vec<(Pubkey, AskQuestionArgs)>,
    pub notifications: Vec<Notification>,
}

impl MockOracle {
    pub fn new(key: Pubkey) -> Self {
        Self {
            key,
            next_id: 1,
            questions: BTreeMap::new(),
            asked: Vec::new(),
            notifications: Vec::new(),
        }
    }

    pub fn is_pending_arbitration(&self, question_id: &QuestionId) -> bool {
        self.questions
            .get(question_id)
            .is_some_and(|(_, pending)| *pending)
    }

    fn entry(&mut self, question_id: &QuestionId) -> Result<&mut (Question, bool)> {
        let entry = self
            .questions
            .get_mut(question_id)
            .ok_or(OracleError::QuestionMissing)?;
        require!(!entry.0.finalized, OracleError::Finalized);
        Ok(entry)
    }
}

impl Oracle for MockOracle {
    fn key(&self) -> Pubkey {
        self.key
    }

    fn ask_question(&mut self, asker: Pubkey, args: &AskQuestionArgs) -> Result<QuestionId> {
        let id = word(self.next_id);
        self.next_id += 1;
        self.asked.push((asker, args.clone()));
        self.questions.insert(
            id,
            (
                Question {
                    id,
                    arbitrator: args.arbitrator,
                    best_answer: None,
                    finalized: false,
                },
                false,
            ),
        );
        Ok(id)
    }

    fn submit_answer(
        &mut self,
        _answerer: Pubkey,
        question_id: &QuestionId,
        answer: Answer,
        _max_previous: u64,
        _bond: u64,
    ) -> Result<()> {
        let (question, _) = self.entry(question_id)?;
        question.best_answer = Some(answer);
        Ok(())
    }

    fn notify_of_arbitration_request(
        &mut self,
        arbitrator: Pubkey,
        question_id: &QuestionId,
        requester: Pubkey,
        max_previous: u64,
    ) -> Result<()> {
        let (question, pending) = self.entry(question_id)?;
        require_keys_eq!(question.arbitrator, arbitrator, OracleError::NotArbitrator);
        require!(question.has_answer(), OracleError::MustHaveAnswer);
        *pending = true;
        self.notifications.push(Notification {
            question_id: *question_id,
            requester,
            max_previous,
        });
        Ok(())
    }

    fn submit_answer_by_arbitrator(
        &mut self,
        arbitrator: Pubkey,
        question_id: &QuestionId,
        answer: Answer,
        _answerer: Pubkey,
    ) -> Result<()> {
        let (question, pending) = self.entry(question_id)?;
        require_keys_eq!(question.arbitrator, arbitrator, OracleError::NotArbitrator);
        require!(*pending, OracleError::NotPending);
        question.best_answer = Some(answer);
        question.finalized = true;
        *pending = false;
        Ok(())
    }

    fn question(&self, question_id: &QuestionId) -> Option<Question> {
        self.questions.get(question_id).map(|(q, _)| q.clone())
    }
}

#[error_code]
pub enum GovernanceError {
    #[msg("proposal rejected")]
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proposal {
    pub id: ProposalId,
    pub proposer: Pubkey,
    pub request: ProposalRequest,
}

#[derive(Debug)]
pub struct MockGovernance {
    key: Pubkey,
    calls: usize,
    pub proposals: Vec<Proposal>,
    pub reject: bool,
    /// Rejects only the n-th `propose` call, counting from 1.
    pub reject_call: Option<usize>,
}

impl MockGovernance {
    pub fn new(key: Pubkey) -> Self {
        Self {
            key,
            calls: 0,
            proposals: Vec::new(),
            reject: false,
            reject_call: None,
        }
    }
}

impl GovernancePlugin for MockGovernance {
    fn key(&self) -> Pubkey {
        self.key
    }

    fn propose(&mut self, proposer: Pubkey, request: ProposalRequest) -> Result<ProposalId> {
        self.calls += 1;
        require!(!self.reject, GovernanceError::Rejected);
        require!(
            self.reject_call != Some(self.calls),
            GovernanceError::Rejected
        );
        let id = word(1_000 + self.proposals.len() as u64);
        self.proposals.push(Proposal {
            id,
            proposer,
            request,
        });
        Ok(id)
    }
}

/// One oracle, one governance plugin, one proxy and a primary arbitrator
/// already linked to the proxy.
pub struct World {
    pub owner: Pubkey,
    pub disputer: Pubkey,
    pub outsider: Pubkey,
    pub fee_recipient: Pubkey,
    pub oracle: MockOracle,
    pub governance: MockGovernance,
    pub proxy: QuestionProxy,
    pub arbitrator: Arbitrator,
    pub ledger: Ledger,
}

pub fn init_args(oracle: Pubkey, owner: Pubkey, fee_recipient: Pubkey, plugin: Pubkey) -> InitializeArbitrator {
    InitializeArbitrator {
        oracle,
        owner,
        dispute_fee: DISPUTE_FEE,
        proposal_description_hash: DESCRIPTION_HASH.to_string(),
        meta_data: META_DATA.to_string(),
        fee_recipient,
        governance_plugin: plugin,
    }
}

impl World {
    pub fn new() -> Self {
        let owner = key(1);
        let disputer = key(2);
        let outsider = key(3);
        let fee_recipient = key(4);
        let oracle = MockOracle::new(key(20));
        let governance = MockGovernance::new(key(21));
        let proxy = QuestionProxy::new(key(22), owner, oracle.key());

        let mut arbitrator = Arbitrator::new(
            key(30),
            init_args(oracle.key(), owner, fee_recipient, governance.key()),
        )
        .unwrap();
        arbitrator.set_question_proxy(owner, proxy.key()).unwrap();

        let mut ledger = Ledger::default();
        for party in [owner, disputer, outsider] {
            ledger.deposit(party, STARTING_BALANCE).unwrap();
        }

        Self {
            owner,
            disputer,
            outsider,
            fee_recipient,
            oracle,
            governance,
            proxy,
            arbitrator,
            ledger,
        }
    }

    pub fn ask(&mut self, arbitrator: Pubkey, nonce: u64, answers: &[&str]) -> QuestionId {
        self.proxy
            .ask_question(
                AskQuestion {
                    asker: self.outsider,
                    oracle: &mut self.oracle,
                },
                AskQuestionArgs {
                    template_id: 2,
                    question: QUESTION.to_string(),
                    arbitrator,
                    timeout: 86_400,
                    opening_ts: 1_590_994_800,
                    nonce,
                },
                answers.iter().map(|a| a.to_string()).collect(),
            )
            .unwrap()
    }

    /// Asks a question designated to the primary arbitrator and posts a best answer.
    pub fn answered_question(&mut self, nonce: u64) -> QuestionId {
        let question_id = self.ask(self.arbitrator.key(), nonce, &["A0", "A1", "A2", "A3"]);
        self.post_answer(&question_id);
        question_id
    }

    pub fn post_answer(&mut self, question_id: &QuestionId) {
        self.oracle
            .submit_answer(self.outsider, question_id, [0; 32], 0, DISPUTE_FEE)
            .unwrap();
    }

    pub fn request(&mut self, requester: Pubkey, question_id: QuestionId, paid: u64) -> Result<()> {
        self.arbitrator.request_arbitration(
            RequestArbitration {
                requester,
                oracle: &mut self.oracle,
                governance_plugin: &mut self.governance,
                question_proxy: Some(&self.proxy),
                ledger: &mut self.ledger,
            },
            question_id,
            0,
            paid,
        )
    }

    pub fn settle(&mut self, authority: Pubkey, question_id: QuestionId, answer: Answer) -> Result<()> {
        let answerer = self.disputer;
        self.arbitrator.submit_answer_by_arbitrator(
            SubmitAnswer {
                authority,
                oracle: &mut self.oracle,
            },
            question_id,
            answer,
            answerer,
        )
    }

    pub fn balance(&self, key: &Pubkey) -> u64 {
        self.ledger.balance(key)
    }
}
