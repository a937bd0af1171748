use anchor_lang::prelude::*;

use crate::{
    errors::ArbitratorError,
    events::{ArbitrationRequested, ProposalCreated},
    interfaces::{
        answer_from_index, ArbitrationCallback, GovernancePlugin, Oracle, ProposalId,
        ProposalRequest, QuestionId,
    },
    state::{ArbitratorConfig, Ledger, Transfer},
    Arbitrator, QuestionProxy,
};

pub struct RequestArbitration<'a> {
    /// Whoever disputes the answer and pays the fee
    pub requester: Pubkey,
    pub oracle: &'a mut dyn Oracle,
    pub governance_plugin: &'a mut dyn GovernancePlugin,
    /// Must be the configured proxy; its stored answers shape the proposals
    pub question_proxy: Option<&'a QuestionProxy>,
    pub ledger: &'a mut Ledger,
}

impl RequestArbitration<'_> {
    fn validate(&self, config: &ArbitratorConfig) -> Result<()> {
        let question_proxy = config
            .question_proxy
            .ok_or(ArbitratorError::NoProxyConfigured)?;
        require!(
            self.question_proxy.map(QuestionProxy::key) == Some(question_proxy),
            ArbitratorError::AccountMismatch
        );
        require_keys_eq!(
            self.oracle.key(),
            config.oracle,
            ArbitratorError::AccountMismatch
        );
        require_keys_eq!(
            self.governance_plugin.key(),
            config.governance_plugin,
            ArbitratorError::AccountMismatch
        );
        Ok(())
    }
}

pub fn handler(
    arbitrator: &mut Arbitrator,
    mut ctx: RequestArbitration,
    question_id: QuestionId,
    max_previous: u64,
    paid_amount: u64,
) -> Result<()> {
    ctx.validate(&arbitrator.config)?;

    let designated = ctx.oracle.question(&question_id).map(|q| q.arbitrator);
    require!(
        designated == Some(arbitrator.key),
        ArbitratorError::WrongArbitrator
    );
    arbitrator.ensure_open(&question_id)?;

    let fee = arbitrator.config.dispute_fee;
    require!(
        ctx.ledger.balance(&ctx.requester) >= paid_amount,
        ArbitratorError::InsufficientFunds
    );

    // Commit the case before anything leaves this call
    let case = arbitrator.cases.entry(question_id).or_default();
    let already_requested = case.requested;
    let admitted = case.can_admit(paid_amount, fee);
    if admitted {
        case.admit(ctx.requester);
    }
    case.record_notification();

    let (to_recipient, to_requester) = if admitted {
        arbitrator.config.split_admitting_payment(paid_amount)
    } else if already_requested {
        arbitrator.config.split_surplus_payment(paid_amount)
    } else {
        (0, paid_amount)
    };

    ctx.oracle.notify_of_arbitration_request(
        arbitrator.key,
        &question_id,
        ctx.requester,
        max_previous,
    )?;
    // The oracle's own preconditions take precedence over a zero fee
    require!(fee > 0, ArbitratorError::ZeroFee);

    arbitrator.record(ArbitrationRequested {
        question_id,
        requester: ctx.requester,
        paid: paid_amount,
        admitted,
    });

    if admitted {
        arbitrator.ensure_open(&question_id)?;
        let proposal_ids = create_proposals(arbitrator, &mut ctx, question_id)?;

        if let Some(case) = arbitrator.cases.get_mut(&question_id) {
            case.proposal_ids = proposal_ids.clone();
        }

        msg!(
            "Arbitration admitted: {} proposal(s) created on {}",
            proposal_ids.len(),
            ctx.governance_plugin.key()
        );

        arbitrator.record(ProposalCreated {
            scheme_address: ctx.governance_plugin.key(),
            question_id,
            proposal_ids,
        });
    } else {
        msg!(
            "Arbitration request noted from {} ({} paid, fee {})",
            ctx.requester,
            paid_amount,
            fee
        );
    }

    let vault = arbitrator.key;
    ctx.ledger.apply(&[
        Transfer {
            from: ctx.requester,
            to: vault,
            amount: paid_amount,
        },
        Transfer {
            from: vault,
            to: arbitrator.config.fee_recipient,
            amount: to_recipient,
        },
        Transfer {
            from: vault,
            to: ctx.requester,
            amount: to_requester,
        },
    ])?;

    Ok(())
}

/// One proposal per answer the proxy stored for the question, or a single
/// open proposal when nothing was stored.
fn create_proposals(
    arbitrator: &Arbitrator,
    ctx: &mut RequestArbitration,
    question_id: QuestionId,
) -> Result<Vec<ProposalId>> {
    let stored = ctx
        .question_proxy
        .map(|proxy| proxy.get_answers_by_question_id(&question_id).len())
        .unwrap_or(0);

    let choices: Vec<_> = if stored == 0 {
        vec![None]
    } else {
        (0..stored as u64).map(|i| Some(answer_from_index(i))).collect()
    };

    let mut proposal_ids = Vec::with_capacity(choices.len());
    for answer in choices {
        let callback = ArbitrationCallback {
            arbitrator: arbitrator.key,
            question_id,
            answer,
            answerer: ctx.requester,
        }
        .encode()?;

        let proposal_id = ctx.governance_plugin.propose(
            arbitrator.key,
            ProposalRequest {
                description_hash: arbitrator.config.proposal_description_hash.clone(),
                meta_data: arbitrator.config.meta_data.clone(),
                callback,
            },
        )?;
        proposal_ids.push(proposal_id);
    }

    Ok(proposal_ids)
}
