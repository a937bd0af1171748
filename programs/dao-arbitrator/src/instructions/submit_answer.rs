use anchor_lang::prelude::*;

use crate::{
    errors::ArbitratorError,
    events::DisputeSettled,
    interfaces::{Answer, ArbitrationCallback, Oracle, QuestionId},
    Arbitrator,
};

pub struct SubmitAnswer<'a> {
    /// The owner, or whatever governance executor the owner role was handed to
    pub authority: Pubkey,
    pub oracle: &'a mut dyn Oracle,
}

pub fn handler(
    arbitrator: &mut Arbitrator,
    mut ctx: SubmitAnswer,
    question_id: QuestionId,
    answer: Answer,
    answerer: Pubkey,
) -> Result<()> {
    require!(
        arbitrator.config.is_owner(&ctx.authority),
        ArbitratorError::Forbidden
    );
    require_keys_eq!(
        ctx.oracle.key(),
        arbitrator.config.oracle,
        ArbitratorError::AccountMismatch
    );
    arbitrator.ensure_open(&question_id)?;

    arbitrator.cases.entry(question_id).or_default().settle();

    ctx.oracle
        .submit_answer_by_arbitrator(arbitrator.key, &question_id, answer, answerer)?;

    arbitrator.record(DisputeSettled {
        question_id,
        answer,
        answerer,
    });

    msg!("Dispute settled by {} for answerer {}", ctx.authority, answerer);

    Ok(())
}

/// Resolves a decoded governance callback into the answer to submit.
pub fn resolve_callback(
    arbitrator: &Arbitrator,
    encoded: &[u8],
    answer: Option<Answer>,
) -> Result<(ArbitrationCallback, Answer)> {
    let callback = ArbitrationCallback::decode(encoded)?;
    require_keys_eq!(
        callback.arbitrator,
        arbitrator.key,
        ArbitratorError::InvalidCallback
    );
    // Only proposals from the request that admitted the case may settle it
    require!(
        arbitrator
            .case(&callback.question_id)
            .is_some_and(|case| case.is_admitted_for(&callback.answerer)),
        ArbitratorError::InvalidCallback
    );
    let answer = callback
        .answer
        .or(answer)
        .ok_or(ArbitratorError::InvalidCallback)?;
    Ok((callback, answer))
}
