use anchor_lang::prelude::*;

use crate::{
    errors::ProxyError,
    interfaces::{AskQuestionArgs, Oracle, QuestionId},
    QuestionProxy,
};

pub struct AskQuestion<'a> {
    pub asker: Pubkey,
    pub oracle: &'a mut dyn Oracle,
}

pub fn handler(
    proxy: &mut QuestionProxy,
    mut ctx: AskQuestion,
    args: AskQuestionArgs,
    allowed_answers: Vec<String>,
) -> Result<QuestionId> {
    require_keys_eq!(ctx.oracle.key(), proxy.oracle, ProxyError::AccountMismatch);

    let question_id = ctx.oracle.ask_question(proxy.key, &args)?;

    if proxy.registry.is_enabled(&args.arbitrator) {
        let count = allowed_answers.len();
        if proxy.registry.record(question_id, allowed_answers) {
            msg!("Stored {} allowed answer(s) for arbitrator {}", count, args.arbitrator);
        }
    }

    msg!("Question asked by {} via proxy {}", ctx.asker, proxy.key);

    Ok(question_id)
}
