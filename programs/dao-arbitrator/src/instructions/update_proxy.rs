use anchor_lang::prelude::*;

use crate::{
    errors::ProxyError,
    events::{ActivateAnswerStorage, DeactivateAnswerStorage, SetOracle},
    QuestionProxy,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProxyUpdate {
    Oracle(Pubkey),
    ActivateAnswerStorage(Pubkey),
    DeactivateAnswerStorage(Pubkey),
}

pub fn handler(proxy: &mut QuestionProxy, authority: Pubkey, update: ProxyUpdate) -> Result<()> {
    require!(proxy.is_owner(&authority), ProxyError::Forbidden);

    match update {
        ProxyUpdate::Oracle(oracle) => {
            proxy.oracle = oracle;
            proxy.record(SetOracle { oracle });
            msg!("Proxy now forwards to oracle {}", oracle);
        }
        ProxyUpdate::ActivateAnswerStorage(arbitrator) => {
            proxy.registry.set_enabled(arbitrator, true);
            proxy.record(ActivateAnswerStorage { arbitrator });
            msg!("Answer storage activated for {}", arbitrator);
        }
        ProxyUpdate::DeactivateAnswerStorage(arbitrator) => {
            proxy.registry.set_enabled(arbitrator, false);
            proxy.record(DeactivateAnswerStorage { arbitrator });
            msg!("Answer storage deactivated for {}", arbitrator);
        }
    }

    Ok(())
}
