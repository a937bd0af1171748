use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::errors::ArbitratorError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

/// Native-value balances of every party a call may move funds between.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    balances: BTreeMap<Pubkey, u64>,
}

impl Ledger {
    pub fn balance(&self, key: &Pubkey) -> u64 {
        self.balances.get(key).copied().unwrap_or(0)
    }

    pub fn deposit(&mut self, key: Pubkey, amount: u64) -> Result<()> {
        let balance = self
            .balance(&key)
            .checked_add(amount)
            .ok_or(ArbitratorError::Overflow)?;
        self.balances.insert(key, balance);
        Ok(())
    }

    pub fn transfer(&mut self, from: Pubkey, to: Pubkey, amount: u64) -> Result<()> {
        self.apply(&[Transfer { from, to, amount }])
    }

    /// Applies every transfer or none of them.
    pub fn apply(&mut self, transfers: &[Transfer]) -> Result<()> {
        let mut next = self.balances.clone();
        for transfer in transfers.iter().filter(|t| t.amount > 0) {
            let from = next
                .get(&transfer.from)
                .copied()
                .unwrap_or(0)
                .checked_sub(transfer.amount)
                .ok_or(ArbitratorError::InsufficientFunds)?;
            next.insert(transfer.from, from);

            let to = next
                .get(&transfer.to)
                .copied()
                .unwrap_or(0)
                .checked_add(transfer.amount)
                .ok_or(ArbitratorError::Overflow)?;
            next.insert(transfer.to, to);
        }
        self.balances = next;
        Ok(())
    }
}
