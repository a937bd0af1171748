use crate::state::ExcessPolicy;

// Oracle answers, question ids and proposal ids are 32-byte words
pub const WORD_LEN: usize = 32;

// An answer picked from a stored answer list is its index, right-aligned
pub const INDEX_OFFSET: usize = WORD_LEN - 8;

pub const DEFAULT_EXCESS_POLICY: ExcessPolicy = ExcessPolicy::ForwardToFeeRecipient;
