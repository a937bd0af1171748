//! Arbitration for a bonded question/answer oracle, backed by DAO governance.
//!
//! A disputed answer is escalated through [`Arbitrator::request_arbitration`]
//! against a fixed dispute fee. Once funded, the arbitrator opens governance
//! proposals whose callbacks come back through
//! [`Arbitrator::execute_callback`] to write the final answer to the oracle.
//! [`QuestionProxy`] sits in front of the oracle's question creation and keeps
//! allowed-answer text for arbitrators that ask for it.

mod arbitrator;
mod constants;
mod errors;
mod events;
pub mod instructions;
pub mod interfaces;
mod question_proxy;
mod state;

pub use arbitrator::*;
pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use interfaces::*;
pub use question_proxy::*;
pub use state::*;
