pub mod answer_storage;
pub mod case;
pub mod config;
pub mod ledger;

pub use answer_storage::*;
pub use case::*;
pub use config::*;
pub use ledger::*;
