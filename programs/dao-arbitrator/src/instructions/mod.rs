pub mod ask_question;
pub mod initialize;
pub mod request_arbitration;
pub mod submit_answer;
pub mod update_config;
pub mod update_proxy;

pub use ask_question::*;
pub use initialize::*;
pub use request_arbitration::*;
pub use submit_answer::*;
pub use update_config::*;
pub use update_proxy::*;
