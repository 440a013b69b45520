//! Message handling - Command parsing and routing

pub mod dispatcher;
pub mod parser;

pub use dispatcher::{CommandRouter, INVALID_COMMAND};
pub use parser::MessageParser;
