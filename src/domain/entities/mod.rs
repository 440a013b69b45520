//! Domain entities - Core business objects with no external dependencies

pub mod command;
pub mod message;

pub use command::{Command, CommandKind};
pub use message::{Message, Reply};
