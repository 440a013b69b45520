//! Message parser - Turns raw message text into a command

use crate::domain::entities::{Command, CommandKind};

/// Parses incoming text into a `Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct MessageParser;

impl MessageParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a text message.
    ///
    /// Returns `None` when the text starts with no known command prefix.
    /// The argument is the second whitespace-separated token; anything after
    /// it is ignored.
    pub fn parse(&self, text: &str) -> Option<Command> {
        let kind = CommandKind::detect(text)?;
        let command = Command::new(kind);

        Some(match text.split_whitespace().nth(1) {
            Some(arg) => command.with_argument(arg),
            None => command,
        })
    }
}
