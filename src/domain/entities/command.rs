use std::fmt;

use crate::application::errors::CommandError;

/// The commands understood by the bot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    ValidateCc,
    CheckBin,
    CheckSkKey,
    GenerateCc,
    ParseCheckoutUrl,
}

impl CommandKind {
    /// Match order. The first prefix the text starts with wins.
    pub const ALL: [CommandKind; 5] = [
        CommandKind::ValidateCc,
        CommandKind::CheckBin,
        CommandKind::CheckSkKey,
        CommandKind::GenerateCc,
        CommandKind::ParseCheckoutUrl,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            CommandKind::ValidateCc => "/validate_cc",
            CommandKind::CheckBin => "/check_bin",
            CommandKind::CheckSkKey => "/check_sk_key",
            CommandKind::GenerateCc => "/generate_cc",
            CommandKind::ParseCheckoutUrl => "/parse_checkout_url",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            CommandKind::ValidateCc => "/validate_cc <card number>",
            CommandKind::CheckBin => "/check_bin <card number>",
            CommandKind::CheckSkKey => "/check_sk_key <secret key>",
            CommandKind::GenerateCc => "/generate_cc <bin>",
            CommandKind::ParseCheckoutUrl => "/parse_checkout_url <url>",
        }
    }

    /// Find the command whose prefix the text starts with
    pub fn detect(text: &str) -> Option<CommandKind> {
        Self::ALL.into_iter().find(|kind| text.starts_with(kind.prefix()))
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// A recognised command and its (optional) single argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    pub argument: Option<String>,
}

impl Command {
    pub fn new(kind: CommandKind) -> Self {
        Self {
            kind,
            argument: None,
        }
    }

    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.argument = Some(argument.into());
        self
    }

    /// The argument every handler needs; its absence fails the request
    pub fn require_argument(&self) -> Result<&str, CommandError> {
        self.argument
            .as_deref()
            .ok_or(CommandError::MissingArgument(self.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_each_prefix() {
        assert_eq!(CommandKind::detect("/validate_cc 1"), Some(CommandKind::ValidateCc));
        assert_eq!(CommandKind::detect("/check_bin 1"), Some(CommandKind::CheckBin));
        assert_eq!(CommandKind::detect("/check_sk_key sk"), Some(CommandKind::CheckSkKey));
        assert_eq!(CommandKind::detect("/generate_cc 411111"), Some(CommandKind::GenerateCc));
        assert_eq!(
            CommandKind::detect("/parse_checkout_url https://x/y"),
            Some(CommandKind::ParseCheckoutUrl)
        );
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(CommandKind::detect("/foo bar"), None);
        assert_eq!(CommandKind::detect("validate_cc 1"), None);
        assert_eq!(CommandKind::detect(""), None);
    }

    #[test]
    fn test_no_prefix_shadows_another() {
        for a in CommandKind::ALL {
            for b in CommandKind::ALL {
                if a != b {
                    assert!(!a.prefix().starts_with(b.prefix()), "{} shadows {}", b, a);
                }
            }
        }
    }

    #[test]
    fn test_require_argument() {
        let cmd = Command::new(CommandKind::CheckBin);
        assert!(matches!(
            cmd.require_argument(),
            Err(CommandError::MissingArgument(CommandKind::CheckBin))
        ));

        let cmd = cmd.with_argument("453201");
        assert_eq!(cmd.require_argument().unwrap(), "453201");
    }
}
