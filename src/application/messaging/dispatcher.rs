//! Command router - Routes messages to the checker operations

use crate::application::errors::BotError;
use crate::application::services::CheckerService;
use crate::domain::entities::{CommandKind, Message, Reply};
use crate::domain::rules;
use super::parser::MessageParser;

/// Reply text for anything that is not a known command
pub const INVALID_COMMAND: &str = "Invalid command";

/// Handler result
pub type HandlerResult = Result<Reply, BotError>;

/// Stateless router: one message in, one reply out
#[derive(Clone)]
pub struct CommandRouter {
    parser: MessageParser,
    checker: CheckerService,
}

impl CommandRouter {
    pub fn new(checker: CheckerService) -> Self {
        Self {
            parser: MessageParser::new(),
            checker,
        }
    }

    /// Process a raw text message
    pub async fn process_text(&self, text: impl Into<String>) -> HandlerResult {
        self.process(&Message::new(text)).await
    }

    /// Process a message and build its reply.
    ///
    /// Recognised failures (bad card, unknown BIN, rejected key) are normal
    /// replies. A missing argument or a failed upstream call is an error.
    pub async fn process(&self, message: &Message) -> HandlerResult {
        let Some(command) = self.parser.parse(&message.text) else {
            tracing::info!("[{}] unrecognised command", message.id);
            return Ok(Reply::new(INVALID_COMMAND));
        };

        tracing::info!(
            "[{}] {} via {} received at {}",
            message.id,
            command.kind,
            message.platform,
            message.timestamp.to_rfc3339()
        );
        let arg = command.require_argument()?;

        let text = match command.kind {
            CommandKind::ValidateCc => {
                if self.checker.validate_cc(Some(arg)) {
                    format!("{} is a valid credit card number", arg)
                } else {
                    format!("{} is not a valid credit card number", arg)
                }
            }
            CommandKind::CheckBin => {
                let bin = rules::bin_of(arg);
                match self.checker.check_bin(Some(arg)).await? {
                    Some(bank) if !bank.is_empty() => format!("The BIN {} belongs to {}", bin, bank),
                    _ => format!("Could not find information for the BIN {}", bin),
                }
            }
            CommandKind::CheckSkKey => {
                if self.checker.check_sk_key(Some(arg)).await {
                    format!("{} is a valid Stripe secret key", arg)
                } else {
                    format!("{} is not a valid Stripe secret key", arg)
                }
            }
            CommandKind::GenerateCc => match self.checker.generate_cc(Some(arg)) {
                Some(number) => format!("Generated credit card number: {}", number),
                None => "Could not generate credit card number".to_string(),
            },
            CommandKind::ParseCheckoutUrl => match self.checker.parse_checkout_url(Some(arg)) {
                Some(id) => format!("Checkout session ID: {}", id),
                None => "Could not parse checkout session ID".to_string(),
            },
        };

        tracing::info!("[{}] {} answered in {} ms", message.id, command.kind, message.elapsed_ms());
        Ok(Reply::new(text))
    }
}
