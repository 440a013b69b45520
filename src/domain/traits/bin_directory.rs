use async_trait::async_trait;
use crate::application::errors::BotError;

/// BinDirectory trait - abstraction over a remote BIN lookup service
#[async_trait]
pub trait BinDirectory: Send + Sync {
    /// Look up the issuing bank name for a BIN.
    ///
    /// `Ok(None)` means the directory answered but knows no bank for it.
    /// Transport failures are errors.
    async fn bank_name(&self, bin: &str) -> Result<Option<String>, BotError>;
}
