//! Console adapter for development/testing

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::application::errors::BotError;
use crate::application::messaging::CommandRouter;
use crate::domain::entities::Message;

/// Reads commands line by line and prints the replies
pub struct ConsoleAdapter {
    router: CommandRouter,
}

impl ConsoleAdapter {
    pub fn new(router: CommandRouter) -> Self {
        Self { router }
    }

    /// Run against the process stdin/stdout until EOF
    pub async fn run(&self) -> Result<(), BotError> {
        tracing::info!("Starting console bot (dev mode)");
        let stdin = BufReader::new(tokio::io::stdin());
        self.run_with(stdin, tokio::io::stdout()).await
    }

    pub async fn run_with<R, W>(&self, reader: R, mut writer: W) -> Result<(), BotError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await.map_err(io_error)? {
            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            let message = Message::new(input).with_platform("console");
            let output = match self.router.process(&message).await {
                Ok(reply) => format!("[BOT] {}\n", reply.message),
                Err(e) => format!("[ERROR] {}\n", e),
            };
            writer.write_all(output.as_bytes()).await.map_err(io_error)?;
            writer.flush().await.map_err(io_error)?;
        }
        Ok(())
    }
}

fn io_error(e: std::io::Error) -> BotError {
    BotError::Internal(format!("Console I/O failed: {}", e))
}
