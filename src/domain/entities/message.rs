use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents an incoming command message
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub platform: String,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            timestamp: Utc::now(),
            platform: "unknown".to_string(),
        }
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Milliseconds since the message was received
    pub fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.timestamp).num_milliseconds()
    }
}

/// Response envelope, the same shape for every outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub message: String,
}

impl Reply {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
