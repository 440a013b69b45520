//! Binlist BIN directory client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::application::errors::BotError;
use crate::domain::traits::BinDirectory;
use crate::infrastructure::config::UpstreamConfig;

/// Binlist lookup response (only the fields we read)
#[derive(Deserialize, Debug)]
struct LookupResponse {
    bank: Option<Bank>,
}

#[derive(Deserialize, Debug)]
struct Bank {
    name: Option<String>,
}

/// BIN directory backed by the binlist.net lookup API
pub struct BinlistClient {
    client: Client,
    base_url: String,
}

impl BinlistClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, BotError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BotError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.binlist_url.trim_end_matches('/').to_string(),
        })
    }

    fn lookup_url(&self, bin: &str) -> String {
        format!("{}/{}", self.base_url, bin)
    }
}

#[async_trait]
impl BinDirectory for BinlistClient {
    async fn bank_name(&self, bin: &str) -> Result<Option<String>, BotError> {
        let response = self.client
            .get(self.lookup_url(bin))
            .header("Accept-Version", "3")
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            tracing::debug!("BIN {} lookup returned {}", bin, response.status());
            return Ok(None);
        }

        let body: LookupResponse = response.json().await?;
        Ok(body.bank.and_then(|b| b.name))
    }
}
