//! Stripe secret-key probe

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::application::errors::BotError;
use crate::domain::traits::KeyVerifier;
use crate::infrastructure::config::UpstreamConfig;

/// Verifies secret keys by fetching the Stripe account they belong to
pub struct StripeKeyVerifier {
    client: Client,
    base_url: String,
}

impl StripeKeyVerifier {
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
            base_url: config.stripe_url.trim_end_matches('/').to_string(),
        })
    }

    fn account_url(&self) -> String {
        format!("{}/v1/account", self.base_url)
    }
}

#[async_trait]
impl KeyVerifier for StripeKeyVerifier {
    async fn is_valid(&self, secret_key: &str) -> bool {
        let result = self.client
            .get(self.account_url())
            .basic_auth(secret_key, Some(""))
            .send()
            .await;

        match result {
            Ok(response) => response.status() == StatusCode::OK,
            Err(e) => {
                tracing::warn!("Stripe key probe failed: {}", e);
                false
            }
        }
    }
}
