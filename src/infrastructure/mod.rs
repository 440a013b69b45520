//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Binlist / Stripe: Outbound HTTP collaborators
//! - Generator: Synthetic card numbers
//! - Adapters: Webhook server and console

pub mod adapters;
pub mod binlist;
pub mod config;
pub mod generator;
pub mod stripe;

use std::sync::Arc;

use crate::application::errors::BotError;
use crate::application::messaging::CommandRouter;
use crate::application::services::CheckerService;
use config::Config;

/// Wire the production collaborators into a router
pub fn command_router(config: &Config) -> Result<CommandRouter, BotError> {
    let bins = binlist::BinlistClient::new(&config.upstream)?;
    let keys = stripe::StripeKeyVerifier::new(&config.upstream)?;
    let cards = generator::RandomCardGenerator::new();

    Ok(CommandRouter::new(CheckerService::new(
        Arc::new(bins),
        Arc::new(keys),
        Arc::new(cards),
    )))
}
