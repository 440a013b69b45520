//! Empire Checker - webhook bot for card-number utilities
//!
//! A `POST /` body of `{"message": "/command arg"}` is routed to one of five
//! operations and answered with `{"message": "..."}`.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::errors::BotError;
pub use application::messaging::CommandRouter;
pub use application::services::CheckerService;
pub use domain::entities::Reply;
pub use infrastructure::adapters::webhook::{build_router, WebhookState};
pub use infrastructure::config::Config;
