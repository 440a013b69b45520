//! Platform adapters - Webhook server and development console

pub mod console;
pub mod webhook;
