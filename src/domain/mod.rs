//! Domain layer - Core business logic with no external dependencies
//! 
//! This layer contains:
//! - Entities: Core business objects (Message, Command, Reply)
//! - Traits: Abstractions for infrastructure (BinDirectory, KeyVerifier, CardGenerator)
//! - Rules: Card-number and checkout URL rules

pub mod entities;
pub mod rules;
pub mod traits;
