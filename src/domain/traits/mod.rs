//! Domain traits - Abstractions for infrastructure implementations

pub mod bin_directory;
pub mod card_generator;
pub mod key_verifier;

pub use bin_directory::BinDirectory;
pub use card_generator::CardGenerator;
pub use key_verifier::KeyVerifier;
