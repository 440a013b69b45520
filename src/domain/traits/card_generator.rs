/// CardGenerator trait - source of synthetic card numbers
pub trait CardGenerator: Send + Sync {
    /// A random, all-digit card number
    fn card_number(&self) -> String;
}
