use async_trait::async_trait;

/// KeyVerifier trait - probes whether a payment-processor secret key works
#[async_trait]
pub trait KeyVerifier: Send + Sync {
    /// `true` only when the processor accepted the key.
    /// Any failure, including the network, counts as invalid.
    async fn is_valid(&self, secret_key: &str) -> bool;
}
