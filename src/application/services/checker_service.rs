use std::sync::Arc;

use crate::application::errors::BotError;
use crate::domain::rules;
use crate::domain::traits::{BinDirectory, CardGenerator, KeyVerifier};

/// Service running the five checker operations against injected collaborators
#[derive(Clone)]
pub struct CheckerService {
    bins: Arc<dyn BinDirectory>,
    keys: Arc<dyn KeyVerifier>,
    cards: Arc<dyn CardGenerator>,
}

impl CheckerService {
    pub fn new(
        bins: Arc<dyn BinDirectory>,
        keys: Arc<dyn KeyVerifier>,
        cards: Arc<dyn CardGenerator>,
    ) -> Self {
        Self { bins, keys, cards }
    }

    pub fn validate_cc(&self, card_number: Option<&str>) -> bool {
        rules::is_valid_card_number(card_number)
    }

    /// Bank name for the card's BIN, `None` when unknown.
    /// Malformed numbers never reach the directory.
    pub async fn check_bin(&self, card_number: Option<&str>) -> Result<Option<String>, BotError> {
        let Some(digits) = rules::digits_only(card_number) else {
            return Ok(None);
        };
        let bin = rules::bin_of(&digits);
        tracing::debug!("Looking up BIN {}", bin);
        self.bins.bank_name(bin).await
    }

    pub async fn check_sk_key(&self, secret_key: Option<&str>) -> bool {
        match secret_key {
            Some(key) if !key.is_empty() => self.keys.is_valid(key).await,
            _ => false,
        }
    }

    pub fn generate_cc(&self, bin: Option<&str>) -> Option<String> {
        let bin = bin.filter(|b| !b.is_empty())?;
        let generated = self.cards.card_number();
        Some(rules::splice_bin(bin, &generated))
    }

    pub fn parse_checkout_url(&self, url: Option<&str>) -> Option<String> {
        rules::parse_checkout_url(url).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingDirectory {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl BinDirectory for RecordingDirectory {
        async fn bank_name(&self, bin: &str) -> Result<Option<String>, BotError> {
            self.seen.lock().unwrap().push(bin.to_string());
            Ok((bin == "453201").then(|| "Example Bank".to_string()))
        }
    }

    struct AcceptPrefix(&'static str);

    #[async_trait]
    impl KeyVerifier for AcceptPrefix {
        async fn is_valid(&self, secret_key: &str) -> bool {
            secret_key.starts_with(self.0)
        }
    }

    struct FixedCard(&'static str);

    impl CardGenerator for FixedCard {
        fn card_number(&self) -> String {
            self.0.to_string()
        }
    }

    fn service(directory: Arc<RecordingDirectory>) -> CheckerService {
        CheckerService::new(
            directory,
            Arc::new(AcceptPrefix("sk_live_")),
            Arc::new(FixedCard("6011000990139424")),
        )
    }

    #[tokio::test]
    async fn test_check_bin_uses_normalized_prefix() {
        let directory = Arc::new(RecordingDirectory::default());
        let svc = service(directory.clone());

        let bank = svc.check_bin(Some("453201511283-0366")).await.unwrap();
        assert_eq!(bank.as_deref(), Some("Example Bank"));
        assert_eq!(*directory.seen.lock().unwrap(), vec!["453201".to_string()]);
    }

    #[tokio::test]
    async fn test_check_bin_skips_lookup_for_bad_input() {
        let directory = Arc::new(RecordingDirectory::default());
        let svc = service(directory.clone());

        assert!(svc.check_bin(Some("4532abc")).await.unwrap().is_none());
        assert!(svc.check_bin(None).await.unwrap().is_none());
        assert!(directory.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_check_sk_key() {
        let svc = service(Arc::new(RecordingDirectory::default()));
        assert!(svc.check_sk_key(Some("sk_live_123")).await);
        assert!(!svc.check_sk_key(Some("sk_test_123")).await);
        assert!(!svc.check_sk_key(Some("")).await);
        assert!(!svc.check_sk_key(None).await);
    }

    #[test]
    fn test_generate_cc_splices_bin() {
        let svc = service(Arc::new(RecordingDirectory::default()));
        let number = svc.generate_cc(Some("411111")).unwrap();
        assert_eq!(&number[..6], "411111");
        assert_eq!(number, "4111110990139424");
        assert!(svc.generate_cc(Some("")).is_none());
        assert!(svc.generate_cc(None).is_none());
    }

    #[test]
    fn test_parse_checkout_url() {
        let svc = service(Arc::new(RecordingDirectory::default()));
        assert_eq!(
            svc.parse_checkout_url(Some("https://checkout.stripe.com/pay/cs_test_abc123")).as_deref(),
            Some("cs_test_abc123")
        );
    }
}
