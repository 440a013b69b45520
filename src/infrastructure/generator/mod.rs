//! Synthetic card-number generator

use rand::{rng, Rng};

use crate::domain::rules::card::luhn_check_digit;
use crate::domain::traits::CardGenerator;

/// Card network layout: issuer prefixes and total length
#[derive(Debug, Clone, Copy)]
pub struct Network {
    pub name: &'static str,
    pub prefixes: &'static [&'static str],
    pub length: usize,
}

pub const NETWORKS: &[Network] = &[
    Network { name: "visa", prefixes: &["4"], length: 16 },
    Network { name: "mastercard", prefixes: &["51", "52", "53", "54", "55"], length: 16 },
    Network { name: "amex", prefixes: &["34", "37"], length: 15 },
    Network { name: "discover", prefixes: &["6011", "65"], length: 16 },
    Network { name: "jcb", prefixes: &["3528", "3589"], length: 16 },
    Network { name: "diners", prefixes: &["300", "305", "36", "38"], length: 14 },
];

/// Picks a random network and produces a checksum-valid number for it
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCardGenerator;

impl RandomCardGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Number for a specific network
    pub fn card_number_for(&self, network: &Network) -> String {
        let mut rng = rng();
        let prefix = network.prefixes[rng.random_range(0..network.prefixes.len())];

        let mut number = prefix.to_string();
        while number.len() < network.length - 1 {
            number.push(char::from(b'0' + rng.random_range(0..10u8)));
        }
        let check = luhn_check_digit(&number);
        number.push(char::from(b'0' + check));
        number
    }
}

impl CardGenerator for RandomCardGenerator {
    fn card_number(&self) -> String {
        let network = &NETWORKS[rng().random_range(0..NETWORKS.len())];
        self.card_number_for(network)
    }
}
