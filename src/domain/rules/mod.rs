//! Domain rules - Pure functions with no I/O

pub mod card;
pub mod checkout;

pub use card::{bin_of, digits_only, is_valid_card_number, normalize_card_number, splice_bin};
pub use checkout::parse_checkout_url;
