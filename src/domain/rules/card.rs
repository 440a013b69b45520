//! Card-number rules: normalization, checksum and BIN handling

/// Length of a bank identification number
pub const BIN_LENGTH: usize = 6;

/// Trim the input and drop every hyphen and space
pub fn normalize_card_number(raw: &str) -> String {
    raw.trim().chars().filter(|c| *c != '-' && *c != ' ').collect()
}

/// Normalize and reject anything that is empty or not all ASCII digits
pub fn digits_only(raw: Option<&str>) -> Option<String> {
    let normalized = normalize_card_number(raw?);
    if normalized.is_empty() || !normalized.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(normalized)
}

/// Mod-10 checksum as deployed.
///
/// Each digit at zero-based position `i` (counted from the left) contributes
/// `digit * (2 - i % 2)`, summed from the last digit to the first. The doubled
/// products are added as-is: there is no "subtract 9" step, so this accepts a
/// different set of numbers than textbook Luhn whenever a doubled digit is 5
/// or more.
pub fn is_valid_card_number(raw: Option<&str>) -> bool {
    match digits_only(raw) {
        Some(digits) => weighted_sum(&digits) % 10 == 0,
        None => false,
    }
}

/// Sum of `digit * (2 - i % 2)` over an all-digit string
pub fn weighted_sum(digits: &str) -> u32 {
    digits
        .bytes()
        .enumerate()
        .rev()
        .map(|(i, b)| u32::from(b - b'0') * (2 - (i as u32 % 2)))
        .sum()
}

/// First six characters of a card number (fewer if it is shorter)
pub fn bin_of(card_number: &str) -> &str {
    match card_number.char_indices().nth(BIN_LENGTH) {
        Some((idx, _)) => &card_number[..idx],
        None => card_number,
    }
}

/// Lay `bin` over the start of `generated`, keeping the generator's digits
/// from position six onward. The checksum is not recomputed.
pub fn splice_bin(bin: &str, generated: &str) -> String {
    let mut spliced = bin.to_string();
    spliced.extend(generated.chars().skip(BIN_LENGTH));
    spliced
}

/// Textbook Luhn check digit for `partial` (used when synthesising numbers)
pub fn luhn_check_digit(partial: &str) -> u8 {
    let sum: u32 = partial
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_number() {
        // weighted sum 80
        assert!(is_valid_card_number(Some("4532015112830369")));
        // last digit incremented mod 10, weighted sum 71
        assert!(!is_valid_card_number(Some("4532015112830360")));
    }

    #[test]
    fn test_doubled_products_are_not_reduced() {
        // Textbook Luhn accepts this one; the raw sum is 77
        assert_eq!(weighted_sum("4532015112830366"), 77);
        assert!(!is_valid_card_number(Some("4532015112830366")));
        assert_eq!(weighted_sum("9"), 18);
    }

    #[test]
    fn test_multiplier_follows_left_index() {
        // "18": index 0 doubled, index 1 single -> 2 + 8
        assert_eq!(weighted_sum("18"), 10);
        assert!(is_valid_card_number(Some("18")));
        // "81": 16 + 1
        assert!(!is_valid_card_number(Some("81")));
    }

    #[test]
    fn test_separators_do_not_change_verdict() {
        for raw in [
            "4532-0151-1283-0369",
            "4532 0151 1283 0369",
            "  4532015112830369  ",
            "45-32 01-5112 830 369",
        ] {
            assert!(is_valid_card_number(Some(raw)), "{}", raw);
        }
        assert!(!is_valid_card_number(Some("4532-0151-1283-0360")));
    }

    #[test]
    fn test_rejects_non_digits_and_empty() {
        assert!(!is_valid_card_number(Some("453201511283036A")));
        assert!(!is_valid_card_number(Some("4532.0151.1283.0369")));
        assert!(!is_valid_card_number(Some("")));
        assert!(!is_valid_card_number(Some(" - - ")));
        assert!(!is_valid_card_number(None));
        // non-ASCII digits
        assert!(!is_valid_card_number(Some("４５３２")));
    }

    #[test]
    fn test_bin_of_normalized_input() {
        let digits = digits_only(Some("453201511283-0366")).unwrap();
        assert_eq!(bin_of(&digits), "453201");
        assert_eq!(bin_of("4532"), "4532");
    }

    #[test]
    fn test_splice_bin() {
        let spliced = splice_bin("411111", "5500000000000004");
        assert_eq!(spliced, "4111110000000004");
        assert_eq!(spliced.len(), 16);

        let amex = splice_bin("411111", "378282246310005");
        assert!(amex.starts_with("411111"));
        assert_eq!(amex.len(), 15);

        assert_eq!(splice_bin("411111", "1234"), "411111");
    }

    #[test]
    fn test_luhn_check_digit() {
        assert_eq!(luhn_check_digit("453201511283036"), 6);
        assert_eq!(luhn_check_digit("7992739871"), 3);
    }
}
