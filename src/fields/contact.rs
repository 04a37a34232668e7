// src/fields/contact.rs

use crate::fields::NA;
use once_cell::sync::Lazy;
use phonenumber::{country, Mode};
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+")
        .expect("Failed to compile EMAIL_RE")
});

// Digit runs that may be broken up by spaces/dashes, e.g. "+91 98765 43210"
static PHONE_CANDIDATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\d[\d\s\-]{6,}\d").expect("Failed to compile PHONE_CANDIDATE_RE"));

const MIN_PHONE_DIGITS: usize = 8;

/// First email-shaped match in the text, or `"NA"`.
pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NA.to_string())
}

/// Best phone number in the text, or `"NA"`.
///
/// Candidates are digit runs (spaces/dashes allowed inside) of at least 8
/// digits, compacted to digits and `+`. The first candidate that parses as a
/// *valid* number for the region wins, formatted E.164. If none validate, the
/// longest raw candidate is returned with country-code prefixing applied.
pub fn extract_phone(text: &str, region: country::Id) -> String {
    let candidates: Vec<String> = PHONE_CANDIDATE_RE
        .find_iter(text)
        .map(|m| {
            m.as_str()
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '+')
                .collect::<String>()
        })
        .filter(|c| c.chars().filter(|ch| ch.is_ascii_digit()).count() >= MIN_PHONE_DIGITS)
        .collect();

    if candidates.is_empty() {
        return NA.to_string();
    }

    for candidate in &candidates {
        if let Ok(parsed) = phonenumber::parse(Some(region), candidate) {
            if phonenumber::is_valid(&parsed) {
                return parsed.format().mode(Mode::E164).to_string();
            }
        }
    }

    // Nothing validated; fall back to the longest raw candidate with crude
    // country-code fixups (12 digits starting "91" → +, bare 10 digits → +91).
    let longest = match candidates.iter().max_by_key(|c| c.len()) {
        Some(candidate) => candidate,
        None => return NA.to_string(),
    };
    let digits: String = longest.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 12 && digits.starts_with("91") {
        format!("+{}", digits)
    } else if digits.len() == 10 {
        format!("+91{}", digits)
    } else {
        longest.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone_of(text: &str) -> String {
        extract_phone(text, country::Id::IN)
    }

    #[test]
    fn test_email_first_match() {
        let text = "Contact: jane.doe+cv@example.co.in or backup@example.com";
        assert_eq!(extract_email(text), "jane.doe+cv@example.co.in");
    }

    #[test]
    fn test_email_is_idempotent_and_na_without_at() {
        let text = "reach me at example dot com";
        assert_eq!(extract_email(text), "NA");
        let hit = "a@b.io here";
        assert_eq!(extract_email(hit), extract_email(hit));
    }

    #[test]
    fn test_phone_spaced_indian_mobile_to_e164() {
        assert_eq!(phone_of("Phone: +91 98765 43210"), "+919876543210");
    }

    #[test]
    fn test_phone_bare_ten_digits_prefixed() {
        assert_eq!(phone_of("Mobile - 9876543210"), "+919876543210");
    }

    #[test]
    fn test_phone_twelve_digits_with_country_code() {
        assert_eq!(phone_of("call 919876543210 now"), "+919876543210");
    }

    #[test]
    fn test_phone_na_when_no_long_digit_run() {
        assert_eq!(phone_of("pin 560 034, grad 2019"), "NA");
        assert_eq!(phone_of(""), "NA");
    }

    #[test]
    fn test_phone_first_valid_candidate_wins() {
        // An invalid run first, a valid mobile second
        let text = "fax 1111111111111111 cell +91 98765 43210";
        assert_eq!(phone_of(text), "+919876543210");
    }
}
