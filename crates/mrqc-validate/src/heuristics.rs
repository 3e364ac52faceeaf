//! Value heuristics
//!
//! Pattern detectors for malformed or non-informative values, plus the
//! numeric parsing primitive shared by every rule that reads an amount.
//! All lengths are counted in characters.

use mrqc_domain::constants::{BLANK_PLACEHOLDERS, DEFAULT_TEXT_PLACEHOLDERS};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// 18-character resident ID: 17 digits and a digit or `X` check character
static ID_NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)[0-9]{17}[0-9X]$").expect("valid ID number pattern")
});

/// Mobile number, or landline with an optional area code
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((1[3-9][0-9]{9})|((0[0-9]{2,3}-?)?[0-9]{7,8}))$")
        .expect("valid phone pattern")
});

static ZIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("valid zip pattern"));

/// Parse a numeric field value
///
/// Returns `None` for blank placeholders and anything that is not a number;
/// callers treat `None` as "rule not applicable".
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if BLANK_PLACEHOLDERS.contains(&trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parse a money amount, tolerating thousands separators
pub fn parse_amount(text: &str) -> Option<f64> {
    parse_number(&text.replace(',', ""))
}

/// Render an amount the way the form shows decimals (`500.0`, `12.5`)
pub fn format_amount(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Whether the digits of `text` contain a trivially generated run
///
/// Every `window`-long run of the digits-only string is tested for being
/// all the same digit, strictly ascending by one or strictly descending by
/// one. Strings with fewer digits than `window` never match.
///
/// # Example
///
/// ```
/// use mrqc_validate::heuristics::is_simple_sequence;
///
/// assert!(is_simple_sequence("021-123456", 6));
/// assert!(!is_simple_sequence("13912345", 7));
/// ```
pub fn is_simple_sequence(text: &str, window: usize) -> bool {
    let digits: Vec<u32> = text.chars().filter_map(|c| c.to_digit(10)).collect();
    if window == 0 || digits.len() < window {
        return false;
    }

    digits.windows(window).any(|run| {
        let steps = || run.windows(2).map(|pair| (pair[0], pair[1]));
        steps().all(|(a, b)| a == b)
            || steps().all(|(a, b)| b == a + 1)
            || steps().all(|(a, b)| a == b + 1)
    })
}

/// Whether a free-text value looks like filler rather than real data
///
/// True when the text is one of `placeholders`, shorter than `min_len`, or
/// longer than three characters while using at most two distinct ones.
/// An empty placeholder list means [`DEFAULT_TEXT_PLACEHOLDERS`].
/// Empty text is never strange; emptiness is the presence rules' concern.
pub fn is_strange_text(text: &str, min_len: usize, placeholders: &[&str]) -> bool {
    if text.is_empty() {
        return false;
    }
    let placeholders = if placeholders.is_empty() {
        DEFAULT_TEXT_PLACEHOLDERS
    } else {
        placeholders
    };
    if placeholders.contains(&text) {
        return true;
    }

    let length = text.chars().count();
    if length < min_len {
        return true;
    }
    let distinct: HashSet<char> = text.chars().collect();
    distinct.len() <= 2 && length > 3
}

/// Whether a zip code is malformed or a simple sequence
pub fn is_strange_zip(zip: &str, window: usize) -> bool {
    if zip.is_empty() {
        return false;
    }
    !ZIP_PATTERN.is_match(zip) || is_simple_sequence(zip, window)
}

/// Whether an ID number has the 18-character resident format
pub fn is_valid_id_number(id: &str) -> bool {
    ID_NUMBER_PATTERN.is_match(id)
}

/// Whether a phone number matches the mobile or landline format
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}
