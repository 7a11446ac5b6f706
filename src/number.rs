use once_cell::sync::Lazy;
use regex::Regex;

/// Signed integer with optional comma grouping, e.g. `-1,234,567`.
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d[\d,]*").unwrap());

/// Parses a comma-grouped integer. Anything that is not a number after the
/// separators are stripped, including the empty string, yields 0.
pub fn parse_number(s: &str) -> i64 {
    let digits: String = s.chars().filter(|&c| c != ',').collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(0)
}

/// Whether a whitespace-separated token carries a number anywhere in it, so
/// `Knight2` counts as numeric just like `1,000`.
pub fn is_numeric_token(token: &str) -> bool {
    NUMBER.is_match(token)
}

/// First numeric run in `text`, if any.
pub fn find_number(text: &str) -> Option<&str> {
    NUMBER.find(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_thousands_separators() {
        assert_eq!(parse_number("1,000"), 1000);
        assert_eq!(parse_number("-12,345,678"), -12_345_678);
        assert_eq!(parse_number("42"), 42);
    }

    #[test]
    fn invalid_input_is_zero() {
        assert_eq!(parse_number(""), 0);
        assert_eq!(parse_number(","), 0);
        assert_eq!(parse_number("abc"), 0);
        assert_eq!(parse_number("800 Alice"), 0);
        assert_eq!(parse_number("99999999999999999999999"), 0);
    }

    #[test]
    fn any_digit_makes_a_token_numeric() {
        assert!(is_numeric_token("1,000"));
        assert!(is_numeric_token("-5"));
        assert!(is_numeric_token("Knight2"));
        assert!(is_numeric_token("(x3)"));
        assert!(!is_numeric_token("Knight"));
        assert!(!is_numeric_token("Loot:"));
        assert!(!is_numeric_token("-"));
    }

    #[test]
    fn finds_first_number_after_text() {
        assert_eq!(find_number(" 1,500 Supplies: 3"), Some("1,500"));
        assert_eq!(find_number(" -20"), Some("-20"));
        assert_eq!(find_number(" none"), None);
    }
}
