//! Donation amounts in Kenyan shillings.
//!
//! Amounts are whole shillings. Display uses comma thousands separators
//! (`1,000`), the same grouping the preset buttons are labelled with.

/// Currency code shown in every amount label.
pub const CURRENCY: &str = "KES";

/// Parse free text the way the custom amount field is read.
///
/// Leading whitespace is skipped, an optional sign is accepted, then the
/// leading run of ASCII digits is taken and everything after it ignored.
/// Text with no leading digits yields 0, as does any negative value.
///
/// ```
/// use raggaeirre_core::amount::parse_leading_int;
///
/// assert_eq!(parse_leading_int("2500"), 2500);
/// assert_eq!(parse_leading_int("  750 shillings"), 750);
/// assert_eq!(parse_leading_int("12.99"), 12);
/// assert_eq!(parse_leading_int("abc"), 0);
/// assert_eq!(parse_leading_int("-40"), 0);
/// ```
pub fn parse_leading_int(text: &str) -> u64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() || negative {
        return 0;
    }

    // Saturate rather than wrap on absurdly long input
    digits.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    })
}

/// Group digits in threes with commas: `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `KES 1,000`
pub fn format_kes(value: u64) -> String {
    format!("{} {}", CURRENCY, group_thousands(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(500), "500");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(10000), "10,000");
        assert_eq!(group_thousands(123456), "123,456");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn formats_with_currency() {
        assert_eq!(format_kes(2500), "KES 2,500");
    }

    #[test]
    fn parses_like_a_browser_int_field() {
        assert_eq!(parse_leading_int(""), 0);
        assert_eq!(parse_leading_int("   "), 0);
        assert_eq!(parse_leading_int("0"), 0);
        assert_eq!(parse_leading_int("+300"), 300);
        assert_eq!(parse_leading_int("1e3"), 1);
        assert_eq!(parse_leading_int("1,000"), 1);
        assert_eq!(parse_leading_int("99999999999999999999999"), u64::MAX);
    }
}
