//! Input validation rules for donor and volunteer forms.
//!
//! The rules are deliberately loose and match the site's published patterns:
//!
//! | Rule   | Pattern                          |
//! |--------|----------------------------------|
//! | email  | `^[^\s@]+@[^\s@]+\.[^\s@]+$`     |
//! | phone  | `^(\+254\|254\|0)?[17]\d{8}$`    |
//! | amount | `^\d+(\.\d{1,2})?$`              |
//!
//! [`check_phone`] drops whitespace before applying the phone pattern, so
//! `0712 345 678` and `+254 735 967 950` pass there. [`is_valid_phone`]
//! applies the pattern exactly.

use crate::error::ValidationError;

/// Prefixes accepted in front of a Kenyan subscriber number, longest first.
const PHONE_PREFIXES: [&str; 4] = ["+254", "254", "0", ""];

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() {
        return false;
    }

    // Some dot in the domain must have at least one character on each side
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Kenyan mobile number: optional `+254`/`254`/`0`, then `1` or `7`, then 8 digits.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PREFIXES.iter().any(|prefix| {
        phone
            .strip_prefix(prefix)
            .is_some_and(is_subscriber_number)
    })
}

fn is_subscriber_number(rest: &str) -> bool {
    let bytes = rest.as_bytes();
    bytes.len() == 9
        && matches!(bytes[0], b'1' | b'7')
        && bytes[1..].iter().all(u8::is_ascii_digit)
}

/// Positive decimal with at most two fractional digits, no sign.
pub fn is_valid_amount(amount: &str) -> bool {
    let (whole, fraction) = match amount.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (amount, None),
    };

    let whole_ok = !whole.is_empty() && whole.bytes().all(|b| b.is_ascii_digit());
    let fraction_ok = match fraction {
        None => true,
        Some(f) => (1..=2).contains(&f.len()) && f.bytes().all(|b| b.is_ascii_digit()),
    };

    whole_ok && fraction_ok
}

/// Reject blank (empty or whitespace-only) required fields.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Required field that must also be a valid email.
pub fn require_email(value: &str) -> Result<(), ValidationError> {
    require("email address", value)?;
    if is_valid_email(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Phone check; blank is accepted unless `required`.
pub fn check_phone(value: &str, required: bool) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return if required {
            Err(ValidationError::MissingField("phone number"))
        } else {
            Ok(())
        };
    }

    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if is_valid_phone(&compact) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}
