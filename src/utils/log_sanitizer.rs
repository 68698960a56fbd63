//! Log sanitization utilities for masking personal data.
//!
//! Names and emails are PII; log lines carry only a short prefix of them.

/// Keep the first three characters of `value` and mask the rest.
fn mask_prefix(value: &str) -> String {
    let visible: String = value.chars().take(3).collect();
    format!("{}***", visible)
}

/// Mask an email address for safe logging.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("alice@example.com"), "ali***@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => format!("{}{}", mask_prefix(&email[..at_pos]), &email[at_pos..]),
        None => mask_prefix(email),
    }
}

/// Mask a user's display name for safe logging.
pub fn mask_name(name: &str) -> String {
    mask_prefix(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email_normal() {
        assert_eq!(mask_email("alice@example.com"), "ali***@example.com");
    }

    #[test]
    fn test_mask_email_short_local_part() {
        assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
        assert_eq!(mask_email("@test.org"), "***@test.org");
    }

    #[test]
    fn test_mask_email_without_at_sign() {
        assert_eq!(mask_email("notanemail"), "not***");
    }

    #[test]
    fn test_mask_name_multibyte() {
        assert_eq!(mask_name("Zoë Ångström"), "Zoë***");
        assert_eq!(mask_name("Jo"), "Jo***");
    }
}
