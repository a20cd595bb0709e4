//! Syntactic email validation.
//!
//! # Invariants
//! - Validation is purely lexical; no DNS or mailbox checks.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern must compile")
});

/// Returns whether `candidate` looks like a plausible mailbox address.
///
/// Accepts the common `local@domain.tld` shape with a 2+ letter TLD and
/// rejects anything missing a local part, the `@`, or a dotted domain.
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn accepts_plain_mailbox_address() {
        assert!(is_valid_email("usuario@dominio.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("correo-invalido"));
        assert!(!is_valid_email("@dominio.com"));
        assert!(!is_valid_email("usuario@dominio"));
        assert!(!is_valid_email("usuario@.com"));
        assert!(!is_valid_email(""));
    }
}
