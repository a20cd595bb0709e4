//! Throwaway address generation.

use uuid::Uuid;

const GENERATED_DOMAIN: &str = "example.com";

/// Produces a random, syntactically valid address.
///
/// The local part derives from a v4 uuid, so collisions are negligible for
/// fixture purposes.
pub fn generate_email() -> String {
    format!("user.{}@{GENERATED_DOMAIN}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::generate_email;
    use crate::email::is_valid_email;

    #[test]
    fn generated_address_always_validates() {
        for _ in 0..16 {
            let address = generate_email();
            assert!(is_valid_email(&address), "bad address: {address}");
        }
    }

    #[test]
    fn consecutive_addresses_differ() {
        assert_ne!(generate_email(), generate_email());
    }
}
