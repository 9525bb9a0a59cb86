use bcrypt::{hash, verify, BcryptError};

pub fn hash_password(password: &str, cost: u32) -> Result<String, BcryptError> {
    hash(password.as_bytes(), cost)
}

/// A hash that cannot be parsed counts as a mismatch.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    verify(password.as_bytes(), password_hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hashed = hash_password("user1", 4).unwrap();

        assert_ne!(hashed, "user1");
        assert!(verify_password("user1", &hashed));
        assert!(!verify_password("user2", &hashed));
    }

    #[test]
    fn test_garbage_hash_does_not_verify() {
        assert!(!verify_password("user1", "not-a-bcrypt-hash"));
    }
}
