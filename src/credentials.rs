use bcrypt::{hash, verify, BcryptError};

/// bcrypt with a configurable work factor.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, password: &str) -> Result<String, BcryptError> {
        hash(password, self.cost)
    }

    /// A digest that cannot be parsed counts as a mismatch.
    pub fn verify(&self, digest: &str, password: &str) -> bool {
        verify(password, digest).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hasher = PasswordHasher::new(4);
        let digest = hasher.hash("securepassword").unwrap();
        assert_ne!(digest, "securepassword");
        assert!(hasher.verify(&digest, "securepassword"));
        assert!(!hasher.verify(&digest, "wrongpassword"));
    }

    #[test]
    fn garbage_digest_does_not_verify() {
        assert!(!PasswordHasher::new(4).verify("not-a-bcrypt-hash", "anything"));
    }
}
