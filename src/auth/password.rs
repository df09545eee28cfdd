use bcrypt::{hash, verify, DEFAULT_COST};

/// Cost factor applied to every newly generated hash. Stored hashes embed
/// their own cost and scheme identifier, so records created before a change
/// here keep verifying.
const HASH_COST: u32 = DEFAULT_COST;

/// Password hashing and verification manager
pub struct PasswordManager;

impl PasswordManager {
    /// Hash a plain text password
    ///
    /// The result is bcrypt's canonical string (scheme, cost, salt and
    /// digest in one value), ready to store. Password policy such as length
    /// or character classes is the registration layer's concern; any string
    /// is accepted here.
    ///
    /// # Example
    /// ```
    /// use swim_backend::auth::PasswordManager;
    ///
    /// let stored = PasswordManager::hash("s3cret").unwrap();
    /// assert!(PasswordManager::verify("s3cret", &stored).unwrap());
    /// ```
    pub fn hash(password: &str) -> Result<String, bcrypt::BcryptError> {
        hash(password, HASH_COST)
    }

    /// Verify a password against a stored hash
    pub fn verify(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
        verify(password, hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "TestPassword123";
        let hashed = PasswordManager::hash(password).unwrap();

        assert!(PasswordManager::verify(password, &hashed).unwrap());
        assert!(!PasswordManager::verify("WrongPassword", &hashed).unwrap());
    }

    #[test]
    fn test_salted_hashes_differ() {
        let password = "same password";
        let first = PasswordManager::hash(password).unwrap();
        let second = PasswordManager::hash(password).unwrap();

        assert_ne!(first, second);
        assert!(PasswordManager::verify(password, &first).unwrap());
        assert!(PasswordManager::verify(password, &second).unwrap());
    }

    #[test]
    fn test_short_and_empty_passwords_accepted() {
        let empty = PasswordManager::hash("").unwrap();
        assert!(PasswordManager::verify("", &empty).unwrap());

        let short = PasswordManager::hash("a").unwrap();
        assert!(PasswordManager::verify("a", &short).unwrap());
    }
}
