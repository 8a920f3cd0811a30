use crate::error::ModelError;
use bcrypt::{hash, verify, DEFAULT_COST};

pub fn hash_password(password: &str) -> Result<String, ModelError> {
    let hashed = hash(password, DEFAULT_COST)?;
    Ok(hashed)
}

/// A stored value that is not a bcrypt hash never verifies.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match verify(password, hash) {
        Ok(is_valid) => is_valid,
        Err(e) => {
            log::warn!("Stored password is not a valid bcrypt hash: {:?}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_are_salted_bcrypt() {
        let first = hash_password("password").unwrap();
        let second = hash_password("password").unwrap();

        assert!(first.starts_with("$2b$"));
        assert_ne!(first, "password");
        assert_ne!(first, second);
    }

    #[test]
    fn verifies_only_the_original_plaintext() {
        let hashed = hash_password("password").unwrap();

        assert!(verify_password("password", &hashed));
        assert!(!verify_password("Password", &hashed));
        assert!(!verify_password("", &hashed));
    }

    #[test]
    fn plaintext_in_storage_never_verifies() {
        assert!(!verify_password("HASHED_PASSWORD", "HASHED_PASSWORD"));
    }
}
