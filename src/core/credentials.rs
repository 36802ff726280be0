//! Credential verification seam for the identity store.

use crate::domain::person::Person;

/// Trait that abstracts how a presented secret is checked against the
/// stored one, so a hashing scheme can replace the plaintext comparison
/// without touching the identity store's CRUD contract.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, person: &Person, presented: &str) -> bool;
}

/// Byte-for-byte comparison against the stored secret.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextVerifier;

impl CredentialVerifier for PlaintextVerifier {
    fn verify(&self, person: &Person, presented: &str) -> bool {
        person.secret == presented
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::person::Role;

    #[test]
    fn plaintext_verifier_requires_exact_match() {
        let person = Person::new("Sample", "12345678900", Role::User).with_secret("s3cret");
        let verifier = PlaintextVerifier;
        assert!(verifier.verify(&person, "s3cret"));
        assert!(!verifier.verify(&person, "S3CRET"));
        assert!(!verifier.verify(&person, ""));
    }
}
