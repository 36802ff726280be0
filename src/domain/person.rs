//! Domain types representing the people known to the dashboard.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A person record held by the identity store.
///
/// The `national_id` doubles as the login key. Uniqueness among people is
/// expected but not hard-enforced; authentication takes the first match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: Uuid,
    pub full_name: String,
    pub address: String,
    pub national_id: String,
    pub education: String,
    /// Date of birth as a 6-digit `DDMMYY` string.
    pub date_of_birth: String,
    pub phone: String,
    /// Credential secret, compared in plaintext via a
    /// [`crate::core::credentials::CredentialVerifier`].
    pub secret: String,
    pub role: Role,
}

impl Person {
    pub fn new(full_name: impl Into<String>, national_id: impl Into<String>, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name: full_name.into(),
            address: String::new(),
            national_id: national_id.into(),
            education: String::new(),
            date_of_birth: String::new(),
            phone: String::new(),
            secret: String::new(),
            role,
        }
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = secret.into();
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl Identifiable for Person {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Person {
    fn name(&self) -> &str {
        &self.full_name
    }
}

impl Displayable for Person {
    fn display_label(&self) -> String {
        format!("{} ({})", self.full_name, self.role)
    }
}

/// The two static roles known to the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Admin => "Admin",
            Role::User => "User",
        };
        f.write_str(label)
    }
}
