//! The aggregate in-memory store behind the dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    appointment::Appointment,
    category::CategoryBook,
    person::{Person, Role},
    transaction::Transaction,
};

/// Holds the four entity collections for one dashboard session.
///
/// All mutation goes through whole-record replacement keyed by identifier;
/// the services in [`crate::core::services`] enforce the cross-collection
/// rules. Readers always observe either the pre- or post-operation state of
/// a collection, never a partial edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    pub name: String,
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub categories: CategoryBook,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workspace {
    /// Creates a workspace with the stock category labels and no people.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            people: Vec::new(),
            appointments: Vec::new(),
            transactions: Vec::new(),
            categories: CategoryBook::with_defaults(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a workspace seeded with the bootstrap administrator
    /// (`admin` / `admin`), matching a freshly installed dashboard.
    pub fn with_bootstrap_admin(name: impl Into<String>) -> Self {
        let mut workspace = Self::new(name);
        let mut admin = Person::new("Admin User", "admin", Role::Admin).with_secret("admin");
        admin.address = "123 Admin St".into();
        admin.date_of_birth = "010190".into();
        admin.education = "System Administration".into();
        admin.phone = "555-0100".into();
        workspace.people.push(admin);
        workspace
    }

    pub fn person(&self, id: Uuid) -> Option<&Person> {
        self.people.iter().find(|person| person.id == id)
    }

    pub fn appointment(&self, id: Uuid) -> Option<&Appointment> {
        self.appointments.iter().find(|apt| apt.id == id)
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
