//! Domain types representing financial transactions.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// Display label used when a transaction's person no longer exists.
pub const UNKNOWN_PERSON_LABEL: &str = "N/A";

/// A financial entry linked to a person and, optionally, a category label.
///
/// `person_name` is denormalized and recomputed from the identity store on
/// every save, unlike [`crate::domain::Appointment::owner_name`] which is a
/// one-time snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub description: String,
    /// Monetary value, strictly positive.
    pub value: f64,
    pub transaction_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<String>,
    /// Label from the category book matching `kind`, or `None`. The stored
    /// value is not re-validated against the book at save time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub payment_method: PaymentMethod,
    pub notes: String,
    pub person_id: Uuid,
    pub person_name: String,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        description: impl Into<String>,
        value: f64,
        transaction_date: impl Into<String>,
        person_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            description: description.into(),
            value,
            transaction_date: transaction_date.into(),
            payment_date: None,
            category: None,
            payment_method: PaymentMethod::InstantTransfer,
            notes: String::new(),
            person_id,
            person_name: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} ({}: {:.2})", self.description, self.kind, self.value)
    }
}

/// Classifies a transaction as money in or money out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Revenue,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Revenue => "Revenue",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// Supported payment methods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Cash,
    InstantTransfer,
    WireTransfer,
}

/// Totals over the live transaction ledger, recomputed on every call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinanceSummary {
    pub total_revenue: f64,
    pub total_expense: f64,
    pub balance: f64,
}
