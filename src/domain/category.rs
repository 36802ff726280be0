//! The configurable taxonomy of transaction classification labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Selects one of the two category lists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategoryKind {
    Expense,
    Revenue,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CategoryKind::Expense => "Expense",
            CategoryKind::Revenue => "Revenue",
        };
        f.write_str(label)
    }
}

/// Two named lists of unique labels, one per [`CategoryKind`], each kept
/// lexicographically sorted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryBook {
    pub expenses: Vec<String>,
    pub revenues: Vec<String>,
}

impl CategoryBook {
    /// An empty book with no labels in either list.
    pub fn empty() -> Self {
        Self {
            expenses: Vec::new(),
            revenues: Vec::new(),
        }
    }

    /// The stock labels new workspaces start with.
    pub fn with_defaults() -> Self {
        let mut book = Self {
            expenses: ["Salaries", "Rent", "Supplies", "Marketing"]
                .map(String::from)
                .to_vec(),
            revenues: ["Service Rendered", "Product Sale", "Consulting"]
                .map(String::from)
                .to_vec(),
        };
        book.expenses.sort();
        book.revenues.sort();
        book
    }

    pub fn list(&self, kind: CategoryKind) -> &[String] {
        match kind {
            CategoryKind::Expense => &self.expenses,
            CategoryKind::Revenue => &self.revenues,
        }
    }

    pub(crate) fn list_mut(&mut self, kind: CategoryKind) -> &mut Vec<String> {
        match kind {
            CategoryKind::Expense => &mut self.expenses,
            CategoryKind::Revenue => &mut self.revenues,
        }
    }
}

impl Default for CategoryBook {
    fn default() -> Self {
        Self::with_defaults()
    }
}
