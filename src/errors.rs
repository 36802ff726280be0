use std::fmt;

use thiserror::Error;

/// Error type that captures the recoverable failures of the state core.
///
/// Removing or replacing a record under a missing identifier is not an
/// error: the ledgers tolerate those as no-op filters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Required fields missing or invalid: {}", FieldList(.fields))]
    Validation { fields: Vec<String> },
    #[error("Category `{0}` already exists")]
    DuplicateCategory(String),
    #[error("Category `{0}` is used by one or more transactions")]
    CategoryInUse(String),
    #[error("Access to {0} requires the Admin role")]
    Forbidden(String),
    #[error("No active session")]
    NotLoggedIn,
}

impl CoreError {
    /// Builds a [`CoreError::Validation`] from offending field names.
    pub fn validation<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CoreError::Validation {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

struct FieldList<'a>(&'a [String]);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, field) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(field)?;
        }
        Ok(())
    }
}

pub type ServiceResult<T> = Result<T, CoreError>;
