pub mod appointment;
pub mod category;
pub mod common;
pub mod person;
pub mod transaction;

pub use appointment::Appointment;
pub use category::{CategoryBook, CategoryKind};
pub use common::{Displayable, Identifiable, NamedEntity};
pub use person::{Person, Role};
pub use transaction::{FinanceSummary, PaymentMethod, Transaction, TransactionKind};

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use serde;
pub use uuid;
