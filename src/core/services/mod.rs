pub mod appointment_service;
pub mod category_service;
pub mod identity_service;
pub mod transaction_service;

pub use appointment_service::AppointmentService;
pub use category_service::CategoryService;
pub use identity_service::IdentityService;
pub use transaction_service::TransactionService;

pub use crate::errors::{CoreError, ServiceResult};
