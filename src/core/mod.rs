pub mod credentials;
pub mod services;
pub mod session;
