#![doc(test(attr(deny(warnings))))]

//! Dashboard Core holds the relational state behind an administrative
//! dashboard: people, scheduled appointments, financial transactions, and a
//! configurable taxonomy of transaction categories, all kept in process
//! memory for the duration of a session.

pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;
pub mod workspace;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Dashboard Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
