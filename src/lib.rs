#![doc(test(attr(deny(warnings))))]

//! Wealthify Core offers the record model, aggregation engine, and session
//! actions behind the Wealthify personal-finance dashboard.

pub mod aggregate;
pub mod errors;
pub mod prefs;
pub mod records;
pub mod session;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT: Once = Once::new();

/// One-time process setup: installs the tracing subscriber and logs the
/// crate version for diagnostics. Safe to call from every entry point.
pub fn init() {
    INIT.call_once(|| {
        utils::init_tracing();
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "wealthify core ready");
    });
}
