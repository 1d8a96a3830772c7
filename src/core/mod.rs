//! Core module: domain models, fixture store, session, derivations, and views

pub mod catalog;
pub mod config;
pub mod models;
pub mod progress;
pub mod router;
pub mod session;
pub mod store;
pub mod views;

/// Returns the current version of the `InternHub` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
