//! Shared library for `InternHub`
//! Contains the domain core used by the CLI: models, fixture store,
//! session state, catalog filtering, progress aggregation, routing, and
//! view rendering.

pub mod core;
pub mod logger;

pub use crate::core::{catalog, config, models, progress, router, session, store, views};
