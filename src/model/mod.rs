//! Session-scoped model: rates, profile catalogs and the window collection.
//!
//! Model hierarchy: Project → (RateTable, ProfileCatalog × 3, Window list).
//! All of it is plain mutable data; cost results are never stored here but
//! recomputed by the [`crate::estimate`] module on every call.

pub mod profile;
pub mod project;
pub mod rates;
pub mod units;
pub mod window;
