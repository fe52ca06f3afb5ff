//! The cost-aggregation engine.
//!
//! Pure functions over the model: [`cost::estimate_window`] prices a single
//! window, [`project::estimate_project`] validates the project at the
//! boundary and reduces over all windows. Nothing here caches or mutates;
//! every call recomputes from current state.

pub mod cost;
pub mod project;
pub mod validate;
