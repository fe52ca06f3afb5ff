//! Boundary validation for estimation inputs.
//!
//! The cost formulas themselves are unchecked arithmetic; everything that
//! could push NaN or Infinity through them is rejected here first.

use crate::model::profile::ProfileKind;
use crate::model::project::Project;
use crate::model::units::to_feet;

/// Rejected estimation input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Window {number}: dimensions must be positive, got {width} x {height}")]
    NonPositiveDimension {
        /// Display number of the window (position + 1).
        number: usize,
        width: f64,
        height: f64,
    },

    #[error("Window {number}: track count must be 2, 3 or 4, got {tracks}")]
    InvalidTrackCount { number: usize, tracks: u32 },

    #[error("Unknown glass type: {0:?} (expected \"clear\" or \"reflective\")")]
    UnknownGlassType(String),

    #[error("Rate {name:?} must be non-negative, got {value}")]
    NegativeRate { name: &'static str, value: f64 },

    #[error("The {0} profile catalog is empty; at least one entry is required")]
    EmptyCatalog(ProfileKind),
}

/// Checks a whole project before estimation: rates, catalogs, then each
/// window in display order. Returns the first violation found.
pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    for (name, value) in project.rates.fields() {
        if value < 0.0 {
            return Err(ValidationError::NegativeRate { name, value });
        }
    }

    for kind in ProfileKind::ALL {
        if project.catalog(kind).is_empty() {
            return Err(ValidationError::EmptyCatalog(kind));
        }
    }

    for (pos, (_, win)) in project.windows().enumerate() {
        let number = pos + 1;
        let width = to_feet(win.width, win.unit);
        let height = to_feet(win.height, win.unit);
        if !(width > 0.0) || !(height > 0.0) {
            return Err(ValidationError::NonPositiveDimension {
                number,
                width: win.width,
                height: win.height,
            });
        }
        if !(2..=4).contains(&win.tracks) {
            return Err(ValidationError::InvalidTrackCount {
                number,
                tracks: win.tracks,
            });
        }
    }

    Ok(())
}
