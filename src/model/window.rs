use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::profile::ProfileKind;
use super::units::LengthUnit;
use crate::estimate::validate::ValidationError;

/// Glazing variant of a window.
///
/// The tag set is closed: unknown strings are rejected at the parse boundary
/// instead of being silently priced as reflective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlassType {
    Clear,
    Reflective,
}

impl FromStr for GlassType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clear" => Ok(GlassType::Clear),
            "reflective" => Ok(GlassType::Reflective),
            other => Err(ValidationError::UnknownGlassType(other.to_string())),
        }
    }
}

/// One window specification within a project.
///
/// Profile references are positional indices into the project's catalogs of
/// the matching kind; `Project::delete_profile` keeps them aligned when a
/// catalog entry is removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub width: f64,
    pub height: f64,
    /// Unit of both `width` and `height`.
    pub unit: LengthUnit,
    /// Number of sliding tracks, expected 2, 3 or 4.
    pub tracks: u32,
    pub glass: GlassType,
    /// Index into the outer frame catalog.
    pub outer_profile: usize,
    /// Index into the inner frame catalog.
    pub inner_profile: usize,
    /// Index into the clamping lock catalog.
    pub clamp_profile: usize,
}

impl Window {
    /// Creates a window with the defaults a freshly added window gets:
    /// 4×4 feet, 2 tracks, clear glass, first profile of each catalog.
    pub fn new() -> Self {
        Self {
            width: 4.0,
            height: 4.0,
            unit: LengthUnit::Feet,
            tracks: 2,
            glass: GlassType::Clear,
            outer_profile: 0,
            inner_profile: 0,
            clamp_profile: 0,
        }
    }

    /// The profile reference for the given catalog kind.
    pub fn profile_ref(&self, kind: ProfileKind) -> usize {
        match kind {
            ProfileKind::Outer => self.outer_profile,
            ProfileKind::Inner => self.inner_profile,
            ProfileKind::Clamp => self.clamp_profile,
        }
    }

    pub fn profile_ref_mut(&mut self, kind: ProfileKind) -> &mut usize {
        match kind {
            ProfileKind::Outer => &mut self.outer_profile,
            ProfileKind::Inner => &mut self.inner_profile,
            ProfileKind::Clamp => &mut self.clamp_profile,
        }
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new()
    }
}
