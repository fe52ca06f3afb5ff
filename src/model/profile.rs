use std::fmt;

use serde::{Deserialize, Serialize};

/// The three kinds of aluminium section a window is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// The fixed outer frame running around the full perimeter.
    Outer,
    /// The sliding inner frames, three lengths per track.
    Inner,
    /// The clamping lock sections on the meeting stiles.
    Clamp,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 3] = [ProfileKind::Outer, ProfileKind::Inner, ProfileKind::Clamp];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileKind::Outer => "Outer Frame",
            ProfileKind::Inner => "Inner Frame",
            ProfileKind::Clamp => "Clamping Lock",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single aluminium section variant in a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display label, conventionally the gauge ("1.1mm").
    pub label: String,
    /// Section thickness in mm (informational, not used in cost math).
    pub thickness_mm: f64,
    /// Section weight per unit length in kg/ft.
    pub weight_per_ft: f64,
    /// Aluminium rate in ₹/kg for this section.
    pub rate_per_kg: f64,
}

impl Profile {
    pub fn new(label: &str, thickness_mm: f64, weight_per_ft: f64, rate_per_kg: f64) -> Self {
        Self {
            label: label.to_string(),
            thickness_mm,
            weight_per_ft,
            rate_per_kg,
        }
    }

    /// An empty entry, appended by the "add profile" operation and filled in
    /// field by field afterwards.
    pub fn blank() -> Self {
        Self {
            label: String::new(),
            thickness_mm: 0.0,
            weight_per_ft: 0.0,
            rate_per_kg: 0.0,
        }
    }
}

/// Ordered catalog of profiles for one [`ProfileKind`].
///
/// Windows reference entries by positional index. [`ProfileCatalog::resolve`]
/// implements the documented fallback: a stale index resolves to entry 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileCatalog {
    entries: Vec<Profile>,
}

impl ProfileCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates the default catalog for the given kind, with the standard
    /// 1.1 mm and 1.2 mm sections.
    pub fn with_presets(kind: ProfileKind) -> Self {
        let entries = match kind {
            ProfileKind::Outer => vec![
                Profile::new("1.1mm", 1.1, 0.206, 325.0),
                Profile::new("1.2mm", 1.2, 0.228, 335.0),
            ],
            ProfileKind::Inner => vec![
                Profile::new("1.1mm", 1.1, 0.187, 325.0),
                Profile::new("1.2mm", 1.2, 0.208, 335.0),
            ],
            ProfileKind::Clamp => vec![
                Profile::new("1.1mm", 1.1, 0.17, 320.0),
                Profile::new("1.2mm", 1.2, 0.184, 330.0),
            ],
        };
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a blank entry and returns its index.
    pub fn add_blank(&mut self) -> usize {
        self.entries.push(Profile::blank());
        self.entries.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Profile> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Profile> {
        self.entries.get_mut(index)
    }

    /// Removes the entry at `index`. Callers that hold window references into
    /// this catalog must re-point them; `Project::delete_profile` does.
    pub fn remove(&mut self, index: usize) -> Profile {
        self.entries.remove(index)
    }

    /// Resolves a window's profile reference.
    ///
    /// A stale index (e.g. hand-built state referencing a deleted entry)
    /// falls back to entry 0. `None` only for an empty catalog, which
    /// estimation reports as a validation error.
    pub fn resolve(&self, index: usize) -> Option<&Profile> {
        self.entries.get(index).or_else(|| self.entries.first())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.entries.iter()
    }
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        Self::new()
    }
}
