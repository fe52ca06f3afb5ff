//! Project container: the session-scoped state fed into the estimation engine.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use super::profile::{Profile, ProfileCatalog, ProfileKind};
use super::rates::RateTable;
use super::window::Window;
use crate::uid::WindowId;

/// Everything one estimation session owns: the rate table, the three profile
/// catalogs and the window collection in insertion order.
///
/// The engine never mutates a project; all mutation goes through the methods
/// here so the profile re-pointing invariant cannot be bypassed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub rates: RateTable,
    outer_profiles: ProfileCatalog,
    inner_profiles: ProfileCatalog,
    clamp_profiles: ProfileCatalog,
    windows: Vec<(WindowId, Window)>,
}

impl Project {
    /// Creates a project with default rates, preset catalogs and no windows.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rates: RateTable::new(),
            outer_profiles: ProfileCatalog::with_presets(ProfileKind::Outer),
            inner_profiles: ProfileCatalog::with_presets(ProfileKind::Inner),
            clamp_profiles: ProfileCatalog::with_presets(ProfileKind::Clamp),
            windows: Vec::new(),
        }
    }

    // --- Windows ---

    /// Appends a window with defaults and returns its id.
    pub fn add_window(&mut self) -> WindowId {
        let id = WindowId::new();
        self.windows.push((id.clone(), Window::new()));
        id
    }

    /// Removes a window by id.
    pub fn remove_window(&mut self, id: &WindowId) -> Result<Window> {
        let pos = self
            .windows
            .iter()
            .position(|(wid, _)| wid == id)
            .ok_or_else(|| anyhow!("Unknown window id: {}", id))?;
        Ok(self.windows.remove(pos).1)
    }

    pub fn window(&self, id: &WindowId) -> Result<&Window> {
        self.windows
            .iter()
            .find(|(wid, _)| wid == id)
            .map(|(_, w)| w)
            .ok_or_else(|| anyhow!("Unknown window id: {}", id))
    }

    pub fn window_mut(&mut self, id: &WindowId) -> Result<&mut Window> {
        self.windows
            .iter_mut()
            .find(|(wid, _)| wid == id)
            .map(|(_, w)| w)
            .ok_or_else(|| anyhow!("Unknown window id: {}", id))
    }

    /// Windows in insertion order. Display number = position + 1.
    pub fn windows(&self) -> impl Iterator<Item = (&WindowId, &Window)> {
        self.windows.iter().map(|(id, w)| (id, w))
    }

    pub fn num_windows(&self) -> usize {
        self.windows.len()
    }

    // --- Profile catalogs ---

    pub fn catalog(&self, kind: ProfileKind) -> &ProfileCatalog {
        match kind {
            ProfileKind::Outer => &self.outer_profiles,
            ProfileKind::Inner => &self.inner_profiles,
            ProfileKind::Clamp => &self.clamp_profiles,
        }
    }

    fn catalog_mut(&mut self, kind: ProfileKind) -> &mut ProfileCatalog {
        match kind {
            ProfileKind::Outer => &mut self.outer_profiles,
            ProfileKind::Inner => &mut self.inner_profiles,
            ProfileKind::Clamp => &mut self.clamp_profiles,
        }
    }

    /// Appends a blank profile to the given catalog and returns its index.
    pub fn add_profile(&mut self, kind: ProfileKind) -> usize {
        self.catalog_mut(kind).add_blank()
    }

    /// Mutable access to one catalog entry for field-by-field edits.
    pub fn profile_mut(&mut self, kind: ProfileKind, index: usize) -> Result<&mut Profile> {
        let len = self.catalog(kind).len();
        self.catalog_mut(kind)
            .get_mut(index)
            .ok_or_else(|| anyhow!("No {} profile at index {} (catalog has {})", kind, index, len))
    }

    /// Deletes a catalog entry and re-points every window reference of that
    /// kind: a reference equal to the deleted index resets to 0, a greater
    /// one shifts down by one, a smaller one is untouched. The other two
    /// kinds are never affected.
    pub fn delete_profile(&mut self, kind: ProfileKind, index: usize) -> Result<Profile> {
        if index >= self.catalog(kind).len() {
            return Err(anyhow!(
                "No {} profile at index {} (catalog has {})",
                kind,
                index,
                self.catalog(kind).len()
            ));
        }
        let removed = self.catalog_mut(kind).remove(index);
        for (_, win) in self.windows.iter_mut() {
            let r = win.profile_ref_mut(kind);
            if *r == index {
                *r = 0;
            } else if *r > index {
                *r -= 1;
            }
        }
        Ok(removed)
    }
}
