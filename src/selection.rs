//! Selection State
//!
//! The asset shown in the detail panel. Stored by id with the last snapshot
//! seen, and resolved against the current list on every render so a refresh
//! that drops the asset shows up as [`Resolved::Missing`] instead of stale
//! numbers.

use crate::market::AssetRecord;

/// Single selection slot. Starts empty and is never cleared once set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    selected: Option<AssetRecord>,
}

/// Selection looked up in the current list
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    /// Nothing selected yet
    Empty,
    /// The selected id is in the list; this is the fresh record
    Live(&'a AssetRecord),
    /// The selected id is gone from the list; this is the last snapshot seen
    Missing(&'a AssetRecord),
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the first asset if nothing is selected yet.
    ///
    /// Returns true when this call made the selection.
    pub fn sync_default(&mut self, assets: &[AssetRecord]) -> bool {
        if self.selected.is_some() {
            return false;
        }
        match assets.first() {
            Some(first) => {
                tracing::debug!("Defaulting selection to {}", first.id);
                self.selected = Some(first.clone());
                true
            }
            None => false,
        }
    }

    /// Overwrite the selection
    pub fn select(&mut self, record: &AssetRecord) {
        self.selected = Some(record.clone());
    }

    /// Select the entry at `index` (0-based). Out of range leaves the slot as is.
    pub fn select_index(&mut self, assets: &[AssetRecord], index: usize) -> bool {
        match assets.get(index) {
            Some(record) => {
                self.select(record);
                true
            }
            None => false,
        }
    }

    /// Select the first entry whose id or symbol matches `needle`
    pub fn select_matching(&mut self, assets: &[AssetRecord], needle: &str) -> bool {
        match assets.iter().find(|a| a.matches(needle)) {
            Some(record) => {
                self.select(record);
                true
            }
            None => false,
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|r| r.id.as_str())
    }

    pub fn is_selected(&self, record: &AssetRecord) -> bool {
        self.selected_id() == Some(record.id.as_str())
    }

    /// Look the selection up in `assets`, refreshing the snapshot when found
    pub fn refresh<'a>(&'a mut self, assets: &'a [AssetRecord]) -> Resolved<'a> {
        let Some(selected) = self.selected.as_mut() else {
            return Resolved::Empty;
        };
        match assets.iter().find(|a| a.id == selected.id) {
            Some(live) => {
                selected.clone_from(live);
                Resolved::Live(live)
            }
            None => Resolved::Missing(selected),
        }
    }

    /// Look the selection up in `assets` without touching the snapshot
    pub fn resolve<'a>(&'a self, assets: &'a [AssetRecord]) -> Resolved<'a> {
        let Some(selected) = self.selected.as_ref() else {
            return Resolved::Empty;
        };
        match assets.iter().find(|a| a.id == selected.id) {
            Some(live) => Resolved::Live(live),
            None => Resolved::Missing(selected),
        }
    }
}
