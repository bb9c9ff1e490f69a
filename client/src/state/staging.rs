//! Active staging module selection.

#[cfg(test)]
#[path = "staging_test.rs"]
mod staging_test;

use crate::content::staging::{ModuleId, StagingModule, module};

/// Which before/after pair the showcase is displaying.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StagingState {
    pub active: ModuleId,
}

impl StagingState {
    /// Make `id` the active module. Returns `true` if the selection changed.
    pub fn select(&mut self, id: ModuleId) -> bool {
        if self.active == id {
            return false;
        }
        self.active = id;
        true
    }

    #[must_use]
    pub fn active_module(&self) -> &'static StagingModule {
        module(self.active)
    }

    #[must_use]
    pub fn is_active(&self, id: ModuleId) -> bool {
        self.active == id
    }
}
