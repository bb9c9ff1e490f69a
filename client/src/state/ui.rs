//! Page-wide presentation state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Theme flag shared through context by every section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}

impl UiState {
    /// Initial state seeded from the stored or system preference.
    #[must_use]
    pub fn from_preference() -> Self {
        Self { dark_mode: crate::util::dark_mode::read_preference() }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = crate::util::dark_mode::toggle(self.dark_mode);
    }
}
