//! One-time centering of the highlighted pricing card on narrow screens.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use crate::util::carousel::is_carousel_viewport;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PricingRevealState {
    pub has_animated: bool,
}

impl PricingRevealState {
    /// Decide whether an intersection event should trigger the centering
    /// scroll. Fires at most once per page view, and only in carousel mode.
    pub fn should_center(&mut self, is_intersecting: bool, viewport_width: f64) -> bool {
        if !is_intersecting || self.has_animated || !is_carousel_viewport(viewport_width) {
            return false;
        }
        self.has_animated = true;
        true
    }
}
