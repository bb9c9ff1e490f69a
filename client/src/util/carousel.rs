//! Horizontal card carousel helpers used by the pricing grid on narrow
//! viewports.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// At or above this width the pricing cards sit in a static grid.
pub const DESKTOP_BREAKPOINT_PX: f64 = 1024.0;

/// Intersection ratio at which the grid counts as "in view".
pub const REVEAL_THRESHOLD: f64 = 0.3;

/// Pause between the grid coming into view and the centering scroll.
pub const CENTER_DELAY_MS: u64 = 500;

pub fn is_carousel_viewport(viewport_width: f64) -> bool {
    viewport_width.is_finite() && viewport_width < DESKTOP_BREAKPOINT_PX
}

/// Scroll offset that puts the card's midpoint at the container's midpoint.
/// Never negative.
pub fn center_scroll_left(card_offset_left: f64, card_width: f64, container_width: f64) -> f64 {
    let left = card_offset_left - (container_width / 2.0) + (card_width / 2.0);
    if left.is_finite() { left.max(0.0) } else { 0.0 }
}
