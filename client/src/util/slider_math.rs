//! Pointer-to-percentage math for the before/after comparison slider.

#[cfg(test)]
#[path = "slider_math_test.rs"]
mod slider_math_test;

pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 100.0;
pub const SLIDER_DEFAULT: f64 = 50.0;
pub const SLIDER_KEY_STEP: f64 = 5.0;

/// Clamp a reveal position into `[SLIDER_MIN, SLIDER_MAX]`.
///
/// Non-finite input falls back to `SLIDER_DEFAULT`.
pub fn clamp_position(position: f64) -> f64 {
    if !position.is_finite() {
        return SLIDER_DEFAULT;
    }
    position.clamp(SLIDER_MIN, SLIDER_MAX)
}

/// Convert a horizontal pointer coordinate into a reveal percentage for a
/// container spanning `rect_left..rect_left + rect_width`.
///
/// Pointers outside the box pin to the nearest edge. Returns `None` when the
/// box has no usable width or any input is not finite.
pub fn position_from_pointer(pointer_x: f64, rect_left: f64, rect_width: f64) -> Option<f64> {
    if !pointer_x.is_finite() || !rect_left.is_finite() || !rect_width.is_finite() || rect_width <= 0.0 {
        return None;
    }
    let x = (pointer_x - rect_left).clamp(0.0, rect_width);
    Some(clamp_position((x / rect_width) * SLIDER_MAX))
}

/// Inline style clipping the overlaid "after" image so only the part right
/// of the handle shows.
pub fn after_clip_style(position: f64) -> String {
    format!("clip-path: inset(0 0 0 {}%);", format_percent(clamp_position(position)))
}

/// Inline style placing the divider handle.
pub fn handle_left_style(position: f64) -> String {
    format!("left: {}%;", format_percent(clamp_position(position)))
}

fn format_percent(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < 0.005 {
        format!("{}", rounded as i64)
    } else {
        format!("{value:.2}")
    }
}
