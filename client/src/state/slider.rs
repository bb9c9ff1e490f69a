//! Comparison slider drag state.
//!
//! The position is a reveal percentage in `[0, 100]`. Every mutator clamps,
//! so no sequence of pointer or keyboard input can push it out of range.

#[cfg(test)]
#[path = "slider_test.rs"]
mod slider_test;

use crate::util::slider_math::{SLIDER_DEFAULT, SLIDER_KEY_STEP, SLIDER_MAX, SLIDER_MIN, clamp_position, position_from_pointer};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderState {
    pub position: f64,
    pub dragging: bool,
}

impl Default for SliderState {
    fn default() -> Self {
        Self { position: SLIDER_DEFAULT, dragging: false }
    }
}

/// Keyboard commands understood by the slider handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderKey {
    Left,
    Right,
    Home,
    End,
}

impl SliderKey {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "ArrowDown" => Some(Self::Left),
            "ArrowRight" | "ArrowUp" => Some(Self::Right),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }
}

impl SliderState {
    /// Start a drag and jump the handle to the pointer.
    pub fn begin_drag(&mut self, pointer_x: f64, rect_left: f64, rect_width: f64) {
        self.dragging = true;
        if let Some(p) = position_from_pointer(pointer_x, rect_left, rect_width) {
            self.position = p;
        }
    }

    /// Follow the pointer while a drag is live. Returns `true` if the
    /// position moved.
    pub fn drag_to(&mut self, pointer_x: f64, rect_left: f64, rect_width: f64) -> bool {
        if !self.dragging {
            return false;
        }
        match position_from_pointer(pointer_x, rect_left, rect_width) {
            Some(p) if p != self.position => {
                self.position = p;
                true
            }
            _ => false,
        }
    }

    /// Finish the drag. Returns `true` if one was in progress.
    pub fn end_drag(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }

    pub fn set_position(&mut self, position: f64) {
        self.position = clamp_position(position);
    }

    pub fn nudge(&mut self, delta: f64) {
        self.set_position(self.position + delta);
    }

    pub fn apply_key(&mut self, key: SliderKey) {
        match key {
            SliderKey::Left => self.nudge(-SLIDER_KEY_STEP),
            SliderKey::Right => self.nudge(SLIDER_KEY_STEP),
            SliderKey::Home => self.set_position(SLIDER_MIN),
            SliderKey::End => self.set_position(SLIDER_MAX),
        }
    }
}
