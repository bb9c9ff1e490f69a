//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure math from
//! component logic to improve reuse and testability.

pub mod carousel;
pub mod dark_mode;
pub mod slider_math;
