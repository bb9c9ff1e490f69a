//! Client-side view state.
//!
//! DESIGN
//! ======
//! Each interactive unit on the page owns a small plain-data model here.
//! Components wrap them in `RwSignal`s; transitions live on the models so they
//! can be unit tested without a browser.

pub mod contact;
pub mod pricing;
pub mod slider;
pub mod staging;
pub mod ui;
