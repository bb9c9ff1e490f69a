//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section of the landing page is a component here. Sections own their
//! local state signals; only the theme flag arrives through context.

pub mod comparison_slider;
pub mod contact_section;
pub mod hero;
pub mod icons;
pub mod module_selector;
pub mod pricing_card;
pub mod pricing_section;
pub mod staging_section;
pub mod theme_toggle;
