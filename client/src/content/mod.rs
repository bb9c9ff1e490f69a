//! Static page content: staging modules, pricing tiers, and the asset list
//! they imply.
//!
//! DESIGN
//! ======
//! Everything here is a compile-time literal. UI state only ever points into
//! these tables, so selection and rendering never clone or mutate content.

pub mod assets;
pub mod pricing;
pub mod staging;
