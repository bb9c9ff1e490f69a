//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! site is static, so the only runtime fact worth sharing is the startup
//! asset audit.

use std::sync::Arc;

use crate::assets::AssetReport;

#[derive(Clone, Default)]
pub struct AppState {
    pub assets: Arc<AssetReport>,
}

impl AppState {
    #[must_use]
    pub fn new(assets: AssetReport) -> Self {
        Self { assets: Arc::new(assets) }
    }
}
