//! Startup audit of the static images the page references.
//!
//! Missing files do not stop the server; they are logged and surfaced on
//! `/healthz` so a bad deploy is visible without breaking the page.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetReport {
    pub checked: usize,
    /// URL paths (as referenced by the page) with no file behind them.
    pub missing: Vec<String>,
}

impl AssetReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn log(&self) {
        for path in &self.missing {
            tracing::warn!(%path, "required asset missing");
        }
        if self.is_complete() {
            tracing::info!(checked = self.checked, "all required assets present");
        } else {
            tracing::warn!(checked = self.checked, missing = self.missing.len(), "asset audit incomplete");
        }
    }
}

/// Map a site URL path like `/images/a.png` onto `asset_dir`.
///
/// Returns `None` for paths that try to climb out of the directory.
#[must_use]
pub fn resolve(asset_dir: &Path, url_path: &str) -> Option<PathBuf> {
    let relative = url_path.trim_start_matches('/');
    if relative.is_empty() || relative.split('/').any(|seg| seg == ".." || seg.is_empty()) {
        return None;
    }
    Some(asset_dir.join(relative))
}

/// Check every entry of `required` for a regular file under `asset_dir`.
#[must_use]
pub fn audit(asset_dir: &Path, required: &[&str]) -> AssetReport {
    let missing = required
        .iter()
        .filter(|url| !resolve(asset_dir, url).is_some_and(|p| p.is_file()))
        .map(|url| (*url).to_owned())
        .collect();
    AssetReport { checked: required.len(), missing }
}
