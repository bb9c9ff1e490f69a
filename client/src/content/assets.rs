//! Static image assets the page expects the server to provide.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use super::staging::MODULES;

/// URL prefix every showcase image lives under.
pub const IMAGE_PREFIX: &str = "/images/";

/// Every image path referenced by the staging showcase, deduplicated, in
/// declaration order (before image first).
#[must_use]
pub fn required_asset_paths() -> Vec<&'static str> {
    let mut paths: Vec<&'static str> = Vec::with_capacity(MODULES.len() * 2);
    for m in &MODULES {
        for path in [m.image_before, m.image_after] {
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }
    paths
}
