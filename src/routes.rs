//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the health endpoint, Leptos SSR rendering, the hydrate bundle
//! under `/pkg`, and showcase images under `/images` into a single Axum
//! router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    assets_checked: usize,
    assets_missing: Vec<String>,
}

/// Operational endpoints.
pub fn api_routes(state: AppState) -> Router {
    Router::new().route("/healthz", get(healthz)).with_state(state)
}

/// Static files: the hydrate bundle and the showcase images.
pub fn static_routes(site_root: &Path, asset_dir: &Path) -> Router {
    Router::new()
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .nest_service("/images", ServeDir::new(asset_dir.join("images")))
}

/// Full site: API + static files + Leptos SSR at `/`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn site_app(state: AppState, asset_dir: &Path) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(static_routes(&site_root, asset_dir))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz(State(state): State<AppState>) -> impl IntoResponse {
    let assets = &state.assets;
    let status = if assets.is_complete() { "ok" } else { "degraded" };
    let body = Health { status, assets_checked: assets.checked, assets_missing: assets.missing.clone() };
    (StatusCode::OK, Json(body))
}
