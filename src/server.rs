//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the server-rendered Leptos app, its static bundle
//! under `/pkg`, and the `/api` proxy that forwards browser calls to the
//! foodgram backend.

#[cfg(test)]
#[path = "server_test.rs"]
mod server_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use thiserror::Error;
use tower_http::trace::TraceLayer;

use crate::app::{App, shell};
use crate::config::ServerConfig;
use crate::proxy::{self, ProxyError, ProxyState};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("leptos configuration: {0}")]
    Config(String),
    #[error("proxy client: {0}")]
    Proxy(#[from] ProxyError),
}

fn api_routes(state: ProxyState) -> Router {
    Router::new()
        .route("/api/{*path}", any(proxy::forward))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application router: API proxy + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns [`ServerError::Config`] if the Leptos configuration cannot be
/// loaded (missing or malformed `[package.metadata.leptos]` section), or
/// [`ServerError::Proxy`] if the proxy HTTP client cannot be built.
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let proxy_state = ProxyState::new(config)?;

    Ok(api_routes(proxy_state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
