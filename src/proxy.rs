//! Same-origin `/api` reverse proxy to the foodgram backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this server, so the backend needs no CORS
//! setup and the token header travels untouched. Method, path, query, body
//! and end-to-end headers are forwarded as-is; the upstream status and body
//! come back unchanged.
//!
//! ERROR HANDLING
//! ==============
//! Anything that stops a request from reaching the backend, or its answer from
//! being relayed, becomes a `502 Bad Gateway` with a short text body. Bodies
//! over [`MAX_BODY_BYTES`] are refused with `413 Payload Too Large`. Backend
//! redirects are relayed to the browser, never followed here.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use thiserror::Error;

/// Largest request body relayed upstream. Recipe images travel as base64
/// JSON, so this is generous.
pub const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

/// Headers scoped to a single connection, plus the ones the HTTP client
/// recomputes.
const NON_FORWARDABLE: &[&str] = &[
    "connection",
    "content-length",
    "host",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProxyError {
    #[error("request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },
    #[error("could not read request body: {0}")]
    Body(String),
    #[error("backend unreachable: {0}")]
    Upstream(String),
    #[error("invalid backend response: {0}")]
    Response(String),
}

impl ProxyError {
    /// HTTP status returned to the browser.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::PayloadTooLarge { .. } => 413,
            Self::Body(_) | Self::Upstream(_) | Self::Response(_) => 502,
        }
    }
}

/// Whether a declared `Content-Length` already rules the body out.
pub fn exceeds_body_limit(content_length: Option<u64>) -> bool {
    content_length.is_some_and(|len| len > MAX_BODY_BYTES as u64)
}

/// Join the backend origin with the incoming path and query.
pub fn upstream_url(base: &str, path_and_query: &str) -> String {
    let base = base.trim_end_matches('/');
    if path_and_query.starts_with('/') {
        format!("{base}{path_and_query}")
    } else {
        format!("{base}/{path_and_query}")
    }
}

/// Whether a header may be copied between the client and backend legs.
pub fn is_forwardable_header(name: &str) -> bool {
    !NON_FORWARDABLE.iter().any(|h| h.eq_ignore_ascii_case(name))
}

#[cfg(feature = "ssr")]
pub use handler::{ProxyState, forward};

#[cfg(feature = "ssr")]
mod handler {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::extract::{Request, State};
    use axum::http::{StatusCode, header};
    use axum::response::{IntoResponse, Response};
    use http_body_util::LengthLimitError;

    use super::{MAX_BODY_BYTES, ProxyError, exceeds_body_limit, is_forwardable_header, upstream_url};
    use crate::config::ServerConfig;

    impl IntoResponse for ProxyError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, self.to_string()).into_response()
        }
    }

    /// Shared by every proxied request.
    #[derive(Clone)]
    pub struct ProxyState {
        pub client: reqwest::Client,
        pub api_url: Arc<str>,
    }

    impl ProxyState {
        /// # Errors
        ///
        /// Returns [`ProxyError::Upstream`] if the HTTP client cannot be built.
        pub fn new(config: &ServerConfig) -> Result<Self, ProxyError> {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(config.proxy_timeout_secs))
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .map_err(|e| ProxyError::Upstream(e.to_string()))?;
            Ok(Self { client, api_url: Arc::from(config.api_url.as_str()) })
        }
    }

    /// `ANY /api/{*path}`: relay the request to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::PayloadTooLarge`] (413) for oversized bodies, and
    /// another [`ProxyError`] (502) when the body cannot be read, the backend
    /// cannot be reached, or its response cannot be relayed.
    pub async fn forward(State(state): State<ProxyState>, req: Request) -> Result<Response, ProxyError> {
        let (parts, body) = req.into_parts();
        let path_and_query = parts.uri.path_and_query().map_or("/", |pq| pq.as_str());
        let url = upstream_url(&state.api_url, path_and_query);

        let declared = parts
            .headers
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());
        if exceeds_body_limit(declared) {
            return Err(ProxyError::PayloadTooLarge { limit: MAX_BODY_BYTES });
        }

        let body = axum::body::to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
            let inner = e.into_inner();
            if inner.is::<LengthLimitError>() {
                ProxyError::PayloadTooLarge { limit: MAX_BODY_BYTES }
            } else {
                ProxyError::Body(inner.to_string())
            }
        })?;

        let mut upstream = state.client.request(parts.method.clone(), &url);
        for (name, value) in &parts.headers {
            if is_forwardable_header(name.as_str()) {
                upstream = upstream.header(name, value);
            }
        }

        let resp = upstream.body(body).send().await.map_err(|e| {
            tracing::warn!(method = %parts.method, %url, error = %e, "backend request failed");
            ProxyError::Upstream(e.to_string())
        })?;

        let status = resp.status();
        tracing::debug!(method = %parts.method, %url, %status, "proxied");

        let mut builder = Response::builder().status(status);
        for (name, value) in resp.headers() {
            if is_forwardable_header(name.as_str()) {
                builder = builder.header(name, value);
            }
        }
        let bytes = resp.bytes().await.map_err(|e| ProxyError::Upstream(e.to_string()))?;
        builder.body(Body::from(bytes)).map_err(|e| ProxyError::Response(e.to_string()))
    }
}
