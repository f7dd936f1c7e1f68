//! REST API helpers for communicating with the foodgram backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against same-origin
//! `/api` paths, which the server proxies to the backend.
//! Server-side (SSR): stubs returning `None`/[`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call that can fail returns [`ApiError`]. Non-2xx responses carry the
//! backend's validation body flattened into one readable line so pages can
//! show it as-is.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Paginated, RecipeFilter, RecipeSummary, SetPasswordRequest, SignInRequest, SignUpRequest, User};

/// File name used when the download response does not name the file.
pub const DEFAULT_SHOPPING_LIST_FILENAME: &str = "list_shopping_of_recipes.pdf";

/// Errors surfaced by API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("{}", status_message(*status, detail))]
    Status { status: u16, detail: String },
    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// A browser API needed to finish the action failed.
    #[error("browser error: {0}")]
    Browser(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

fn status_message(status: u16, detail: &str) -> String {
    if detail.is_empty() { format!("request failed: {status}") } else { detail.to_owned() }
}

#[cfg(any(test, feature = "hydrate"))]
fn recipes_endpoint(filter: &RecipeFilter) -> String {
    format!("/api/recipes/?{}", filter.to_query())
}

#[cfg(any(test, feature = "hydrate"))]
fn shopping_cart_endpoint(recipe_id: i64) -> String {
    format!("/api/recipes/{recipe_id}/shopping_cart/")
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_header(token: &str) -> String {
    format!("Token {token}")
}

/// Flatten a DRF error body into one line.
///
/// Handles `{"detail": "..."}`, `{"field": ["msg", ...]}` and
/// `{"non_field_errors": [...]}`; anything else yields an empty string.
#[cfg(any(test, feature = "hydrate"))]
fn describe_error_body(body: &serde_json::Value) -> String {
    use serde_json::Value;

    fn messages(value: &Value) -> Vec<String> {
        match value {
            Value::String(s) => vec![s.clone()],
            Value::Array(items) => items.iter().flat_map(messages).collect(),
            _ => Vec::new(),
        }
    }

    let Value::Object(map) = body else {
        return messages(body).join(" ");
    };
    map.iter()
        .filter_map(|(key, value)| {
            let text = messages(value).join(" ");
            if text.is_empty() {
                None
            } else if matches!(key.as_str(), "detail" | "non_field_errors" | "errors") {
                Some(text)
            } else {
                Some(format!("{key}: {text}"))
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// File name from a `Content-Disposition` header, or the default.
#[cfg(any(test, feature = "hydrate"))]
fn attachment_filename(header: Option<&str>) -> String {
    header
        .and_then(|h| {
            h.split(';')
                .map(str::trim)
                .find_map(|part| part.strip_prefix("filename="))
        })
        .map(|name| name.trim_matches('"').trim().to_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_SHOPPING_LIST_FILENAME.to_owned())
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::{ApiError, auth_header, describe_error_body};

    pub fn authorized(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.header("Authorization", &auth_header(token)),
            None => builder,
        }
    }

    pub fn network(e: gloo_net::Error) -> ApiError {
        ApiError::Network(e.to_string())
    }

    pub async fn failure(resp: &Response) -> ApiError {
        let detail = resp
            .text()
            .await
            .ok()
            .and_then(|text| serde_json::from_str::<serde_json::Value>(&text).ok())
            .map(|body| describe_error_body(&body))
            .unwrap_or_default();
        ApiError::Status { status: resp.status(), detail }
    }

    pub async fn expect_ok(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() { Ok(resp) } else { Err(failure(&resp).await) }
    }

    pub async fn json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let resp = expect_ok(resp).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Register a new account via `POST /api/users/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects the data.
pub async fn sign_up(request: &SignUpRequest) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/users/")
            .json(request)
            .map_err(http::network)?
            .send()
            .await
            .map_err(http::network)?;
        http::json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Exchange credentials for an API token via `POST /api/auth/token/login/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the credentials are rejected.
pub async fn sign_in(request: &SignInRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/token/login/")
            .json(request)
            .map_err(http::network)?
            .send()
            .await
            .map_err(http::network)?;
        let body: super::types::TokenResponse = http::json(resp).await?;
        Ok(body.auth_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Invalidate the token via `POST /api/auth/token/logout/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn sign_out(token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::authorized(gloo_net::http::Request::post("/api/auth/token/logout/"), Some(token))
            .send()
            .await
            .map_err(http::network)?;
        http::expect_ok(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the user the token belongs to from `/api/users/me/`.
/// Returns `None` if the token is stale or on the server.
pub async fn fetch_current_user(token: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::authorized(gloo_net::http::Request::get("/api/users/me/"), Some(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Change the password via `POST /api/users/set_password/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the current password is wrong.
pub async fn set_password(token: &str, request: &SetPasswordRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::authorized(gloo_net::http::Request::post("/api/users/set_password/"), Some(token))
            .json(request)
            .map_err(http::network)?
            .send()
            .await
            .map_err(http::network)?;
        http::expect_ok(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err(ApiError::Unavailable)
    }
}

/// List recipes matching `filter` from `GET /api/recipes/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the page cannot be decoded.
pub async fn fetch_recipes(token: Option<&str>, filter: &RecipeFilter) -> Result<Paginated<RecipeSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = recipes_endpoint(filter);
        let resp = http::authorized(gloo_net::http::Request::get(&url), token)
            .send()
            .await
            .map_err(http::network)?;
        http::json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, filter);
        Err(ApiError::Unavailable)
    }
}

/// Put a recipe in the shopping cart (`GET /api/recipes/{id}/shopping_cart/`).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the recipe is already in the cart.
pub async fn add_to_cart(token: &str, recipe_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = shopping_cart_endpoint(recipe_id);
        let resp = http::authorized(gloo_net::http::Request::get(&url), Some(token))
            .send()
            .await
            .map_err(http::network)?;
        http::expect_ok(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, recipe_id);
        Err(ApiError::Unavailable)
    }
}

/// Take a recipe out of the shopping cart (`DELETE /api/recipes/{id}/shopping_cart/`).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn remove_from_cart(token: &str, recipe_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = shopping_cart_endpoint(recipe_id);
        let resp = http::authorized(gloo_net::http::Request::delete(&url), Some(token))
            .send()
            .await
            .map_err(http::network)?;
        http::expect_ok(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, recipe_id);
        Err(ApiError::Unavailable)
    }
}

/// Download the consolidated shopping list and hand it to the browser as a
/// file save. Returns the file name used.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the browser refuses the save.
pub async fn download_shopping_list(token: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::authorized(
            gloo_net::http::Request::get("/api/recipes/download_shopping_cart/"),
            Some(token),
        )
        .send()
        .await
        .map_err(http::network)?;
        let resp = http::expect_ok(resp).await?;
        let filename = attachment_filename(resp.headers().get("content-disposition").as_deref());
        let content_type = resp
            .headers()
            .get("content-type")
            .unwrap_or_else(|| "application/pdf".to_owned());
        let bytes = resp.binary().await.map_err(http::network)?;
        crate::util::download::save_bytes(&filename, &content_type, &bytes).map_err(ApiError::Browser)?;
        Ok(filename)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}
