//! Wire DTOs for the foodgram REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend serializers exactly so serde needs no
//! renames. Request bodies are built from validated form values with
//! `from_values`, which reads only the fields the endpoint expects.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::form::FormValues;

/// A user as returned by `/api/users/` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub is_subscribed: bool,
}

/// Recipe author as embedded in recipe payloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Recipe card data used by list pages and the shopping cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub cooking_time: u32,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub is_favorited: bool,
    #[serde(default)]
    pub is_in_shopping_cart: bool,
}

/// Page envelope used by paginated list endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self { count: 0, next: None, previous: None, results: Vec::new() }
    }
}

/// Number of pages needed to show `count` items `limit` at a time (at least 1).
pub fn page_count(count: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    let pages = count.div_ceil(u64::from(limit)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Query options for `GET /api/recipes/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeFilter {
    pub page: u32,
    pub limit: u32,
    pub is_favorited: Option<bool>,
    pub is_in_shopping_cart: Option<bool>,
    pub author: Option<i64>,
    pub tags: Vec<String>,
}

impl Default for RecipeFilter {
    fn default() -> Self {
        Self { page: 1, limit: 6, is_favorited: None, is_in_shopping_cart: None, author: None, tags: Vec::new() }
    }
}

impl RecipeFilter {
    /// Everything currently in the shopping cart on one page.
    pub fn shopping_cart() -> Self {
        Self { limit: 999, is_in_shopping_cart: Some(true), ..Self::default() }
    }

    pub fn favorites() -> Self {
        Self { is_favorited: Some(true), ..Self::default() }
    }

    #[must_use]
    pub fn with_page(self, page: u32) -> Self {
        Self { page: page.max(1), ..self }
    }

    /// Render as a URL query string (without the leading `?`).
    pub fn to_query(&self) -> String {
        let mut pairs = vec![format!("page={}", self.page), format!("limit={}", self.limit)];
        if let Some(flag) = self.is_favorited {
            pairs.push(format!("is_favorited={flag}"));
        }
        if let Some(flag) = self.is_in_shopping_cart {
            pairs.push(format!("is_in_shopping_cart={flag}"));
        }
        if let Some(author) = self.author {
            pairs.push(format!("author={author}"));
        }
        for tag in &self.tags {
            pairs.push(format!("tags={}", urlencoding::encode(tag)));
        }
        pairs.join("&")
    }
}

fn take(values: &FormValues, name: &str) -> String {
    values.get(name).cloned().unwrap_or_default()
}

/// Body of `POST /api/users/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl SignUpRequest {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            email: take(values, "email"),
            username: take(values, "username"),
            first_name: take(values, "first_name"),
            last_name: take(values, "last_name"),
            password: take(values, "password"),
        }
    }
}

/// Body of `POST /api/auth/token/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl SignInRequest {
    pub fn from_values(values: &FormValues) -> Self {
        Self { email: take(values, "email"), password: take(values, "password") }
    }
}

/// Response of `POST /api/auth/token/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub auth_token: String,
}

/// Body of `POST /api/users/set_password/`. The confirmation field stays
/// on the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetPasswordRequest {
    pub new_password: String,
    pub current_password: String,
}

impl SetPasswordRequest {
    pub fn from_values(values: &FormValues) -> Self {
        Self { new_password: take(values, "new_password"), current_password: take(values, "current_password") }
    }
}
