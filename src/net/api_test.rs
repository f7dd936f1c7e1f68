use serde_json::json;

use super::*;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn recipes_endpoint_includes_filter_query() {
    assert_eq!(
        recipes_endpoint(&RecipeFilter::shopping_cart()),
        "/api/recipes/?page=1&limit=999&is_in_shopping_cart=true"
    );
}

#[test]
fn shopping_cart_endpoint_formats_recipe_id() {
    assert_eq!(shopping_cart_endpoint(42), "/api/recipes/42/shopping_cart/");
}

#[test]
fn auth_header_uses_token_scheme() {
    assert_eq!(auth_header("abc"), "Token abc");
}

// =============================================================
// Error bodies
// =============================================================

#[test]
fn describe_detail_body() {
    assert_eq!(describe_error_body(&json!({"detail": "Invalid token."})), "Invalid token.");
}

#[test]
fn describe_field_errors_body() {
    let body = json!({
        "email": ["user with this email already exists."],
        "username": ["A user with that username already exists."]
    });
    assert_eq!(
        describe_error_body(&body),
        "email: user with this email already exists.; username: A user with that username already exists."
    );
}

#[test]
fn describe_non_field_errors_body() {
    let body = json!({"non_field_errors": ["Unable to log in with provided credentials."]});
    assert_eq!(describe_error_body(&body), "Unable to log in with provided credentials.");
}

#[test]
fn describe_plain_list_body() {
    assert_eq!(describe_error_body(&json!(["a", "b"])), "a b");
}

#[test]
fn describe_unknown_body_is_empty() {
    assert_eq!(describe_error_body(&json!({"count": 3})), "");
    assert_eq!(describe_error_body(&json!(null)), "");
}

// =============================================================
// Content-Disposition
// =============================================================

#[test]
fn attachment_filename_from_header() {
    assert_eq!(
        attachment_filename(Some("attachment; filename=list_shopping_of_recipes.pdf")),
        "list_shopping_of_recipes.pdf"
    );
}

#[test]
fn attachment_filename_strips_quotes() {
    assert_eq!(attachment_filename(Some("attachment; filename=\"cart.pdf\"")), "cart.pdf");
}

#[test]
fn attachment_filename_defaults_when_missing() {
    assert_eq!(attachment_filename(None), DEFAULT_SHOPPING_LIST_FILENAME);
    assert_eq!(attachment_filename(Some("attachment")), DEFAULT_SHOPPING_LIST_FILENAME);
    assert_eq!(attachment_filename(Some("attachment; filename=")), DEFAULT_SHOPPING_LIST_FILENAME);
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn status_error_prefers_detail() {
    let err = ApiError::Status { status: 400, detail: "password: This field may not be blank.".to_owned() };
    assert_eq!(err.to_string(), "password: This field may not be blank.");
}

#[test]
fn status_error_without_detail_shows_code() {
    let err = ApiError::Status { status: 502, detail: String::new() };
    assert_eq!(err.to_string(), "request failed: 502");
}

#[test]
fn unavailable_error_message() {
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
