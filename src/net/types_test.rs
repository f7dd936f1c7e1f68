use super::*;

fn values(pairs: &[(&str, &str)]) -> FormValues {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn user_deserializes_backend_payload() {
    let raw = r#"{"email":"a@b.co","id":7,"username":"chef","first_name":"Ada","last_name":"L","is_subscribed":true}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.username, "chef");
    assert!(user.is_subscribed);
}

#[test]
fn user_is_subscribed_defaults_to_false() {
    let raw = r#"{"email":"a@b.co","id":1,"username":"u","first_name":"","last_name":""}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert!(!user.is_subscribed);
}

#[test]
fn paginated_recipes_deserialize() {
    let raw = r#"{
        "count": 2,
        "next": null,
        "previous": null,
        "results": [
            {"id": 2, "name": "Borscht", "image": "/media/b.png", "cooking_time": 90,
             "author": {"id": 1, "username": "chef"}, "is_favorited": true, "is_in_shopping_cart": false},
            {"id": 1, "name": "Tea", "cooking_time": 5}
        ]
    }"#;
    let page: Paginated<RecipeSummary> = serde_json::from_str(raw).unwrap();
    assert_eq!(page.count, 2);
    assert_eq!(page.results[0].author.as_ref().unwrap().username, "chef");
    assert!(page.results[0].is_favorited);
    assert!(page.results[1].image.is_none());
    assert!(!page.results[1].is_in_shopping_cart);
}

#[test]
fn paginated_default_is_empty() {
    let page: Paginated<RecipeSummary> = Paginated::default();
    assert_eq!(page.count, 0);
    assert!(page.results.is_empty());
}

// =============================================================
// page_count
// =============================================================

#[test]
fn page_count_rounds_up_and_has_a_floor_of_one() {
    assert_eq!(page_count(0, 6), 1);
    assert_eq!(page_count(6, 6), 1);
    assert_eq!(page_count(7, 6), 2);
    assert_eq!(page_count(13, 6), 3);
}

#[test]
fn page_count_zero_limit_is_one_page() {
    assert_eq!(page_count(100, 0), 1);
}

// =============================================================
// RecipeFilter
// =============================================================

#[test]
fn default_filter_query() {
    assert_eq!(RecipeFilter::default().to_query(), "page=1&limit=6");
}

#[test]
fn shopping_cart_filter_fetches_everything_in_cart() {
    assert_eq!(RecipeFilter::shopping_cart().to_query(), "page=1&limit=999&is_in_shopping_cart=true");
}

#[test]
fn favorites_filter_with_page() {
    assert_eq!(RecipeFilter::favorites().with_page(3).to_query(), "page=3&limit=6&is_favorited=true");
}

#[test]
fn with_page_clamps_to_first_page() {
    assert_eq!(RecipeFilter::default().with_page(0).page, 1);
}

#[test]
fn author_and_tags_are_appended_and_encoded() {
    let filter = RecipeFilter { author: Some(4), tags: vec!["breakfast".to_owned(), "hot & spicy".to_owned()], ..RecipeFilter::default() };
    assert_eq!(filter.to_query(), "page=1&limit=6&author=4&tags=breakfast&tags=hot%20%26%20spicy");
}

#[test]
fn non_ascii_tags_are_utf8_percent_encoded() {
    let filter = RecipeFilter { tags: vec!["завтрак".to_owned()], ..RecipeFilter::default() };
    assert_eq!(filter.to_query(), "page=1&limit=6&tags=%D0%B7%D0%B0%D0%B2%D1%82%D1%80%D0%B0%D0%BA");
}

#[test]
fn unreserved_tag_characters_pass_through() {
    let filter = RecipeFilter { tags: vec!["low-carb_v2.0~x".to_owned()], ..RecipeFilter::default() };
    assert_eq!(filter.to_query(), "page=1&limit=6&tags=low-carb_v2.0~x");
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn signup_request_reads_registration_fields() {
    let req = SignUpRequest::from_values(&values(&[
        ("email", "a@b.co"),
        ("username", "chef"),
        ("first_name", "Ada"),
        ("last_name", "L"),
        ("password", "pw"),
    ]));
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["username"], "chef");
    assert_eq!(json["password"], "pw");
}

#[test]
fn set_password_request_drops_confirmation() {
    let req = SetPasswordRequest::from_values(&values(&[
        ("current_password", "old"),
        ("new_password", "abc123"),
        ("repeat_password", "abc123"),
    ]));
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({"new_password": "abc123", "current_password": "old"}));
}

#[test]
fn signin_request_missing_field_is_empty() {
    let req = SignInRequest::from_values(&values(&[("email", "a@b.co")]));
    assert_eq!(req.password, "");
}

#[test]
fn token_response_deserializes() {
    let token: TokenResponse = serde_json::from_str(r#"{"auth_token":"abc"}"#).unwrap();
    assert_eq!(token.auth_token, "abc");
}
