use super::*;

fn chef() -> User {
    User {
        id: 1,
        email: "chef@foodgram.io".to_owned(),
        username: "chef".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        is_subscribed: false,
    }
}

fn signed_in() -> AuthState {
    AuthState { identity: Some(AuthIdentity { token: "t0k".to_owned(), user: Some(chef()) }), loading: false }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_identity() {
    let state = AuthState::default();
    assert!(state.identity.is_none());
    assert!(state.token().is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

// =============================================================
// AuthView
// =============================================================

#[test]
fn view_is_anonymous_without_identity() {
    assert_eq!(AuthState::default().view(), AuthView::Anonymous);
}

#[test]
fn view_carries_identity_when_signed_in() {
    let view = signed_in().view();
    assert!(view.is_authenticated());
    match view {
        AuthView::Authenticated(identity) => assert_eq!(identity.display_name(), Some("chef")),
        AuthView::Anonymous => panic!("expected authenticated view"),
    }
}

#[test]
fn view_reflects_latest_state() {
    let mut state = signed_in();
    assert!(state.view().is_authenticated());
    state.sign_out();
    assert_eq!(state.view(), AuthView::Anonymous);
}

#[test]
fn state_display_name_follows_identity() {
    assert_eq!(signed_in().display_name(), Some("chef"));
    assert!(AuthState::default().display_name().is_none());
    let pending = AuthState { identity: Some(AuthIdentity::new("abc", None)), loading: false };
    assert!(pending.display_name().is_none());
}

#[test]
fn identity_without_user_has_no_display_name() {
    assert!(AuthIdentity::new("abc", None).display_name().is_none());
}

#[test]
fn sign_in_stores_token_and_clears_loading() {
    let mut state = AuthState { identity: None, loading: true };
    state.sign_in(AuthIdentity::new("abc", None));
    assert_eq!(state.token(), Some("abc"));
    assert!(!state.loading);
}

// =============================================================
// Route decisions
// =============================================================

#[test]
fn signup_redirects_when_authenticated() {
    assert_eq!(guest_route(&signed_in().view()), GuestRoute::Redirect(HOME_PATH));
}

#[test]
fn signup_shows_form_when_anonymous() {
    assert_eq!(guest_route(&AuthView::Anonymous), GuestRoute::ShowForm);
}

#[test]
fn should_redirect_unauth_when_not_loading_and_identity_missing() {
    let state = AuthState { identity: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { identity: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_identity_exists() {
    assert!(!should_redirect_unauth(&signed_in()));
}

#[test]
fn guest_route_unchanged_when_saved_token_is_rejected() {
    let mut state = AuthState { identity: None, loading: true };
    let before = guest_route(&state.view());
    state.sign_out();
    assert_eq!(guest_route(&state.view()), before);
    assert_eq!(before, GuestRoute::ShowForm);
}

#[test]
fn guest_route_unchanged_when_user_record_arrives() {
    let mut state = AuthState::default();
    state.sign_in(AuthIdentity::new("t0k", None));
    let before = guest_route(&state.view());
    state.sign_in(AuthIdentity::new("t0k", Some(chef())));
    assert_eq!(guest_route(&state.view()), before);
}
