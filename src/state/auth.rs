//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component owns one `RwSignal<AuthState>`. Pages never branch on
//! the raw `Option`; they take an [`AuthView`] snapshot on every render and
//! pass it to the pure decision helpers below.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

pub const SIGNIN_PATH: &str = "/signin";
pub const HOME_PATH: &str = "/recipes";

/// Proof that a user is signed in: the API token, plus the user record once
/// it has been fetched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthIdentity {
    pub token: String,
    pub user: Option<User>,
}

impl AuthIdentity {
    pub fn new(token: impl Into<String>, user: Option<User>) -> Self {
        Self { token: token.into(), user }
    }

    /// The account's username, if the user record is loaded.
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}

/// Authentication state tracking the current identity and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub identity: Option<AuthIdentity>,
    pub loading: bool,
}

impl AuthState {
    /// Snapshot for one render pass.
    pub fn view(&self) -> AuthView {
        self.identity.clone().map_or(AuthView::Anonymous, AuthView::Authenticated)
    }

    /// Name shown in the account menu once the user record is loaded.
    pub fn display_name(&self) -> Option<&str> {
        self.identity.as_ref().and_then(AuthIdentity::display_name)
    }

    pub fn token(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.token.as_str())
    }

    pub fn sign_in(&mut self, identity: AuthIdentity) {
        self.identity = Some(identity);
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.identity = None;
        self.loading = false;
    }
}

/// The two render branches every auth-aware view chooses between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthView {
    Anonymous,
    Authenticated(AuthIdentity),
}

impl AuthView {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// What an anonymous-only page (sign-up, sign-in) should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuestRoute {
    ShowForm,
    Redirect(&'static str),
}

/// Anonymous-only pages send signed-in users home without touching the form.
pub fn guest_route(view: &AuthView) -> GuestRoute {
    match view {
        AuthView::Anonymous => GuestRoute::ShowForm,
        AuthView::Authenticated(_) => GuestRoute::Redirect(HOME_PATH),
    }
}

/// Auth-only pages redirect once loading has finished and nobody is signed in.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.identity.is_none()
}
