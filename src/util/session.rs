//! Session lifecycle shared by the root component, sign-in page and
//! account menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every path that changes who is signed in goes through here so the saved
//! token, `AuthState` and the cart counter never disagree.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::RecipeFilter;
use crate::state::auth::{AuthIdentity, AuthState};
use crate::state::cart::CartState;
use crate::util::token_store;

/// Reload the cart contents and counter for `token`.
pub async fn sync_cart(token: &str, cart: RwSignal<CartState>) {
    cart.update(|c| c.loading = true);
    match api::fetch_recipes(Some(token), &RecipeFilter::shopping_cart()).await {
        Ok(page) => cart.update(|c| c.load(page.results)),
        Err(e) => {
            log::warn!("shopping cart fetch failed: {e}");
            cart.update(|c| c.loading = false);
        }
    }
}

/// Finish a successful sign-in: persist the token, load the user and cart.
pub async fn complete_sign_in(token: String, auth: RwSignal<AuthState>, cart: RwSignal<CartState>) {
    token_store::save(&token);
    let user = api::fetch_current_user(&token).await;
    if user.is_none() {
        log::warn!("signed in but the current user could not be loaded");
    }
    auth.update(|a| a.sign_in(AuthIdentity::new(token.clone(), user)));
    sync_cart(&token, cart).await;
}

/// Restore a session saved by a previous page load.
///
/// Leaves the user signed out (and forgets the token) when the backend no
/// longer accepts it.
pub fn restore(auth: RwSignal<AuthState>, cart: RwSignal<CartState>) {
    let Some(token) = token_store::load() else {
        auth.update(AuthState::sign_out);
        return;
    };
    auth.update(|a| a.loading = true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::fetch_current_user(&token).await {
            Some(user) => {
                log::debug!("restored session for {}", user.username);
                auth.update(|a| a.sign_in(AuthIdentity::new(token.clone(), Some(user))));
                sync_cart(&token, cart).await;
            }
            None => {
                log::debug!("saved token rejected; signing out");
                token_store::clear();
                auth.update(AuthState::sign_out);
            }
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, cart);
    }
}

/// Sign out locally right away, then tell the backend.
pub fn sign_out(auth: RwSignal<AuthState>, cart: RwSignal<CartState>) {
    let token = auth.with_untracked(|a| a.token().map(str::to_owned));
    token_store::clear();
    auth.update(AuthState::sign_out);
    cart.update(CartState::clear);

    #[cfg(feature = "hydrate")]
    if let Some(token) = token {
        leptos::task::spawn_local(async move {
            if let Err(e) = api::sign_out(&token).await {
                log::warn!("token logout failed: {e}");
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}
