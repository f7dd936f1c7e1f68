//! Static navigation configuration and the account menu links.
//!
//! Both are pure functions of an [`AuthView`] snapshot so the header can
//! re-evaluate them on every render.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::auth::AuthView;

/// One entry of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
    pub requires_auth: bool,
}

pub const NAVIGATION: &[NavItem] = &[
    NavItem { title: "RECIPES", href: "/recipes", requires_auth: false },
    NavItem { title: "SUBSCRIBES", href: "/subscriptions", requires_auth: true },
    NavItem { title: "ADD RECIPE", href: "/recipes/create", requires_auth: true },
    NavItem { title: "FAVORITES", href: "/favorites", requires_auth: true },
    NavItem { title: "SHOPPING LIST", href: "/cart", requires_auth: true },
];

/// Path of the entry that shows the cart counter badge.
pub const CART_HREF: &str = "/cart";

/// Menu entries the current viewer may follow, in configuration order.
pub fn visible_items(view: &AuthView) -> Vec<NavItem> {
    NAVIGATION
        .iter()
        .filter(|item| !item.requires_auth || view.is_authenticated())
        .copied()
        .collect()
}

/// Account menu entry: either a link or the sign-out action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountLink {
    Link { title: &'static str, href: &'static str },
    SignOut { title: &'static str },
}

/// Account menu contents for the two auth branches.
pub fn account_links(view: &AuthView) -> [AccountLink; 2] {
    match view {
        AuthView::Anonymous => [
            AccountLink::Link { title: "LOG IN", href: "/signin" },
            AccountLink::Link { title: "SIGN UP", href: "/signup" },
        ],
        AuthView::Authenticated(_) => [
            AccountLink::Link { title: "CHANGE PASSWORD", href: "/change-password" },
            AccountLink::SignOut { title: "LOG OUT" },
        ],
    }
}
