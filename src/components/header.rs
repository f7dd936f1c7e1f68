//! Site header with the main navigation and the account menu.

use leptos::prelude::*;

use crate::components::account_menu::AccountMenu;
use crate::nav::{CART_HREF, visible_items};
use crate::state::auth::AuthState;
use crate::state::cart::CartState;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();

    view! {
        <header class="header">
            <span class="header__logo">"FOODGRAM"</span>
            <nav class="nav">
                {move || {
                    visible_items(&auth.with(AuthState::view))
                        .into_iter()
                        .map(|item| {
                            let badge = (item.href == CART_HREF)
                                .then(|| view! { <span class="nav__badge">{move || cart.with(|c| c.orders)}</span> });
                            view! {
                                <a class="nav__link" href=item.href>
                                    {item.title}
                                    {badge}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </nav>
            <AccountMenu/>
        </header>
    }
}
