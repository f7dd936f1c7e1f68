//! Account links in the header: sign in / sign up, or password / sign out.

use leptos::prelude::*;

use crate::nav::{AccountLink, account_links};
use crate::state::auth::AuthState;
use crate::state::cart::CartState;
use crate::util::session;

#[component]
pub fn AccountMenu() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();

    view! {
        <div class="menu">
            {move || {
                auth.with(|a| a.display_name().map(str::to_owned))
                    .map(|name| view! { <span class="menu__user">{name}</span> })
            }}
            {move || {
                account_links(&auth.with(AuthState::view))
                    .into_iter()
                    .map(|link| match link {
                        AccountLink::Link { title, href } => {
                            view! { <a class="menu__link" href=href>{title}</a> }.into_any()
                        }
                        AccountLink::SignOut { title } => {
                            view! {
                                <a class="menu__link" href="/recipes" on:click=move |_| session::sign_out(auth, cart)>
                                    {title}
                                </a>
                            }
                                .into_any()
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
