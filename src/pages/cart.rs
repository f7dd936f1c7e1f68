//! Shopping list page: cart contents plus the PDF download.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::purchase_list::PurchaseList;
use crate::state::auth::AuthState;
use crate::state::cart::{CartState, CartView};
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn CartPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    install_unauth_redirect(auth, use_navigate());

    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Counter may be stale after changes made in another tab.
    #[cfg(feature = "hydrate")]
    {
        let token = Memo::new(move |_| auth.with(|a| a.token().map(str::to_owned)));
        Effect::new(move || {
            if let Some(token) = token.get() {
                leptos::task::spawn_local(async move {
                    crate::util::session::sync_cart(&token, cart).await;
                });
            }
        });
    }

    let on_download = move |_| {
        if busy.get_untracked() {
            return;
        }
        let Some(token) = auth.with_untracked(|a| a.token().map(str::to_owned)) else {
            return;
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::download_shopping_list(&token).await {
                Ok(filename) => log::debug!("saved shopping list as {filename}"),
                Err(e) => {
                    log::warn!("shopping list download failed: {e}");
                    info.set(e.to_string());
                }
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    };

    let branch = Memo::new(move |_| cart.with(CartState::view));

    view! {
        <main class="main">
            <h1 class="title">"SHOPPING LIST"</h1>
            {move || match branch.get() {
                CartView::Loading => view! { <p class="purchases__loading">"Loading..."</p> }.into_any(),
                CartView::Empty => view! { <p class="purchases__empty">"Your shopping list is empty."</p> }.into_any(),
                CartView::Items => view! {
                    <PurchaseList/>
                    <button class="btn btn--dark" disabled=move || busy.get() on:click=on_download>
                        "DOWNLOAD LIST"
                    </button>
                }
                    .into_any(),
            }}
            <Show when=move || !info.get().is_empty()>
                <p class="form__error">{move || info.get()}</p>
            </Show>
        </main>
    }
}
