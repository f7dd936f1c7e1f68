//! Shopping cart rows with a per-recipe remove action.

use leptos::prelude::*;

use crate::components::recipe_card::cooking_time_label;
use crate::state::auth::AuthState;
use crate::state::cart::CartState;

#[component]
pub fn PurchaseList() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();

    let remove = move |recipe_id: i64| {
        let Some(token) = auth.with_untracked(|a| a.token().map(str::to_owned)) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::remove_from_cart(&token, recipe_id).await {
                Ok(()) => cart.update(|c| c.removed(recipe_id)),
                Err(e) => log::warn!("removing recipe {recipe_id} from cart failed: {e}"),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, recipe_id, cart);
        }
    };

    view! {
        <ul class="purchases">
            {move || {
                cart.with(|c| c.items.clone())
                    .into_iter()
                    .map(|recipe| {
                        let id = recipe.id;
                        view! {
                            <li class="purchases__item">
                                <span class="purchases__name">{recipe.name}</span>
                                <span class="purchases__time">{cooking_time_label(recipe.cooking_time)}</span>
                                <button class="purchases__delete" on:click=move |_| remove(id)>
                                    "Remove"
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}
