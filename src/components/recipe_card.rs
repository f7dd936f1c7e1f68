//! Recipe card with an add/remove shopping-cart toggle.

#[cfg(test)]
#[path = "recipe_card_test.rs"]
mod recipe_card_test;

use leptos::prelude::*;

use crate::net::types::RecipeSummary;
use crate::state::auth::AuthState;
use crate::state::cart::CartState;

pub(crate) fn cooking_time_label(minutes: u32) -> String {
    format!("{minutes} min.")
}

pub(crate) fn cart_button_label(in_cart: bool) -> &'static str {
    if in_cart { "REMOVE FROM CART" } else { "ADD TO CART" }
}

#[component]
pub fn RecipeCard(recipe: RecipeSummary) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();

    let id = recipe.id;
    let in_cart = RwSignal::new(recipe.is_in_shopping_cart);
    let busy = RwSignal::new(false);
    let author = recipe.author.map(|a| a.username).unwrap_or_default();
    let signed_in = move || auth.with(|a| a.view().is_authenticated());

    let on_toggle = move |_| {
        if busy.get_untracked() {
            return;
        }
        let Some(token) = auth.with_untracked(|a| a.token().map(str::to_owned)) else {
            return;
        };
        let adding = !in_cart.get_untracked();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = if adding {
                crate::net::api::add_to_cart(&token, id).await
            } else {
                crate::net::api::remove_from_cart(&token, id).await
            };
            match result {
                Ok(()) => {
                    in_cart.set(adding);
                    cart.update(|c| if adding { c.added() } else { c.removed(id) });
                }
                Err(e) => log::warn!("cart update for recipe {id} failed: {e}"),
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, adding, cart);
        }
    };

    view! {
        <article class="card">
            {recipe.image.map(|src| view! { <img class="card__image" src=src alt=recipe.name.clone()/> })}
            <h3 class="card__title">{recipe.name.clone()}</h3>
            <p class="card__time">{cooking_time_label(recipe.cooking_time)}</p>
            <p class="card__author">{author}</p>
            <Show when=signed_in>
                <button class="btn btn--light" on:click=on_toggle disabled=move || busy.get()>
                    {move || cart_button_label(in_cart.get())}
                </button>
            </Show>
        </article>
    }
}
