//! Paginated recipe listings: the public catalogue and the signed-in user's
//! favorites.
//!
//! DESIGN
//! ======
//! Both pages share `RecipeList`, which refetches whenever the page number or
//! the session token changes. Only the most recently issued request may
//! update the list; a slower answer for an older page is dropped. Page
//! arithmetic and request ordering live in plain code so they can be tested
//! without a browser.

#[cfg(test)]
#[path = "recipes_test.rs"]
mod recipes_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::recipe_card::RecipeCard;
use crate::net::types::{Paginated, RecipeFilter, RecipeSummary, page_count};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Keeps `page` inside `1..=total`.
pub(crate) fn clamp_page(page: u32, total: u32) -> u32 {
    page.clamp(1, total.max(1))
}

/// Page numbers for the pager, or nothing when everything fits on one page.
pub(crate) fn pager_pages(total: u32) -> Vec<u32> {
    if total <= 1 { Vec::new() } else { (1..=total).collect() }
}

/// Hands out increasing request numbers and remembers the newest one.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct LatestRequest {
    issued: u64,
}

#[cfg(any(test, feature = "hydrate"))]
impl LatestRequest {
    pub(crate) fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether a response to `ticket` may still be shown.
    pub(crate) fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.issued
    }
}

#[component]
pub fn RecipesPage() -> impl IntoView {
    view! {
        <main class="main">
            <h1 class="title">"RECIPES"</h1>
            <RecipeList filter=RecipeFilter::default()/>
        </main>
    }
}

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <main class="main">
            <h1 class="title">"FAVORITES"</h1>
            <RecipeList filter=RecipeFilter::favorites()/>
        </main>
    }
}

#[component]
fn RecipeList(filter: RecipeFilter) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let page = RwSignal::new(1_u32);
    let listing = RwSignal::new(Paginated::<RecipeSummary>::default());
    let error = RwSignal::new(None::<String>);
    let limit = filter.limit;
    let filter = StoredValue::new(filter);

    #[cfg(feature = "hydrate")]
    {
        let requests = StoredValue::new(LatestRequest::default());
        let session = Memo::new(move |_| auth.with(|a| (a.loading, a.token().map(str::to_owned))));
        Effect::new(move || {
            let (loading, token) = session.get();
            if loading {
                return;
            }
            let query = filter.with_value(|f| f.clone().with_page(page.get()));
            let ticket = requests.try_update_value(LatestRequest::issue).unwrap_or_default();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_recipes(token.as_deref(), &query).await;
                if !requests.try_with_value(|r| r.is_latest(ticket)).unwrap_or(false) {
                    log::debug!("dropping stale recipes page {}", query.page);
                    return;
                }
                match result {
                    Ok(found) => {
                        error.set(None);
                        listing.set(found);
                    }
                    Err(e) => {
                        log::warn!("loading recipes page {} failed: {e}", query.page);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, filter);

    let total = move || listing.with(|l| page_count(l.count, limit));

    view! {
        <Show when=move || error.get().is_some()>
            <p class="form__error">{move || error.get().unwrap_or_default()}</p>
        </Show>
        <div class="card-list">
            {move || {
                listing
                    .with(|l| l.results.clone())
                    .into_iter()
                    .map(|recipe| view! { <RecipeCard recipe=recipe/> })
                    .collect::<Vec<_>>()
            }}
        </div>
        <nav class="pagination">
            {move || {
                pager_pages(total())
                    .into_iter()
                    .map(|n| {
                        let class = move || {
                            if page.get() == n { "pagination__item pagination__item--active" } else { "pagination__item" }
                        };
                        view! {
                            <button class=class on:click=move |_| page.set(clamp_page(n, total()))>
                                {n}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}
