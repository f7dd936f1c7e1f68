//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{
    cart::CartPage,
    change_password::ChangePasswordPage,
    recipes::{FavoritesPage, RecipesPage},
    signin::SignInPage,
    signup::SignUpPage,
};
use crate::state::{auth::AuthState, cart::CartState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and cart contexts, restores a saved session, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Loading until a saved token has been checked, so member pages don't
    // redirect before the session is restored.
    let auth = RwSignal::new(AuthState { identity: None, loading: true });
    let cart = RwSignal::new(CartState::default());

    provide_context(auth);
    provide_context(cart);

    #[cfg(feature = "hydrate")]
    crate::util::session::restore(auth, cart);

    view! {
        <Stylesheet id="leptos" href="/pkg/foodgram.css"/>
        <Title text="Foodgram"/>

        <Router>
            <Header/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RecipesPage/>
                <Route path=StaticSegment("recipes") view=RecipesPage/>
                <Route path=StaticSegment("favorites") view=FavoritesPage/>
                <Route path=StaticSegment("cart") view=CartPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("change-password") view=ChangePasswordPage/>
            </Routes>
        </Router>
    }
}
