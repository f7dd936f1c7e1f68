//! Token login page.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::form_input::FormInput;
use crate::form::{FormController, FormSchema, can_submit, prepare_submit};
use crate::net::types::SignInRequest;
use crate::state::auth::{AuthState, GuestRoute, guest_route};
use crate::state::cart::CartState;

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let schema = match crate::form::schema::signin() {
        Ok(schema) => schema,
        Err(e) => {
            log::error!("sign-in form declaration is invalid: {e}");
            return view! { <p class="form__error">"Sign-in is unavailable."</p> }.into_any();
        }
    };

    // Keyed on the branch so unrelated auth writes keep typed input.
    let route = Memo::new(move |_| auth.with(|a| guest_route(&a.view())));

    view! {
        <main class="main">
            <h1 class="title">"LOG IN"</h1>
            {move || match route.get() {
                GuestRoute::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
                GuestRoute::ShowForm => view! { <SignInForm schema=schema.clone()/> }.into_any(),
            }}
        </main>
    }
    .into_any()
}

#[component]
fn SignInForm(schema: FormSchema) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let form = RwSignal::new(FormController::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let fields = schema.fields.clone();
    let schema = StoredValue::new(schema);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let values = match schema.with_value(|s| form.with_untracked(|f| prepare_submit(f, s))) {
            Ok(values) => values,
            Err(refusal) => {
                log::warn!("sign-in refused: {refusal}");
                info.set(refusal.to_string());
                return;
            }
        };
        let request = SignInRequest::from_values(&values);
        busy.set(true);
        info.set(String::new());

        // A successful sign-in flips AuthState, and the page re-renders into
        // its redirect branch.
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_in(&request).await {
                Ok(token) => {
                    form.update(FormController::reset);
                    crate::util::session::complete_sign_in(token, auth, cart).await;
                }
                Err(e) => {
                    log::warn!("sign-in failed: {e}");
                    info.set(e.to_string());
                    busy.set(false);
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, auth, cart);
        }
    };

    let disabled = move || busy.get() || schema.with_value(|s| form.with(|f| !can_submit(f, s)));

    view! {
        <form class="form" novalidate=true on:submit=on_submit>
            {fields.into_iter().map(|field| view! { <FormInput field=field form=form/> }).collect::<Vec<_>>()}
            <button class="btn btn--dark" type="submit" disabled=disabled>
                "LOG IN"
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="form__message">{move || info.get()}</p>
            </Show>
        </form>
    }
}
