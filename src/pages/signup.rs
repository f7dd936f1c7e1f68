//! Registration page. Signed-in visitors are sent to the recipe list.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::form_input::FormInput;
use crate::form::{FormController, FormSchema, can_submit, prepare_submit};
use crate::state::auth::{AuthState, GuestRoute, guest_route};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let schema = match crate::form::schema::signup() {
        Ok(schema) => schema,
        Err(e) => {
            log::error!("sign-up form declaration is invalid: {e}");
            return view! { <p class="form__error">"Sign-up is unavailable."</p> }.into_any();
        }
    };

    // Keyed on the branch so unrelated auth writes keep typed input.
    let route = Memo::new(move |_| auth.with(|a| guest_route(&a.view())));

    view! {
        <main class="main">
            <h1 class="title">"SIGN UP"</h1>
            {move || match route.get() {
                GuestRoute::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
                GuestRoute::ShowForm => view! { <SignUpForm schema=schema.clone()/> }.into_any(),
            }}
        </main>
    }
    .into_any()
}

#[component]
fn SignUpForm(schema: FormSchema) -> impl IntoView {
    let form = RwSignal::new(FormController::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let fields = schema.fields.clone();
    let schema = StoredValue::new(schema);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let values = match schema.with_value(|s| form.with_untracked(|f| prepare_submit(f, s))) {
            Ok(values) => values,
            Err(refusal) => {
                log::warn!("sign-up refused: {refusal}");
                info.set(refusal.to_string());
                return;
            }
        };
        let request = crate::net::types::SignUpRequest::from_values(&values);
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_up(&request).await {
                    Ok(user) => {
                        log::debug!("registered {}", user.username);
                        form.update(FormController::reset);
                        navigate(crate::state::auth::SIGNIN_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("sign-up failed: {e}");
                        info.set(e.to_string());
                    }
                }
                busy.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    let disabled = move || busy.get() || schema.with_value(|s| form.with(|f| !can_submit(f, s)));

    view! {
        <form class="form" novalidate=true on:submit=on_submit>
            {fields.into_iter().map(|field| view! { <FormInput field=field form=form/> }).collect::<Vec<_>>()}
            <button class="btn btn--dark" type="submit" disabled=disabled>
                "SIGN UP"
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="form__message">{move || info.get()}</p>
            </Show>
        </form>
    }
}
