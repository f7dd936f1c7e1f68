//! Password change page for signed-in users.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_input::FormInput;
use crate::form::{FormController, can_submit, prepare_submit};
use crate::net::types::SetPasswordRequest;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let schema = crate::form::schema::change_password();
    let fields = schema.fields.clone();
    let schema = StoredValue::new(schema);
    let form = RwSignal::new(FormController::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(token) = auth.with_untracked(|a| a.token().map(str::to_owned)) else {
            return;
        };
        let values = match schema.with_value(|s| form.with_untracked(|f| prepare_submit(f, s))) {
            Ok(values) => values,
            Err(refusal) => {
                log::warn!("password change refused: {refusal}");
                info.set(refusal.to_string());
                return;
            }
        };
        let request = SetPasswordRequest::from_values(&values);
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::set_password(&token, &request).await {
                Ok(()) => {
                    form.update(FormController::reset);
                    info.set("Password changed.".to_owned());
                }
                Err(e) => {
                    log::warn!("password change failed: {e}");
                    info.set(e.to_string());
                }
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, request);
        }
    };

    let disabled = move || busy.get() || schema.with_value(|s| form.with(|f| !can_submit(f, s)));

    view! {
        <main class="main">
            <h1 class="title">"CHANGE PASSWORD"</h1>
            <form class="form" novalidate=true on:submit=on_submit>
                {fields.into_iter().map(|field| view! { <FormInput field=field form=form/> }).collect::<Vec<_>>()}
                <button class="btn btn--dark" type="submit" disabled=disabled>
                    "CHANGE PASSWORD"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="form__message">{move || info.get()}</p>
                </Show>
            </form>
        </main>
    }
}
