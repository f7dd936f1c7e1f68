//! Labelled input bound to a [`FormController`].

use leptos::prelude::*;

use crate::form::{FieldSpec, FormController};

/// Renders one declared field and feeds every keystroke to the controller.
///
/// The browser's own constraint validation is disabled on the enclosing
/// form (`novalidate`); the message shown here comes from the controller.
#[component]
pub fn FormInput(field: FieldSpec, form: RwSignal<FormController>) -> impl IntoView {
    let name = field.name;
    let label = field.label;
    let input_type = field.input_type().as_attr();
    let required = field.is_required();
    let constraints = StoredValue::new(field.constraints);

    let value = move || form.with(|f| f.value(name).unwrap_or_default().to_owned());
    let message = move || form.with(|f| f.message(name).map(str::to_owned));
    let label_class = move || {
        if form.with(|f| f.message(name).is_some()) { "input input--invalid" } else { "input" }
    };

    view! {
        <label class=label_class>
            <span class="input__label">{label}</span>
            <input
                class="input__field"
                type=input_type
                name=name
                required=required
                prop:value=value
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    constraints.with_value(|c| form.update(|f| f.handle_change(name, raw, c)));
                }
            />
            <span class="input__error">{message}</span>
        </label>
    }
}
