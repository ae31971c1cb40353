//! Labelled input bound to a string signal.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::pages::employee_form::InputKind;

/// One form row. `value` reads the current input, `on_input` receives edits.
#[component]
pub fn FormInput(
    label: &'static str,
    kind: InputKind,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let caption = if required { format!("{label} *") } else { label.to_owned() };
    let control = match kind {
        InputKind::Select { options, optional } => view! {
            <select
                class="form-input__control"
                prop:value=move || value.get()
                on:change=move |ev| on_input.run(event_target_value(&ev))
            >
                {optional.then(|| view! { <option value="">"--"</option> })}
                {options()
                    .into_iter()
                    .map(|o| view! { <option value=o selected=move || value.get() == o>{o}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        InputKind::Text | InputKind::Email | InputKind::Date | InputKind::Url => {
            let input_type = match kind {
                InputKind::Email => "email",
                InputKind::Date => "date",
                InputKind::Url => "url",
                _ => "text",
            };
            view! {
                <input
                    class="form-input__control"
                    type=input_type
                    required=required
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            }
            .into_any()
        }
    };

    view! {
        <label class="form-input">
            <span class="form-input__label">{caption}</span>
            {control}
        </label>
    }
}
