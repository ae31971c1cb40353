//! Inline request-status line for store-backed views.

use leptos::prelude::*;

use crate::state::employees::EmployeesState;

/// Shows a loading line or the last error of the employee store.
#[component]
pub fn StatusBanner(#[prop(default = "Loading...")] loading_text: &'static str) -> impl IntoView {
    let employees = expect_context::<RwSignal<EmployeesState>>();

    view! {
        <Show when=move || employees.with(|s| s.status.is_loading())>
            <p class="status-banner status-banner--loading">{loading_text}</p>
        </Show>
        <Show when=move || employees.with(|s| s.status.error().is_some())>
            <p class="status-banner status-banner--error">
                {move || employees.with(|s| s.status.error().unwrap_or_default().to_owned())}
            </p>
        </Show>
    }
}
