//! Admin dashboard: employee list, hire-date filter, CSV export, and the
//! manual / bulk entry forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable only by ADMIN sessions. The list is fetched once on mount; later
//! creates append through the store, so the table stays current without
//! refetching.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions::{self, notify};
use crate::components::app_header::AppHeader;
use crate::components::employee_table::EmployeeTable;
use crate::components::form_input::FormInput;
use crate::components::status_banner::StatusBanner;
use crate::pages::employee_form::{MANUAL_SECTIONS, ManualEmployeeForm, ManualField};
use crate::state::employees::EmployeesState;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::state::session::SessionState;
use crate::util::auth::{Access, install_access_guard};
use crate::util::export;
use crate::util::hire_dates::HireDateRange;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EntryTab {
    Manual,
    Bulk,
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let employees = expect_context::<RwSignal<EmployeesState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    install_access_guard(Access::Admin, session, use_navigate());

    Effect::new(move || {
        if session.with_untracked(SessionState::is_admin) {
            leptos::task::spawn_local(async move {
                actions::employees::fetch_all(employees, notices).await;
            });
        }
    });

    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let range = Memo::new(move |_| HireDateRange::from_inputs(&start.get(), &end.get()));
    let filtered = Signal::derive(move || employees.with(|s| range.get().filter(&s.items)));

    let on_export = move |_| {
        let rows = filtered.get_untracked();
        let csv = export::render_csv(&rows);
        let name = export::file_name(&range.get_untracked());
        log::info!("exporting {} employees to {name}", rows.len());
        #[cfg(feature = "hydrate")]
        if let Err(e) = export::download_csv(&name, &csv) {
            notify(notices, NoticeKind::Error, e);
            return;
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = csv;
        notify(notices, NoticeKind::Success, format!("Exported {} employees", rows.len()));
    };

    let tab = RwSignal::new(EntryTab::Manual);

    view! {
        <div class="dashboard-page">
            <AppHeader title="Admin Dashboard"/>
            <main class="dashboard-page__body">
                <section class="panel">
                    <div class="panel__header">
                        <h2>"Employees"</h2>
                        <span class="panel__count">
                            {move || format!("{} of {}", filtered.with(Vec::len), employees.with(|s| s.items.len()))}
                        </span>
                    </div>
                    <div class="filter-bar">
                        <label>
                            "Hired from "
                            <input
                                type="date"
                                prop:value=move || start.get()
                                on:input=move |ev| start.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "to "
                            <input
                                type="date"
                                prop:value=move || end.get()
                                on:input=move |ev| end.set(event_target_value(&ev))
                            />
                        </label>
                        <button
                            class="btn"
                            on:click=move |_| {
                                start.set(String::new());
                                end.set(String::new());
                            }
                        >
                            "Clear"
                        </button>
                        <button class="btn btn--primary" on:click=on_export>
                            "Export CSV"
                        </button>
                    </div>
                    <StatusBanner loading_text="Loading employees..."/>
                    <EmployeeTable rows=filtered/>
                </section>

                <section class="panel">
                    <div class="tabs">
                        <button
                            class="tabs__tab"
                            class:tabs__tab--active=move || tab.get() == EntryTab::Manual
                            on:click=move |_| tab.set(EntryTab::Manual)
                        >
                            "Manual entry"
                        </button>
                        <button
                            class="tabs__tab"
                            class:tabs__tab--active=move || tab.get() == EntryTab::Bulk
                            on:click=move |_| tab.set(EntryTab::Bulk)
                        >
                            "Bulk upload"
                        </button>
                    </div>
                    <Show when=move || tab.get() == EntryTab::Manual fallback=BulkUploadForm>
                        <ManualEntryForm/>
                    </Show>
                </section>
            </main>
        </div>
    }
}

#[component]
fn ManualEntryForm() -> impl IntoView {
    let employees = expect_context::<RwSignal<EmployeesState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let form = RwSignal::new(ManualEmployeeForm::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let fields = match form.with_untracked(ManualEmployeeForm::to_fields) {
            Ok(fields) => fields,
            Err(text) => {
                notify(notices, NoticeKind::Error, text);
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            if actions::employees::create_one(fields, employees, notices).await {
                form.set(ManualEmployeeForm::default());
            }
            busy.set(false);
        });
    };

    let input = move |field: ManualField| {
        view! {
            <FormInput
                label=field.label()
                kind=field.kind()
                required=field.required()
                value=Signal::derive(move || form.with(|f| f.get(field).to_owned()))
                on_input=Callback::new(move |v| form.update(|f| f.set(field, v)))
            />
        }
    };

    view! {
        <form class="entry-form" on:submit=on_submit novalidate>
            {MANUAL_SECTIONS
                .iter()
                .map(|(title, fields)| {
                    view! {
                        <fieldset class="entry-form__section">
                            <legend>{*title}</legend>
                            {fields.iter().copied().map(input).collect_view()}
                        </fieldset>
                    }
                })
                .collect_view()}
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Add employee" }}
            </button>
        </form>
    }
}

#[component]
fn BulkUploadForm() -> impl IntoView {
    let employees = expect_context::<RwSignal<EmployeesState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let file_ref = NodeRef::<leptos::html::Input>::new();
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use crate::pages::employee_form::validate_upload_name;

            let file = file_ref.get().and_then(|input| input.files()).and_then(|list| list.get(0));
            if let Err(text) = validate_upload_name(file.as_ref().map(web_sys::File::name).as_deref()) {
                notify(notices, NoticeKind::Error, text);
                return;
            }
            let Some(file) = file else {
                return;
            };
            busy.set(true);
            leptos::task::spawn_local(async move {
                if actions::employees::create_bulk(file, employees, notices).await {
                    if let Some(input) = file_ref.get_untracked() {
                        input.set_value("");
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (file_ref, employees, notices);
    };

    view! {
        <form class="entry-form" on:submit=on_submit>
            <p class="entry-form__hint">"Upload an .xlsx or .csv sheet with one employee per row."</p>
            <input class="entry-form__file" type="file" accept=".xlsx,.csv" node_ref=file_ref/>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Uploading..." } else { "Upload" }}
            </button>
        </form>
    }
}
