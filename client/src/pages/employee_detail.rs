//! Single-employee view at `/employee/:id`. Admins can edit and delete.

#[cfg(test)]
#[path = "employee_detail_test.rs"]
mod employee_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::actions::{self, notify};
use crate::components::app_header::AppHeader;
use crate::components::form_input::FormInput;
use crate::components::status_banner::StatusBanner;
use crate::net::types::{Choice, Employee};
use crate::pages::employee_dashboard::summary_rows;
use crate::pages::employee_form::{EditField, EmployeeEditForm};
use crate::state::employees::EmployeesState;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::state::session::SessionState;
use crate::util::auth::{ADMIN_ROUTE, Access, dashboard_route, install_access_guard};

/// Rows shown on the detail view beyond the shared summary.
pub fn detail_rows(employee: &Employee) -> Vec<(&'static str, String)> {
    let f = &employee.fields;
    let or_dash = |v: &Option<String>| v.clone().filter(|s| !s.trim().is_empty()).unwrap_or_else(|| "-".to_owned());
    let mut rows = vec![("Full name", f.full_name.clone())];
    rows.extend(summary_rows(employee));
    rows.extend([
        ("Date of birth", or_dash(&f.date_of_birth)),
        ("Gender", f.gender.map_or("-", Choice::label).to_owned()),
        ("Nationality", or_dash(&f.nationality)),
        ("Manager", or_dash(&f.employment_info.manager)),
        ("Termination date", or_dash(&f.employment_info.termination_date)),
        ("Home address", or_dash(&f.contact_info.home_address)),
        ("Personal phone", or_dash(&f.contact_info.personal_phone_number)),
        ("Personal email", or_dash(&f.contact_info.personal_email)),
    ]);
    rows
}

#[component]
pub fn EmployeeDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let employees = expect_context::<RwSignal<EmployeesState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    install_access_guard(Access::Member, session, use_navigate());

    let params = use_params_map();
    let employee_id = move || params.read().get("id").unwrap_or_default();

    Effect::new(move || {
        let id = employee_id();
        if id.is_empty() || !session.with_untracked(SessionState::is_logged_in) {
            return;
        }
        leptos::task::spawn_local(async move {
            actions::employees::fetch_one(id, employees, notices).await;
        });
    });

    let shown = move || employees.with(|s| s.current.clone().filter(|e| e.id == employee_id()));
    let is_admin = move || session.with(SessionState::is_admin);
    let back_href = move || session.with(|s| s.role().map_or(ADMIN_ROUTE, dashboard_route));

    view! {
        <div class="dashboard-page">
            <AppHeader title="Employee Details"/>
            <main class="dashboard-page__body">
                <section class="panel">
                    <a class="panel__back" href=back_href>"Back to dashboard"</a>
                    <StatusBanner loading_text="Loading employee..."/>
                    {move || {
                        shown()
                            .map(|employee| {
                                view! {
                                    <h2>{employee.fields.full_name.clone()}</h2>
                                    <dl class="record-summary">
                                        {detail_rows(&employee)
                                            .into_iter()
                                            .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                            .collect_view()}
                                    </dl>
                                }
                            })
                    }}
                </section>
                <Show when=move || is_admin() && shown().is_some()>
                    {move || shown().map(|employee| view! { <EditPanel employee=employee/> })}
                </Show>
            </main>
        </div>
    }
}

#[component]
fn EditPanel(employee: Employee) -> impl IntoView {
    let employees = expect_context::<RwSignal<EmployeesState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let id = employee.id.clone();
    let form = RwSignal::new(EmployeeEditForm::from_employee(&employee));
    let busy = RwSignal::new(false);
    let confirm_delete = RwSignal::new(false);

    let save_id = id.clone();
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let patch = match form.with_untracked(EmployeeEditForm::to_patch) {
            Ok(patch) => patch,
            Err(text) => {
                notify(notices, NoticeKind::Error, text);
                return;
            }
        };
        busy.set(true);
        let id = save_id.clone();
        leptos::task::spawn_local(async move {
            actions::employees::update(id, patch, employees, notices).await;
            busy.set(false);
        });
    };

    let on_delete = move |_| {
        if busy.get_untracked() {
            return;
        }
        if !confirm_delete.get_untracked() {
            confirm_delete.set(true);
            return;
        }
        busy.set(true);
        let id = id.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let deleted = actions::employees::delete(id, employees, notices).await;
            busy.set(false);
            confirm_delete.set(false);
            if deleted {
                navigate(ADMIN_ROUTE, NavigateOptions::default());
            }
        });
    };

    view! {
        <section class="panel">
            <h2>"Edit employee"</h2>
            <form class="entry-form" on:submit=on_save novalidate>
                {EditField::ALL
                    .into_iter()
                    .map(|field| {
                        view! {
                            <FormInput
                                label=field.label()
                                kind=field.kind()
                                value=Signal::derive(move || form.with(|f| f.get(field).to_owned()))
                                on_input=Callback::new(move |v| form.update(|f| f.set(field, v)))
                            />
                        }
                    })
                    .collect_view()}
                <div class="entry-form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Save changes"
                    </button>
                    <button
                        class="btn btn--danger"
                        type="button"
                        on:click=on_delete
                        disabled=move || busy.get()
                    >
                        {move || if confirm_delete.get() { "Confirm delete" } else { "Delete" }}
                    </button>
                    <Show when=move || confirm_delete.get()>
                        <button class="btn" type="button" on:click=move |_| confirm_delete.set(false)>
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>
        </section>
    }
}
