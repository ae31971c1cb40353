//! Employee self-service dashboard: own record plus a profile panel.

#[cfg(test)]
#[path = "employee_dashboard_test.rs"]
mod employee_dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions::{self, notify};
use crate::components::app_header::AppHeader;
use crate::components::status_banner::StatusBanner;
use crate::net::types::{Choice, Employee, User, UserPatch};
use crate::state::employees::EmployeesState;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::state::session::SessionState;
use crate::util::auth::{Access, install_access_guard};
use crate::util::hire_dates;
use crate::util::validation::{INVALID_EMAIL, MIN_USERNAME_CHARS, MISSING_FIELDS, USERNAME_TOO_SHORT, is_email};

use super::employee_form::NOTHING_CHANGED;

/// Name for the greeting: the record's full name, else the username.
pub fn welcome_name(record: Option<&Employee>, user: Option<&User>) -> String {
    record
        .map(|e| e.fields.full_name.trim())
        .filter(|n| !n.is_empty())
        .or_else(|| user.map(|u| u.username.as_str()))
        .unwrap_or("Employee")
        .to_owned()
}

/// Build a profile patch from the panel inputs, keeping only changed values.
///
/// # Errors
///
/// Returns the notice text for blank or malformed inputs, or when nothing
/// changed.
pub fn profile_patch(user: &User, username: &str, email: &str) -> Result<UserPatch, &'static str> {
    let (username, email) = (username.trim(), email.trim());
    if username.is_empty() || email.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if username.chars().count() < MIN_USERNAME_CHARS {
        return Err(USERNAME_TOO_SHORT);
    }
    if !is_email(email) {
        return Err(INVALID_EMAIL);
    }
    let patch = UserPatch {
        username: (username != user.username).then(|| username.to_owned()),
        email: (email != user.email).then(|| email.to_owned()),
    };
    if patch.is_empty() { Err(NOTHING_CHANGED) } else { Ok(patch) }
}

/// Label/value pairs for a record summary.
pub fn summary_rows(employee: &Employee) -> Vec<(&'static str, String)> {
    let f = &employee.fields;
    let info = &f.employment_info;
    let hire_date = hire_dates::parse_date(&info.hire_date).map_or_else(|| info.hire_date.clone(), hire_dates::format_date);
    vec![
        ("Employee ID", f.employee_id.clone()),
        ("Job title", info.job_title.clone()),
        ("Department", info.department.map(Choice::label).unwrap_or("-").to_owned()),
        ("Hire date", hire_date),
        ("Employment type", info.employment_type.label().to_owned()),
        ("Status", info.status.label().to_owned()),
        ("Work email", f.contact_info.work_email.clone()),
        ("Work phone", f.contact_info.work_phone_number.clone().unwrap_or_else(|| "-".to_owned())),
    ]
}

#[component]
pub fn EmployeeDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let employees = expect_context::<RwSignal<EmployeesState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    install_access_guard(Access::Member, session, use_navigate());

    Effect::new(move || {
        if session.with_untracked(SessionState::is_logged_in) {
            leptos::task::spawn_local(async move {
                actions::employees::fetch_own(employees, notices).await;
            });
        }
    });

    let greeting = move || {
        let name = employees.with(|e| session.with(|s| welcome_name(e.current.as_ref(), s.user())));
        format!("Welcome, {name}")
    };
    let profile_open = RwSignal::new(false);

    view! {
        <div class="dashboard-page">
            <AppHeader title="Employee Dashboard"/>
            <main class="dashboard-page__body">
                <section class="panel">
                    <div class="panel__header">
                        <h2>{greeting}</h2>
                        <button class="btn" on:click=move |_| profile_open.update(|o| *o = !*o)>
                            {move || if profile_open.get() { "Close profile" } else { "Edit profile" }}
                        </button>
                    </div>
                    <StatusBanner/>
                    {move || {
                        employees
                            .with(|s| s.current.as_ref().map(summary_rows))
                            .map(|rows| {
                                view! {
                                    <dl class="record-summary">
                                        {rows
                                            .into_iter()
                                            .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                            .collect_view()}
                                    </dl>
                                }
                            })
                    }}
                </section>
                <Show when=move || profile_open.get()>
                    <ProfilePanel/>
                </Show>
            </main>
        </div>
    }
}

#[component]
fn ProfilePanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let seed = session.with_untracked(|s| s.user().map(|u| (u.username.clone(), u.email.clone())));
    let (seed_name, seed_email) = seed.unwrap_or_default();
    let username = RwSignal::new(seed_name);
    let email = RwSignal::new(seed_email);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let patch = session.with_untracked(|s| {
            s.user()
                .ok_or(MISSING_FIELDS)
                .and_then(|u| profile_patch(u, &username.get_untracked(), &email.get_untracked()))
        });
        let patch = match patch {
            Ok(patch) => patch,
            Err(text) => {
                notify(notices, NoticeKind::Error, text);
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            actions::session::update_profile(patch, session, notices).await;
            busy.set(false);
        });
    };

    view! {
        <section class="panel">
            <h2>"Profile"</h2>
            <form class="entry-form" on:submit=on_submit novalidate>
                <label class="form-input">
                    <span class="form-input__label">"Username"</span>
                    <input
                        class="form-input__control"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-input">
                    <span class="form-input__label">"Email"</span>
                    <input
                        class="form-input__control"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save profile"
                </button>
            </form>
        </section>
    }
}
