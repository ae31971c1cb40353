//! Login page: email + password, then route by role.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::clear_inputs;
use crate::actions::{self, notify};
use crate::state::notice::{NoticeKind, NoticeState};
use crate::state::session::SessionState;
use crate::util::auth::{Access, SIGNUP_ROUTE, dashboard_route, install_access_guard};
use crate::util::validation::validate_login;

/// Login form. A restored session skips straight to its dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    install_access_guard(Access::Anonymous, session, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let data = match validate_login(email.get_untracked().trim(), &password.get_untracked()) {
            Ok(data) => data,
            Err(text) => {
                notify(notices, NoticeKind::Error, text);
                return;
            }
        };
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let user = actions::session::login(data, session, notices).await;
            clear_inputs(&[email, password]);
            busy.set(false);
            if let Some(user) = user {
                navigate(dashboard_route(user.role), NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit novalidate>
                <h1>"HR Desk"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="Email"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Login" }}
                </button>
                <p class="auth-card__switch">
                    "No account yet? " <a href=SIGNUP_ROUTE>"Create one"</a>
                </p>
            </form>
        </div>
    }
}
