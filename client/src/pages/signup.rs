//! Account creation page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::clear_inputs;
use crate::actions::{self, notify};
use crate::state::notice::{NoticeKind, NoticeState};
use crate::state::session::SessionState;
use crate::util::auth::{Access, LOGIN_ROUTE, install_access_guard};
use crate::util::validation::validate_signup;

/// Signup form. Credentials are cleared once the request settles.
#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    install_access_guard(Access::Anonymous, session, navigate.clone());

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let data = match validate_signup(
            username.get_untracked().trim(),
            email.get_untracked().trim(),
            &password.get_untracked(),
        ) {
            Ok(data) => data,
            Err(text) => {
                notify(notices, NoticeKind::Error, text);
                return;
            }
        };
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let created = actions::session::create_account(data, notices).await;
            clear_inputs(&[username, email, password]);
            busy.set(false);
            if created {
                navigate(LOGIN_ROUTE, NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit novalidate>
                <h1>"Create account"</h1>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Username"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
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
                    autocomplete="new-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating..." } else { "Create account" }}
                </button>
                <p class="auth-card__switch">
                    "Already registered? " <a href=LOGIN_ROUTE>"Login"</a>
                </p>
            </form>
        </div>
    }
}
