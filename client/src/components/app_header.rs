//! Top bar shared by the signed-in pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::actions;
use crate::state::employees::EmployeesState;
use crate::state::notice::NoticeState;
use crate::state::session::SessionState;
use crate::util::auth::LOGIN_ROUTE;

/// Title, signed-in identity and a logout button.
#[component]
pub fn AppHeader(title: &'static str) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let employees = expect_context::<RwSignal<EmployeesState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let identity = move || {
        session.with(|s| s.user().map(|u| format!("{} ({})", u.username, u.role.as_str())).unwrap_or_default())
    };

    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            actions::session::logout(session, employees, notices).await;
            busy.set(false);
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        });
    };

    view! {
        <header class="app-header">
            <span class="app-header__title">{title}</span>
            <span class="app-header__spacer"></span>
            <span class="app-header__self">{identity}</span>
            <button class="btn app-header__logout" on:click=on_logout disabled=move || busy.get()>
                "Logout"
            </button>
        </header>
    }
}
