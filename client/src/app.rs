//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_tray::NoticeTray;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, employee_dashboard::EmployeeDashboardPage,
    employee_detail::EmployeeDetailPage, login::LoginPage, signup::SignupPage,
};
use crate::state::{employees::EmployeesState, notice::NoticeState, session::SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, employee and notice stores and sets up routing.
/// The session is restored from `localStorage` and, when logged in,
/// re-validated against the server once.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::load());
    let employees = RwSignal::new(EmployeesState::default());
    let notices = RwSignal::new(NoticeState::default());

    provide_context(session);
    provide_context(employees);
    provide_context(notices);

    Effect::new(move || {
        if session.with_untracked(SessionState::is_logged_in) {
            leptos::task::spawn_local(crate::actions::session::refresh_user(session, notices));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/hrdesk.css"/>
        <Title text="HR Desk"/>

        <NoticeTray/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("admin") view=AdminDashboardPage/>
                <Route path=StaticSegment("employee") view=EmployeeDashboardPage/>
                <Route path=(StaticSegment("employee"), ParamSegment("id")) view=EmployeeDetailPage/>
            </Routes>
        </Router>
    }
}
