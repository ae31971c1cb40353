use super::*;
use crate::test_support::user;

fn logged_in(role: Role) -> SessionState {
    let mut s = SessionState::default();
    s.log_in(user(role));
    s
}

#[test]
fn admin_lands_on_admin_dashboard() {
    assert_eq!(dashboard_route(Role::Admin), "/admin");
}

#[test]
fn every_other_role_lands_on_employee_dashboard() {
    for role in [Role::User, Role::Developer, Role::Teamlead, Role::Hr] {
        assert_eq!(dashboard_route(role), "/employee", "role {}", role.as_str());
    }
}

#[test]
fn detail_route_formats_id() {
    assert_eq!(employee_detail_route("abc"), "/employee/abc");
}

#[test]
fn anonymous_pages_bounce_logged_in_users() {
    assert_eq!(redirect_for(Access::Anonymous, &SessionState::default()), None);
    assert_eq!(redirect_for(Access::Anonymous, &logged_in(Role::Admin)), Some("/admin"));
    assert_eq!(redirect_for(Access::Anonymous, &logged_in(Role::User)), Some("/employee"));
}

#[test]
fn member_pages_require_login() {
    assert_eq!(redirect_for(Access::Member, &SessionState::default()), Some("/"));
    assert_eq!(redirect_for(Access::Member, &logged_in(Role::Developer)), None);
    assert_eq!(redirect_for(Access::Member, &logged_in(Role::Admin)), None);
}

#[test]
fn admin_pages_require_admin_role() {
    assert_eq!(redirect_for(Access::Admin, &SessionState::default()), Some("/"));
    assert_eq!(redirect_for(Access::Admin, &logged_in(Role::Hr)), Some("/employee"));
    assert_eq!(redirect_for(Access::Admin, &logged_in(Role::Admin)), None);
}
