#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::test_support::block_on_ready;
use serde_json::json;

fn envelope(value: serde_json::Value) -> Envelope {
    serde_json::from_value(value).expect("envelope")
}

#[test]
fn employee_path_formats_id() {
    assert_eq!(employee_path("65f0"), "/employee/65f0");
}

#[test]
fn employee_path_encodes_id_as_one_segment() {
    assert_eq!(employee_path("a?b/c"), "/employee/a%3Fb%2Fc");
    assert_eq!(employee_path("x y"), "/employee/x%20y");
}

#[test]
fn own_employee_path_keeps_trailing_slash() {
    assert_eq!(OWN_EMPLOYEE_PATH, "/employee/");
}

#[test]
fn user_reply_requires_user() {
    let err = user_reply(envelope(json!({ "success": true, "message": "ok" }))).expect_err("missing user");
    assert!(matches!(err, ApiError::Decode(msg) if msg.contains("user")));
}

#[test]
fn user_reply_keeps_message() {
    let reply = user_reply(envelope(json!({
        "success": true,
        "message": "Login successful",
        "user": { "_id": "u1", "username": "alice", "email": "a@b.co", "role": "USER" }
    })))
    .expect("reply");
    assert_eq!(reply.data.username, "alice");
    assert_eq!(reply.message.as_deref(), Some("Login successful"));
}

#[test]
fn employees_reply_defaults_to_empty_list() {
    let reply = employees_reply(envelope(json!({ "success": true, "message": "Imported" })));
    assert!(reply.data.is_empty());
    assert_eq!(reply.message.as_deref(), Some("Imported"));
}

#[test]
fn employee_reply_requires_employee() {
    assert!(employee_reply(Envelope::default()).is_err());
}

#[test]
fn calls_are_unavailable_during_server_rendering() {
    assert_eq!(block_on_ready(fetch_all_employees()), Err(ApiError::Unavailable));
    assert_eq!(block_on_ready(delete_employee("x")), Err(ApiError::Unavailable));
    assert_eq!(block_on_ready(logout()), Err(ApiError::Unavailable));
}
