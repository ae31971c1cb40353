use super::*;

#[test]
fn rejected_extracts_server_message() {
    let err = ApiError::rejected(401, r#"{"success":false,"message":"Invalid credentials"}"#);
    assert_eq!(err, ApiError::Rejected { status: 401, message: Some("Invalid credentials".to_owned()) });
    assert_eq!(err.user_message("Failed to login"), "Invalid credentials");
}

#[test]
fn rejected_without_json_body_uses_fallback() {
    let err = ApiError::rejected(502, "<html>Bad Gateway</html>");
    assert_eq!(err.user_message("Failed to login"), "Failed to login");
}

#[test]
fn rejected_with_blank_message_uses_fallback() {
    let err = ApiError::rejected(400, r#"{"message":"   "}"#);
    assert_eq!(err.user_message("Failed to create account"), "Failed to create account");
}

#[test]
fn transport_failures_read_as_unknown() {
    assert_eq!(ApiError::Network("offline".to_owned()).user_message("Failed to login"), UNKNOWN_ERROR);
    assert_eq!(ApiError::Decode("eof".to_owned()).user_message("x"), UNKNOWN_ERROR);
    assert_eq!(ApiError::Unavailable.user_message("x"), UNKNOWN_ERROR);
}

#[test]
fn display_includes_status() {
    let err = ApiError::Rejected { status: 404, message: None };
    assert_eq!(err.to_string(), "request rejected (404): no message");
}
