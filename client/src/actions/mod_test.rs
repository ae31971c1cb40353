use super::*;
use crate::net::error::UNKNOWN_ERROR;

fn reply<T>(data: T, message: Option<&str>) -> Result<Reply<T>, ApiError> {
    Ok(Reply { data, message: message.map(str::to_owned) })
}

#[test]
fn outcome_prefers_server_success_message() {
    assert_eq!(outcome(reply(7, Some("Created")), "Done", "Failed"), Ok((7, "Created".to_owned())));
}

#[test]
fn outcome_defaults_success_text() {
    assert_eq!(outcome(reply((), None), "Done", "Failed"), Ok(((), "Done".to_owned())));
    assert_eq!(outcome(reply((), Some("  ")), "Done", "Failed"), Ok(((), "Done".to_owned())));
}

#[test]
fn outcome_uses_server_error_message_then_fallback() {
    let rejected = Err::<Reply<()>, _>(ApiError::Rejected { status: 409, message: Some("Email taken".to_owned()) });
    assert_eq!(outcome(rejected, "Done", "Failed to create account"), Err("Email taken".to_owned()));

    let bare = Err::<Reply<()>, _>(ApiError::Rejected { status: 500, message: None });
    assert_eq!(outcome(bare, "Done", "Failed to create account"), Err("Failed to create account".to_owned()));
}

#[test]
fn outcome_reports_transport_failures_as_unknown() {
    let offline = Err::<Reply<()>, _>(ApiError::Network("offline".to_owned()));
    assert_eq!(outcome(offline, "Done", "Failed to login"), Err(UNKNOWN_ERROR.to_owned()));
}
