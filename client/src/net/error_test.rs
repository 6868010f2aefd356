use super::*;

#[test]
fn rejected_from_bare_message_has_no_code() {
    let body = ApiErrorBody::Message("Invalid credentials".to_owned());
    let err = ApiError::rejected(Some(&body));
    assert_eq!(err.code(), None);
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn rejected_from_detailed_body_keeps_code() {
    let body = ApiErrorBody::Detailed {
        code: Some("ACCOUNT_DEACTIVATED".to_owned()),
        message: Some("Account disabled".to_owned()),
    };
    let err = ApiError::rejected(Some(&body));
    assert_eq!(err.code(), Some("ACCOUNT_DEACTIVATED"));
    assert_eq!(err.to_string(), "Account disabled");
}

#[test]
fn rejected_without_body_uses_generic_message() {
    let err = ApiError::rejected(None);
    assert_eq!(err.to_string(), "request rejected");
}

#[test]
fn rejected_with_blank_message_uses_generic_message() {
    let body = ApiErrorBody::Detailed { code: Some("X".to_owned()), message: Some("  ".to_owned()) };
    assert_eq!(ApiError::rejected(Some(&body)).to_string(), "request rejected");
}

#[test]
fn only_network_errors_are_transport() {
    assert!(ApiError::Network("offline".to_owned()).is_transport());
    assert!(!ApiError::Status(500).is_transport());
    assert!(!ApiError::Unavailable.is_transport());
}

#[test]
fn status_error_formats_code() {
    assert_eq!(ApiError::Status(502).to_string(), "request failed: 502");
}
