use super::*;

fn rejected(code: Option<&str>, message: &str) -> ApiError {
    ApiError::Rejected { code: code.map(str::to_owned), message: message.to_owned() }
}

// =============================================================
// Classification
// =============================================================

#[test]
fn transport_failures_are_network() {
    assert_eq!(AuthErrorKind::classify(&ApiError::Network("offline".to_owned())), AuthErrorKind::Network);
}

#[test]
fn known_codes_map_to_kinds() {
    assert_eq!(
        AuthErrorKind::classify(&rejected(Some("INVALID_CREDENTIALS"), "x")),
        AuthErrorKind::InvalidCredentials
    );
    assert_eq!(AuthErrorKind::classify(&rejected(Some("wrong_role"), "x")), AuthErrorKind::RoleMismatch);
    assert_eq!(
        AuthErrorKind::classify(&rejected(Some("ACCOUNT_DISABLED"), "x")),
        AuthErrorKind::AccountDeactivated
    );
}

#[test]
fn unauthorized_status_is_invalid_credentials() {
    assert_eq!(AuthErrorKind::classify(&ApiError::Status(401)), AuthErrorKind::InvalidCredentials);
    assert_eq!(AuthErrorKind::classify(&ApiError::Status(500)), AuthErrorKind::Unknown);
}

// =============================================================
// Outcome
// =============================================================

#[test]
fn network_failure_gets_generic_message() {
    let outcome = LoginOutcome::from_api_error(&ApiError::Network("dns".to_owned()));
    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Unable to reach the server. Please try again."));
}

#[test]
fn classified_rejection_uses_mapped_copy() {
    let outcome = LoginOutcome::from_api_error(&rejected(Some("ACCOUNT_DEACTIVATED"), "disabled"));
    assert_eq!(
        outcome.message.as_deref(),
        Some("This account has been deactivated. Contact an administrator.")
    );
}

#[test]
fn unclassified_rejection_keeps_backend_message() {
    let outcome = LoginOutcome::from_api_error(&rejected(None, "Too many attempts"));
    assert_eq!(outcome.message.as_deref(), Some("Too many attempts"));
}

#[test]
fn success_has_no_message() {
    assert_eq!(LoginOutcome::succeeded(), LoginOutcome { success: true, message: None });
}
