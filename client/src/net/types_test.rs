use super::*;

fn make_user() -> User {
    User {
        id: RecordId::Number(7),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        role: Role::Investor,
        invested_amount: Some(10_000.0),
        total_profit: Some(420.5),
        profit_usdt: None,
    }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_parses_known_tags() {
    assert_eq!(Role::parse("admin"), Role::Admin);
    assert_eq!(Role::parse("investor"), Role::Investor);
    assert_eq!(Role::parse("broker"), Role::Broker);
}

#[test]
fn role_preserves_unknown_tags() {
    let role: Role = serde_json::from_str("\"auditor\"").unwrap();
    assert_eq!(role, Role::Other("auditor".to_owned()));
    assert_eq!(serde_json::to_string(&role).unwrap(), "\"auditor\"");
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}

// =============================================================
// User
// =============================================================

#[test]
fn user_accepts_numeric_or_string_id() {
    let numeric: User = serde_json::from_str(r#"{"id":1,"role":"investor"}"#).unwrap();
    assert_eq!(numeric.id, RecordId::Number(1));
    let text: User = serde_json::from_str(r#"{"id":"u-1","role":"admin"}"#).unwrap();
    assert_eq!(text.id, RecordId::Text("u-1".to_owned()));
}

#[test]
fn minimal_user_round_trips_without_inventing_fields() {
    let raw = r#"{"id":1,"role":"investor"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(serde_json::to_string(&user).unwrap(), raw);
}

#[test]
fn full_user_round_trips() {
    let user = make_user();
    let raw = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, user);
}

#[test]
fn display_name_falls_back_to_email_then_id() {
    let mut user = make_user();
    assert_eq!(user.display_name(), "Ada");
    user.name.clear();
    assert_eq!(user.display_name(), "ada@example.com");
    user.email.clear();
    assert_eq!(user.display_name(), "user 7");
}

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_success_yields_data() {
    let raw = r#"{"success":true,"data":{"token":"abc","user":{"id":1,"role":"investor"}}}"#;
    let env: ApiEnvelope<LoginData> = serde_json::from_str(raw).unwrap();
    let data = env.into_data().unwrap();
    assert_eq!(data.token, "abc");
    assert_eq!(data.user.role, Role::Investor);
}

#[test]
fn envelope_failure_with_string_error() {
    let raw = r#"{"success":false,"error":"Invalid credentials"}"#;
    let env: ApiEnvelope<LoginData> = serde_json::from_str(raw).unwrap();
    let err = env.into_data().unwrap_err();
    assert_eq!(err, ApiError::Rejected { code: None, message: "Invalid credentials".to_owned() });
}

#[test]
fn envelope_failure_with_classified_error() {
    let raw = r#"{"success":false,"error":{"code":"ROLE_MISMATCH","message":"wrong role"}}"#;
    let env: ApiEnvelope<LoginData> = serde_json::from_str(raw).unwrap();
    assert_eq!(env.into_data().unwrap_err().code(), Some("ROLE_MISMATCH"));
}

#[test]
fn envelope_success_without_data_is_decode_error() {
    let env: ApiEnvelope<LoginData> = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(matches!(env.into_data(), Err(ApiError::Decode(_))));
}

#[test]
fn envelope_ack_ignores_data() {
    let env: ApiEnvelope<serde_json::Value> = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert_eq!(env.into_ack(), Ok(()));
}

// =============================================================
// Dashboard payloads
// =============================================================

#[test]
fn summary_defaults_missing_buckets() {
    let summary: DashboardSummary = serde_json::from_str(r#"{"balances":{"USD":12.5}}"#).unwrap();
    assert_eq!(summary.balances.get("USD"), Some(&12.5));
    assert!(summary.profits.is_empty());
    assert!(summary.expenses.is_empty());
}

#[test]
fn chart_data_parses_series() {
    let raw = r#"{"labels":["Jan","Feb"],"series":[{"currency":"USDT","values":[1.0,2.0]}]}"#;
    let chart: ChartData = serde_json::from_str(raw).unwrap();
    assert_eq!(chart.labels.len(), 2);
    assert_eq!(chart.series[0].currency, "USDT");
}

#[test]
fn transaction_kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&TransactionKind::Withdrawal).unwrap(), "\"withdrawal\"");
    assert_eq!(TransactionKind::parse("deposit"), Some(TransactionKind::Deposit));
    assert_eq!(TransactionKind::parse("refund"), None);
}

#[test]
fn new_investor_serializes_role_tag() {
    let body = NewInvestor {
        name: "Bo".to_owned(),
        email: "bo@example.com".to_owned(),
        password: "secret1".to_owned(),
        role: Role::Broker,
        invested_amount: 0.0,
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["role"], "broker");
}
