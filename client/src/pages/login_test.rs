use super::*;

#[test]
fn validate_login_input_trims_email_and_keeps_password() {
    let request = validate_login_input("  nia@example.com ", " secret ", "broker").unwrap();
    assert_eq!(request.email, "nia@example.com");
    assert_eq!(request.password, " secret ");
    assert_eq!(request.role, Role::Broker);
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "pw", "investor"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("a@b.com", "   ", "investor"), Err("Enter your email and password."));
}

#[test]
fn validate_login_input_rejects_unknown_role() {
    assert_eq!(validate_login_input("a@b.com", "pw", ""), Err("Choose a role."));
    assert_eq!(validate_login_input("a@b.com", "pw", "auditor"), Err("Choose a role."));
}

#[test]
fn login_roles_preselect_investor() {
    assert_eq!(LOGIN_ROLES[0], Role::Investor);
}
