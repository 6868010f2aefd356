use super::*;

// =============================================================
// Field helpers
// =============================================================

#[test]
fn parse_amount_accepts_grouped_positive_values() {
    assert_eq!(parse_amount(" 1,250.50 "), Ok(1250.5));
}

#[test]
fn parse_amount_rejects_zero_negative_and_text() {
    for raw in ["0", "-5", "abc", "", "inf"] {
        assert_eq!(parse_amount(raw), Err("Enter an amount greater than zero."), "{raw}");
    }
}

#[test]
fn normalize_currency_uppercases() {
    assert_eq!(normalize_currency(" usdt "), Ok("USDT".to_owned()));
    assert!(normalize_currency("US").is_err());
    assert!(normalize_currency("US D").is_err());
}

#[test]
fn validate_date_requires_iso_shape() {
    assert_eq!(validate_date("2026-10-18"), Ok("2026-10-18".to_owned()));
    assert_eq!(validate_date("18/10/2026"), Err("Pick a date."));
    assert_eq!(validate_date(""), Err("Pick a date."));
}

// =============================================================
// Drafts
// =============================================================

fn transaction_draft() -> TransactionDraft {
    TransactionDraft {
        investor_id: "42".to_owned(),
        amount: "100".to_owned(),
        date: "2026-10-01".to_owned(),
        description: "  top-up ".to_owned(),
        ..TransactionDraft::default()
    }
}

#[test]
fn transaction_draft_builds_request() {
    let body = transaction_draft().validate().unwrap();
    assert_eq!(body.kind, TransactionKind::Deposit);
    assert_eq!(body.currency, "USD");
    assert_eq!(body.amount, 100.0);
    assert_eq!(body.description, "top-up");
}

#[test]
fn transaction_draft_requires_investor_first() {
    let draft = TransactionDraft { investor_id: " ".to_owned(), amount: String::new(), ..transaction_draft() };
    assert_eq!(draft.validate(), Err("Choose an investor."));
}

#[test]
fn transaction_draft_rejects_unknown_kind() {
    let draft = TransactionDraft { kind: "refund".to_owned(), ..transaction_draft() };
    assert_eq!(draft.validate(), Err("Choose deposit or withdrawal."));
}

#[test]
fn payout_draft_defaults_to_usdt() {
    let draft = PayoutDraft {
        investor_id: "7".to_owned(),
        amount: "12.5".to_owned(),
        date: "2026-10-02".to_owned(),
        ..PayoutDraft::default()
    };
    let body = draft.validate().unwrap();
    assert_eq!(body.currency, "USDT");
    assert_eq!(body.note, "");
}

#[test]
fn expense_draft_requires_category() {
    let draft = ExpenseDraft { amount: "5".to_owned(), date: "2026-10-02".to_owned(), ..ExpenseDraft::default() };
    assert_eq!(draft.validate(), Err("Enter a category."));
}

fn investor_draft() -> InvestorDraft {
    InvestorDraft {
        name: "Nia".to_owned(),
        email: "nia@example.com".to_owned(),
        password: "long-enough".to_owned(),
        ..InvestorDraft::default()
    }
}

#[test]
fn investor_draft_blank_amount_is_zero() {
    let body = investor_draft().validate().unwrap();
    assert_eq!(body.invested_amount, 0.0);
    assert_eq!(body.role, Role::Investor);
}

#[test]
fn investor_draft_rejects_short_password() {
    let draft = InvestorDraft { password: "short".to_owned(), ..investor_draft() };
    assert_eq!(draft.validate(), Err("Password must be at least 8 characters."));
}

#[test]
fn investor_draft_rejects_bad_email() {
    let draft = InvestorDraft { email: "nia.example.com".to_owned(), ..investor_draft() };
    assert_eq!(draft.validate(), Err("Enter a valid email address."));
}

#[test]
fn investor_draft_cannot_create_admins() {
    let draft = InvestorDraft { role: "admin".to_owned(), ..investor_draft() };
    assert_eq!(draft.validate(), Err("Choose investor or broker."));
    let broker = InvestorDraft { role: "broker".to_owned(), ..investor_draft() };
    assert_eq!(broker.validate().unwrap().role, Role::Broker);
}
