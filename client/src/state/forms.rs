//! Draft state and validation for the create-record modals.
//!
//! Drafts hold raw input strings. `validate` either produces the typed request
//! body or the message shown under the form.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{NewExpense, NewInvestor, NewPayout, NewTransaction, Role, TransactionKind};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Parse a strictly positive amount. Commas are accepted as grouping.
pub fn parse_amount(raw: &str) -> Result<f64, &'static str> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err("Enter an amount greater than zero."),
    }
}

/// Upper-case a 3-5 character alphanumeric currency code.
pub fn normalize_currency(raw: &str) -> Result<String, &'static str> {
    let code = raw.trim().to_ascii_uppercase();
    if (3..=5).contains(&code.len()) && code.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(code)
    } else {
        Err("Enter a currency code such as USD or USDT.")
    }
}

/// Accept `YYYY-MM-DD` as produced by `<input type="date">`.
pub fn validate_date(raw: &str) -> Result<String, &'static str> {
    let date = raw.trim();
    let shape_ok = date.len() == 10
        && date.char_indices().all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() });
    if shape_ok { Ok(date.to_owned()) } else { Err("Pick a date.") }
}

fn required<'a>(raw: &'a str, message: &'static str) -> Result<&'a str, &'static str> {
    let value = raw.trim();
    if value.is_empty() { Err(message) } else { Ok(value) }
}

// =============================================================================
// DRAFTS
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct TransactionDraft {
    pub investor_id: String,
    pub kind: String,
    pub currency: String,
    pub amount: String,
    pub date: String,
    pub description: String,
}

impl Default for TransactionDraft {
    fn default() -> Self {
        Self {
            investor_id: String::new(),
            kind: TransactionKind::Deposit.as_str().to_owned(),
            currency: "USD".to_owned(),
            amount: String::new(),
            date: String::new(),
            description: String::new(),
        }
    }
}

impl TransactionDraft {
    /// # Errors
    ///
    /// Returns the first failing field's message.
    pub fn validate(&self) -> Result<NewTransaction, &'static str> {
        let investor_id = required(&self.investor_id, "Choose an investor.")?.to_owned();
        let kind = TransactionKind::parse(self.kind.trim()).ok_or("Choose deposit or withdrawal.")?;
        Ok(NewTransaction {
            investor_id,
            kind,
            currency: normalize_currency(&self.currency)?,
            amount: parse_amount(&self.amount)?,
            date: validate_date(&self.date)?,
            description: self.description.trim().to_owned(),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PayoutDraft {
    pub investor_id: String,
    pub currency: String,
    pub amount: String,
    pub date: String,
    pub note: String,
}

impl Default for PayoutDraft {
    fn default() -> Self {
        Self {
            investor_id: String::new(),
            currency: "USDT".to_owned(),
            amount: String::new(),
            date: String::new(),
            note: String::new(),
        }
    }
}

impl PayoutDraft {
    /// # Errors
    ///
    /// Returns the first failing field's message.
    pub fn validate(&self) -> Result<NewPayout, &'static str> {
        Ok(NewPayout {
            investor_id: required(&self.investor_id, "Choose an investor.")?.to_owned(),
            currency: normalize_currency(&self.currency)?,
            amount: parse_amount(&self.amount)?,
            date: validate_date(&self.date)?,
            note: self.note.trim().to_owned(),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseDraft {
    pub category: String,
    pub currency: String,
    pub amount: String,
    pub date: String,
    pub description: String,
}

impl Default for ExpenseDraft {
    fn default() -> Self {
        Self {
            category: String::new(),
            currency: "USD".to_owned(),
            amount: String::new(),
            date: String::new(),
            description: String::new(),
        }
    }
}

impl ExpenseDraft {
    /// # Errors
    ///
    /// Returns the first failing field's message.
    pub fn validate(&self) -> Result<NewExpense, &'static str> {
        Ok(NewExpense {
            category: required(&self.category, "Enter a category.")?.to_owned(),
            currency: normalize_currency(&self.currency)?,
            amount: parse_amount(&self.amount)?,
            date: validate_date(&self.date)?,
            description: self.description.trim().to_owned(),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InvestorDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub invested_amount: String,
}

impl Default for InvestorDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::Investor.as_str().to_owned(),
            invested_amount: String::new(),
        }
    }
}

impl InvestorDraft {
    /// # Errors
    ///
    /// Returns the first failing field's message.
    pub fn validate(&self) -> Result<NewInvestor, &'static str> {
        let name = required(&self.name, "Enter a name.")?.to_owned();
        let email = self.email.trim();
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err("Enter a valid email address.");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err("Password must be at least 8 characters.");
        }
        let role = match Role::parse(self.role.trim()) {
            role @ (Role::Investor | Role::Broker) => role,
            Role::Admin | Role::Other(_) => return Err("Choose investor or broker."),
        };
        let invested_amount = if self.invested_amount.trim().is_empty() {
            0.0
        } else {
            parse_amount(&self.invested_amount)?
        };
        Ok(NewInvestor { name, email: email.to_owned(), password: self.password.clone(), role, invested_amount })
    }
}
