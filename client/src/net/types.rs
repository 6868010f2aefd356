//! Wire DTOs for the backend REST surface.
//!
//! DESIGN
//! ======
//! The backend owns these schemas. Types here are lenient on input
//! (numeric-or-string ids, missing optional fields, unknown roles) and
//! faithful on output so a `User` cached in browser storage round-trips
//! unchanged.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ApiError;

// =============================================================================
// IDENTITY
// =============================================================================

/// Backend record identifier. Some endpoints emit integers, others strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Role tag that selects the dashboard a user may see.
///
/// Unknown tags are preserved in `Other` so the stored user keeps the exact
/// string the backend sent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Investor,
    Broker,
    Other(String),
}

impl Role {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "admin" => Self::Admin,
            "investor" => Self::Investor,
            "broker" => Self::Broker,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Investor => "investor",
            Self::Broker => "broker",
            Self::Other(s) => s,
        }
    }

    /// Human label for headers and selects.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Admin => "Administrator",
            Self::Investor => "Investor",
            Self::Broker => "Broker",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// The logged-in user as cached by the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invested_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_profit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit_usdt: Option<f64>,
}

impl User {
    /// Name for display, falling back to the email and then the id.
    #[must_use]
    pub fn display_name(&self) -> String {
        if !self.name.is_empty() {
            self.name.clone()
        } else if !self.email.is_empty() {
            self.email.clone()
        } else {
            format!("user {}", self.id)
        }
    }
}

// =============================================================================
// ENVELOPE
// =============================================================================

/// Error payload: either a bare message or a classified `{code, message}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorBody {
    Message(String),
    Detailed {
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
}

impl ApiErrorBody {
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Message(_) => None,
            Self::Detailed { code, .. } => code.as_deref(),
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(m) => Some(m),
            Self::Detailed { message, .. } => message.as_deref(),
        }
    }
}

/// Standard response wrapper: `{success, data}` or `{success: false, error}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap a successful payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `success` is false and
    /// [`ApiError::Decode`] when a successful envelope carries no data.
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::rejected(self.error.as_ref()));
        }
        self.data.ok_or_else(|| ApiError::Decode("response missing data".to_owned()))
    }

    /// Check a successful acknowledgement whose data is irrelevant.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `success` is false.
    pub fn into_ack(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::rejected(self.error.as_ref()))
        }
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Body for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: User,
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Currency code to amount, ordered by code for stable rendering.
pub type CurrencyAmounts = BTreeMap<String, f64>;

/// Which slice of the books a dashboard shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardScope {
    Admin,
    Investor,
    Broker,
}

impl DashboardScope {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Investor => "investor",
            Self::Broker => "broker",
        }
    }
}

/// Aggregates shown on the summary cards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub balances: CurrencyAmounts,
    #[serde(default)]
    pub profits: CurrencyAmounts,
    #[serde(default)]
    pub payouts: CurrencyAmounts,
    #[serde(default)]
    pub expenses: CurrencyAmounts,
}

/// Time-bucketed values per currency.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub series: Vec<ChartSeries>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub currency: String,
    #[serde(default)]
    pub values: Vec<f64>,
}

// =============================================================================
// RECORDS
// =============================================================================

/// Direction of money movement for an investor account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "deposit" => Some(Self::Deposit),
            "withdrawal" => Some(Self::Withdrawal),
            _ => None,
        }
    }
}

/// Ledger row for the transactions table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: RecordId,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub kind: Option<TransactionKind>,
    pub currency: String,
    pub amount: f64,
    #[serde(default)]
    pub investor_name: Option<String>,
}

/// Body for `POST /api/transactions`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTransaction {
    pub investor_id: String,
    pub kind: TransactionKind,
    pub currency: String,
    pub amount: f64,
    pub date: String,
    pub description: String,
}

/// Body for `POST /api/payouts`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewPayout {
    pub investor_id: String,
    pub currency: String,
    pub amount: f64,
    pub date: String,
    pub note: String,
}

/// Body for `POST /api/expenses`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExpense {
    pub category: String,
    pub currency: String,
    pub amount: f64,
    pub date: String,
    pub description: String,
}

/// Investor row for the admin table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Investor {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub invested_amount: f64,
    #[serde(default)]
    pub total_profit: f64,
}

/// Body for `POST /api/investors`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewInvestor {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub invested_amount: f64,
}
