//! REST helpers for the backend, reached through the host's `/api` forwarder.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! the affected card or table without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    ChartData, DashboardScope, DashboardSummary, Investor, LoginData, LoginRequest, NewExpense, NewInvestor,
    NewPayout, NewTransaction, Transaction,
};

const LOGIN_PATH: &str = "/api/auth/login";
const LOGOUT_PATH: &str = "/api/auth/logout";
const TRANSACTIONS_PATH: &str = "/api/transactions";
const PAYOUTS_PATH: &str = "/api/payouts";
const EXPENSES_PATH: &str = "/api/expenses";
const INVESTORS_PATH: &str = "/api/investors";

fn summary_endpoint(scope: DashboardScope) -> String {
    format!("/api/dashboard/summary?scope={}", scope.as_str())
}

fn chart_endpoint(scope: DashboardScope) -> String {
    format!("/api/dashboard/chart?scope={}", scope.as_str())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

// =============================================================================
// AUTH
// =============================================================================

/// Authenticate via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the login.
pub async fn login(request: &LoginRequest) -> Result<LoginData, ApiError> {
    post_data(LOGIN_PATH, None, request).await
}

/// Tell the backend the session is over via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error if the request fails; callers treat this as advisory.
pub async fn logout(token: &str) -> Result<(), ApiError> {
    post_ack(LOGOUT_PATH, Some(token), &serde_json::json!({})).await
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Fetch card aggregates for `scope`.
///
/// # Errors
///
/// Returns an error if the request fails or the payload does not decode.
pub async fn fetch_summary(scope: DashboardScope, token: Option<&str>) -> Result<DashboardSummary, ApiError> {
    get_data(&summary_endpoint(scope), token).await
}

/// Fetch chart series for `scope`.
///
/// # Errors
///
/// Returns an error if the request fails or the payload does not decode.
pub async fn fetch_chart(scope: DashboardScope, token: Option<&str>) -> Result<ChartData, ApiError> {
    get_data(&chart_endpoint(scope), token).await
}

/// Fetch recent transactions visible to the caller.
///
/// # Errors
///
/// Returns an error if the request fails or the payload does not decode.
pub async fn fetch_transactions(token: Option<&str>) -> Result<Vec<Transaction>, ApiError> {
    get_data(TRANSACTIONS_PATH, token).await
}

/// Fetch the investor roster (admin only).
///
/// # Errors
///
/// Returns an error if the request fails or the payload does not decode.
pub async fn fetch_investors(token: Option<&str>) -> Result<Vec<Investor>, ApiError> {
    get_data(INVESTORS_PATH, token).await
}

// =============================================================================
// RECORDS
// =============================================================================

/// Create a deposit or withdrawal.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the record.
pub async fn create_transaction(token: Option<&str>, body: &NewTransaction) -> Result<(), ApiError> {
    post_ack(TRANSACTIONS_PATH, token, body).await
}

/// Record a payout to an investor.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the record.
pub async fn create_payout(token: Option<&str>, body: &NewPayout) -> Result<(), ApiError> {
    post_ack(PAYOUTS_PATH, token, body).await
}

/// Record an operating expense.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the record.
pub async fn create_expense(token: Option<&str>, body: &NewExpense) -> Result<(), ApiError> {
    post_ack(EXPENSES_PATH, token, body).await
}

/// Register an investor or broker account.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the record.
pub async fn create_investor(token: Option<&str>, body: &NewInvestor) -> Result<(), ApiError> {
    post_ack(INVESTORS_PATH, token, body).await
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
async fn decode_envelope<T: DeserializeOwned>(
    resp: &gloo_net::http::Response,
) -> Result<super::types::ApiEnvelope<T>, ApiError> {
    match resp.json::<super::types::ApiEnvelope<T>>().await {
        Ok(envelope) => Ok(envelope),
        Err(e) if resp.ok() => Err(ApiError::Decode(e.to_string())),
        Err(_) => Err(ApiError::Status(resp.status())),
    }
}

async fn get_data<T: DeserializeOwned>(url: &str, token: Option<&str>) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get(url);
        if let Some(token) = token {
            req = req.header("Authorization", &bearer(token));
        }
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode_envelope::<T>(&resp).await?.into_data()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, token);
        Err(ApiError::Unavailable)
    }
}

async fn post_data<B: Serialize, T: DeserializeOwned>(url: &str, token: Option<&str>, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send_post(url, token, body).await?;
        decode_envelope::<T>(&resp).await?.into_data()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, token, body);
        Err(ApiError::Unavailable)
    }
}

/// POST where only success matters. A 2xx with an empty or non-envelope body
/// counts as success.
async fn post_ack<B: Serialize>(url: &str, token: Option<&str>, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send_post(url, token, body).await?;
        match decode_envelope::<serde_json::Value>(&resp).await {
            Ok(envelope) => envelope.into_ack(),
            Err(ApiError::Decode(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, token, body);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn send_post<B: Serialize>(
    url: &str,
    token: Option<&str>,
    body: &B,
) -> Result<gloo_net::http::Response, ApiError> {
    let mut req = gloo_net::http::Request::post(url);
    if let Some(token) = token {
        req = req.header("Authorization", &bearer(token));
    }
    req.json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}
