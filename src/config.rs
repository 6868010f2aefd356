//! Host configuration parsed from environment variables.

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub backend_url: String,
    pub backend_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://127.0.0.1:8080`, trailing `/` trimmed
    /// - `BACKEND_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] for an unparseable port or a backend URL
    /// that is not `http(s)://`.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ServerError::Config(format!("invalid PORT: {raw}")))?,
            None => DEFAULT_PORT,
        };

        let backend_url = parse_backend_url(lookup("BACKEND_URL").as_deref())?;

        let backend_timeout_secs = lookup("BACKEND_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_BACKEND_TIMEOUT_SECS);

        Ok(Self { port, backend_url, backend_timeout_secs })
    }
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, ServerError> {
    let url = raw.map_or(DEFAULT_BACKEND_URL, str::trim).trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_owned())
    } else {
        Err(ServerError::Config(format!("BACKEND_URL must start with http:// or https://, got '{url}'")))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
