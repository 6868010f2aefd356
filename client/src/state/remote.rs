//! Per-component fetch state.
//!
//! DESIGN
//! ======
//! Each card, chart and table owns one `RemoteData` signal and its own loading
//! flag; there is no cross-component coordination.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use crate::net::error::ApiError;

/// Latest value, in-flight flag and last error for one fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct RemoteData<T> {
    pub value: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        Self { value: None, loading: true, error: None }
    }
}

impl<T> RemoteData<T> {
    /// Mark a (re)fetch as in flight. Keeps the previous value on screen.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a fetch result. Errors keep the previous value.
    pub fn finish(&mut self, result: Result<T, ApiError>) {
        self.loading = false;
        match result {
            Ok(value) => {
                self.value = Some(value);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}
