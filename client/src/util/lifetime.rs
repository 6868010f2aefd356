//! Tie async work to the component that started it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Data components fire fetches from their setup code. Browser fetches cannot
//! be aborted here, so instead each fetch checks a liveness flag before
//! touching signals; the flag is cleared when the owning component is torn
//! down.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

/// Shared liveness flag. Clones observe the same flag.
#[derive(Clone, Debug)]
pub struct ScopeAlive(Arc<AtomicBool>);

impl ScopeAlive {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Flag that is cancelled when the current reactive owner is disposed.
    #[must_use]
    pub fn bound_to_owner() -> Self {
        let alive = Self::new();
        let flag = alive.clone();
        on_cleanup(move || flag.cancel());
        alive
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Await `fut`, then run `apply` only if still alive.
    pub async fn guard<T>(self, fut: impl Future<Output = T>, apply: impl FnOnce(T)) {
        let out = fut.await;
        if self.is_alive() {
            apply(out);
        }
    }
}

impl Default for ScopeAlive {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn `fut` on the browser task queue and hand its output to `apply`
/// unless the calling component has been torn down first. No-op during SSR.
pub fn spawn_bound<T, Fut, F>(fut: Fut, apply: F)
where
    T: 'static,
    Fut: Future<Output = T> + 'static,
    F: FnOnce(T) + 'static,
{
    spawn_while(&ScopeAlive::bound_to_owner(), fut, apply);
}

/// `spawn_bound` with an explicit flag, for work started from event handlers
/// that run outside the component's owner.
pub fn spawn_while<T, Fut, F>(alive: &ScopeAlive, fut: Fut, apply: F)
where
    T: 'static,
    Fut: Future<Output = T> + 'static,
    F: FnOnce(T) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(alive.clone().guard(fut, apply));
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (alive, fut, apply);
    }
}
