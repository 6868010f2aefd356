//! Browser session state and its single owner, `SessionStore`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `SessionStore`, provides it through context, and is the
//! only caller of `rehydrate` on mount. Route guards and user-aware components
//! read the published `Session`; login and logout mutate it.
//!
//! DESIGN
//! ======
//! The persisted record is three independent storage entries. Reading and
//! writing them is done by free functions over `&dyn KeyValueStore` so the
//! expiry and corruption rules are testable without a browser or a reactive
//! runtime. `SessionStore` only adds the signal and the side effects.
//!
//! A stored `token` + `user` with no `token_timestamp` is treated as age 0
//! and never expires. That mirrors how the product has always behaved and
//! is kept until product decides otherwise.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::{LoginData, LoginRequest, Role, User};
use crate::routes::AppRoute;
use crate::state::login::{AuthErrorKind, LoginOutcome};
use crate::util::clock::{HOUR_MS, now_millis};
use crate::util::guard::{AccessCheck, check_access};
use crate::util::storage::{
    BrowserStore, KeyValueStore, SESSION_KEYS, StorageError, StoreHandle, TOKEN_KEY, TOKEN_TIMESTAMP_KEY, USER_KEY,
    clear_session_keys,
};

/// How long a login stays valid.
pub const SESSION_TTL_MS: i64 = 24 * HOUR_MS;

// =============================================================================
// SESSION
// =============================================================================

/// The client's belief about who is logged in.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

/// Coarse state for guards: `Loading` until the first rehydration settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Authenticated,
    Unauthenticated,
}

impl Session {
    #[must_use]
    pub fn loading() -> Self {
        Self { user: None, is_authenticated: false, is_loading: true }
    }

    #[must_use]
    pub fn unauthenticated() -> Self {
        Self { user: None, is_authenticated: false, is_loading: false }
    }

    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user), is_authenticated: true, is_loading: false }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.is_loading {
            SessionPhase::Loading
        } else if self.is_authenticated && self.user.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }

    #[must_use]
    pub fn role(&self) -> Option<&Role> {
        self.user.as_ref().filter(|_| self.is_authenticated).map(|u| &u.role)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::loading()
    }
}

// =============================================================================
// PERSISTED RECORD
// =============================================================================

/// What rehydration found in storage.
#[derive(Clone, Debug, PartialEq)]
pub enum Rehydration {
    /// Token and user present, user parsed, age under the TTL.
    Restored(User),
    /// Token or user missing. Storage untouched.
    Absent,
    /// User record did not parse. Storage cleared.
    Corrupted,
    /// Timestamp at or past the TTL, or unreadable. Storage cleared.
    Expired,
}

impl Rehydration {
    #[must_use]
    pub fn into_session(self) -> Session {
        match self {
            Self::Restored(user) => Session::authenticated(user),
            Self::Absent | Self::Corrupted | Self::Expired => Session::unauthenticated(),
        }
    }
}

/// Rebuild the session from the persisted record, repairing it if needed.
pub fn rehydrate(store: &dyn KeyValueStore, now_ms: i64) -> Rehydration {
    let (Some(_token), Some(raw_user)) = (store.get(TOKEN_KEY), store.get(USER_KEY)) else {
        return Rehydration::Absent;
    };

    let Ok(user) = serde_json::from_str::<User>(&raw_user) else {
        clear_session_keys(store);
        return Rehydration::Corrupted;
    };

    match token_age(store.get(TOKEN_TIMESTAMP_KEY).as_deref(), now_ms) {
        Some(age) if age < SESSION_TTL_MS => Rehydration::Restored(user),
        _ => {
            clear_session_keys(store);
            Rehydration::Expired
        }
    }
}

/// Age of the token in milliseconds. A missing timestamp counts as age 0;
/// an unparseable one yields `None`.
fn token_age(raw: Option<&str>, now_ms: i64) -> Option<i64> {
    match raw {
        None => Some(0),
        Some(value) => value.trim().parse::<i64>().ok().map(|ts| now_ms.saturating_sub(ts)),
    }
}

/// Write token, serialized user and login time. On any failure the three
/// entries are put back to what they held before the call, so neither a
/// partial record nor the loss of another tab's session is left behind.
///
/// # Errors
///
/// Returns the first storage error encountered.
pub fn persist_login(store: &dyn KeyValueStore, data: &LoginData, now_ms: i64) -> Result<(), StorageError> {
    let previous = SESSION_KEYS.map(|key| (key, store.get(key)));
    let write = || -> Result<(), StorageError> {
        let raw_user =
            serde_json::to_string(&data.user).map_err(|_| StorageError::Write { key: USER_KEY.to_owned() })?;
        store.set(TOKEN_KEY, &data.token)?;
        store.set(USER_KEY, &raw_user)?;
        store.set(TOKEN_TIMESTAMP_KEY, &now_ms.to_string())?;
        Ok(())
    };
    write().inspect_err(|_| restore_entries(store, &previous))
}

fn restore_entries(store: &dyn KeyValueStore, previous: &[(&str, Option<String>)]) {
    for (key, value) in previous {
        if store.get(key) == *value {
            continue;
        }
        match value {
            // Best effort: the original write error is the one reported.
            Some(value) => {
                if store.set(key, value).is_err() {
                    store.remove(key);
                }
            }
            None => store.remove(key),
        }
    }
}

/// Persist a successful login and compute the published session and landing
/// route.
///
/// # Errors
///
/// Returns a storage error if the record could not be written.
pub fn complete_login(
    store: &dyn KeyValueStore,
    data: LoginData,
    now_ms: i64,
) -> Result<(Session, AppRoute), StorageError> {
    persist_login(store, &data, now_ms)?;
    let route = AppRoute::after_login(&data.user.role);
    Ok((Session::authenticated(data.user), route))
}

/// Drop the persisted record. Always lands on the root route.
pub fn complete_logout(store: &dyn KeyValueStore) -> (Session, AppRoute) {
    clear_session_keys(store);
    (Session::unauthenticated(), AppRoute::Root)
}

// =============================================================================
// SESSION STORE
// =============================================================================

/// Reactive session handle shared through context.
///
/// `Copy` like the signals it wraps. An inert store has no storage backend:
/// it always settles unauthenticated and refuses logins.
#[derive(Clone, Copy)]
pub struct SessionStore {
    session: RwSignal<Session>,
    backend: StoredValue<Option<StoreHandle>>,
}

impl SessionStore {
    /// Store backed by `backend`, starting in the loading phase.
    pub fn new(backend: StoreHandle) -> Self {
        Self { session: RwSignal::new(Session::loading()), backend: StoredValue::new(Some(backend)) }
    }

    /// Store with no storage. Starts loading so server and browser render the
    /// same first frame; settles unauthenticated on rehydration.
    pub fn inert() -> Self {
        Self { session: RwSignal::new(Session::loading()), backend: StoredValue::new(None) }
    }

    /// Open `localStorage`, falling back to an inert store when it is
    /// unavailable.
    pub fn open_or_inert() -> Self {
        match BrowserStore::open() {
            Ok(store) => Self::new(Arc::new(store)),
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::warn!("session storage unavailable, sessions disabled: {e}");
                #[cfg(not(feature = "hydrate"))]
                let _ = e;
                Self::inert()
            }
        }
    }

    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.backend.with_value(Option::is_none)
    }

    /// Reactive read of the current session.
    pub fn get(&self) -> Session {
        self.session.get()
    }

    pub fn get_untracked(&self) -> Session {
        self.session.get_untracked()
    }

    /// Read-only view for components.
    pub fn signal(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    /// Bearer token for authenticated API calls.
    pub fn token(&self) -> Option<String> {
        self.backend.with_value(|b| b.as_ref().and_then(|store| store.get(TOKEN_KEY)))
    }

    /// Re-read storage and publish the result. Publishes only on change so
    /// periodic checks do not wake guards needlessly.
    pub fn rehydrate(&self) {
        let next = self.backend.with_value(|b| match b {
            Some(store) => {
                let outcome = rehydrate(store.as_ref(), now_millis());
                log_repair(&outcome);
                outcome.into_session()
            }
            None => Session::unauthenticated(),
        });
        self.publish(next);
    }

    fn publish(&self, next: Session) {
        if self.session.get_untracked() != next {
            self.session.set(next);
        }
    }

    /// Authenticate against the backend, persist the session and navigate to
    /// the role's landing route. Failures come back as a `LoginOutcome` and
    /// leave the current session untouched.
    pub async fn login<F>(self, request: LoginRequest, navigate: F) -> LoginOutcome
    where
        F: Fn(&str, NavigateOptions),
    {
        let Some(store) = self.backend.get_value() else {
            return LoginOutcome::failed(AuthErrorKind::Unavailable.user_message());
        };

        let data = match crate::net::api::login(&request).await {
            Ok(data) => data,
            Err(e) => return LoginOutcome::from_api_error(&e),
        };

        match complete_login(store.as_ref(), data, now_millis()) {
            Ok((session, route)) => {
                self.publish(session);
                navigate(route.path(), NavigateOptions::default());
                LoginOutcome::succeeded()
            }
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::warn!("login succeeded but session could not be saved: {e}");
                #[cfg(not(feature = "hydrate"))]
                let _ = e;
                LoginOutcome::failed(AuthErrorKind::Unavailable.user_message())
            }
        }
    }

    /// Notify the backend (best effort), clear the record and go to `/`.
    pub async fn logout<F>(self, navigate: F)
    where
        F: Fn(&str, NavigateOptions),
    {
        if let Some(token) = self.token() {
            if let Err(e) = crate::net::api::logout(&token).await {
                leptos::logging::warn!("logout notification failed: {e}");
            }
        }

        let (session, route) = match self.backend.get_value() {
            Some(store) => complete_logout(store.as_ref()),
            None => (Session::unauthenticated(), AppRoute::Root),
        };
        self.publish(session);
        navigate(route.path(), NavigateOptions::default());
    }

    /// Whether the current session satisfies `required`. Redirects when it
    /// does not: unauthenticated to `/`, wrong role to the user's own home.
    /// Returns `false` without redirecting while still loading.
    pub fn require_auth<F>(&self, required: Option<&Role>, navigate: F) -> bool
    where
        F: Fn(&str, NavigateOptions),
    {
        match check_access(&self.session.get(), required) {
            AccessCheck::Granted => true,
            AccessCheck::Pending => false,
            AccessCheck::Denied(route) => {
                navigate(route.path(), NavigateOptions::default());
                false
            }
        }
    }

    /// Keep the session current while the page is open: re-check expiry every
    /// minute and follow session changes made in other tabs.
    pub fn watch(self) {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::lifetime::ScopeAlive;
            use crate::util::storage::touches_session;

            let alive = ScopeAlive::bound_to_owner();
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(60)).await;
                    if !alive.is_alive() {
                        break;
                    }
                    self.rehydrate();
                }
            });

            let listener = window_event_listener(leptos::ev::storage, move |ev: web_sys::StorageEvent| {
                if touches_session(ev.key().as_deref()) {
                    self.rehydrate();
                }
            });
            on_cleanup(move || listener.remove());
        }
    }
}

fn log_repair(outcome: &Rehydration) {
    #[cfg(feature = "hydrate")]
    {
        match outcome {
            Rehydration::Corrupted => log::warn!("stored session was corrupted and has been cleared"),
            Rehydration::Expired => log::debug!("stored session expired and has been cleared"),
            Rehydration::Restored(_) | Rehydration::Absent => {}
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = outcome;
    }
}

/// The `SessionStore` provided by `App`.
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}
