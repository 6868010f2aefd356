//! Shared route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route in `app` is wrapped once in `RouteGuard` with an `Access`
//! policy. The guard waits for the session store to settle, then either
//! renders the page or issues a single redirect for that settle.
//!
//! DESIGN
//! ======
//! Decisions are pure functions of `(Session, Access)` so the redirect table
//! is unit tested; the component only wires them to the router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::routes::AppRoute;
use crate::state::session::{Session, SessionPhase, use_session};

/// Who may see a route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    /// Only visitors without a session; signed-in users go home.
    GuestOnly,
    /// Signed-in users whose default route is this one.
    HomeOf(AppRoute),
    /// Signed-in users holding one of these roles.
    Roles(Vec<Role>),
}

impl Access {
    fn permits(&self, role: &Role) -> bool {
        match self {
            Self::GuestOnly => false,
            Self::HomeOf(route) => AppRoute::home_for(role) == *route,
            Self::Roles(roles) => roles.contains(role),
        }
    }
}

/// What a guard should do with the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Pending,
    Allow,
    Redirect(AppRoute),
}

/// Decide whether `session` may view a route guarded by `access`.
pub fn evaluate(session: &Session, access: &Access) -> GuardDecision {
    match (session.phase(), access) {
        (SessionPhase::Loading, _) => GuardDecision::Pending,
        (SessionPhase::Unauthenticated, Access::GuestOnly) => GuardDecision::Allow,
        (SessionPhase::Unauthenticated, _) => GuardDecision::Redirect(AppRoute::Root),
        (SessionPhase::Authenticated, _) => match session.role() {
            Some(role) if access.permits(role) => GuardDecision::Allow,
            Some(role) => GuardDecision::Redirect(AppRoute::home_for(role)),
            None => GuardDecision::Redirect(AppRoute::Root),
        },
    }
}

/// Result of an ad-hoc role check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessCheck {
    /// Rehydration has not settled yet.
    Pending,
    Granted,
    /// Not allowed; the route to send the user to.
    Denied(AppRoute),
}

/// Check `session` against an optional required role.
pub fn check_access(session: &Session, required: Option<&Role>) -> AccessCheck {
    if session.is_loading {
        return AccessCheck::Pending;
    }
    let Some(role) = session.role() else {
        return AccessCheck::Denied(AppRoute::Root);
    };
    match required {
        Some(needed) if needed != role => AccessCheck::Denied(AppRoute::home_for(role)),
        _ => AccessCheck::Granted,
    }
}

/// Redirect bookkeeping for one guard.
///
/// Given the route already navigated to for the current settle and a fresh
/// decision, returns the updated bookkeeping and the route to navigate to now,
/// if any. `Allow` and `Pending` end the settle.
pub fn next_redirect(issued: Option<AppRoute>, decision: GuardDecision) -> (Option<AppRoute>, Option<AppRoute>) {
    match decision {
        GuardDecision::Redirect(route) if issued == Some(route) => (issued, None),
        GuardDecision::Redirect(route) => (Some(route), Some(route)),
        GuardDecision::Allow | GuardDecision::Pending => (None, None),
    }
}

/// Render `children` only when the session satisfies `access`.
#[component]
pub fn RouteGuard(access: Access, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let access = StoredValue::new(access);

    let decision = Memo::new(move |_| access.with_value(|a| evaluate(&session.get(), a)));

    let issued = StoredValue::new(None::<AppRoute>);
    Effect::new(move || {
        let (next, target) = next_redirect(issued.get_value(), decision.get());
        issued.set_value(next);
        if let Some(route) = target {
            navigate(route.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=move || {
                view! {
                    <div class="guard-placeholder">
                        <p>
                            {move || {
                                if decision.get() == GuardDecision::Pending { "Loading..." } else { "Redirecting..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
