//! Route table and role-based default destinations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards, login and logout all navigate through `AppRoute` so the path
//! strings live in one place and match the `<Routes>` declared in `app`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

/// Every navigable page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Root,
    Login,
    Dashboard,
    AdminDashboard,
    AdminRegister,
    BrokerDashboard,
}

impl AppRoute {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/auth/login",
            Self::Dashboard => "/dashboard",
            Self::AdminDashboard => "/admin/dashboard",
            Self::AdminRegister => "/admin/register",
            Self::BrokerDashboard => "/broker/dashboard",
        }
    }

    /// The landing page a role belongs on.
    #[must_use]
    pub fn home_for(role: &Role) -> Self {
        match role {
            Role::Admin => Self::AdminDashboard,
            Role::Broker => Self::BrokerDashboard,
            Role::Investor | Role::Other(_) => Self::Dashboard,
        }
    }

    /// Where a fresh login lands: admins on the admin dashboard, everyone
    /// else on the generic dashboard.
    #[must_use]
    pub fn after_login(role: &Role) -> Self {
        if *role == Role::Admin { Self::AdminDashboard } else { Self::Dashboard }
    }
}
