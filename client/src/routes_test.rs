use super::*;

#[test]
fn paths_match_route_table() {
    assert_eq!(AppRoute::Root.path(), "/");
    assert_eq!(AppRoute::Login.path(), "/auth/login");
    assert_eq!(AppRoute::Dashboard.path(), "/dashboard");
    assert_eq!(AppRoute::AdminDashboard.path(), "/admin/dashboard");
    assert_eq!(AppRoute::AdminRegister.path(), "/admin/register");
    assert_eq!(AppRoute::BrokerDashboard.path(), "/broker/dashboard");
}

#[test]
fn home_route_per_role() {
    assert_eq!(AppRoute::home_for(&Role::Admin), AppRoute::AdminDashboard);
    assert_eq!(AppRoute::home_for(&Role::Broker), AppRoute::BrokerDashboard);
    assert_eq!(AppRoute::home_for(&Role::Investor), AppRoute::Dashboard);
    assert_eq!(AppRoute::home_for(&Role::Other("auditor".to_owned())), AppRoute::Dashboard);
}

#[test]
fn login_sends_only_admins_to_admin_dashboard() {
    assert_eq!(AppRoute::after_login(&Role::Admin), AppRoute::AdminDashboard);
    assert_eq!(AppRoute::after_login(&Role::Investor), AppRoute::Dashboard);
    assert_eq!(AppRoute::after_login(&Role::Broker), AppRoute::Dashboard);
}
