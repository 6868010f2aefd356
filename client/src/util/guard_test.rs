use super::*;
use crate::net::types::{RecordId, User};

fn signed_in(role: Role) -> Session {
    Session::authenticated(User {
        id: RecordId::Number(1),
        name: "Sam".to_owned(),
        email: String::new(),
        role,
        invested_amount: None,
        total_profit: None,
        profit_usdt: None,
    })
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn loading_session_is_pending_everywhere() {
    let session = Session::loading();
    assert_eq!(evaluate(&session, &Access::GuestOnly), GuardDecision::Pending);
    assert_eq!(evaluate(&session, &Access::HomeOf(AppRoute::Dashboard)), GuardDecision::Pending);
}

#[test]
fn guest_pages_allow_visitors() {
    assert_eq!(evaluate(&Session::unauthenticated(), &Access::GuestOnly), GuardDecision::Allow);
}

#[test]
fn guest_pages_send_signed_in_users_home() {
    assert_eq!(
        evaluate(&signed_in(Role::Admin), &Access::GuestOnly),
        GuardDecision::Redirect(AppRoute::AdminDashboard)
    );
    assert_eq!(
        evaluate(&signed_in(Role::Investor), &Access::GuestOnly),
        GuardDecision::Redirect(AppRoute::Dashboard)
    );
}

#[test]
fn protected_pages_send_visitors_to_root() {
    let access = Access::Roles(vec![Role::Admin]);
    assert_eq!(evaluate(&Session::unauthenticated(), &access), GuardDecision::Redirect(AppRoute::Root));
}

#[test]
fn home_routes_admit_their_roles() {
    let dashboard = Access::HomeOf(AppRoute::Dashboard);
    assert_eq!(evaluate(&signed_in(Role::Investor), &dashboard), GuardDecision::Allow);
    assert_eq!(evaluate(&signed_in(Role::Other("auditor".to_owned())), &dashboard), GuardDecision::Allow);
    assert_eq!(
        evaluate(&signed_in(Role::Broker), &Access::HomeOf(AppRoute::BrokerDashboard)),
        GuardDecision::Allow
    );
}

#[test]
fn wrong_role_goes_to_its_own_home() {
    let admin_only = Access::Roles(vec![Role::Admin]);
    assert_eq!(
        evaluate(&signed_in(Role::Investor), &admin_only),
        GuardDecision::Redirect(AppRoute::Dashboard)
    );
    assert_eq!(
        evaluate(&signed_in(Role::Broker), &Access::HomeOf(AppRoute::Dashboard)),
        GuardDecision::Redirect(AppRoute::BrokerDashboard)
    );
    assert_eq!(
        evaluate(&signed_in(Role::Admin), &Access::HomeOf(AppRoute::Dashboard)),
        GuardDecision::Redirect(AppRoute::AdminDashboard)
    );
}

// =============================================================
// check_access
// =============================================================

#[test]
fn check_access_pending_while_loading() {
    assert_eq!(check_access(&Session::loading(), None), AccessCheck::Pending);
}

#[test]
fn check_access_denies_visitors_to_root() {
    assert_eq!(
        check_access(&Session::unauthenticated(), Some(&Role::Admin)),
        AccessCheck::Denied(AppRoute::Root)
    );
    assert_eq!(check_access(&Session::unauthenticated(), None), AccessCheck::Denied(AppRoute::Root));
}

#[test]
fn check_access_without_role_requires_only_login() {
    assert_eq!(check_access(&signed_in(Role::Broker), None), AccessCheck::Granted);
}

#[test]
fn check_access_matching_role_is_granted() {
    assert_eq!(check_access(&signed_in(Role::Admin), Some(&Role::Admin)), AccessCheck::Granted);
}

#[test]
fn check_access_wrong_role_redirects_home() {
    assert_eq!(
        check_access(&signed_in(Role::Broker), Some(&Role::Admin)),
        AccessCheck::Denied(AppRoute::BrokerDashboard)
    );
}

// =============================================================
// next_redirect
// =============================================================

#[test]
fn repeated_redirect_navigates_once() {
    let decision = GuardDecision::Redirect(AppRoute::Root);
    let (issued, target) = next_redirect(None, decision);
    assert_eq!(target, Some(AppRoute::Root));
    let (issued, target) = next_redirect(issued, decision);
    assert_eq!(target, None);
    assert_eq!(issued, Some(AppRoute::Root));
}

#[test]
fn allow_and_pending_end_the_settle() {
    assert_eq!(next_redirect(Some(AppRoute::Root), GuardDecision::Allow), (None, None));
    assert_eq!(next_redirect(Some(AppRoute::Root), GuardDecision::Pending), (None, None));

    // After the reset the same target is navigated to again.
    let (_, target) = next_redirect(None, GuardDecision::Redirect(AppRoute::Root));
    assert_eq!(target, Some(AppRoute::Root));
}

#[test]
fn new_target_navigates_again() {
    let (issued, _) = next_redirect(None, GuardDecision::Redirect(AppRoute::Root));
    let (issued, target) = next_redirect(issued, GuardDecision::Redirect(AppRoute::AdminDashboard));
    assert_eq!(target, Some(AppRoute::AdminDashboard));
    assert_eq!(issued, Some(AppRoute::AdminDashboard));
}
