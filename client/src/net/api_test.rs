use super::*;

#[test]
fn summary_endpoint_carries_scope() {
    assert_eq!(summary_endpoint(DashboardScope::Admin), "/api/dashboard/summary?scope=admin");
    assert_eq!(summary_endpoint(DashboardScope::Broker), "/api/dashboard/summary?scope=broker");
}

#[test]
fn chart_endpoint_carries_scope() {
    assert_eq!(chart_endpoint(DashboardScope::Investor), "/api/dashboard/chart?scope=investor");
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[cfg(not(feature = "hydrate"))]
mod without_browser {
    use super::*;

    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        use std::pin::pin;
        use std::task::{Context, Poll, Waker};

        let mut fut = pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        loop {
            if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
                return out;
            }
        }
    }

    #[test]
    fn login_is_unavailable_on_server() {
        let request = LoginRequest {
            email: "a@b.com".to_owned(),
            password: "pw".to_owned(),
            role: crate::net::types::Role::Investor,
        };
        assert_eq!(block_on(login(&request)), Err(ApiError::Unavailable));
    }

    #[test]
    fn fetches_are_unavailable_on_server() {
        assert_eq!(block_on(fetch_transactions(Some("t"))), Err(ApiError::Unavailable));
        assert_eq!(block_on(logout("t")), Err(ApiError::Unavailable));
    }
}
