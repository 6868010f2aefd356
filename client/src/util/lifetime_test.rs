use std::cell::Cell;
use std::future::ready;
use std::rc::Rc;

use super::*;

fn block_on<F: Future>(fut: F) -> F::Output {
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
fn new_flag_is_alive() {
    assert!(ScopeAlive::new().is_alive());
}

#[test]
fn cancel_is_visible_through_clones() {
    let alive = ScopeAlive::new();
    let clone = alive.clone();
    alive.cancel();
    assert!(!clone.is_alive());
}

#[test]
fn guard_applies_result_while_alive() {
    let seen = Rc::new(Cell::new(0));
    let sink = seen.clone();
    block_on(ScopeAlive::new().guard(ready(7), move |v| sink.set(v)));
    assert_eq!(seen.get(), 7);
}

#[test]
fn guard_drops_result_after_cancel() {
    let seen = Rc::new(Cell::new(0));
    let sink = seen.clone();
    let alive = ScopeAlive::new();
    alive.cancel();
    block_on(alive.guard(ready(7), move |v| sink.set(v)));
    assert_eq!(seen.get(), 0);
}
