#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn now_millis_is_after_2024() {
    // 2024-01-01T00:00:00Z
    assert!(now_millis() > 1_704_067_200_000);
}

#[test]
fn hour_ms_matches_seconds_times_thousand() {
    assert_eq!(HOUR_MS, 3_600_000);
}
