use super::*;

#[test]
fn default_is_loading_without_value() {
    let data = RemoteData::<u32>::default();
    assert!(data.loading);
    assert!(data.value.is_none());
    assert!(data.error.is_none());
}

#[test]
fn finish_ok_stores_value() {
    let mut data = RemoteData::default();
    data.finish(Ok(5));
    assert_eq!(data, RemoteData { value: Some(5), loading: false, error: None });
}

#[test]
fn finish_err_keeps_previous_value() {
    let mut data = RemoteData::default();
    data.finish(Ok(5));
    data.begin();
    data.finish(Err(ApiError::Status(500)));
    assert_eq!(data.value, Some(5));
    assert_eq!(data.error.as_deref(), Some("request failed: 500"));
    assert!(!data.loading);
}

#[test]
fn begin_clears_error() {
    let mut data = RemoteData::<u32>::default();
    data.finish(Err(ApiError::Unavailable));
    data.begin();
    assert!(data.loading);
    assert!(data.error.is_none());
}
