use super::*;

#[test]
fn recommend_endpoint_encodes_query_and_top_k() {
    assert_eq!(
        recommend_endpoint("", "modern sofa", 3),
        "/api/recommend?query=modern%20sofa&top_k=3"
    );
}

#[test]
fn recommend_endpoint_escapes_reserved_characters() {
    assert_eq!(
        recommend_endpoint("http://localhost:8000", "desk & chair?", 3),
        "http://localhost:8000/api/recommend?query=desk%20%26%20chair%3F&top_k=3"
    );
}

#[test]
fn analytics_endpoint_formats_expected_path() {
    assert_eq!(analytics_endpoint(""), "/api/analytics");
    assert_eq!(analytics_endpoint("http://api.local"), "http://api.local/api/analytics");
}

#[test]
fn api_error_messages_name_the_failure() {
    assert_eq!(ApiError::Status(502).to_string(), "server responded with status 502");
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(ApiError::Decode("missing field".to_owned()).to_string(), "malformed response: missing field");
}

#[test]
fn http_service_default_uses_configured_base() {
    assert_eq!(HttpService::default().base(), config::api_base());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_service_is_unavailable_outside_browser() {
    let result = futures::executor::block_on(HttpService::new("").recommend("sofa", 3));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_analytics_is_unavailable_outside_browser() {
    let result = futures::executor::block_on(fetch_analytics());
    assert_eq!(result, Err(ApiError::Unavailable));
}
