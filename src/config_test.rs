use super::*;

#[test]
fn normalize_base_strips_trailing_slashes() {
    assert_eq!(normalize_base("http://localhost:8000/"), "http://localhost:8000");
    assert_eq!(normalize_base("http://localhost:8000//"), "http://localhost:8000");
}

#[test]
fn normalize_base_keeps_empty_for_same_origin() {
    assert_eq!(normalize_base(""), "");
    assert_eq!(normalize_base("  "), "");
}

#[test]
fn api_base_never_ends_with_slash() {
    assert!(!api_base().ends_with('/'));
}
