use super::*;

#[test]
fn fallback_on_error_swaps_broken_image_for_placeholder() {
    assert_eq!(fallback_on_error("https://img.example/gone.jpg").as_deref(), Some(FALLBACK_IMAGE));
}

#[test]
fn fallback_on_error_stops_at_placeholder() {
    assert!(fallback_on_error(FALLBACK_IMAGE).is_none());
}
