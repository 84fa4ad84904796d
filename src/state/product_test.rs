use super::*;

fn raw_with_image(image: Option<&str>) -> RawProduct {
    RawProduct { title: Some("Chair".to_owned()), image: image.map(str::to_owned), ..RawProduct::default() }
}

// =============================================================
// resolve_image
// =============================================================

#[test]
fn missing_image_falls_back() {
    assert_eq!(normalize(raw_with_image(None)).image, FALLBACK_IMAGE);
}

#[test]
fn sentinel_image_falls_back() {
    assert_eq!(normalize(raw_with_image(Some("N/A"))).image, FALLBACK_IMAGE);
}

#[test]
fn empty_or_bracket_only_image_falls_back() {
    assert_eq!(resolve_image(Some("")), FALLBACK_IMAGE);
    assert_eq!(resolve_image(Some("  ")), FALLBACK_IMAGE);
    assert_eq!(resolve_image(Some("['']")), FALLBACK_IMAGE);
    assert_eq!(resolve_image(Some("[ ]")), FALLBACK_IMAGE);
}

#[test]
fn stringified_list_image_is_unwrapped() {
    assert_eq!(resolve_image(Some("['https://img.example/a.jpg'")), "https://img.example/a.jpg");
    assert_eq!(resolve_image(Some(" ['https://img.example/a.jpg'] ")), "https://img.example/a.jpg");
    assert_eq!(resolve_image(Some("\"https://img.example/b.jpg\"")), "https://img.example/b.jpg");
}

#[test]
fn plain_image_url_is_kept() {
    assert_eq!(resolve_image(Some("https://img.example/c.png")), "https://img.example/c.png");
}

// =============================================================
// truncate_with_ellipsis
// =============================================================

#[test]
fn short_title_still_gets_ellipsis() {
    let product = normalize(RawProduct { title: Some("Sofa".to_owned()), ..RawProduct::default() });
    assert_eq!(product.title, "Sofa");
    assert_eq!(product.display_title, "Sofa...");
}

#[test]
fn long_title_is_cut_at_sixty_chars() {
    let title = "x".repeat(80);
    let product = normalize(RawProduct { title: Some(title), ..RawProduct::default() });
    assert_eq!(product.display_title, format!("{}...", "x".repeat(60)));
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let text = "é".repeat(5);
    assert_eq!(truncate_with_ellipsis(&text, 3), "ééé...");
}

#[test]
fn missing_title_renders_bare_marker() {
    let product = normalize(RawProduct::default());
    assert_eq!(product.title, "");
    assert_eq!(product.display_title, "...");
}

#[test]
fn description_truncated_only_when_ai_description_present() {
    let without = normalize(RawProduct { title: Some("plain".to_owned()), ..RawProduct::default() });
    assert!(without.display_description.is_none());

    let with = normalize(RawProduct { ai_description: Some("y".repeat(150)), ..RawProduct::default() });
    assert_eq!(with.display_description, Some(format!("{}...", "y".repeat(100))));
}

// =============================================================
// Price, attributes, similarity
// =============================================================

#[test]
fn positive_price_has_two_decimal_label() {
    let product = normalize(RawProduct { price: Some(49.5), ..RawProduct::default() });
    assert_eq!(product.price_label().as_deref(), Some("$49.50"));
}

#[test]
fn zero_negative_or_missing_price_suppresses_label() {
    for price in [Some(0.0), Some(-3.0), None] {
        let product = normalize(RawProduct { price, ..RawProduct::default() });
        assert_eq!(product.price, 0.0);
        assert!(product.price_label().is_none());
    }
}

#[test]
fn sentinel_and_empty_attributes_are_hidden() {
    let product = normalize(RawProduct {
        material: Some("N/A".to_owned()),
        color: Some(String::new()),
        ..RawProduct::default()
    });
    assert!(product.material.is_none());
    assert!(product.color.is_none());
}

#[test]
fn real_attributes_are_kept() {
    let product = normalize(RawProduct {
        material: Some("Oak".to_owned()),
        color: Some("Natural".to_owned()),
        ..RawProduct::default()
    });
    assert_eq!(product.material.as_deref(), Some("Oak"));
    assert_eq!(product.color.as_deref(), Some("Natural"));
}

#[test]
fn similarity_renders_as_rounded_percentage() {
    let product = normalize(RawProduct { similarity_score: Some(0.876), ..RawProduct::default() });
    assert_eq!(product.match_percent(), Some(88));
    assert_eq!(product.match_label().as_deref(), Some("88% Match"));
}

#[test]
fn similarity_is_clamped_to_unit_interval() {
    let high = normalize(RawProduct { similarity_score: Some(1.4), ..RawProduct::default() });
    let low = normalize(RawProduct { similarity_score: Some(-0.2), ..RawProduct::default() });
    assert_eq!(high.match_percent(), Some(100));
    assert_eq!(low.match_percent(), Some(0));
}

#[test]
fn missing_similarity_has_no_badge() {
    assert!(normalize(RawProduct::default()).match_label().is_none());
}

// =============================================================
// render_keys
// =============================================================

fn with_id(id: Option<&str>) -> Product {
    normalize(RawProduct { id: id.map(str::to_owned), ..RawProduct::default() })
}

#[test]
fn render_keys_use_catalog_id() {
    let products = vec![with_id(Some("B01")), with_id(Some("B02"))];
    assert_eq!(render_keys(&products), vec!["B01", "B02"]);
}

#[test]
fn render_keys_fall_back_to_index_without_id() {
    let products = vec![with_id(Some("B01")), with_id(None), with_id(Some("B03"))];
    assert_eq!(render_keys(&products), vec!["B01", "#1", "B03"]);
}

#[test]
fn render_keys_fall_back_to_index_for_repeated_id() {
    let products = vec![with_id(Some("B01")), with_id(Some("B01"))];
    assert_eq!(render_keys(&products), vec!["B01", "#1"]);
}

#[test]
fn render_keys_empty_list() {
    assert!(render_keys(&[]).is_empty());
}
