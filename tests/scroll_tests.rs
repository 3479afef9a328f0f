// Host-side tests for scroll arithmetic (header, anchors, parallax).
// The DOM wiring is wasm-only; these cover the pure decisions it applies.

use landing_web::constants::{ANCHOR_OFFSET_PX, PARALLAX_FACTOR, SCROLLED_THRESHOLD_PX};
use landing_web::core::*;

#[test]
fn header_threshold_is_strict() {
    assert!(!header_is_scrolled(0.0, SCROLLED_THRESHOLD_PX));
    assert!(!header_is_scrolled(4.0, SCROLLED_THRESHOLD_PX)); // exactly at threshold
    assert!(header_is_scrolled(4.1, SCROLLED_THRESHOLD_PX));
    assert!(header_is_scrolled(900.0, SCROLLED_THRESHOLD_PX));
}

#[test]
fn in_page_target_ignores_top_and_bare_hash() {
    assert_eq!(in_page_target(None), None);
    assert_eq!(in_page_target(Some("")), None);
    assert_eq!(in_page_target(Some("#")), None);
    assert_eq!(in_page_target(Some("#top")), None);
}

#[test]
fn in_page_target_accepts_fragments() {
    assert_eq!(in_page_target(Some("#pricing")), Some("#pricing"));
    assert_eq!(in_page_target(Some("#top-features")), Some("#top-features"));
    assert_eq!(in_page_target(Some("/about#team")), None);
    assert_eq!(in_page_target(Some("https://example.com/#x")), None);
}

#[test]
fn anchor_scroll_top_clears_header() {
    // Target 300px below viewport top, already scrolled 1000px, 64px header
    let y = anchor_scroll_top(300.0, 1000.0, 64.0, ANCHOR_OFFSET_PX);
    assert_eq!(y, 1228.0);

    // Without a header only the pad is subtracted
    assert_eq!(anchor_scroll_top(300.0, 0.0, 0.0, ANCHOR_OFFSET_PX), 292.0);

    // Targets above the viewport give smaller positions
    assert_eq!(anchor_scroll_top(-200.0, 1000.0, 64.0, 8.0), 728.0);
}

#[test]
fn reduced_motion_disables_smooth_scroll() {
    assert_eq!(scroll_behavior(true), ScrollMode::Instant);
    assert_eq!(scroll_behavior(false), ScrollMode::Smooth);
}

#[test]
fn parallax_offset_scales_scroll() {
    assert_eq!(parallax_offset(0.0, PARALLAX_FACTOR), 0.0);
    assert!((parallax_offset(200.0, PARALLAX_FACTOR) - 30.0).abs() < 1e-9);
}

#[test]
fn parallax_transform_formats_like_css() {
    assert_eq!(parallax_transform(0.0), "translate3d(0, 0px, 0)");
    assert_eq!(parallax_transform(1.5), "translate3d(0, 1.5px, 0)");
    assert_eq!(parallax_transform(30.0), "translate3d(0, 30px, 0)");
    assert_eq!(parallax_transform(-12.25), "translate3d(0, -12.25px, 0)");
}

#[test]
fn parallax_transform_folds_negative_zero() {
    // A negative factor at the top of the page yields -0.0
    let offset = parallax_offset(0.0, -PARALLAX_FACTOR);
    assert!(offset.is_sign_negative());
    assert_eq!(parallax_transform(offset), "translate3d(0, 0px, 0)");
}
