// Host-side tests for active-link selection.

use landing_web::constants::SPY_OFFSET_PX;
use landing_web::core::{current_section, link_is_active};

const HEADER: f64 = 64.0;

#[test]
fn no_sections_means_no_active_link() {
    let empty: Vec<(&str, f64)> = Vec::new();
    assert_eq!(current_section(empty, HEADER, SPY_OFFSET_PX), None);
}

#[test]
fn first_section_is_default() {
    // Nothing has reached the header yet
    let sections = [("hero", 200.0), ("features", 900.0), ("pricing", 1600.0)];
    assert_eq!(
        current_section(sections, HEADER, SPY_OFFSET_PX),
        Some("hero")
    );
}

#[test]
fn last_passed_section_wins() {
    let sections = [("hero", -900.0), ("features", -100.0), ("pricing", 500.0)];
    assert_eq!(
        current_section(sections, HEADER, SPY_OFFSET_PX),
        Some("features")
    );
}

#[test]
fn boundary_counts_as_passed() {
    // top - header - offset == 0
    let sections = [("hero", -500.0), ("features", 84.0)];
    assert_eq!(
        current_section(sections, HEADER, SPY_OFFSET_PX),
        Some("features")
    );
    let sections = [("hero", -500.0), ("features", 84.5)];
    assert_eq!(current_section(sections, HEADER, SPY_OFFSET_PX), Some("hero"));
}

#[test]
fn header_height_shifts_the_line() {
    let sections = [("hero", -500.0), ("features", 50.0)];
    assert_eq!(current_section(sections, 0.0, SPY_OFFSET_PX), Some("hero"));
    assert_eq!(
        current_section(sections, 40.0, SPY_OFFSET_PX),
        Some("features")
    );
}

#[test]
fn empty_id_highlights_nothing() {
    // `main section[id]` also matches id=""
    let sections = [("", 100.0), ("b", 500.0)];
    assert_eq!(current_section(sections, 0.0, SPY_OFFSET_PX), None);

    let sections = [("a", -300.0), ("", -10.0), ("c", 400.0)];
    assert_eq!(current_section(sections, 0.0, SPY_OFFSET_PX), None);

    // A later named section still takes over
    let sections = [("", -300.0), ("b", -10.0)];
    assert_eq!(current_section(sections, 0.0, SPY_OFFSET_PX), Some("b"));
}

#[test]
fn link_matching() {
    assert!(link_is_active(Some("#features"), "features"));
    assert!(!link_is_active(Some("#features"), "pricing"));
    assert!(!link_is_active(Some("features"), "features"));
    assert!(!link_is_active(Some("#"), "features"));
    assert!(!link_is_active(None, "features"));
}
