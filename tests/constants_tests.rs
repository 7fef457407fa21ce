// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_are_fractions() {
    for t in [
        REVEAL_THRESHOLD,
        COUNTER_THRESHOLD,
        NAV_SECTION_THRESHOLD,
        CTA_THRESHOLD,
    ] {
        assert!(t > 0.0 && t <= 1.0);
    }
    // Counters wait for more of the element than plain reveals.
    assert!(COUNTER_THRESHOLD > REVEAL_THRESHOLD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_positive() {
    assert!(STAGGER_CHILD_STEP_MS > 0);
    assert!(GROUP_CASCADE_STEP_MS > 0);
    assert!(GROUP_CASCADE_CYCLE > 0);
    assert_eq!(EMBLEM_REVEAL_DELAY_MS, 150);
    assert!(COUNTER_DURATION_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gallery_feel() {
    assert!(GALLERY_CARD_GAP_PX >= 0.0);
    assert!(GALLERY_DRAG_FACTOR >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_stay_on_screen() {
    assert!(PARTICLE_COUNT > 0);
    let (left_min, left_span) = PARTICLE_LEFT_PCT;
    assert!(left_min >= 0.0 && left_min + left_span <= 100.0);
    assert!(PARTICLE_HEIGHT_PX.0 > 0.0);
    assert!(PARTICLE_DURATION_SEC.0 > 0.0);
}

#[test]
fn reveal_timing_matches_page_design() {
    assert_eq!(STAGGER_CHILD_STEP_MS, 120);
    assert_eq!(GROUP_CASCADE_STEP_MS, 80);
    assert_eq!(GROUP_CASCADE_CYCLE, 6);
    assert_eq!(COUNTER_DURATION_MS, 1800.0);
}

#[test]
fn reveal_margin_pulls_bottom_edge_in() {
    assert!(REVEAL_ROOT_MARGIN.ends_with("-30px 0px"));
}

#[test]
fn markup_ids_are_plain_ids() {
    for id in [
        HEADER_ID,
        BURGER_ID,
        MOBILE_NAV_ID,
        NAV_OVERLAY_ID,
        PARTICLES_ID,
        VIDEO_VERTICAL_ID,
        VIDEO_OVERLAY_ID,
        GALLERY_TRACK_ID,
        CTA_SECTION_ID,
        VID_FORWARD_ID,
        VID_REVERSE_ID,
    ] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "{} should not carry a selector prefix", id);
    }
}
