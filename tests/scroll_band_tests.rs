mod common;

use common::RecordingAnimator;
use yew::prelude::NodeRef;
use zanimate::geometry::Length;
use zanimate::motion::Property;
use zanimate::scroll_band::{BandPhase, ClipConfig, ClipFrame, ScrollBand};

fn band() -> ScrollBand {
    ScrollBand::new(1000.0, 800.0)
}

#[test]
fn progress_is_linear_in_scroll_distance() {
    let band = band();
    assert_eq!(band.progress(0.0), 0.0);
    assert_eq!(band.progress(1000.0), 0.0);
    assert_eq!(band.progress(1200.0), 0.25);
    assert_eq!(band.progress(1400.0), 0.5);
    assert_eq!(band.progress(1800.0), 1.0);
    assert_eq!(band.progress(5000.0), 1.0);
}

#[test]
fn reversing_direction_restores_earlier_frames() {
    let config = ClipConfig::default();
    let band = band();
    let down: Vec<ClipFrame> = (0..=30).map(|i| config.frame_at(&band, 900.0 + f64::from(i) * 40.0)).collect();
    let up: Vec<ClipFrame> = (0..=30).rev().map(|i| config.frame_at(&band, 900.0 + f64::from(i) * 40.0)).collect();
    let mut reversed = up.clone();
    reversed.reverse();
    assert_eq!(down, reversed);
}

#[test]
fn frame_holds_its_ends_outside_the_band() {
    let config = ClipConfig::default();
    let band = band();
    assert_eq!(config.frame_at(&band, 0.0), config.from);
    assert_eq!(config.frame_at(&band, 99_999.0), config.to);
}

#[test]
fn scrubbing_reports_the_phase_and_issues_the_frame() {
    let animator = RecordingAnimator::default();
    let target = NodeRef::default();
    let config = ClipConfig::default();
    let band = band();

    assert_eq!(config.scrub_to(&animator, &target, &band, 500.0), BandPhase::Before);
    assert_eq!(config.scrub_to(&animator, &target, &band, 1400.0), BandPhase::Inside);
    assert_eq!(config.scrub_to(&animator, &target, &band, 2400.0), BandPhase::After);

    let tweens = animator.tweens();
    assert_eq!(tweens.len(), 3);
    assert_eq!(tweens[1].duration, config.scrub);
    assert_eq!(
        tweens[1].properties,
        vec![
            Property::Width(Length::Vw(65.0)),
            Property::Height(Length::Vh(80.0)),
            Property::BorderRadius(12.0),
        ]
    );
    assert_eq!(
        tweens[2].declarations(),
        vec![
            ("width", "100vw".to_string()),
            ("height", "100vh".to_string()),
            ("border-radius", "0px".to_string()),
        ]
    );
}

#[test]
fn only_the_inside_phase_pins() {
    assert!(!BandPhase::Before.is_pinned());
    assert!(BandPhase::Inside.is_pinned());
    assert!(!BandPhase::After.is_pinned());
}

#[test]
fn frame_is_fixed_to_the_viewport_only_inside_the_band() {
    assert!(BandPhase::Inside.pin_style().contains("position: fixed"));
    assert!(BandPhase::Before.pin_style().contains("position: absolute; top: 0"));
    assert!(BandPhase::After.pin_style().contains("position: absolute; bottom: 0"));
}

#[test]
fn track_band_spans_exactly_the_extra_track_height() {
    let config = ClipConfig::default();
    let viewport_height = 900.0;
    let track_top = 1500.0;
    let band = config.band_for_track(track_top, viewport_height);

    // Opens as the track's top reaches the top of the viewport.
    assert_eq!(band.start, track_top);
    // Closes as the track's bottom (one viewport plus the band) reaches the
    // bottom of the viewport, where the frame comes to rest.
    let track_bottom = track_top + viewport_height + config.band_length;
    assert_eq!(band.end(), track_bottom - viewport_height);
    assert_eq!(config.track_style(), "position: relative; height: calc(100vh + 800px);");

    let animator = RecordingAnimator::default();
    let target = NodeRef::default();
    assert_eq!(config.scrub_to(&animator, &target, &band, track_top - 1.0).pin_style(), BandPhase::Before.pin_style());
    assert_eq!(config.scrub_to(&animator, &target, &band, track_top + 400.0), BandPhase::Inside);
    assert_eq!(config.scrub_to(&animator, &target, &band, band.end() + 1.0), BandPhase::After);
}
