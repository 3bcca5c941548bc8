mod common;

use std::rc::Rc;

use common::RecordingAnimator;
use yew::prelude::{NodeRef, Reducible};
use zanimate::motion::Property;
use zanimate::nav_state::{self, NavAction, NavConfig, NavState, NavTracker};

fn states(offsets: &[f64]) -> Vec<NavState> {
    let mut tracker = NavTracker::default();
    offsets
        .iter()
        .map(|&offset| {
            tracker = tracker.observe(offset);
            tracker.state
        })
        .collect()
}

#[test]
fn scroll_down_then_up_sequence() {
    assert_eq!(
        states(&[0.0, 50.0, 120.0, 80.0]),
        vec![
            NavState::VisibleTop,
            NavState::HiddenFloating,
            NavState::HiddenFloating,
            NavState::VisibleFloating,
        ]
    );
}

#[test]
fn returning_to_the_top_is_always_visible_top() {
    let hidden = NavTracker::default().observe(300.0);
    assert_eq!(hidden.state, NavState::HiddenFloating);
    assert_eq!(hidden.observe(0.0).state, NavState::VisibleTop);

    let floating = hidden.observe(150.0);
    assert_eq!(floating.state, NavState::VisibleFloating);
    assert_eq!(floating.observe(0.0).state, NavState::VisibleTop);
}

#[test]
fn increasing_offsets_never_show_the_top_state() {
    let offsets: Vec<f64> = (0..50).map(|i| f64::from(i) * 13.0).collect();
    let seen = states(&offsets);
    assert_eq!(seen[0], NavState::VisibleTop);
    assert!(seen[1..].iter().all(|&s| s == NavState::HiddenFloating));
}

#[test]
fn reducer_tracks_samples_through_dispatch() {
    let mut tracker = Rc::new(NavTracker::default());
    for offset in [0.0, 50.0, 120.0, 80.0] {
        tracker = tracker.reduce(NavAction::Scrolled(offset));
    }
    assert_eq!(tracker.state, NavState::VisibleFloating);
    assert_eq!(tracker.last_offset, 80.0);
    assert_eq!(tracker.state.class(), Some(nav_state::FLOATING_CLASS));
}

#[test]
fn every_sample_reissues_a_tween_and_the_last_wins() {
    let animator = RecordingAnimator::default();
    let target = NodeRef::default();
    let config = NavConfig::default();
    let mut tracker = NavTracker::default();

    for offset in [10.0, 5.0, 30.0, 20.0] {
        tracker = tracker.observe(offset);
        nav_state::present(&animator, &target, tracker.state, &config);
    }

    let tweens = animator.tweens();
    assert_eq!(tweens.len(), 4);
    assert!(tweens.iter().all(|t| t.duration == 0.2));
    assert_eq!(
        animator.last().unwrap().properties,
        vec![Property::TranslateY(0.0), Property::Opacity(1.0)]
    );
    assert_eq!(
        tweens[2].properties,
        vec![Property::TranslateY(-100.0), Property::Opacity(0.0)]
    );
}
