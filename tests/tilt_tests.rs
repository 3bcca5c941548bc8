mod common;

use common::{rotation, RecordingAnimator};
use yew::prelude::NodeRef;
use zanimate::geometry::{Point, Rect};
use zanimate::tilt::{self, Tilt, TiltProfile};

const TILE: Rect = Rect::new(40.0, 100.0, 400.0, 300.0);

fn centre(rect: Rect) -> Point {
    Point::new(rect.left + rect.width / 2.0, rect.top + rect.height / 2.0)
}

#[test]
fn tilt_is_zero_at_the_centre() {
    for profile in [TiltProfile::BENTO, TiltProfile::STORY] {
        let tilt = profile.track(&TILE, centre(TILE)).expect("measured tile");
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }
}

#[test]
fn tilt_is_monotonic_and_bounded_across_the_element() {
    for profile in [TiltProfile::BENTO, TiltProfile::STORY] {
        let samples: Vec<Tilt> = (0..=20)
            .map(|i| profile.tilt_at(Point::new(f64::from(i) / 20.0, 0.5)))
            .collect();
        for pair in samples.windows(2) {
            let step = pair[1].rotate_y - pair[0].rotate_y;
            // each step has the sign of the yaw gain and stays small
            assert!(step * profile.yaw.signum() > 0.0);
            assert!(step.abs() <= profile.yaw.abs() / 10.0 + 1e-9);
        }
        for tilt in &samples {
            assert!(tilt.rotate_y.abs() <= profile.yaw.abs());
            assert_eq!(tilt.rotate_x, 0.0);
        }
    }
}

#[test]
fn story_tilts_toward_the_pointer() {
    let profile = TiltProfile::STORY;
    let right = profile.track(&TILE, Point::new(TILE.left + TILE.width, centre(TILE).y)).unwrap();
    let top = profile.track(&TILE, Point::new(centre(TILE).x, TILE.top)).unwrap();
    assert_eq!(right.rotate_y, 10.0);
    assert_eq!(top.rotate_x, 10.0);
}

#[test]
fn pointer_leave_always_resets_rotation() {
    let animator = RecordingAnimator::default();
    let target = NodeRef::default();
    let profile = TiltProfile::STORY;

    for pointer in [Point::new(40.0, 100.0), Point::new(440.0, 400.0), centre(TILE)] {
        assert!(tilt::follow_pointer(&animator, &target, &TILE, &profile, pointer));
        tilt::settle(&animator, &target, &profile);
        assert_eq!(rotation(&animator.last().unwrap()), (0.0, 0.0));
    }

    // settling twice changes nothing
    tilt::settle(&animator, &target, &profile);
    let tweens = animator.tweens();
    assert_eq!(tweens[tweens.len() - 1], tweens[tweens.len() - 2]);
}

#[test]
fn story_tweens_use_the_configured_easing() {
    let animator = RecordingAnimator::default();
    let profile = TiltProfile::STORY;
    tilt::follow_pointer(&animator, &NodeRef::default(), &TILE, &profile, Point::new(100.0, 120.0));
    let tween = animator.last().unwrap();
    assert_eq!(tween.duration, 0.3);
    assert_eq!(tween.easing, profile.easing);
    assert!(tween.transform().unwrap().starts_with("perspective(500px)"));
}

#[test]
fn pointer_before_measurement_is_a_no_op() {
    let animator = RecordingAnimator::default();
    let unmounted = NodeRef::default();
    let issued = tilt::follow_pointer(
        &animator,
        &unmounted,
        &unmounted,
        &TiltProfile::STORY,
        Point::new(10.0, 10.0),
    );
    assert!(!issued);
    assert!(animator.calls.borrow().is_empty());
}
