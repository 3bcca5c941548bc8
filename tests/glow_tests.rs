use std::rc::Rc;

use yew::prelude::Reducible;
use zanimate::geometry::{Point, Rect};
use zanimate::glow::{Glow, GlowAction};

#[test]
fn hover_centres_the_gradient_under_the_cursor() {
    // 120x40 coming-soon button at (300, 500) in the viewport
    let button = Rect::new(300.0, 500.0, 120.0, 40.0);
    let glow = Rc::new(Glow::default())
        .reduce(GlowAction::Enter)
        .reduce(GlowAction::Track { rect: Some(button), pointer: Point::new(340.0, 512.0) });

    assert_eq!(glow.opacity, 1.0);
    assert_eq!(glow.cursor, Point::new(40.0, 12.0));
    assert_eq!(
        glow.background(),
        "radial-gradient(100px circle at 40px 12px, #656fe288, #00000026)"
    );

    let left = glow.reduce(GlowAction::Leave);
    assert_eq!(left.opacity, 0.0);
    assert!(left.style().starts_with("opacity: 0;"));
}

#[test]
fn tracking_without_a_mounted_button_keeps_state() {
    let glow = Rc::new(Glow::default()).reduce(GlowAction::Enter);
    let moved = glow.clone().reduce(GlowAction::Track { rect: None, pointer: Point::new(9.0, 9.0) });
    assert_eq!(*moved, *glow);
}
