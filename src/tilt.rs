use serde::Deserialize;
use yew::prelude::NodeRef;

use crate::geometry::{Measure, Point};
use crate::motion::{Animator, Easing, Property, Tween};

/// How a pointer position inside an element maps onto a 3-D tilt.
///
/// `pitch` and `yaw` are signed gains in degrees: the rotation reached when the
/// pointer sits on the bottom/right edge. The top/left edges give the negated
/// value and the centre gives zero.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TiltProfile {
    pub pitch: f64,
    pub yaw: f64,
    /// px
    pub perspective: f64,
    pub scale: Option<f64>,
    /// Seconds taken to reach a new tilt, and to settle back on leave.
    pub settle: f64,
    pub easing: Easing,
}

impl TiltProfile {
    /// Feature tiles: 4° each way, slight shrink, applied immediately.
    pub const BENTO: Self = Self {
        pitch: 4.0,
        yaw: -4.0,
        perspective: 700.0,
        scale: Some(0.98),
        settle: 0.0,
        easing: Easing::Linear,
    };

    /// Story image: 10° each way, eased over 0.3s.
    pub const STORY: Self = Self {
        pitch: -10.0,
        yaw: 10.0,
        perspective: 500.0,
        scale: None,
        settle: 0.3,
        easing: Easing::Power1InOut,
    };

    pub fn tilt_at(&self, normalized: Point) -> Tilt {
        let dx = (normalized.x.clamp(0.0, 1.0) - 0.5) * 2.0;
        let dy = (normalized.y.clamp(0.0, 1.0) - 0.5) * 2.0;
        Tilt {
            rotate_x: dy * self.pitch,
            rotate_y: dx * self.yaw,
            scale: self.scale,
        }
    }

    /// Tilt for a pointer in viewport coordinates, or `None` while the target
    /// has not been measured.
    pub fn track(&self, target: &impl Measure, pointer: Point) -> Option<Tilt> {
        let rect = target.measure()?;
        rect.normalized(pointer).map(|p| self.tilt_at(p))
    }

    pub fn tween(&self, tilt: Tilt) -> Tween {
        let mut tween = Tween::new(self.settle, self.easing)
            .with(Property::Perspective(self.perspective))
            .with(Property::RotateX(tilt.rotate_x))
            .with(Property::RotateY(tilt.rotate_y));
        if let Some(scale) = tilt.scale {
            tween = tween.with(Property::Scale(scale));
        }
        tween
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: Option<f64>,
}

impl Tilt {
    pub const NEUTRAL: Self = Self { rotate_x: 0.0, rotate_y: 0.0, scale: None };

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    /// Inline `transform` value. The neutral tilt clears the transform entirely.
    pub fn css(&self, profile: &TiltProfile) -> String {
        if self.is_neutral() {
            return String::new();
        }
        profile.tween(*self).transform().unwrap_or_default()
    }

    /// Inline `transform` plus the profile's `transition`, for elements styled
    /// straight from render state.
    pub fn style(&self, profile: &TiltProfile) -> String {
        let transform = match self.css(profile) {
            css if css.is_empty() => "none".to_string(),
            css => css,
        };
        format!("transform: {}; transition: {};", transform, profile.tween(*self).transition())
    }
}

/// Tween `target` toward the tilt under `pointer`. Returns whether anything was issued.
pub fn follow_pointer(
    animator: &impl Animator,
    target: &NodeRef,
    measure: &impl Measure,
    profile: &TiltProfile,
    pointer: Point,
) -> bool {
    match profile.track(measure, pointer) {
        Some(tilt) => {
            animator.animate(target, profile.tween(tilt));
            true
        }
        None => false,
    }
}

/// Ease `target` back to the identity rotation.
pub fn settle(animator: &impl Animator, target: &NodeRef, profile: &TiltProfile) {
    let neutral = Tween::new(profile.settle, profile.easing)
        .with(Property::RotateX(0.0))
        .with(Property::RotateY(0.0));
    animator.animate(target, neutral);
}
