use std::rc::Rc;

use serde::Deserialize;
use yew::prelude::{NodeRef, Reducible};

use crate::motion::{Animator, Easing, Property, Tween};

pub const FLOATING_CLASS: &str = "floating-nav";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    VisibleTop,
    VisibleFloating,
    HiddenFloating,
}

impl NavState {
    pub fn is_visible(self) -> bool {
        !matches!(self, NavState::HiddenFloating)
    }

    pub fn is_floating(self) -> bool {
        !matches!(self, NavState::VisibleTop)
    }

    pub fn class(self) -> Option<&'static str> {
        self.is_floating().then_some(FLOATING_CLASS)
    }

    pub fn tween(self, config: &NavConfig) -> Tween {
        let (offset, opacity) = if self.is_visible() { (0.0, 1.0) } else { (config.hidden_offset, 0.0) };
        Tween::new(config.duration, Easing::Power1Out)
            .with(Property::TranslateY(offset))
            .with(Property::Opacity(opacity))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    /// px the bar moves up by while hidden
    pub hidden_offset: f64,
    pub duration: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { hidden_offset: -100.0, duration: 0.2 }
    }
}

/// Navbar state plus the scroll sample it was derived from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavTracker {
    pub state: NavState,
    pub last_offset: f64,
}

impl NavTracker {
    pub fn observe(self, offset: f64) -> Self {
        let state = if offset <= 0.0 {
            NavState::VisibleTop
        } else if offset > self.last_offset {
            NavState::HiddenFloating
        } else if offset < self.last_offset {
            NavState::VisibleFloating
        } else {
            self.state
        };
        Self { state, last_offset: offset }
    }
}

pub enum NavAction {
    Scrolled(f64),
}

impl Reducible for NavTracker {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NavAction::Scrolled(offset) => Rc::new(self.observe(offset)),
        }
    }
}

/// Send the bar toward the position and opacity of `state`.
pub fn present(animator: &impl Animator, target: &NodeRef, state: NavState, config: &NavConfig) {
    animator.animate(target, state.tween(config));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holding_still_keeps_the_current_state() {
        let tracker = NavTracker::default().observe(50.0).observe(30.0);
        assert_eq!(tracker.observe(30.0).state, NavState::VisibleFloating);
    }

    #[test]
    fn floating_class_is_derived_from_state() {
        assert_eq!(NavState::VisibleTop.class(), None);
        assert_eq!(NavState::VisibleFloating.class(), Some(FLOATING_CLASS));
        assert_eq!(NavState::HiddenFloating.class(), Some(FLOATING_CLASS));
    }

    #[test]
    fn hidden_state_tweens_off_screen() {
        let tween = NavState::HiddenFloating.tween(&NavConfig::default());
        assert_eq!(tween.duration, 0.2);
        assert_eq!(tween.easing, Easing::Power1Out);
        assert_eq!(
            tween.properties,
            vec![Property::TranslateY(-100.0), Property::Opacity(0.0)]
        );
    }

    #[test]
    fn reducer_applies_scroll_samples() {
        let tracker = Rc::new(NavTracker::default()).reduce(NavAction::Scrolled(40.0));
        assert_eq!(tracker.state, NavState::HiddenFloating);
        assert_eq!(tracker.last_offset, 40.0);
    }
}
