// Shared fixtures for the host-side integration tests.

#![allow(dead_code)]

use std::cell::RefCell;

use yew::prelude::NodeRef;
use zanimate::motion::{Animator, Property, Tween};

/// Animator that remembers every tween instead of touching the DOM.
#[derive(Default)]
pub struct RecordingAnimator {
    pub calls: RefCell<Vec<(NodeRef, Tween)>>,
}

impl RecordingAnimator {
    pub fn tweens(&self) -> Vec<Tween> {
        self.calls.borrow().iter().map(|(_, tween)| tween.clone()).collect()
    }

    pub fn last(&self) -> Option<Tween> {
        self.calls.borrow().last().map(|(_, tween)| tween.clone())
    }
}

impl Animator for RecordingAnimator {
    fn animate(&self, target: &NodeRef, tween: Tween) {
        self.calls.borrow_mut().push((target.clone(), tween));
    }
}

pub fn rotation(tween: &Tween) -> (f64, f64) {
    let mut x = f64::NAN;
    let mut y = f64::NAN;
    for property in &tween.properties {
        match *property {
            Property::RotateX(v) => x = v,
            Property::RotateY(v) => y = v,
            _ => {}
        }
    }
    (x, y)
}
