use std::rc::Rc;

use yew::prelude::Reducible;

use crate::geometry::{Measure, Point, Rect};

pub const GLOW_RADIUS_PX: f64 = 100.0;
const GLOW_INNER: &str = "#656fe288";
const GLOW_OUTER: &str = "#00000026";

/// Cursor-following highlight on a hoverable button.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Glow {
    /// Cursor offset from the element's top-left corner.
    pub cursor: Point,
    pub opacity: f64,
}

impl Glow {
    pub fn enter(self) -> Self {
        Self { opacity: 1.0, ..self }
    }

    pub fn leave(self) -> Self {
        Self { opacity: 0.0, ..self }
    }

    /// Re-anchor on the pointer. An unmounted target leaves the glow where it was.
    pub fn follow(self, target: &impl Measure, pointer: Point) -> Self {
        match target.measure() {
            Some(rect) => Self { cursor: rect.local(pointer), ..self },
            None => self,
        }
    }

    pub fn background(&self) -> String {
        format!(
            "radial-gradient({}px circle at {}px {}px, {}, {})",
            GLOW_RADIUS_PX, self.cursor.x, self.cursor.y, GLOW_INNER, GLOW_OUTER
        )
    }

    pub fn style(&self) -> String {
        format!("opacity: {}; background: {};", self.opacity, self.background())
    }
}

pub enum GlowAction {
    Enter,
    Leave,
    Track { rect: Option<Rect>, pointer: Point },
}

impl Reducible for Glow {
    type Action = GlowAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            GlowAction::Enter => self.enter(),
            GlowAction::Leave => self.leave(),
            GlowAction::Track { rect, pointer } => self.follow(&rect, pointer),
        };
        Rc::new(next)
    }
}
