use std::fmt;

use web_sys::{Element, MouseEvent};
use yew::prelude::NodeRef;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_client(event: &MouseEvent) -> Self {
        Self::new(f64::from(event.client_x()), f64::from(event.client_y()))
    }
}

/// Bounding box in viewport coordinates, as `getBoundingClientRect` reports it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// A rect with no area has not been laid out yet.
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn local(&self, point: Point) -> Point {
        Point::new(point.x - self.left, point.y - self.top)
    }

    /// Position of `point` inside the rect on a 0..=1 scale per axis.
    pub fn normalized(&self, point: Point) -> Option<Point> {
        if !self.is_measured() {
            return None;
        }
        let local = self.local(point);
        Some(Point::new(
            (local.x / self.width).clamp(0.0, 1.0),
            (local.y / self.height).clamp(0.0, 1.0),
        ))
    }
}

/// Measure-on-demand access to an element's current geometry.
pub trait Measure {
    fn measure(&self) -> Option<Rect>;
}

impl Measure for NodeRef {
    fn measure(&self) -> Option<Rect> {
        let element = self.cast::<Element>()?;
        let rect = element.get_bounding_client_rect();
        Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
    }
}

impl Measure for Rect {
    fn measure(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl<M: Measure> Measure for Option<M> {
    fn measure(&self) -> Option<Rect> {
        self.as_ref().and_then(Measure::measure)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    Vw(f64),
    Vh(f64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Vw(v) => write!(f, "{}vw", v),
            Length::Vh(v) => write!(f, "{}vh", v),
        }
    }
}
