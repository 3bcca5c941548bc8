//! Tweens and the capability that plays them.
//!
//! Every animated element on the page goes through [`Animator::animate`]. The
//! browser build uses [`CssTransitions`], which writes the target values as
//! inline styles together with a matching `transition` so the browser does the
//! interpolation. Issuing a new tween to an element retargets whatever was in
//! flight, so the latest call always wins.

use log::{debug, warn};
use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::{CssStyleDeclaration, HtmlElement};
use yew::prelude::NodeRef;

use crate::error::describe;
use crate::geometry::Length;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    #[default]
    Linear,
    EaseOut,
    Power1Out,
    Power1InOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
            Easing::Power1Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Easing::Power1InOut => "cubic-bezier(0.455, 0.03, 0.515, 0.955)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Property {
    /// Vertical offset in px.
    TranslateY(f64),
    Opacity(f64),
    /// Degrees.
    RotateX(f64),
    /// Degrees.
    RotateY(f64),
    Scale(f64),
    /// Perspective depth in px, applied ahead of the other transform functions.
    Perspective(f64),
    Width(Length),
    Height(Length),
    /// Corner radius in px.
    BorderRadius(f64),
}

impl Property {
    fn css_name(&self) -> &'static str {
        match self {
            Property::TranslateY(_)
            | Property::RotateX(_)
            | Property::RotateY(_)
            | Property::Scale(_)
            | Property::Perspective(_) => "transform",
            Property::Opacity(_) => "opacity",
            Property::Width(_) => "width",
            Property::Height(_) => "height",
            Property::BorderRadius(_) => "border-radius",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub properties: Vec<Property>,
    /// Seconds.
    pub duration: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(duration: f64, easing: Easing) -> Self {
        Self { properties: Vec::new(), duration, easing }
    }

    pub fn with(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// The composed `transform` value, if the tween touches any transform property.
    pub fn transform(&self) -> Option<String> {
        let mut perspective = None;
        let mut translate_y = None;
        let mut rotate_x = None;
        let mut rotate_y = None;
        let mut scale = None;
        for property in &self.properties {
            match *property {
                Property::Perspective(v) => perspective = Some(v),
                Property::TranslateY(v) => translate_y = Some(v),
                Property::RotateX(v) => rotate_x = Some(v),
                Property::RotateY(v) => rotate_y = Some(v),
                Property::Scale(v) => scale = Some(v),
                _ => {}
            }
        }

        let mut parts = Vec::new();
        if let Some(v) = perspective {
            parts.push(format!("perspective({}px)", v));
        }
        if let Some(v) = translate_y {
            parts.push(format!("translateY({}px)", v));
        }
        if let Some(v) = rotate_x {
            parts.push(format!("rotateX({}deg)", v));
        }
        if let Some(v) = rotate_y {
            parts.push(format!("rotateY({}deg)", v));
        }
        if let Some(v) = scale {
            parts.push(format!("scale3d({v}, {v}, {v})"));
        }
        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// Inline style declarations holding the tween's end state.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(transform) = self.transform() {
            out.push(("transform", transform));
        }
        for property in &self.properties {
            match property {
                Property::Opacity(v) => out.push(("opacity", v.to_string())),
                Property::Width(len) => out.push(("width", len.to_string())),
                Property::Height(len) => out.push(("height", len.to_string())),
                Property::BorderRadius(v) => out.push(("border-radius", format!("{}px", v))),
                _ => {}
            }
        }
        out
    }

    /// `transition` value covering every property the tween writes.
    pub fn transition(&self) -> String {
        if self.duration <= 0.0 {
            return "none".to_string();
        }
        let mut names: Vec<&'static str> = Vec::new();
        for property in &self.properties {
            let name = property.css_name();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
            .iter()
            .map(|name| format!("{} {}s {}", name, self.duration, self.easing.css()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub trait Animator {
    fn animate(&self, target: &NodeRef, tween: Tween);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CssTransitions;

impl Animator for CssTransitions {
    fn animate(&self, target: &NodeRef, tween: Tween) {
        let Some(element) = target.cast::<HtmlElement>() else {
            debug!("Skipping tween, target not mounted");
            return;
        };
        if let Err(e) = write_styles(&element.style(), &tween) {
            warn!("Failed to apply tween: {}", describe(&e));
        }
    }
}

fn write_styles(style: &CssStyleDeclaration, tween: &Tween) -> Result<(), JsValue> {
    style.set_property("transition", &tween.transition())?;
    for (name, value) in tween.declarations() {
        style.set_property(name, &value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_functions_compose_in_fixed_order() {
        let tween = Tween::new(0.3, Easing::Power1InOut)
            .with(Property::RotateY(2.0))
            .with(Property::RotateX(-1.5))
            .with(Property::Perspective(500.0));
        assert_eq!(
            tween.transform().as_deref(),
            Some("perspective(500px) rotateX(-1.5deg) rotateY(2deg)")
        );
    }

    #[test]
    fn transition_lists_each_css_property_once() {
        let tween = Tween::new(0.2, Easing::Linear)
            .with(Property::TranslateY(-100.0))
            .with(Property::Opacity(0.0));
        assert_eq!(tween.transition(), "transform 0.2s linear, opacity 0.2s linear");
        assert_eq!(
            tween.declarations(),
            vec![
                ("transform", "translateY(-100px)".to_string()),
                ("opacity", "0".to_string()),
            ]
        );
    }

    #[test]
    fn zero_duration_disables_transition() {
        let tween = Tween::new(0.0, Easing::Linear).with(Property::Scale(0.98));
        assert_eq!(tween.transition(), "none");
        assert_eq!(tween.transform().as_deref(), Some("scale3d(0.98, 0.98, 0.98)"));
    }

    #[test]
    fn opacity_only_tween_has_no_transform() {
        let tween = Tween::new(0.5, Easing::EaseOut).with(Property::Opacity(1.0));
        assert_eq!(tween.transform(), None);
    }
}
