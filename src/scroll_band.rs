//! Scroll-bound pin-and-resize for the About clip.
//!
//! Progress through a band is a pure function of the scroll offset, so scrolling
//! back over the band reproduces every intermediate frame exactly.

use serde::Deserialize;
use yew::prelude::NodeRef;

use crate::geometry::Length;
use crate::motion::{Animator, Easing, Property, Tween};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BandPhase {
    Before,
    Inside,
    After,
}

impl BandPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            BandPhase::Before => "before",
            BandPhase::Inside => "inside",
            BandPhase::After => "after",
        }
    }

    pub fn is_pinned(self) -> bool {
        self == BandPhase::Inside
    }

    /// Placement of the one-viewport-tall frame inside its track: resting at the
    /// top before the band, fixed to the viewport through it, resting at the
    /// bottom once it is over.
    pub fn pin_style(self) -> &'static str {
        match self {
            BandPhase::Before => "position: absolute; top: 0; left: 0;",
            BandPhase::Inside => "position: fixed; top: 0; left: 0;",
            BandPhase::After => "position: absolute; bottom: 0; left: 0;",
        }
    }
}

/// Scroll offsets `[start, start + length]` in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollBand {
    pub start: f64,
    pub length: f64,
}

impl ScrollBand {
    pub fn new(start: f64, length: f64) -> Self {
        Self { start, length: length.max(0.0) }
    }

    /// Band that opens when the element's centre meets the viewport centre.
    pub fn centered(element_top: f64, element_height: f64, viewport_height: f64, length: f64) -> Self {
        Self::new(element_top + element_height / 2.0 - viewport_height / 2.0, length)
    }

    pub fn end(&self) -> f64 {
        self.start + self.length
    }

    pub fn phase(&self, offset: f64) -> BandPhase {
        if offset < self.start {
            BandPhase::Before
        } else if offset <= self.end() && self.length > 0.0 {
            BandPhase::Inside
        } else {
            BandPhase::After
        }
    }

    pub fn progress(&self, offset: f64) -> f64 {
        if self.length <= 0.0 {
            return if offset >= self.start { 1.0 } else { 0.0 };
        }
        ((offset - self.start) / self.length).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipFrame {
    pub width_vw: f64,
    pub height_vh: f64,
    pub radius_px: f64,
}

impl ClipFrame {
    pub fn lerp(self, to: ClipFrame, t: f64) -> ClipFrame {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        ClipFrame {
            width_vw: mix(self.width_vw, to.width_vw),
            height_vh: mix(self.height_vh, to.height_vh),
            radius_px: mix(self.radius_px, to.radius_px),
        }
    }

    pub fn tween(&self, scrub: f64) -> Tween {
        Tween::new(scrub, Easing::Linear)
            .with(Property::Width(Length::Vw(self.width_vw)))
            .with(Property::Height(Length::Vh(self.height_vh)))
            .with(Property::BorderRadius(self.radius_px))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClipConfig {
    /// Scroll distance in px over which the clip opens up.
    pub band_length: f64,
    /// Seconds the rendered frame trails the scroll position.
    pub scrub: f64,
    pub from: ClipFrame,
    pub to: ClipFrame,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            band_length: 800.0,
            scrub: 0.5,
            from: ClipFrame { width_vw: 30.0, height_vh: 60.0, radius_px: 24.0 },
            to: ClipFrame { width_vw: 100.0, height_vh: 100.0, radius_px: 0.0 },
        }
    }
}

impl ClipConfig {
    /// Inline style for the track: one viewport for the frame plus the band.
    pub fn track_style(&self) -> String {
        format!("position: relative; height: calc(100vh + {}px);", self.band_length)
    }

    /// Band for a track whose top sits at `track_top` in document coordinates.
    /// The frame fills the viewport, so its centre meets the viewport centre as
    /// the track's top reaches the top of the viewport.
    pub fn band_for_track(&self, track_top: f64, viewport_height: f64) -> ScrollBand {
        ScrollBand::centered(track_top, viewport_height, viewport_height, self.band_length)
    }

    pub fn frame_at(&self, band: &ScrollBand, offset: f64) -> ClipFrame {
        self.from.lerp(self.to, band.progress(offset))
    }

    /// Push the frame for `offset` to `target` and report where in the band we are.
    pub fn scrub_to(
        &self,
        animator: &impl Animator,
        target: &NodeRef,
        band: &ScrollBand,
        offset: f64,
    ) -> BandPhase {
        animator.animate(target, self.frame_at(band, offset).tween(self.scrub));
        band.phase(offset)
    }
}
