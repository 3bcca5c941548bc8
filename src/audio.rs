use std::future::Future;
use std::rc::Rc;

use log::debug;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;
use yew::prelude::{NodeRef, Reducible};

use crate::error::{describe, PageError};

pub const INDICATOR_BARS: [u8; 4] = [1, 2, 3, 4];

/// Background loop flag and the indicator bars that mirror it.
///
/// `request` counts toggles, so a playback result can be matched to the toggle
/// that started it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AudioState {
    pub playing: bool,
    pub indicator: bool,
    pub request: u32,
}

impl AudioState {
    pub fn toggled(self) -> Self {
        Self {
            playing: !self.playing,
            indicator: !self.indicator,
            request: self.request.wrapping_add(1),
        }
    }

    /// Both flags back off. Ignored when `request` is no longer the latest toggle.
    pub fn rejected(self, request: u32) -> Self {
        if request != self.request {
            return self;
        }
        Self { playing: false, indicator: false, request }
    }
}

pub enum AudioAction {
    Toggle,
    /// The play request started by toggle number `.0` failed.
    PlaybackRejected(u32),
}

impl Reducible for AudioState {
    type Action = AudioAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AudioAction::Toggle => Rc::new(self.toggled()),
            AudioAction::PlaybackRejected(request) => {
                let next = self.rejected(request);
                if next == *self {
                    self
                } else {
                    Rc::new(next)
                }
            }
        }
    }
}

pub fn indicator_delay(bar: u8) -> String {
    format!("animation-delay: {:.1}s;", f64::from(bar) * 0.1)
}

pub trait Playback {
    fn set_volume(&self, volume: f64);
    fn play(&self) -> impl Future<Output = Result<(), PageError>>;
    fn pause(&self);
}

/// Start or stop `player` to match `state`.
pub async fn sync_playback(player: &impl Playback, state: AudioState, volume: f64) -> Result<(), PageError> {
    if state.playing {
        player.set_volume(volume);
        player.play().await
    } else {
        player.pause();
        Ok(())
    }
}

/// The page's `<audio>` element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AudioElement(pub NodeRef);

impl AudioElement {
    fn element(&self) -> Option<HtmlAudioElement> {
        self.0.cast::<HtmlAudioElement>()
    }
}

impl Playback for AudioElement {
    fn set_volume(&self, volume: f64) {
        if let Some(audio) = self.element() {
            audio.set_volume(volume.clamp(0.0, 1.0));
        }
    }

    fn play(&self) -> impl Future<Output = Result<(), PageError>> {
        let audio = self.element();
        async move {
            let audio = audio.ok_or(PageError::MissingElement("audio"))?;
            let promise = audio.play().map_err(|e| PageError::playback(&e))?;
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| PageError::playback(&e))
        }
    }

    fn pause(&self) {
        if let Some(audio) = self.element() {
            if let Err(e) = audio.pause() {
                debug!("Pause failed: {}", describe(&e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_both_flags_together() {
        let on = AudioState::default().toggled();
        assert!(on.playing && on.indicator);
        let off = on.toggled();
        assert!(!off.playing && !off.indicator);
        assert_eq!(off.request, 2);
    }

    #[test]
    fn rejection_keeps_the_request_number() {
        let on = AudioState::default().toggled();
        assert_eq!(on.rejected(on.request), AudioState { playing: false, indicator: false, request: 1 });
    }

    #[test]
    fn bars_are_staggered_by_a_tenth_of_a_second() {
        let delays: Vec<String> = INDICATOR_BARS.iter().map(|&bar| indicator_delay(bar)).collect();
        assert_eq!(delays[0], "animation-delay: 0.1s;");
        assert_eq!(delays[3], "animation-delay: 0.4s;");
    }
}
