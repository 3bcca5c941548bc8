use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageError {
    /// The browser refused a `play()` request, usually the autoplay policy.
    #[error("media playback rejected: {0}")]
    PlaybackRejected(String),
    #[error("element `{0}` is not mounted")]
    MissingElement(&'static str),
    #[error("invalid page config: {0}")]
    Config(String),
}

impl PageError {
    pub fn playback(reason: &JsValue) -> Self {
        PageError::PlaybackRejected(describe(reason))
    }
}

/// Best-effort text for a thrown JS value (DOMException, string, anything else).
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
