use log::{info, warn};
use serde::Deserialize;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::window;

use crate::error::{describe, PageError};
use crate::nav_state::NavConfig;
use crate::scroll_band::ClipConfig;
use crate::tilt::TiltProfile;

pub const NAV_ITEMS: [&str; 5] = ["Nexus", "Mint", "About", "Features", "Contact"];

/// Ids of the sections rendered on the page. Nexus and Mint have no section
/// yet, so their links scroll nowhere.
pub const SECTION_IDS: [&str; 4] = ["about", "features", "story", "contact"];

pub const LOGO_SRC: &str = "/img/logo.png";
pub const AUDIO_SRC: &str = "/audio/loop.mp3";
pub const ABOUT_IMAGE_SRC: &str = "/img/about.webp";
pub const STORY_IMAGE_SRC: &str = "/img/entrance.webp";

/// Global the host page may define to override tunables before the app boots.
pub const CONFIG_GLOBAL: &str = "zanimateConfig";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub audio_volume: f64,
    pub nav: NavConfig,
    pub bento_tilt: TiltProfile,
    pub story_tilt: TiltProfile,
    pub clip: ClipConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            audio_volume: 0.5,
            nav: NavConfig::default(),
            bento_tilt: TiltProfile::BENTO,
            story_tilt: TiltProfile::STORY,
            clip: ClipConfig::default(),
        }
    }
}

pub fn load() -> PageConfig {
    match read_override() {
        Ok(Some(config)) => {
            info!("Using page config from window.{}", CONFIG_GLOBAL);
            config
        }
        Ok(None) => PageConfig::default(),
        Err(e) => {
            warn!("Ignoring page config override: {}", e);
            PageConfig::default()
        }
    }
}

fn read_override() -> Result<Option<PageConfig>, PageError> {
    let Some(window) = window() else {
        return Ok(None);
    };
    let value = Reflect::get(window.as_ref(), &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| PageError::Config(describe(&e)))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| PageError::Config(e.to_string()))
}

pub fn anchor_id(item: &str) -> String {
    item.to_lowercase()
}
