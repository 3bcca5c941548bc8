use yew::prelude::*;

pub mod audio;
pub mod config;
pub mod error;
pub mod geometry;
pub mod glow;
pub mod motion;
pub mod nav_state;
pub mod scroll_band;
pub mod tilt;
pub mod title;

pub mod components {
    pub mod animated_title;
    pub mod bento;
    pub mod button;
}

pub mod pages {
    pub mod about;
    pub mod features;
    pub mod footer;
    pub mod landing;
    pub mod navbar;
    pub mod story;
}

use config::PageConfig;
use pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    let page_config = use_memo(|_| config::load(), ());

    html! {
        <ContextProvider<PageConfig> context={(*page_config).clone()}>
            <Landing />
        </ContextProvider<PageConfig>>
    }
}
