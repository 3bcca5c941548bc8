use log::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::audio::{self, AudioAction, AudioElement, AudioState, INDICATOR_BARS};
use crate::components::button::{Button, LocationArrow};
use crate::config::{self, PageConfig, AUDIO_SRC, LOGO_SRC, NAV_ITEMS};
use crate::motion::CssTransitions;
use crate::nav_state::{self, NavAction, NavTracker};

/// Smooth-scroll to the section with `id`. Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        debug!("No section #{} to scroll to", id);
        return;
    };
    let mut options = ScrollIntoViewOptions::new();
    options
        .behavior(ScrollBehavior::Smooth)
        .block(ScrollLogicalPosition::Start)
        .inline(ScrollLogicalPosition::Nearest);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Inline style for the `index`th mobile link, staggered by 0.1s per link.
pub fn mobile_link_style(index: usize, open: bool) -> String {
    let delay = index as f64 * 0.1;
    format!(
        "transform: translateY({}); opacity: {}; transition: transform 0.4s ease {:.1}s, opacity 0.4s ease {:.1}s;",
        if open { "0" } else { "20px" },
        if open { 1 } else { 0 },
        delay,
        delay,
    )
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let page_config = use_context::<PageConfig>().unwrap_or_default();
    let nav_container_ref = use_node_ref();
    let audio_ref = use_node_ref();
    let menu_open = use_state(|| false);
    let audio = use_reducer(AudioState::default);
    let nav = use_reducer(NavTracker::default);
    let (_, scroll_y) = use_window_scroll();

    {
        let nav = nav.dispatcher();
        use_effect_with_deps(
            move |scroll_y| {
                nav.dispatch(NavAction::Scrolled(*scroll_y));
                || ()
            },
            scroll_y,
        );
    }

    {
        let nav_container_ref = nav_container_ref.clone();
        let nav_config = page_config.nav;
        use_effect_with_deps(
            move |tracker: &NavTracker| {
                nav_state::present(&CssTransitions, &nav_container_ref, tracker.state, &nav_config);
                || ()
            },
            *nav,
        );
    }

    {
        let player = AudioElement(audio_ref.clone());
        let rejected = audio.dispatcher();
        let volume = page_config.audio_volume;
        use_effect_with_deps(
            move |state: &AudioState| {
                let state = *state;
                spawn_local(async move {
                    if let Err(e) = audio::sync_playback(&player, state, volume).await {
                        warn!("Audio playback failed: {}", e);
                        rejected.dispatch(AudioAction::PlaybackRejected(state.request));
                    }
                });
                || ()
            },
            *audio,
        );
    }

    let toggle_audio = {
        let audio = audio.dispatcher();
        Callback::from(move |_: MouseEvent| audio.dispatch(AudioAction::Toggle))
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = |item: &'static str, close_menu: bool| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(&config::anchor_id(item));
            if close_menu {
                menu_open.set(false);
            }
        })
    };

    html! {
        <div
            ref={nav_container_ref}
            class={classes!("nav-container", nav.state.class())}
        >
            <style>
                {r#"
                    .nav-container {
                        position: fixed;
                        left: 0;
                        right: 0;
                        top: 1rem;
                        z-index: 50;
                        height: 4rem;
                        border: none;
                        transition: all 0.7s;
                    }
                    @media (min-width: 640px) {
                        .nav-container { left: 1.5rem; right: 1.5rem; }
                    }
                    .floating-nav {
                        background: #000;
                        border-radius: 0.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .nav-header {
                        position: absolute;
                        top: 50%;
                        width: 100%;
                        transform: translateY(-50%);
                    }
                    .nav-bar {
                        display: flex;
                        width: 100%;
                        height: 100%;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem;
                    }
                    .nav-brand { display: flex; align-items: center; gap: 1rem; }
                    .nav-brand img { width: 3rem; }
                    .nav-actions { display: flex; height: 100%; align-items: center; }
                    .nav-desktop { display: none; }
                    .nav-hover-btn {
                        position: relative;
                        margin-inline: 2.5rem;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        color: #edff66;
                        cursor: pointer;
                    }
                    .nav-hover-btn::after {
                        content: "";
                        position: absolute;
                        bottom: -0.125rem;
                        left: 0;
                        height: 2px;
                        width: 100%;
                        transform: scaleX(0);
                        transform-origin: bottom right;
                        background: #dfdff0;
                        transition: transform 0.3s cubic-bezier(0.65, 0.05, 0.36, 1);
                    }
                    .nav-hover-btn:hover::after { transform: scaleX(1); transform-origin: bottom left; }
                    .floating-nav .nav-hover-btn { color: #fff; }
                    .products-button { display: none; background: #dfdff0; }
                    @media (min-width: 768px) {
                        .nav-desktop { display: block; }
                        .products-button { display: flex; align-items: center; gap: 0.25rem; }
                        .burger-menu, .mobile-menu { display: none; }
                    }
                    .burger-menu {
                        margin-right: 1rem;
                        padding: 0.5rem;
                        z-index: 60;
                        background: none;
                        border: none;
                    }
                    .hamburger { display: flex; flex-direction: column; gap: 5px; }
                    .hamburger .line {
                        display: block;
                        width: 24px;
                        height: 2px;
                        background: #fff;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    .hamburger.active .line:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                    .hamburger.active .line:nth-child(2) { opacity: 0; }
                    .hamburger.active .line:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                    .mobile-menu {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        backdrop-filter: blur(16px);
                        background: rgba(0, 0, 0, 0.8);
                        transition: all 0.5s;
                        opacity: 0;
                        visibility: hidden;
                    }
                    .mobile-menu.open { opacity: 1; visibility: visible; }
                    .mobile-menu-links {
                        position: absolute;
                        top: 0.25rem;
                        width: 100%;
                        padding: 0 2rem;
                        background: #000;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 2rem;
                    }
                    .mobile-nav-link {
                        width: 100%;
                        text-align: center;
                        padding: 1rem 0;
                        border-radius: 0.75rem;
                        background: rgba(0, 0, 0, 0.1);
                        color: #dfdff0;
                        text-transform: uppercase;
                    }
                    .audio-toggle {
                        margin-left: 1rem;
                        display: flex;
                        align-items: center;
                        gap: 0.125rem;
                        position: relative;
                        z-index: 60;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .audio-toggle audio { display: none; }
                    .indicator-line {
                        height: 0.25rem;
                        width: 1px;
                        border-radius: 9999px;
                        background: #fff;
                        transition: all 0.2s ease-in-out;
                    }
                    .indicator-line.active {
                        animation: indicator-line 0.5s ease infinite;
                    }
                    @keyframes indicator-line {
                        0% { height: 4px; transform: translateY(-0px); }
                        50% { height: 16px; transform: translateY(-4px); }
                        100% { height: 4px; transform: translateY(-0px); }
                    }
                "#}
            </style>
            <header class="nav-header">
                <nav class="nav-bar">
                    <div class="nav-brand">
                        <img src={LOGO_SRC} alt="logo" />
                        <Button
                            id="product-button"
                            title="Products"
                            right_icon={html! { <LocationArrow /> }}
                            container_class={classes!("products-button")}
                        />
                    </div>

                    <div class="nav-actions">
                        <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                            <div class={classes!("hamburger", (*menu_open).then(|| "active"))}>
                                <span class="line"></span>
                                <span class="line"></span>
                                <span class="line"></span>
                            </div>
                        </button>

                        <div class="nav-desktop">
                            { for NAV_ITEMS.iter().map(|&item| html! {
                                <a
                                    href={format!("#{}", config::anchor_id(item))}
                                    class="nav-hover-btn"
                                    onclick={nav_link(item, false)}
                                >
                                    { item }
                                </a>
                            }) }
                        </div>

                        <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                            <div class="mobile-menu-links">
                                { for NAV_ITEMS.iter().enumerate().map(|(index, &item)| html! {
                                    <a
                                        href={format!("#{}", config::anchor_id(item))}
                                        class="mobile-nav-link"
                                        style={mobile_link_style(index, *menu_open)}
                                        onclick={nav_link(item, true)}
                                    >
                                        { item }
                                    </a>
                                }) }
                            </div>
                        </div>

                        <button class="audio-toggle" onclick={toggle_audio} aria-label="Toggle audio">
                            <audio ref={audio_ref} src={AUDIO_SRC} loop=true preload="auto" />
                            { for INDICATOR_BARS.iter().map(|&bar| html! {
                                <div
                                    class={classes!("indicator-line", audio.indicator.then(|| "active"))}
                                    style={audio::indicator_delay(bar)}
                                />
                            }) }
                        </button>
                    </div>
                </nav>
            </header>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_menu_links_sit_lower_and_transparent() {
        assert_eq!(
            mobile_link_style(2, false),
            "transform: translateY(20px); opacity: 0; transition: transform 0.4s ease 0.2s, opacity 0.4s ease 0.2s;"
        );
    }

    #[test]
    fn open_menu_links_are_in_place() {
        assert!(mobile_link_style(0, true).starts_with("transform: translateY(0); opacity: 1;"));
    }
}
