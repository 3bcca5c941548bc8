use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::animated_title::AnimatedTitle;
use crate::config::{PageConfig, ABOUT_IMAGE_SRC};
use crate::geometry::Measure;
use crate::motion::CssTransitions;
use crate::scroll_band::BandPhase;

#[function_component(About)]
pub fn about() -> Html {
    let clip = use_context::<PageConfig>().unwrap_or_default().clip;
    let track_ref = use_node_ref();
    let mask_ref = use_node_ref();
    let phase = use_state(|| BandPhase::Before);
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();

    {
        let track_ref = track_ref.clone();
        let mask_ref = mask_ref.clone();
        let phase = phase.clone();
        use_effect_with_deps(
            move |&(scroll_y, viewport_height)| {
                if let Some(rect) = track_ref.measure() {
                    let band = clip.band_for_track(rect.top + scroll_y, viewport_height);
                    let next = clip.scrub_to(&CssTransitions, &mask_ref, &band, scroll_y);
                    if next != *phase {
                        debug!("About clip {} band", next.as_str());
                        phase.set(next);
                    }
                }
                || ()
            },
            (scroll_y, viewport_height),
        );
    }

    html! {
        <div id="about" class="about-section">
            <style>
                {r#"
                    .about-section { min-height: 100vh; width: 100vw; }
                    .about-intro {
                        position: relative;
                        margin: 9rem 0 2rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1.25rem;
                    }
                    .about-eyebrow {
                        font-family: "general", sans-serif;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                    }
                    @media (min-width: 768px) {
                        .about-eyebrow { font-size: 10px; }
                    }
                    .about-subtext {
                        position: absolute;
                        bottom: -80dvh;
                        left: 50%;
                        width: 100%;
                        max-width: 24rem;
                        transform: translateX(-50%);
                        text-align: center;
                        font-family: "circular-web", sans-serif;
                        font-size: 1.125rem;
                    }
                    .about-subtext p:last-child { color: #808080; }
                    .clip-pin {
                        height: 100vh;
                        width: 100vw;
                        display: flex;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .about-image {
                        position: relative;
                        z-index: 20;
                        width: 30vw;
                        height: 60vh;
                        border-radius: 24px;
                        overflow: hidden;
                        transform-origin: center;
                    }
                    .about-image img {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                "#}
            </style>
            <div class="about-intro">
                <h2 class="about-eyebrow">{"Welcome to Zanimate"}</h2>
                <AnimatedTitle
                    title="Disc<b>o</b>ver the world's <br /> l<b>a</b>rgest collection of ZANIMATE"
                    container_class={classes!("about-title")}
                />
                <div class="about-subtext">
                    <p>{"The ZANIMATE is a game that allows you to play with your friends and family in a virtual reality environment."}</p>
                    <p>{"ZANIMATE unites the digital world with real life."}</p>
                </div>
            </div>
            <div
                id="clip"
                ref={track_ref}
                class="clip-track"
                style={clip.track_style()}
            >
                <div class="clip-pin" style={phase.pin_style()} data-phase={phase.as_str()}>
                    <div ref={mask_ref} class="about-image mask-clip-path">
                        <img src={ABOUT_IMAGE_SRC} alt="Background" />
                    </div>
                </div>
            </div>
        </div>
    }
}
