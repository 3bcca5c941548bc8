use yew::prelude::*;

use crate::components::animated_title::AnimatedTitle;
use crate::components::button::Button;
use crate::config::{PageConfig, STORY_IMAGE_SRC};
use crate::geometry::Point;
use crate::motion::CssTransitions;
use crate::tilt;

#[function_component(Story)]
pub fn story() -> Html {
    let profile = use_context::<PageConfig>().unwrap_or_default().story_tilt;
    let frame_ref = use_node_ref();

    let onmousemove = {
        let frame_ref = frame_ref.clone();
        Callback::from(move |e: MouseEvent| {
            tilt::follow_pointer(&CssTransitions, &frame_ref, &frame_ref, &profile, Point::from_client(&e));
        })
    };

    // leave, release and re-entry all ease back to flat
    let settle = {
        let frame_ref = frame_ref.clone();
        Callback::from(move |_: MouseEvent| tilt::settle(&CssTransitions, &frame_ref, &profile))
    };

    html! {
        <div id="story" class="story-section">
            <style>
                {r#"
                    .story-section {
                        min-height: 100dvh;
                        width: 100vw;
                        background: #000;
                        color: #dfdff0;
                    }
                    .story-inner {
                        display: flex;
                        width: 100%;
                        height: 100%;
                        flex-direction: column;
                        align-items: center;
                        padding: 2.5rem 0 6rem;
                    }
                    .story-eyebrow {
                        font-family: "general", sans-serif;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                    }
                    .story-stage { position: relative; width: 100%; height: 100%; }
                    .story-title {
                        margin-top: 1.25rem;
                        pointer-events: none;
                        mix-blend-mode: difference;
                        position: relative;
                        z-index: 10;
                    }
                    .story-img-container {
                        position: relative;
                        height: 90vh;
                        width: 100%;
                        filter: url(#flt_tag);
                    }
                    .story-img-mask {
                        position: absolute;
                        left: 0;
                        top: 0;
                        width: 100%;
                        height: 100%;
                        overflow: hidden;
                        clip-path: polygon(4% 0, 83% 21%, 100% 73%, 0% 100%);
                    }
                    .story-img-content {
                        position: absolute;
                        top: 16rem;
                        left: 0;
                        width: 100%;
                        height: 100dvh;
                        transform: translate3d(0, 0, 0) scale(1.25);
                    }
                    .story-img-content img { object-fit: contain; }
                    .story-copy {
                        margin-top: -20rem;
                        display: flex;
                        width: 100%;
                        justify-content: center;
                    }
                    .story-copy-inner {
                        display: flex;
                        width: fit-content;
                        flex-direction: column;
                        align-items: center;
                    }
                    .story-copy p {
                        margin-top: 0.75rem;
                        max-width: 24rem;
                        text-align: center;
                        font-family: "circular-web", sans-serif;
                        color: #f5f3ff;
                    }
                    @media (min-width: 768px) {
                        .story-eyebrow { font-size: 10px; }
                        .story-copy { margin-top: -24rem; margin-inline-end: 11rem; justify-content: flex-end; }
                        .story-copy-inner { align-items: flex-start; }
                        .story-copy p { text-align: start; }
                    }
                "#}
            </style>
            <div class="story-inner">
                <p class="story-eyebrow">{"an interconnected digital universe"}</p>

                <div class="story-stage">
                    <AnimatedTitle
                        title="the j<b>o</b>urney to <br /> the mystic w<b>o</b>rld"
                        container_class={classes!("story-title")}
                    />

                    <div class="story-img-container">
                        <div class="story-img-mask">
                            <div class="story-img-content">
                                <img
                                    ref={frame_ref}
                                    onmousemove={onmousemove}
                                    onmouseleave={settle.clone()}
                                    onmouseup={settle.clone()}
                                    onmouseenter={settle}
                                    src={STORY_IMAGE_SRC}
                                    alt="entrance.webp"
                                />
                            </div>
                        </div>
                        <RoundedCorners />
                    </div>
                </div>

                <div class="story-copy">
                    <div class="story-copy-inner">
                        <p>
                            {"Enter ZANIMATE, where dreams take flight and wonders await. Craft your masterpiece in this realm of limitless possibilities and enchanting animations."}
                        </p>
                        <Button id="realm-btn" title="discover prologue" container_class={classes!("story-button")} />
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Goo filter that rounds the corners of the clipped story image.
#[function_component(RoundedCorners)]
fn rounded_corners() -> Html {
    html! {
        <svg style="position: absolute; width: 0; height: 0; visibility: hidden;" xmlns="http://www.w3.org/2000/svg" width="0" height="0">
            <defs>
                <filter id="flt_tag">
                    <feGaussianBlur in="SourceGraphic" stdDeviation="8" result="blur" />
                    <feColorMatrix
                        in="blur"
                        type="matrix"
                        values="1 0 0 0 0  0 1 0 0 0  0 0 1 0 0  0 0 0 19 -9"
                        result="flt_tag"
                    />
                    <feComposite in="SourceGraphic" in2="flt_tag" operator="atop" />
                </filter>
            </defs>
        </svg>
    }
}
