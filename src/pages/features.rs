use yew::prelude::*;

use crate::components::bento::{BentoCard, BentoTilt};
use crate::components::button::LocationArrow;

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="features-section">
            <style>
                {r#"
                    .features-section { background: #000; padding-bottom: 13rem; }
                    .features-container { margin: 0 auto; padding: 0 0.75rem; }
                    .features-intro { padding: 8rem 1.25rem; }
                    .features-intro p {
                        font-family: "circular-web", sans-serif;
                        font-size: 1.125rem;
                        color: #dfdff0;
                    }
                    .features-intro p + p { max-width: 28rem; opacity: 0.5; }
                    .bento-hero {
                        position: relative;
                        margin-bottom: 1.75rem;
                        height: 24rem;
                        width: 100%;
                        overflow: hidden;
                        border-radius: 0.375rem;
                    }
                    .border-hsla { border: 1px solid hsla(0, 0%, 100%, 0.2); }
                    .bento-grid {
                        display: grid;
                        height: 135vh;
                        width: 100%;
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                        grid-template-rows: repeat(3, minmax(0, 1fr));
                        gap: 1.75rem;
                    }
                    .bento-tilt_1 {
                        position: relative;
                        overflow: hidden;
                        border-radius: 0.375rem;
                        grid-column: span 2 / span 2;
                        transition: transform 0.3s ease-out;
                    }
                    .bento-tilt_2 {
                        position: relative;
                        overflow: hidden;
                        border-radius: 0.375rem;
                        grid-column: span 1 / span 1;
                        grid-row: span 1 / span 1;
                        transition: transform 0.3s ease-out;
                    }
                    .bento-tall { grid-row: span 1 / span 1; }
                    .bento-offset-start { margin-inline-start: 8rem; }
                    .bento-offset-end { margin-inline-end: 3.5rem; }
                    @media (min-width: 768px) {
                        .features-container { padding: 0 2.5rem; }
                        .bento-hero { height: 65vh; }
                        .bento-tilt_1 { grid-column: span 1 / span 1; }
                        .bento-tall { grid-row: span 2 / span 2; }
                        .bento-offset-start { margin-inline-start: 0; }
                        .bento-offset-end { margin-inline-end: 0; }
                    }
                    .bento-card { position: relative; width: 100%; height: 100%; }
                    .bento-video,
                    .bento-filler-video {
                        position: absolute;
                        left: 0;
                        top: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        object-position: center;
                    }
                    .bento-card-body {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        width: 100%;
                        height: 100%;
                        flex-direction: column;
                        justify-content: space-between;
                        padding: 1.25rem;
                        color: #dfdff0;
                    }
                    .bento-title {
                        font-family: "zentry", sans-serif;
                        font-size: 2.25rem;
                        text-transform: uppercase;
                    }
                    .bento-description { margin-top: 0.75rem; max-width: 16rem; font-size: 0.75rem; }
                    @media (min-width: 768px) {
                        .bento-title { font-size: 4.5rem; }
                        .bento-description { font-size: 1rem; }
                    }
                    .coming-soon {
                        position: relative;
                        display: flex;
                        width: fit-content;
                        cursor: pointer;
                        align-items: center;
                        gap: 0.25rem;
                        overflow: hidden;
                        border-radius: 9999px;
                        background: #000;
                        padding: 0.5rem 1.25rem;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        color: rgba(255, 255, 255, 0.2);
                        border: 1px solid hsla(0, 0%, 100%, 0.2);
                    }
                    .coming-soon-glow {
                        pointer-events: none;
                        position: absolute;
                        inset: -1px;
                        transition: opacity 0.3s;
                    }
                    .coming-soon-icon, .coming-soon-label { position: relative; z-index: 20; }
                    .coming-soon-label { color: #94a3b8; }
                    .bento-more {
                        display: flex;
                        width: 100%;
                        height: 100%;
                        flex-direction: column;
                        justify-content: space-between;
                        background: #c4b5fd;
                        padding: 1.25rem;
                    }
                    .bento-more .bento-title { max-width: 16rem; color: #000; }
                    .bento-more .location-arrow { margin: 1.25rem; align-self: flex-end; transform: scale(5); }
                "#}
            </style>
            <div class="features-container">
                <div class="features-intro">
                    <p>{"Into the Metagame Layer"}</p>
                    <p>
                        {"Step into an extraordinary gaming universe where virtual reality and real-world experiences blend seamlessly, creating an immersive adventure that transforms your everyday world."}
                    </p>
                </div>

                <BentoTilt class={classes!("border-hsla", "bento-hero")}>
                    <BentoCard
                        src="/videos/feature-1.mp4"
                        title={html! { {"Enter the Virtual Frontier"} }}
                        description="A gaming platform that connects your traditional and blockchain gaming experiences, with rewards for every achievement."
                        is_coming_soon=true
                    />
                </BentoTilt>

                <div class="bento-grid">
                    <BentoTilt class={classes!("bento-tilt_1", "bento-tall")}>
                        <BentoCard
                            src="/videos/feature-2.mp4"
                            title={html! { <>{"z"}<b>{"ee"}</b>{"d"}</> }}
                            description="A unique digital collectibles series blending anime and gaming aesthetics - ready to evolve into something bigger."
                            is_coming_soon=true
                        />
                    </BentoTilt>

                    <BentoTilt class={classes!("bento-tilt_1", "bento-offset-start")}>
                        <BentoCard
                            src="/videos/feature-3.mp4"
                            title={html! { <>{"n"}<b>{"e"}</b>{"xus"}</> }}
                            description="A playful social space where Web3 communities connect through interactive experiences."
                            is_coming_soon=true
                        />
                    </BentoTilt>

                    <BentoTilt class={classes!("bento-tilt_1", "bento-offset-end")}>
                        <BentoCard
                            src="/videos/feature-4.mp4"
                            title={html! { <>{"ni"}<b>{"c"}</b>{"o"}</> }}
                            description="An AI companion that enhances your gaming experience across platforms with smart assistance."
                            is_coming_soon=true
                        />
                    </BentoTilt>

                    <BentoTilt class={classes!("bento-tilt_2")}>
                        <div class="bento-more">
                            <h1 class="bento-title special-font">
                                {"M"}<b>{"o"}</b>{"re co"}<b>{"m"}</b>{"ing s"}<b>{"o"}</b>{"on!"}
                            </h1>
                            <LocationArrow />
                        </div>
                    </BentoTilt>

                    <BentoTilt class={classes!("bento-tilt_2")}>
                        <video class="bento-filler-video" src="/videos/feature-5.mp4" loop=true muted=true autoplay=true playsinline=true />
                    </BentoTilt>
                </div>
            </div>
        </section>
    }
}
