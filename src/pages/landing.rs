use log::info;
use yew::prelude::*;

use crate::pages::{about::About, features::Features, footer::Footer, navbar::Navbar, story::Story};

#[function_component(Landing)]
pub fn landing() -> Html {
    use_effect_with_deps(
        move |_| {
            info!("Landing page mounted");
            || ()
        },
        (),
    );

    html! {
        <main class="landing-page">
            <style>
                {r#"
                    *, *::before, *::after { box-sizing: border-box; margin: 0; }
                    body {
                        width: 100vw;
                        overflow-x: hidden;
                        background: #dfdff0;
                        font-family: "general", sans-serif;
                    }
                    html { scroll-behavior: smooth; }
                    .landing-page { position: relative; min-height: 100vh; width: 100vw; overflow-x: clip; }
                    .special-font b {
                        font-family: "zentry", sans-serif;
                        font-feature-settings: "ss01" on;
                    }
                    .pill-button {
                        position: relative;
                        z-index: 10;
                        display: inline-flex;
                        width: fit-content;
                        cursor: pointer;
                        align-items: center;
                        gap: 0.25rem;
                        overflow: hidden;
                        border: none;
                        border-radius: 9999px;
                        background: #f5f3ff;
                        padding: 0.75rem 1.75rem;
                        color: #000;
                    }
                    .pill-button-label {
                        position: relative;
                        display: inline-flex;
                        overflow: hidden;
                        font-family: "general", sans-serif;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                    }
                    .animated-title {
                        display: flex;
                        flex-direction: column;
                        gap: 0.25rem;
                        font-family: "zentry", sans-serif;
                        font-size: 3rem;
                        line-height: 0.8;
                        text-transform: uppercase;
                        font-weight: 900;
                    }
                    @media (min-width: 640px) {
                        .animated-title { font-size: 7rem; }
                    }
                    .animated-title-line {
                        display: flex;
                        max-width: 100%;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0 2.5rem;
                    }
                    .animated-word {
                        opacity: 0;
                        transform: translate3d(10px, 51px, -60px) rotateY(60deg) rotateX(-40deg);
                        transition: opacity 0.6s ease-in-out, transform 0.6s ease-in-out;
                    }
                    .animated-title.revealed .animated-word {
                        opacity: 1;
                        transform: translate3d(0, 0, 0) rotateY(0deg) rotateX(0deg);
                    }
                    .animated-word b { font-family: "zentry", sans-serif; font-feature-settings: "ss01" on; }
                    .about-title { color: #000; text-align: center; }
                "#}
            </style>
            <Navbar />
            <About />
            <Features />
            <Story />
            <Footer />
        </main>
    }
}
