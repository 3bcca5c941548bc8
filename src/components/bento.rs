use yew::prelude::*;

use crate::components::button::LocationArrow;
use crate::config::PageConfig;
use crate::geometry::{Measure, Point};
use crate::glow::{Glow, GlowAction};
use crate::tilt::Tilt;

#[derive(Properties, PartialEq)]
pub struct BentoTiltProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(BentoTilt)]
pub fn bento_tilt(props: &BentoTiltProps) -> Html {
    let profile = use_context::<PageConfig>().unwrap_or_default().bento_tilt;
    let item_ref = use_node_ref();
    let tilt = use_state(|| Tilt::NEUTRAL);

    let onmousemove = {
        let item_ref = item_ref.clone();
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(next) = profile.track(&item_ref, Point::from_client(&e)) {
                tilt.set(next);
            }
        })
    };

    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(Tilt::NEUTRAL))
    };

    html! {
        <div
            ref={item_ref}
            class={props.class.clone()}
            onmousemove={onmousemove}
            onmouseleave={onmouseleave}
            style={tilt.style(&profile)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BentoCardProps {
    pub src: AttrValue,
    pub title: Html,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub is_coming_soon: bool,
}

#[function_component(BentoCard)]
pub fn bento_card(props: &BentoCardProps) -> Html {
    let glow = use_reducer(Glow::default);
    let hover_button_ref = use_node_ref();

    let onmousemove = {
        let glow = glow.dispatcher();
        let hover_button_ref = hover_button_ref.clone();
        Callback::from(move |e: MouseEvent| {
            glow.dispatch(GlowAction::Track {
                rect: hover_button_ref.measure(),
                pointer: Point::from_client(&e),
            });
        })
    };
    let onmouseenter = {
        let glow = glow.dispatcher();
        Callback::from(move |_: MouseEvent| glow.dispatch(GlowAction::Enter))
    };
    let onmouseleave = {
        let glow = glow.dispatcher();
        Callback::from(move |_: MouseEvent| glow.dispatch(GlowAction::Leave))
    };

    html! {
        <div class="bento-card">
            <video class="bento-video" src={props.src.clone()} loop=true muted=true autoplay=true playsinline=true />
            <div class="bento-card-body">
                <div>
                    <h1 class="bento-title special-font">{ props.title.clone() }</h1>
                    {
                        if let Some(description) = &props.description {
                            html! { <p class="bento-description">{ description.clone() }</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                {
                    if props.is_coming_soon {
                        html! {
                            <div
                                ref={hover_button_ref}
                                class="coming-soon"
                                onmousemove={onmousemove}
                                onmouseenter={onmouseenter}
                                onmouseleave={onmouseleave}
                            >
                                <div class="coming-soon-glow" style={glow.style()} />
                                <LocationArrow class={classes!("coming-soon-icon")} />
                                <p class="coming-soon-label">{"coming soon"}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
