use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::geometry::Measure;
use crate::title::{self, Segment};

#[derive(Properties, PartialEq)]
pub struct AnimatedTitleProps {
    /// Title markup, see [`crate::title`].
    pub title: AttrValue,
    #[prop_or_default]
    pub container_class: Classes,
}

#[function_component(AnimatedTitle)]
pub fn animated_title(props: &AnimatedTitleProps) -> Html {
    let container_ref = use_node_ref();
    let revealed = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();

    {
        let container_ref = container_ref.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(rect) = container_ref.measure() {
                    let visible = title::in_reveal_zone(rect.top, viewport_height);
                    if visible != *revealed {
                        revealed.set(visible);
                    }
                }
                || ()
            },
            (scroll_y, viewport_height),
        );
    }

    let lines = title::parse(&props.title);
    let first_word: Vec<usize> = lines
        .iter()
        .scan(0, |seen, line| {
            let start = *seen;
            *seen += line.len();
            Some(start)
        })
        .collect();

    html! {
        <div
            ref={container_ref}
            class={classes!("animated-title", props.container_class.clone(), (*revealed).then(|| "revealed"))}
        >
            { for lines.iter().zip(first_word).map(|(line, start)| html! {
                <div class="animated-title-line">
                    { for line.iter().enumerate().map(|(i, word)| html! {
                        <span class="animated-word" style={title::word_delay(start + i)}>
                            { for word.iter().map(render_segment) }
                        </span>
                    }) }
                </div>
            }) }
        </div>
    }
}

fn render_segment(segment: &Segment) -> Html {
    if segment.bold {
        html! { <b>{ segment.text.clone() }</b> }
    } else {
        html! { { segment.text.clone() } }
    }
}
