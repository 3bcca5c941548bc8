use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub id: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub left_icon: Option<Html>,
    #[prop_or_default]
    pub right_icon: Option<Html>,
    #[prop_or_default]
    pub container_class: Classes,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            id={props.id.clone()}
            class={classes!("pill-button", props.container_class.clone())}
        >
            { props.left_icon.clone().unwrap_or_default() }
            <span class="pill-button-label">
                <span class="pill-button-title">{ props.title.clone() }</span>
            </span>
            { props.right_icon.clone().unwrap_or_default() }
        </button>
    }
}

/// Arrow glyph used on buttons and tiles.
#[function_component(LocationArrow)]
pub fn location_arrow(props: &ArrowProps) -> Html {
    html! {
        <svg
            class={classes!("location-arrow", props.class.clone())}
            viewBox="0 0 24 24"
            width="1em"
            height="1em"
            fill="currentColor"
            aria-hidden="true"
        >
            <path d="M19.1 4.9 4.5 10.7c-.8.3-.7 1.4.1 1.6l5.6 1.4 1.4 5.6c.2.8 1.3.9 1.6.1l5.8-14.6c.3-.6-.3-1.2-.9-.9z" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct ArrowProps {
    #[prop_or_default]
    pub class: Classes,
}
