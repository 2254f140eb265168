use yew::prelude::*;

use super::in_view::use_in_view;

const LETTER_STAGGER_S: f64 = 0.08;

#[derive(Properties, PartialEq)]
pub struct AnimatedTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Reveals `text` one letter at a time once half of it is on screen.
#[function_component(AnimatedText)]
pub fn animated_text(props: &AnimatedTextProps) -> Html {
    let node = use_node_ref();
    let seen = use_in_view(node.clone(), 0.5);

    html! {
        <div
            ref={node}
            class={classes!("animated-text", seen.then_some("visible"), props.class.clone())}
            aria-label={props.text.clone()}
        >
            <style>
                {r#"
                .animated-text span {
                    display: inline-block;
                    opacity: 0;
                    transform: translateY(10px);
                }
                .animated-text.visible span {
                    animation: letter-in 0.4s ease-out forwards;
                }
                @keyframes letter-in {
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (prefers-reduced-motion: reduce) {
                    .animated-text span { opacity: 1; transform: none; }
                    .animated-text.visible span { animation: none; }
                }
                "#}
            </style>
            { for props.text.chars().enumerate().map(|(i, c)| {
                let shown = if c == ' ' { '\u{00A0}' } else { c };
                html! {
                    <span aria-hidden="true" style={format!("animation-delay: {:.2}s", i as f64 * LETTER_STAGGER_S)}>
                        {shown}
                    </span>
                }
            }) }
        </div>
    }
}
