use yew::prelude::*;

use crate::components::in_view::Reveal;
use crate::components::loading_bar::LoadingBar;
use crate::components::rich::rich;
use crate::content::StoryContent;

#[derive(Properties, PartialEq)]
pub struct StoryProps {
    pub content: &'static StoryContent,
}

#[function_component(Story)]
pub fn story(props: &StoryProps) -> Html {
    let content = props.content;
    html! {
        <section id="story-section" class="story">
            <style>
                {r#"
                .story { padding: 6rem 1.5rem; }
                .story-inner { max-width: 56rem; margin: 0 auto; text-align: center; }
                .story h2 { font-size: clamp(1.875rem, 3vw, 2.25rem); font-weight: 300; color: #1f2937; margin: 0 0 2rem; }
                .story p { font-size: 1.125rem; line-height: 1.8; color: #4b5563; margin: 0 0 1.5rem; }
                .story .story-punch { font-size: 1.25rem; font-weight: 500; color: #047857; }
                "#}
            </style>
            <Reveal threshold={0.3} class="story-inner">
                <h2>{content.title}</h2>
                <p>{rich(content.p1)}</p>
                <p>{content.p2}</p>
                <p class="story-punch">{content.p3}</p>
                <LoadingBar />
            </Reveal>
        </section>
    }
}
