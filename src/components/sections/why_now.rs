use yew::prelude::*;

use crate::components::animated_number::AnimatedNumber;
use crate::components::animated_text::AnimatedText;
use crate::components::in_view::Reveal;
use crate::components::rich::rich;
use crate::content::{StatValue, WhyNowContent};

#[derive(Properties, PartialEq)]
pub struct WhyNowProps {
    pub content: &'static WhyNowContent,
}

#[function_component(WhyNow)]
pub fn why_now(props: &WhyNowProps) -> Html {
    let content = props.content;
    html! {
        <section class="why-now">
            <style>
                {r#"
                .why-now { padding: 6rem 1.5rem; }
                .why-now-inner { max-width: 80rem; margin: 0 auto; }
                .why-now h2 { max-width: 48rem; margin: 0 auto; text-align: center; font-size: clamp(1.875rem, 3vw, 2.25rem); font-weight: 300; color: #111827; }
                .why-now dl { display: grid; grid-template-columns: 1fr; gap: 2.5rem 2rem; margin: 4rem 0 0; text-align: center; }
                @media (min-width: 1024px) {
                    .why-now dl { grid-template-columns: repeat(3, 1fr); }
                }
                .stat { display: flex; flex-direction: column; gap: 0.5rem; max-width: 20rem; margin: 0 auto; }
                .stat dd {
                    order: -1;
                    margin: 0;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: clamp(2.25rem, 4vw, 3rem);
                    font-weight: 600;
                    color: #059669;
                }
                .stat dt { font-size: 1rem; line-height: 1.75; color: #4b5563; }
                .why-now-conclusion { max-width: 56rem; margin: 4rem auto 0; text-align: center; font-size: 1.125rem; line-height: 2; color: #374151; }
                "#}
            </style>
            <div class="why-now-inner">
                <h2>{content.title}</h2>
                <dl>
                    { for content.points.iter().enumerate().map(|(index, point)| html! {
                        <Reveal key={point.label} class="stat" delay_ms={index as u32 * 150}>
                            <dt>{point.label}</dt>
                            <dd>
                                { match point.value {
                                    StatValue::Number { value, suffix } => html! {
                                        <AnimatedNumber {value} suffix={suffix} />
                                    },
                                    StatValue::Text(text) => html! {
                                        <AnimatedText text={text} />
                                    },
                                } }
                            </dd>
                        </Reveal>
                    }) }
                </dl>
                <p class="why-now-conclusion">{rich(content.conclusion)}</p>
            </div>
        </section>
    }
}
