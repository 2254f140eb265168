use yew::prelude::*;

use crate::components::in_view::Reveal;
use crate::content::AdvisorsContent;

#[derive(Properties, PartialEq)]
pub struct AdvisorsProps {
    pub content: &'static AdvisorsContent,
}

#[function_component(Advisors)]
pub fn advisors(props: &AdvisorsProps) -> Html {
    let content = props.content;
    html! {
        <section class="advisors">
            <style>
                {r#"
                .advisors { padding: 6rem 1.5rem; }
                .advisors-inner { max-width: 72rem; margin: 0 auto; }
                .advisors-head { max-width: 48rem; margin: 0 auto; text-align: center; }
                .advisors-head h2 { margin: 0; font-size: clamp(1.875rem, 3vw, 2.25rem); font-weight: 300; color: #1f2937; }
                .advisors-head p { margin: 1rem 0 0; font-size: 1.125rem; color: #4b5563; }
                .advisor-grid { display: grid; grid-template-columns: 1fr; gap: 2rem; margin-top: 5rem; }
                @media (min-width: 1024px) {
                    .advisor-grid { grid-template-columns: repeat(3, 1fr); }
                }
                .advisor-card {
                    height: 100%;
                    padding: 2rem;
                    text-align: center;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(4px);
                    border: 1px solid rgba(229, 231, 235, 0.8);
                    border-radius: 0.75rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.3s ease;
                }
                .advisor-card:hover { box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1); }
                .advisor-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3.5rem;
                    height: 3.5rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 50%;
                    background: #d1fae5;
                    font-size: 1.5rem;
                }
                .advisor-card h3 { margin: 0 0 1rem; font-size: 1.125rem; font-weight: 600; color: #111827; }
                .advisor-card p { margin: 0; line-height: 1.75; color: #4b5563; }
                "#}
            </style>
            <div class="advisors-inner">
                <div class="advisors-head">
                    <h2>{content.title}</h2>
                    <p>{content.description}</p>
                </div>
                <div class="advisor-grid">
                    { for content.kinds.iter().enumerate().map(|(index, kind)| html! {
                        <Reveal key={kind.title} delay_ms={index as u32 * 200}>
                            <div class="advisor-card">
                                <div class="advisor-icon" aria-hidden="true">{kind.icon.glyph()}</div>
                                <h3>{kind.title}</h3>
                                <p>{kind.description}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
