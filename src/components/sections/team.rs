use yew::prelude::*;

use crate::components::in_view::Reveal;
use crate::content::TeamContent;

#[derive(Properties, PartialEq)]
pub struct TeamProps {
    pub content: &'static TeamContent,
}

#[function_component(Team)]
pub fn team(props: &TeamProps) -> Html {
    let content = props.content;
    html! {
        <section class="team">
            <style>
                {r#"
                .team { padding: 6rem 1.5rem; }
                .team-inner { max-width: 80rem; margin: 0 auto; }
                .team-head { max-width: 48rem; margin: 0 auto; text-align: center; }
                .team-head h2 { margin: 0; font-size: clamp(1.875rem, 3vw, 2.25rem); font-weight: 500; color: #111827; }
                .team-pill {
                    display: inline-block;
                    margin-top: 2rem;
                    padding: 0.75rem 1.25rem;
                    border-radius: 999px;
                    background: #ecfdf5;
                    color: #064e3b;
                    font-size: 0.875rem;
                    font-weight: 500;
                    white-space: normal;
                }
                .team-list {
                    list-style: none;
                    margin: 5rem auto 0;
                    padding: 0;
                    max-width: 42rem;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 4rem 2rem;
                }
                @media (min-width: 640px) {
                    .team-list { grid-template-columns: 1fr 1fr; }
                }
                .team-member { text-align: center; }
                .team-photo { width: 8rem; height: 8rem; margin: 0 auto; border-radius: 50%; overflow: hidden; background: #e5e7eb; }
                .team-photo img { width: 100%; height: 100%; object-fit: cover; }
                .team-member h3 { margin: 1.5rem 0 0; font-size: 1.125rem; font-weight: 600; color: #111827; }
                .team-badge {
                    display: inline-block;
                    margin: 0.5rem 0 0.75rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: #d1fae5;
                    color: #065f46;
                    font-size: 0.875rem;
                    font-weight: 700;
                }
                .team-role { margin: 0; color: #4b5563; line-height: 1.75; }
                .team-degree { margin: 0.25rem 0 0; font-size: 0.875rem; color: #6b7280; }
                .team-quote { margin: 1rem 0 0; color: #047857; font-style: italic; }
                "#}
            </style>
            <div class="team-inner">
                <div class="team-head">
                    <h2>{content.title}</h2>
                    <div class="team-pill">{content.accelerator}</div>
                </div>
                <ul class="team-list" role="list">
                    { for content.members.iter().enumerate().map(|(index, member)| html! {
                        <li key={member.name} class="team-member">
                            <Reveal delay_ms={index as u32 * 150}>
                                <div class="team-photo">
                                    <img
                                        src={member.image_url}
                                        alt={member.name}
                                        style={format!("object-position: {}", member.image_position)}
                                    />
                                </div>
                                <h3>{member.name}</h3>
                                <span class="team-badge">{member.badge}</span>
                                <p class="team-role">{member.role}</p>
                                <p class="team-degree">{member.degree}</p>
                                <p class="team-quote">{format!("\"{}\"", member.quote)}</p>
                            </Reveal>
                        </li>
                    }) }
                </ul>
            </div>
        </section>
    }
}
