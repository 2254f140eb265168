use yew::prelude::*;

use crate::components::in_view::Reveal;
use crate::components::rich::rich;
use crate::content::{HeroContent, HERO_IMAGE};
use crate::lead::ContactType;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: &'static HeroContent,
    pub on_request: Callback<ContactType>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let content = props.content;
    let request_access = props.on_request.reform(|_: MouseEvent| ContactType::EarlyAccess);
    let book_call = props.on_request.reform(|_: MouseEvent| ContactType::Consultation);

    html! {
        <section class="hero" aria-labelledby="hero-title">
            <style>
                {r#"
                .hero { position: relative; overflow: hidden; padding: 6rem 1.5rem 8rem; text-align: center; }
                .hero-grid {
                    position: absolute;
                    inset: 0;
                    z-index: -1;
                    opacity: 0.4;
                    background-image:
                        linear-gradient(rgba(16, 185, 129, 0.15) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(16, 185, 129, 0.15) 1px, transparent 1px);
                    background-size: 40px 40px;
                    mask-image: radial-gradient(circle 50% at center, black 40%, transparent 75%);
                    -webkit-mask-image: radial-gradient(circle 50% at center, black 40%, transparent 75%);
                }
                .hero-inner { max-width: 56rem; margin: 0 auto; }
                .hero h1 { font-size: clamp(2.25rem, 5vw, 3.75rem); font-weight: 300; line-height: 1.15; color: #1f2937; margin: 0 0 1.5rem; }
                .hero h1 span { display: block; font-weight: 500; color: #047857; }
                .hero-description { font-size: 1.2rem; color: #4b5563; line-height: 1.7; max-width: 48rem; margin: 0 auto 2.5rem; }
                .hero-scroll {
                    display: inline-flex;
                    align-items: flex-start;
                    justify-content: center;
                    width: 2rem;
                    height: 3.5rem;
                    margin: 2rem 0 4rem;
                    border: 2px solid #9ca3af;
                    border-radius: 999px;
                    color: #6b7280;
                    text-decoration: none;
                    padding-top: 0.6rem;
                }
                .hero-scroll span { animation: hero-bob 1.5s ease-in-out infinite; }
                @keyframes hero-bob {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(6px); }
                }
                .hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; margin-bottom: 4rem; }
                .hero-actions button {
                    padding: 1.1rem 2rem;
                    font-size: 1rem;
                    font-weight: 500;
                    border-radius: 0.5rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .hero-actions .primary { background: #059669; color: #fff; border: none; box-shadow: 0 10px 25px rgba(5, 150, 105, 0.25); }
                .hero-actions .primary:hover { background: #047857; }
                .hero-actions .ghost { background: transparent; color: #047857; border: none; }
                .hero-actions .ghost:hover { background: #d1fae5; }
                .hero-image { width: 100%; height: auto; border-radius: 1rem; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); border: 1px solid rgba(229, 231, 235, 0.5); }
                "#}
            </style>
            <div class="hero-grid" aria-hidden="true"></div>
            <div class="hero-inner">
                <Reveal threshold={0.0}>
                    <h1 id="hero-title">
                        {content.title}
                        <span>{content.subtitle}</span>
                    </h1>
                    <p class="hero-description">{rich(content.description)}</p>
                </Reveal>
                <a class="hero-scroll" href="#story-section" aria-label={content.scroll_label}>
                    <span aria-hidden="true">{"↓"}</span>
                </a>
                <div class="hero-actions" role="group">
                    <button class="primary" onclick={request_access} aria-label={content.aria_request_access}>
                        {content.request_access}
                    </button>
                    <button class="ghost" onclick={book_call} aria-label={content.aria_book_call}>
                        {content.book_call}
                    </button>
                </div>
                <Reveal threshold={0.1}>
                    <img class="hero-image" src={HERO_IMAGE} alt={content.image_alt} loading="eager" />
                </Reveal>
            </div>
        </section>
    }
}
