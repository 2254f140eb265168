use yew::prelude::*;

use crate::components::in_view::Reveal;
use crate::components::rich::rich;
use crate::content::{Feature, ProductContent};

fn feature_image(feature: &Feature) -> Html {
    match feature.coming_soon {
        Some(label) => html! {
            <div class="feature-preview">
                <img class="feature-image blurred" src={feature.image_url} alt={feature.alt} loading="lazy" />
                <div class="feature-overlay" role="presentation">
                    <p>{label}</p>
                </div>
            </div>
        },
        None => html! {
            <img class="feature-image" src={feature.image_url} alt={feature.alt} loading="lazy" />
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductProps {
    pub content: &'static ProductContent,
}

#[function_component(Product)]
pub fn product(props: &ProductProps) -> Html {
    let content = props.content;
    html! {
        <section class="product" aria-labelledby="product-features-title">
            <style>
                {r#"
                .product { padding: 6rem 1.5rem; }
                .product-inner { max-width: 72rem; margin: 0 auto; }
                .product-head { max-width: 48rem; margin: 0 auto 5rem; text-align: center; }
                .product-head h2 { font-size: clamp(1.875rem, 3vw, 2.25rem); font-weight: 300; color: #1f2937; margin: 0 0 1.5rem; }
                .product-subtitle { display: flex; align-items: center; justify-content: center; gap: 0.75rem; }
                .product-subtitle p { margin: 0; font-size: 1.125rem; font-style: italic; color: #4b5563; }
                .product-subtitle .rule { width: 2rem; height: 2px; background: #059669; }
                .feature-list { display: flex; flex-direction: column; gap: 6rem; }
                .feature { display: grid; grid-template-columns: 1fr; gap: 3rem; align-items: center; }
                @media (min-width: 768px) {
                    .feature { grid-template-columns: 1fr 1fr; }
                    .feature.flipped .feature-text { order: 2; }
                    .feature.flipped .feature-media { order: 1; }
                }
                .feature-text { text-align: start; }
                .feature-title { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; flex-wrap: wrap; }
                .feature-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.5rem;
                    background: #d1fae5;
                    font-size: 1.4rem;
                }
                .feature-title h3 { margin: 0; font-size: 1.5rem; font-weight: 600; color: #111827; }
                .feature-badge { background: #dbeafe; color: #1e40af; padding: 0.25rem 0.75rem; border-radius: 999px; font-size: 0.875rem; font-weight: 500; }
                .feature-text p { font-size: 1.125rem; line-height: 1.7; color: #4b5563; margin: 0; }
                .feature-image { width: 100%; height: auto; border-radius: 1rem; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2); border: 1px solid rgba(229, 231, 235, 0.5); display: block; }
                .feature-preview { position: relative; border-radius: 1rem; overflow: hidden; }
                .feature-image.blurred { filter: blur(4px); }
                .feature-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                }
                .feature-overlay p {
                    margin: 0;
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.8);
                    color: #065f46;
                    font-size: 1.25rem;
                    font-weight: 600;
                }
                "#}
            </style>
            <div class="product-inner">
                <div class="product-head">
                    <h2 id="product-features-title">{content.title}</h2>
                    <div class="product-subtitle" role="presentation">
                        <span class="rule" aria-hidden="true"></span>
                        <p>{content.subtitle}</p>
                        <span class="rule" aria-hidden="true"></span>
                    </div>
                </div>
                <div class="feature-list">
                    { for content.features.iter().enumerate().map(|(index, feature)| {
                        let title_id = format!("feature-{}-title", index);
                        html! {
                            <Reveal key={feature.title} threshold={0.3}>
                                <article
                                    class={classes!("feature", (index % 2 == 1).then_some("flipped"))}
                                    aria-labelledby={title_id.clone()}
                                >
                                    <div class="feature-text">
                                        <div class="feature-title">
                                            <div class="feature-icon" role="img" aria-label={feature.title}>
                                                {feature.icon.glyph()}
                                            </div>
                                            <h3 id={title_id}>{feature.title}</h3>
                                            if let Some(label) = feature.coming_soon {
                                                <span class="feature-badge" role="status">{label}</span>
                                            }
                                        </div>
                                        <p>{rich(feature.description)}</p>
                                    </div>
                                    <div class="feature-media">{feature_image(feature)}</div>
                                </article>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
