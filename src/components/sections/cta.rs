use yew::prelude::*;

use crate::components::in_view::Reveal;
use crate::content::CtaContent;
use crate::lead::ContactType;

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    pub content: &'static CtaContent,
    pub on_request: Callback<ContactType>,
}

#[function_component(Cta)]
pub fn cta(props: &CtaProps) -> Html {
    let content = props.content;
    let book_call = props.on_request.reform(|_: MouseEvent| ContactType::Consultation);
    let join_waitlist = props.on_request.reform(|_: MouseEvent| ContactType::EarlyAccess);

    html! {
        <section class="cta">
            <style>
                {r#"
                .cta { background: rgba(236, 253, 245, 0.7); }
                .cta-inner { max-width: 56rem; margin: 0 auto; padding: 6rem 1.5rem; text-align: center; }
                .cta h2 { margin: 0; font-size: clamp(1.875rem, 3vw, 2.25rem); font-weight: 500; color: #111827; }
                .cta p { margin: 1.5rem 0 0; font-size: 1.125rem; line-height: 2; color: #4b5563; }
                .cta-actions { margin-top: 2.5rem; display: flex; flex-wrap: wrap; gap: 1.5rem; justify-content: center; }
                .cta-actions button {
                    padding: 1.1rem 2rem;
                    font-size: 1rem;
                    font-weight: 600;
                    border-radius: 0.5rem;
                    cursor: pointer;
                    transition: transform 0.2s ease, background 0.2s ease;
                }
                .cta-actions .primary { background: #059669; color: #fff; border: none; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15); }
                .cta-actions .primary:hover { background: #047857; transform: scale(1.05); }
                .cta-actions .outline { background: transparent; color: #111827; border: 1px solid #d1d5db; }
                .cta-actions .outline:hover { background: #f3f4f6; }
                "#}
            </style>
            <Reveal class="cta-inner">
                <h2>{content.title}</h2>
                <p>{content.description}</p>
                <div class="cta-actions">
                    <button class="primary" onclick={book_call}>{content.book_call}</button>
                    <button class="outline" onclick={join_waitlist}>{content.join_waitlist}</button>
                </div>
            </Reveal>
        </section>
    }
}
