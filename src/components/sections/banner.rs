use yew::prelude::*;

use crate::components::language_switcher::LanguageSwitcher;
use crate::content::BannerContent;
use crate::lead::ContactType;

#[derive(Properties, PartialEq)]
pub struct BannerProps {
    pub content: &'static BannerContent,
    pub on_request: Callback<ContactType>,
}

/// Sticky header with the language toggle and the two lead buttons.
#[function_component(Banner)]
pub fn banner(props: &BannerProps) -> Html {
    let content = props.content;
    let request_access = props.on_request.reform(|_: MouseEvent| ContactType::EarlyAccess);
    let book_call = props.on_request.reform(|_: MouseEvent| ContactType::Consultation);

    html! {
        <header class="top-banner" role="banner">
            <style>
                {r#"
                .top-banner {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(236, 253, 245, 0.85);
                    backdrop-filter: blur(4px);
                    border-bottom: 1px solid #a7f3d0;
                }
                .top-banner-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0.75rem 1rem;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem 1.5rem;
                    text-align: center;
                }
                .top-banner .language-switcher { color: #064e3b; background: rgba(16, 185, 129, 0.12); }
                @media (min-width: 768px) {
                    .top-banner-inner { position: relative; }
                    .top-banner .language-switcher {
                        position: absolute;
                        inset-inline-start: 1rem;
                        top: 50%;
                        transform: translateY(-50%);
                    }
                }
                .top-banner-text { display: flex; align-items: center; gap: 0.5rem; color: #064e3b; font-weight: 500; }
                .top-banner-text .check { color: #059669; }
                .top-banner-actions { display: flex; gap: 0.75rem; }
                .top-banner-actions button {
                    padding: 0.4rem 1rem;
                    border-radius: 0.375rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                    border: 1px solid #059669;
                }
                .top-banner-actions .primary { background: #059669; color: #fff; }
                .top-banner-actions .primary:hover { background: #047857; }
                .top-banner-actions .outline { background: transparent; color: #047857; }
                .top-banner-actions .outline:hover { background: #d1fae5; }
                "#}
            </style>
            <div class="top-banner-inner">
                <LanguageSwitcher />
                <div class="top-banner-text">
                    <span class="check" aria-hidden="true">{"✔"}</span>
                    <span>{content.text}</span>
                </div>
                <div class="top-banner-actions" role="group">
                    <button class="primary" onclick={request_access} aria-label={content.aria_request_access}>
                        {content.request_access}
                    </button>
                    <button class="outline" onclick={book_call} aria-label={content.aria_book_call}>
                        {content.book_call}
                    </button>
                </div>
            </div>
        </header>
    }
}
