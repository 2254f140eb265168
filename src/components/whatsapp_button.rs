use yew::prelude::*;

use crate::config;
use crate::content::for_language;
use crate::state::use_language;

const WHATSAPP_GLYPH: &str = "M12.04 2c-5.46 0-9.91 4.45-9.91 9.91 0 1.75.46 3.45 1.32 4.95L2 22l5.25-1.38c1.45.79 3.08 1.21 4.79 1.21 5.46 0 9.91-4.45 9.91-9.91s-4.45-9.91-9.91-9.91zm0 18.01c-1.48 0-2.93-.39-4.2-1.12l-.3-.18-3.12.82.83-3.04-.2-.31c-.82-1.31-1.26-2.83-1.26-4.39 0-4.54 3.7-8.24 8.24-8.24 4.54 0 8.24 3.7 8.24 8.24 0 4.54-3.7 8.24-8.24 8.24zm4.52-6.13c-.25-.12-1.47-.72-1.7-.81-.23-.08-.39-.12-.56.12-.17.25-.64.81-.79.97-.15.17-.29.18-.54.06s-1.01-.37-1.93-1.19c-.72-.64-1.2-1.42-1.34-1.67-.14-.25-.01-.39.11-.5.11-.11.25-.29.37-.43.13-.15.17-.25.25-.41.08-.17.04-.31-.02-.43s-.56-1.34-.76-1.84c-.2-.48-.41-.42-.56-.42h-.48c-.17 0-.43.06-.66.31-.22.25-.86.84-.86 2.05 0 1.21.88 2.37 1 2.54.12.17 1.76 2.68 4.27 3.77 2.51 1.08 2.51.72 2.96.7.45-.02 1.47-.6 1.68-1.18.21-.58.21-1.08.15-1.18-.07-.1-.23-.16-.48-.28z";

#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    let language = use_language();
    let label = for_language(language).whatsapp_label;

    html! {
        <>
            <style>
                {r#"
                .whatsapp-button {
                    position: fixed;
                    bottom: 5rem;
                    inset-inline-start: 1rem;
                    z-index: 9998;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    background: #25D366;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 6px 18px rgba(0, 0, 0, 0.25);
                    transition: transform 0.2s ease;
                    animation: whatsapp-pop 0.5s ease-out 1.2s both;
                }
                .whatsapp-button:hover { transform: scale(1.1); }
                .whatsapp-button:active { transform: scale(0.95); }
                @keyframes whatsapp-pop {
                    from { transform: scale(0); opacity: 0; }
                    to { transform: scale(1); opacity: 1; }
                }
                "#}
            </style>
            <a
                class="whatsapp-button"
                href={config::whatsapp_url()}
                target="_blank"
                rel="noopener noreferrer"
                aria-label={label}
            >
                <svg xmlns="http://www.w3.org/2000/svg" width="28" height="28" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                    <path d={WHATSAPP_GLYPH} />
                </svg>
            </a>
        </>
    }
}
