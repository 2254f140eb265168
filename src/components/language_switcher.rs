use yew::prelude::*;

use crate::content::for_language;
use crate::state::{AppAction, AppContext, Language};

#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let app = use_context::<AppContext>();
    let Some(app) = app else {
        log::warn!("LanguageSwitcher rendered outside the app state provider");
        return html! {};
    };
    let current = app.language;
    let label = for_language(current).language_label;

    html! {
        <div class="language-switcher" role="group" aria-label={label}>
            <style>
                {r#"
                .language-switcher {
                    display: inline-flex;
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 999px;
                    padding: 0.2rem;
                }
                .language-switcher button {
                    border: none;
                    background: transparent;
                    color: inherit;
                    font-weight: 600;
                    font-size: 0.8rem;
                    padding: 0.3rem 0.8rem;
                    border-radius: 999px;
                    cursor: pointer;
                }
                .language-switcher button[aria-pressed="true"] {
                    background: #fff;
                    color: #064e3b;
                }
                "#}
            </style>
            { for Language::ALL.into_iter().map(|language| {
                let app = app.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    log::debug!("Switching language to {}", language);
                    app.dispatch(AppAction::SetLanguage(language));
                });
                html! {
                    <button
                        lang={language.code()}
                        aria-pressed={(language == current).to_string()}
                        {onclick}
                    >
                        {language.short_name()}
                    </button>
                }
            }) }
        </div>
    }
}
