use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::{for_language, CategoryText, CookieBannerContent};
use crate::prefs::consent::{self, Category, ConsentRecord, CookiePreferences, Decision};
use crate::state::{use_language, AppAction, AppContext};
use crate::storage;
use crate::Route;

fn category_text(content: &CookieBannerContent, category: Category) -> &CategoryText {
    match category {
        Category::Analytics => &content.analytics,
        Category::Marketing => &content.marketing,
        Category::Functional => &content.functional,
    }
}

#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let language = use_language();
    let app = use_context::<AppContext>();
    let content = &for_language(language).cookie_banner;
    let visible = use_state(|| false);
    let customizing = use_state(|| false);
    let selection = use_state(CookiePreferences::reject_all);

    // Offer the banner only when nothing usable is stored, after a short delay.
    {
        let visible = visible.clone();
        let app = app.clone();
        use_effect_with_deps(
            move |_| {
                let stored = storage::load_or_warn::<ConsentRecord>();
                let timeout = if consent::banner_needed(stored.as_ref()) {
                    Some(Timeout::new(config::COOKIE_BANNER_DELAY_MS, move || {
                        visible.set(true);
                    }))
                } else {
                    if let (Some(record), Some(app)) = (stored, &app) {
                        log::debug!("Cookie consent already recorded at {}", record.timestamp);
                        app.dispatch(AppAction::CookiePreferencesUpdated(record.preferences));
                    }
                    None
                };
                move || drop(timeout)
            },
            (),
        );
    }

    let decide = {
        let visible = visible.clone();
        let customizing = customizing.clone();
        move |decision: Decision| {
            let record = ConsentRecord::now(&decision);
            storage::save_or_warn(&record);
            log::info!("Cookie consent recorded: {:?}", decision);
            if let Some(app) = &app {
                app.dispatch(AppAction::CookiePreferencesUpdated(record.preferences));
            }
            customizing.set(false);
            visible.set(false);
        }
    };

    if !*visible {
        return html! {};
    }

    let accept_all = {
        let decide = decide.clone();
        Callback::from(move |_: MouseEvent| decide(Decision::AcceptAll))
    };
    let reject_all = {
        let decide = decide.clone();
        Callback::from(move |_: MouseEvent| decide(Decision::RejectAll))
    };
    let accept_selected = {
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| decide(Decision::AcceptSelected((*selection).clone())))
    };
    let show_settings = {
        let customizing = customizing.clone();
        Callback::from(move |_: MouseEvent| customizing.set(true))
    };
    let hide_settings = {
        let customizing = customizing.clone();
        Callback::from(move |_: MouseEvent| customizing.set(false))
    };

    html! {
        <div class="cookie-banner" role="region" aria-label={content.title} dir={language.dir()}>
            <style>
                {r#"
                .cookie-banner {
                    position: fixed;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    z-index: 9997;
                    padding: 1rem;
                    animation: cookie-rise 0.4s ease-out;
                }
                @keyframes cookie-rise {
                    from { transform: translateY(100%); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                .cookie-card {
                    max-width: 56rem;
                    margin: 0 auto;
                    background: #fff;
                    color: #111827;
                    border: 1px solid #e5e7eb;
                    border-radius: 1rem;
                    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.25);
                    padding: 1.5rem;
                }
                .cookie-card h3 { margin: 0 0 0.5rem; font-size: 1rem; }
                .cookie-card p { margin: 0; font-size: 0.875rem; color: #4b5563; line-height: 1.6; }
                .cookie-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-top: 1rem;
                }
                .cookie-actions button {
                    padding: 0.55rem 1.1rem;
                    border-radius: 0.5rem;
                    border: 1px solid #d1d5db;
                    background: #fff;
                    cursor: pointer;
                    font-weight: 500;
                }
                .cookie-actions .primary {
                    background: #059669;
                    border-color: #059669;
                    color: #fff;
                }
                .cookie-note { margin-top: 0.75rem !important; font-size: 0.75rem !important; }
                .cookie-note a { color: #059669; text-decoration: underline; }
                .cookie-category {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    gap: 1rem;
                    padding: 0.75rem 0;
                    border-bottom: 1px solid #f3f4f6;
                }
                .cookie-category h4 { margin: 0 0 0.25rem; font-size: 0.9rem; }
                .cookie-switch {
                    flex-shrink: 0;
                    width: 3rem;
                    height: 1.5rem;
                    border-radius: 999px;
                    border: none;
                    background: #d1d5db;
                    position: relative;
                    cursor: pointer;
                }
                .cookie-switch::after {
                    content: "";
                    position: absolute;
                    top: 0.2rem;
                    inset-inline-start: 0.2rem;
                    width: 1.1rem;
                    height: 1.1rem;
                    border-radius: 50%;
                    background: #fff;
                    transition: inset-inline-start 0.2s ease;
                }
                .cookie-switch.on { background: #059669; }
                .cookie-switch.on::after { inset-inline-start: 1.7rem; }
                .cookie-switch:disabled { opacity: 0.6; cursor: not-allowed; }
                "#}
            </style>
            <div class="cookie-card">
                if *customizing {
                    <h3>{content.settings}</h3>
                    <div class="cookie-category">
                        <div>
                            <h4>{content.necessary.title}</h4>
                            <p>{content.necessary.description}</p>
                        </div>
                        <button class="cookie-switch on" role="switch" aria-checked="true" disabled=true aria-label={content.necessary.title}></button>
                    </div>
                    { for Category::ALL.into_iter().map(|category| {
                        let text = category_text(content, category);
                        let enabled = selection.get(category);
                        let onclick = {
                            let selection = selection.clone();
                            Callback::from(move |_: MouseEvent| selection.set(selection.toggled(category)))
                        };
                        html! {
                            <div class="cookie-category">
                                <div>
                                    <h4>{text.title}</h4>
                                    <p>{text.description}</p>
                                </div>
                                <button
                                    class={classes!("cookie-switch", enabled.then_some("on"))}
                                    role="switch"
                                    aria-checked={enabled.to_string()}
                                    aria-label={text.title}
                                    {onclick}
                                ></button>
                            </div>
                        }
                    }) }
                    <div class="cookie-actions">
                        <button class="primary" onclick={accept_selected}>{content.accept_selected}</button>
                        <button onclick={hide_settings}>{content.close}</button>
                    </div>
                } else {
                    <h3>{content.title}</h3>
                    <p>{content.description}</p>
                    <div class="cookie-actions">
                        <button class="primary" onclick={accept_all}>{content.accept_all}</button>
                        <button onclick={show_settings}>{content.settings}</button>
                        <button onclick={reject_all}>{content.reject_all}</button>
                    </div>
                    <p class="cookie-note">
                        {content.learn_more}{" "}
                        <Link<Route> to={Route::PrivacyPolicy}>{content.privacy_policy}</Link<Route>>
                    </p>
                }
            </div>
        </div>
    }
}
