use chrono::{Local, NaiveDate};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::rich::{highlight, rich};
use crate::config;
use crate::content::{for_language, LegalPage};
use crate::state::{use_language, Language};
use crate::Route;

const LEGAL_CSS: &str = r#"
.legal-page { position: relative; z-index: 1; min-height: 100vh; padding: 3rem 1rem; }
.legal-content {
    max-width: 56rem;
    margin: 0 auto;
    background: rgba(255, 255, 255, 0.92);
    border-radius: 0.75rem;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
    padding: 2.5rem 2rem;
    color: #374151;
    line-height: 1.7;
    text-align: start;
}
.legal-content h1 { margin: 0 0 2rem; font-size: 2.25rem; font-weight: 700; color: #065f46; }
.legal-content h2 { margin: 0 0 1rem; font-size: 1.5rem; font-weight: 600; color: #047857; }
.legal-content section { margin-bottom: 2rem; }
.legal-content p { margin: 0 0 1rem; }
.legal-content ul { margin: 0 0 1rem; padding-inline-start: 1.25rem; }
.legal-content li { margin-bottom: 0.5rem; }
.legal-content .brand-mark { color: #059669; }
.legal-title-rule { width: 4rem; height: 0.25rem; margin: -1rem auto 2.5rem; border-radius: 999px; background: #059669; }
.legal-panel { background: #f9fafb; border-radius: 0.5rem; padding: 1.5rem; }
.legal-panel.accent { background: #ecfdf5; }
.legal-columns { display: grid; grid-template-columns: 1fr; gap: 0 1rem; }
@media (min-width: 768px) {
    .legal-columns { grid-template-columns: 1fr 1fr; }
}
.legal-contact { display: flex; flex-direction: column; gap: 1rem; }
.legal-contact-line { display: flex; align-items: center; gap: 1rem; }
.legal-contact-line .icon { background: #d1fae5; border-radius: 50%; padding: 0.6rem; }
.legal-contact-line p { margin: 0; }
.legal-contact-line .label { font-weight: 600; color: #111827; }
.legal-updated { border-top: 1px solid #e5e7eb; padding-top: 1.5rem; text-align: center; font-size: 0.875rem; color: #6b7280; }
.back-home { text-align: center; margin-top: 3rem; }
.back-home a {
    display: inline-block;
    padding: 0.75rem 1.5rem;
    border-radius: 0.375rem;
    background: #059669;
    color: #fff;
    text-decoration: none;
    font-weight: 500;
}
.back-home a:hover { background: #047857; }
"#;

/// Date shown on the "last updated" line, in the reader's locale style.
pub fn format_updated(language: Language, date: NaiveDate) -> String {
    match language {
        Language::He => date.format("%-d.%-m.%Y").to_string(),
        Language::En => date.format("%B %-d, %Y").to_string(),
    }
}

fn back_home(language: Language) -> Html {
    html! {
        <div class="back-home">
            <Link<Route> to={Route::Home}>{for_language(language).back_to_home}</Link<Route>>
        </div>
    }
}

fn bullet_list(items: &'static [&'static str]) -> Html {
    html! {
        <ul>
            { for items.iter().map(|item| html! { <li>{highlight(*item)}</li> }) }
        </ul>
    }
}

fn legal_document(page: &'static LegalPage) -> Html {
    html! {
        <>
            <h1>{page.title}</h1>
            { for page.sections.iter().map(|section| html! {
                <section>
                    <h2>{section.heading}</h2>
                    { for section.paragraphs.iter().map(|p| html! { <p>{highlight(*p)}</p> }) }
                    if !section.list.is_empty() {
                        {bullet_list(section.list)}
                    }
                </section>
            }) }
        </>
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum LegalKind {
    PrivacyPolicy,
    TermsOfService,
}

#[derive(Properties, PartialEq)]
pub struct LegalViewProps {
    pub kind: LegalKind,
}

/// Privacy policy or terms of service for the active language.
#[function_component(LegalView)]
pub fn legal_view(props: &LegalViewProps) -> Html {
    let language = use_language();
    let content = for_language(language);
    let page = match props.kind {
        LegalKind::PrivacyPolicy => &content.privacy_policy,
        LegalKind::TermsOfService => &content.terms_of_service,
    };

    html! {
        <main id="main-content" class="legal-page" dir={language.dir()} lang={language.code()}>
            <style>{LEGAL_CSS}</style>
            <div class="legal-content">
                {legal_document(page)}
                {back_home(language)}
            </div>
        </main>
    }
}

#[function_component(AccessibilityStatementPage)]
pub fn accessibility_statement_page() -> Html {
    let language = use_language();
    let statement = &for_language(language).accessibility_statement;
    let today = format_updated(language, Local::now().date_naive());
    let (left, right) = statement.features.split_at(statement.features.len().div_ceil(2));

    html! {
        <div class="legal-page" dir={language.dir()} lang={language.code()}>
            <style>{LEGAL_CSS}</style>
            <div class="legal-content">
                <h1 style="text-align: center;">{statement.title}</h1>
                <div class="legal-title-rule"></div>

                <section>
                    <p>{rich(statement.intro)}</p>
                </section>

                <section>
                    <h2>{statement.commitment_heading}</h2>
                    <p>{statement.commitment}</p>
                </section>

                <section>
                    <h2>{statement.standards_heading}</h2>
                    <div class="legal-panel">{bullet_list(statement.standards)}</div>
                </section>

                <section>
                    <h2>{statement.features_heading}</h2>
                    <div class="legal-columns">
                        {bullet_list(left)}
                        {bullet_list(right)}
                    </div>
                </section>

                <section>
                    <h2>{statement.ongoing_heading}</h2>
                    <div class="legal-panel accent"><p>{statement.ongoing}</p></div>
                </section>

                <section>
                    <h2>{statement.contact_heading}</h2>
                    <div class="legal-panel">
                        <p>{statement.contact_intro}</p>
                        <div class="legal-contact">
                            <div class="legal-contact-line">
                                <span class="icon" aria-hidden="true">{"📞"}</span>
                                <div>
                                    <p class="label">{statement.coordinator}</p>
                                    <p dir="ltr">{config::SUPPORT_PHONE}</p>
                                </div>
                            </div>
                            <div class="legal-contact-line">
                                <span class="icon" aria-hidden="true">{"✉️"}</span>
                                <div>
                                    <p class="label">{statement.email_label}</p>
                                    <p><a href={format!("mailto:{}", config::SUPPORT_EMAIL)}>{config::SUPPORT_EMAIL}</a></p>
                                </div>
                            </div>
                            <div class="legal-contact-line">
                                <span class="icon" aria-hidden="true">{"📅"}</span>
                                <div>
                                    <p class="label">{statement.response_label}</p>
                                    <p>{statement.response_time}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </section>

                <p class="legal-updated">{format!("{} {}", statement.last_updated, today)}</p>
                {back_home(language)}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updated_date_follows_locale_style() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
        assert_eq!(format_updated(Language::He, date), "4.8.2025");
        assert_eq!(format_updated(Language::En, date), "August 4, 2025");
    }
}
