use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::rich::rich;
use crate::config;
use crate::content::{FooterContent, FooterLink, LinkTarget, LOGO_IMAGE};
use crate::Route;

fn route_for(target: LinkTarget) -> Option<Route> {
    match target {
        LinkTarget::PrivacyPolicy => Some(Route::PrivacyPolicy),
        LinkTarget::TermsOfService => Some(Route::TermsOfService),
        LinkTarget::Placeholder => None,
    }
}

fn footer_link(link: &FooterLink) -> Html {
    match route_for(link.target) {
        Some(route) => html! {
            <Link<Route> to={route} classes="footer-link">{link.name}</Link<Route>>
        },
        None => html! { <a class="footer-link" href="#">{link.name}</a> },
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub content: &'static FooterContent,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let content = props.content;
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer { background: #0f172a; color: #fff; position: relative; z-index: 1; }
                .footer-inner { max-width: 80rem; margin: 0 auto; padding: 5rem 1.5rem; text-align: start; }
                .footer-grid { display: grid; grid-template-columns: 1fr; gap: 3rem; }
                @media (min-width: 768px) {
                    .footer-grid { grid-template-columns: 1fr 1fr; }
                }
                @media (min-width: 1024px) {
                    .footer-grid { grid-template-columns: 2fr 1fr 1fr; }
                }
                .footer-brand { display: flex; align-items: center; gap: 0.75rem; }
                .footer-brand img { width: 2.5rem; height: 2.5rem; }
                .footer-brand h3 { margin: 0; font-size: 1.5rem; font-weight: 700; }
                .footer-tagline { margin: 1.5rem 0 0; max-width: 28rem; color: #d1d5db; line-height: 1.7; }
                .site-footer h4 { margin: 0 0 1.5rem; font-size: 1.125rem; font-weight: 600; }
                .footer-contact { display: flex; flex-direction: column; gap: 1rem; }
                .footer-contact-line { display: flex; gap: 0.75rem; align-items: flex-start; }
                .footer-contact-line .name { margin: 0 0 0.25rem; font-size: 0.875rem; color: #9ca3af; }
                .footer-contact-line .value { margin: 0; font-size: 0.875rem; color: #e5e7eb; }
                .footer-links { display: flex; flex-direction: column; gap: 0.75rem; }
                .footer-link { color: #d1d5db; font-size: 0.875rem; text-decoration: none; transition: color 0.2s ease; }
                .footer-link:hover { color: #34d399; }
                .footer-bottom {
                    margin-top: 4rem;
                    padding-top: 2rem;
                    border-top: 1px solid #1e293b;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }
                .footer-bottom p { margin: 0; }
                .footer-bottom .brand-mark { color: #fff; }
                "#}
            </style>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <img src={LOGO_IMAGE} alt={format!("{} Logo", config::BRAND)} />
                            <h3>{config::BRAND}</h3>
                        </div>
                        <p class="footer-tagline">{content.tagline}</p>
                    </div>
                    <div>
                        <h4>{content.get_in_touch}</h4>
                        <div class="footer-contact">
                            { for content.contact.iter().map(|line| html! {
                                <div class="footer-contact-line">
                                    <span aria-hidden="true">{line.kind.glyph()}</span>
                                    <div>
                                        <p class="name">{line.name}</p>
                                        <p class="value">{line.value}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div>
                        <h4>{content.resources}</h4>
                        <nav class="footer-links">
                            { for content.links.iter().map(footer_link) }
                            <Link<Route> to={Route::Accessibility} classes="footer-link">
                                {content.accessibility_statement}
                            </Link<Route>>
                        </nav>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{rich(content.copyright)}</p>
                    <p><span aria-hidden="true">{"🌐 "}</span>{content.availability}</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_links_route_internally() {
        assert_eq!(route_for(LinkTarget::PrivacyPolicy), Some(Route::PrivacyPolicy));
        assert_eq!(route_for(LinkTarget::TermsOfService), Some(Route::TermsOfService));
        assert_eq!(route_for(LinkTarget::Placeholder), None);
    }
}
