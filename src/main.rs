use log::info;
use stylist::GlobalStyle;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod config;
mod content;
mod lead;
mod network;
mod state;
mod storage;
mod prefs {
    pub mod accessibility;
    pub mod consent;
}
mod components {
    pub mod accessibility_menu;
    pub mod animated_number;
    pub mod animated_text;
    pub mod background;
    pub mod contact_form;
    pub mod cookie_banner;
    pub mod faq;
    pub mod in_view;
    pub mod language_switcher;
    pub mod loading_bar;
    pub mod rich;
    pub mod whatsapp_button;
    pub mod sections {
        pub mod advisors;
        pub mod banner;
        pub mod cta;
        pub mod footer;
        pub mod hero;
        pub mod product;
        pub mod story;
        pub mod team;
        pub mod why_now;
    }
}
mod pages {
    pub mod home;
    pub mod layout;
    pub mod legal;
}

use components::{
    accessibility_menu::AccessibilityMenu, background::AnimatedBackground,
    cookie_banner::CookieBanner, whatsapp_button::WhatsAppButton,
};
use pages::{
    home::Home,
    layout::SiteFrame,
    legal::{AccessibilityStatementPage, LegalKind, LegalView},
};
use prefs::accessibility::ROOT_MARKER_CSS;
use state::{AppContext, AppState};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    PrivacyPolicy,
    #[at("/terms")]
    TermsOfService,
    #[at("/accessibility")]
    Accessibility,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Pages that carry the site header and the contact form it opens.
    pub fn has_site_header(&self) -> bool {
        !matches!(self, Route::Accessibility)
    }
}

fn switch(routes: Route) -> Html {
    let page = match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::PrivacyPolicy => {
            info!("Rendering Privacy Policy page");
            html! { <LegalView kind={LegalKind::PrivacyPolicy} /> }
        }
        Route::TermsOfService => {
            info!("Rendering Terms of Service page");
            html! { <LegalView kind={LegalKind::TermsOfService} /> }
        }
        Route::Accessibility => {
            info!("Rendering Accessibility Statement page");
            html! { <AccessibilityStatementPage /> }
        }
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        }
    };
    if routes.has_site_header() {
        html! { <SiteFrame>{page}</SiteFrame> }
    } else {
        page
    }
}

/// Jumps back to the top whenever the route changes.
#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let path = use_location().map(|location| location.path().to_string());
    use_effect_with_deps(
        |_| {
            if let Some(window) = window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        path,
    );
    html! {}
}

#[function_component]
fn App() -> Html {
    let app = use_reducer(AppState::default);

    // Mirror the language onto <html> so assistive tech and CSS see it.
    {
        let language = app.language;
        use_effect_with_deps(
            move |language| {
                if let Some(root) = window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                {
                    let _ = root.set_attribute("lang", language.code());
                    let _ = root.set_attribute("dir", language.dir());
                }
                || ()
            },
            language,
        );
    }

    use_effect_with_deps(
        |_| {
            let global = match GlobalStyle::new(ROOT_MARKER_CSS) {
                Ok(style) => Some(style),
                Err(e) => {
                    log::warn!("Could not mount accessibility styles: {}", e);
                    None
                }
            };
            move || {
                if let Some(style) = global {
                    style.unregister();
                }
            }
        },
        (),
    );

    html! {
        <ContextProvider<AppContext> context={app}>
            <BrowserRouter>
                <ScrollToTop />
                <AnimatedBackground />
                <Switch<Route> render={switch} />
                <AccessibilityMenu />
                <WhatsAppButton />
                <CookieBanner />
            </BrowserRouter>
        </ContextProvider<AppContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::LOG_LEVEL).expect("error initializing log");

    info!("Starting {} landing page (app {})", config::BRAND, config::APP_ID);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_shown_on_home_and_legal_pages() {
        for route in [
            Route::Home,
            Route::PrivacyPolicy,
            Route::TermsOfService,
            Route::NotFound,
        ] {
            assert!(route.has_site_header(), "{route:?}");
        }
        assert!(!Route::Accessibility.has_site_header());
    }

    #[test]
    fn legal_paths_resolve() {
        assert_eq!(Route::recognize("/privacy"), Some(Route::PrivacyPolicy));
        assert_eq!(Route::recognize("/terms"), Some(Route::TermsOfService));
    }
}
