use yew::prelude::*;

use crate::components::faq::Faq;
use crate::components::sections::{
    advisors::Advisors, cta::Cta, footer::Footer, hero::Hero, product::Product, story::Story,
    team::Team, why_now::WhyNow,
};
use crate::content::for_language;
use crate::pages::layout::use_contact_request;
use crate::state::use_language;

#[function_component(Home)]
pub fn home() -> Html {
    let language = use_language();
    let content = for_language(language);
    let on_request = use_contact_request();

    html! {
        <div class="home" dir={language.dir()} lang={language.code()}>
            <style>
                {r#"
                .home { position: relative; z-index: 1; min-height: 100vh; }
                .brand-mark { font-weight: 500; color: #047857; }
                .reveal { opacity: 0; transform: translateY(40px); transition: opacity 0.7s ease, transform 0.7s ease; }
                .reveal.visible { opacity: 1; transform: none; }
                @media (prefers-reduced-motion: reduce) {
                    .reveal { opacity: 1; transform: none; transition: none; }
                    *, *::before, *::after { animation-duration: 0.01ms !important; animation-iteration-count: 1 !important; }
                }
                "#}
            </style>
            <main id="main-content" role="main">
                <Hero content={&content.hero} on_request={on_request.clone()} />
                <Story content={&content.story} />
                <Product content={&content.product} />
                <WhyNow content={&content.why_now} />
                <Cta content={&content.cta} on_request={on_request} />
                <Team content={&content.team} />
                <Advisors content={&content.advisors} />
                <Faq content={&content.faq} />
            </main>
            <Footer content={&content.footer} />
        </div>
    }
}
