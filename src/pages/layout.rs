use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::sections::banner::Banner;
use crate::content::for_language;
use crate::lead::{ContactType, FormAction, FormState};
use crate::state::use_language;

/// Opens the contact form with a preselected inquiry type.
#[derive(Clone, PartialEq)]
pub struct ContactRequest(pub Callback<ContactType>);

#[hook]
pub fn use_contact_request() -> Callback<ContactType> {
    let request = use_context::<ContactRequest>();
    match request {
        Some(ContactRequest(on_request)) => on_request,
        None => {
            log::warn!("Contact request used outside SiteFrame");
            Callback::noop()
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteFrameProps {
    #[prop_or_default]
    pub children: Children,
}

/// Header, contact modal and skip link shared by the home and legal pages.
#[function_component(SiteFrame)]
pub fn site_frame(props: &SiteFrameProps) -> Html {
    let language = use_language();
    let content = for_language(language);
    let form = use_reducer(FormState::default);

    let on_request = {
        let form = form.clone();
        Callback::from(move |contact_type: ContactType| {
            log::debug!("Opening contact form for {}", contact_type.value());
            form.dispatch(FormAction::Open(contact_type));
        })
    };

    html! {
        <ContextProvider<ContactRequest> context={ContactRequest(on_request.clone())}>
            <style>
                {r#"
                .skip-link {
                    position: absolute;
                    inset-inline-start: 1rem;
                    top: -4rem;
                    z-index: 60;
                    padding: 0.5rem 1rem;
                    border-radius: 0.375rem;
                    background: #059669;
                    color: #fff;
                    text-decoration: none;
                }
                .skip-link:focus { top: 1rem; }
                "#}
            </style>
            <a class="skip-link" href="#main-content">{content.skip_link}</a>
            <Banner content={&content.banner} {on_request} />
            { for props.children.iter() }
            <ContactForm state={form} />
        </ContextProvider<ContactRequest>>
    }
}
