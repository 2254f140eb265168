use chrono::{SecondsFormat, Utc};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

use crate::api;
use crate::config;
use crate::content::{for_language, ContactFormContent};
use crate::lead::{
    ContactType, Field, FormAction, FormState, Phase, PreferredContact, SubmitGuard,
};
use crate::state::use_language;
use crate::Route;

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            log::warn!("Could not show alert: {}", message);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub state: UseReducerHandle<FormState>,
}

/// Lead-capture modal. Rendered by the home page, which owns its state.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let language = use_language();
    let content: &'static ContactFormContent = &for_language(language).contact_form;
    let guard = use_state(SubmitGuard::default);
    let state = props.state.clone();

    {
        let state = state.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && state.phase != Phase::Submitting {
                state.dispatch(FormAction::Close);
            }
        });
    }

    if !state.is_open() {
        return html! {};
    }

    let submitting = state.phase == Phase::Submitting;
    let close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            if state.phase != Phase::Submitting {
                state.dispatch(FormAction::Close);
            }
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let body = if state.phase == Phase::Submitted {
        html! {
            <div class="contact-success">
                <div class="contact-success-icon" aria-hidden="true">{"✓"}</div>
                <h2>{content.success_title}</h2>
                <p>{content.success_message}</p>
                <p class="contact-success-details">
                    <a href={format!("mailto:{}", config::SUPPORT_EMAIL)}>{config::SUPPORT_EMAIL}</a>
                    <br />
                    <span dir="ltr">{config::support_phones()}</span>
                </p>
                <button class="contact-primary" onclick={close.clone()}>{content.close}</button>
            </div>
        }
    } else {
        editing_view(content, &state, (*guard).clone(), close.clone())
    };

    html! {
        <div class="contact-backdrop" onclick={close.clone()} dir={language.dir()}>
            <style>
                {r#"
                .contact-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 10000;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(4px);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .contact-modal {
                    width: 100%;
                    max-width: 36rem;
                    max-height: 90vh;
                    overflow-y: auto;
                    background: #fff;
                    color: #111827;
                    border-radius: 1rem;
                    box-shadow: 0 25px 60px rgba(0, 0, 0, 0.35);
                    padding: 1.75rem;
                    position: relative;
                }
                .contact-modal h2 { margin: 0 0 1.25rem; font-size: 1.5rem; }
                .contact-x {
                    position: absolute;
                    top: 1rem;
                    inset-inline-end: 1rem;
                    border: none;
                    background: none;
                    font-size: 1.25rem;
                    cursor: pointer;
                }
                .contact-field { display: flex; flex-direction: column; gap: 0.35rem; margin-bottom: 1rem; }
                .contact-field label { font-size: 0.875rem; font-weight: 600; }
                .contact-field input,
                .contact-field select,
                .contact-field textarea {
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    padding: 0.6rem 0.75rem;
                    font: inherit;
                }
                .contact-field textarea { min-height: 6rem; resize: vertical; }
                .contact-row { display: grid; grid-template-columns: 1fr; gap: 0 1rem; }
                @media (min-width: 640px) {
                    .contact-row { grid-template-columns: 1fr 1fr; }
                }
                .contact-radios { display: flex; gap: 1.5rem; }
                .contact-radios label { font-weight: 400; display: flex; gap: 0.4rem; align-items: center; }
                .contact-consent {
                    background: #f0fdf4;
                    border: 1px solid #bbf7d0;
                    border-radius: 0.75rem;
                    padding: 1rem;
                    margin-bottom: 1rem;
                }
                .contact-consent h3 { margin: 0 0 0.5rem; font-size: 0.95rem; }
                .contact-consent label { display: flex; gap: 0.6rem; align-items: flex-start; font-size: 0.85rem; line-height: 1.5; }
                .contact-consent a { color: #059669; text-decoration: underline; }
                .contact-actions { display: flex; gap: 0.75rem; justify-content: flex-end; }
                .contact-actions button, .contact-success button {
                    padding: 0.65rem 1.4rem;
                    border-radius: 0.5rem;
                    border: 1px solid #d1d5db;
                    background: #fff;
                    cursor: pointer;
                    font-weight: 600;
                }
                .contact-primary {
                    background: #059669 !important;
                    border-color: #059669 !important;
                    color: #fff;
                }
                .contact-primary:disabled { opacity: 0.5; cursor: not-allowed; }
                .contact-success { text-align: center; }
                .contact-success-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    background: #d1fae5;
                    color: #059669;
                    font-size: 2rem;
                    line-height: 4rem;
                }
                .contact-success-details { font-weight: 600; }
                "#}
            </style>
            <div class="contact-modal" role="dialog" aria-modal="true" aria-label={content.title} onclick={keep_open}>
                <button class="contact-x" onclick={close} disabled={submitting} aria-label={content.close}>{"✕"}</button>
                {body}
            </div>
        </div>
    }
}

fn text_field(
    content: &'static ContactFormContent,
    state: &UseReducerHandle<FormState>,
    field: Field,
    input_type: &'static str,
) -> Html {
    let id = format!("contact-{:?}", field).to_lowercase();
    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(FormAction::Edit(field, input.value()));
        })
    };
    html! {
        <div class="contact-field">
            <label for={id.clone()}>{field.label(content)}</label>
            <input
                id={id}
                type={input_type}
                value={state.form.get(field).to_string()}
                required={field.is_required()}
                disabled={state.phase != Phase::Editing}
                {oninput}
            />
        </div>
    }
}

fn editing_view(
    content: &'static ContactFormContent,
    state: &UseReducerHandle<FormState>,
    guard: SubmitGuard,
    close: Callback<MouseEvent>,
) -> Html {
    let form = &state.form;
    let submitting = state.phase == Phase::Submitting;

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            let submission = match state.form.to_submission(timestamp) {
                Ok(submission) => submission,
                Err(err) => {
                    log::debug!("Contact form not sent: {}", err);
                    alert(&err.user_message(content));
                    return;
                }
            };
            let in_flight = match guard.try_acquire() {
                Ok(token) => token,
                Err(err) => {
                    log::warn!("Ignoring submit: {}", err);
                    alert(&err.user_message(content));
                    return;
                }
            };
            state.dispatch(FormAction::SubmitStarted);

            let state = state.clone();
            spawn_local(async move {
                let result = api::submit_lead(&submission).await;
                drop(in_flight);
                match result {
                    Ok(()) => {
                        log::info!("Contact submission accepted");
                        state.dispatch(FormAction::SubmitSucceeded);
                    }
                    Err(err) => {
                        log::warn!("Contact submission failed: {}", err);
                        state.dispatch(FormAction::SubmitFailed);
                        alert(&err.user_message(content));
                    }
                }
            });
        })
    };

    let on_contact_type = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(contact_type) = ContactType::from_value(&select.value()) {
                state.dispatch(FormAction::SetContactType(contact_type));
            }
        })
    };
    let on_reason = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            state.dispatch(FormAction::Edit(Field::Reason, input.value()));
        })
    };
    let on_consent = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(FormAction::SetConsent(input.checked()));
        })
    };

    html! {
        <form {onsubmit} novalidate=true>
            <h2>{content.title}</h2>
            <div class="contact-row">
                {text_field(content, state, Field::Name, "text")}
                {text_field(content, state, Field::Email, "email")}
                {text_field(content, state, Field::Phone, "tel")}
                {text_field(content, state, Field::Organization, "text")}
            </div>
            <div class="contact-field">
                <label for="contact-type">{content.inquiry_type_label}</label>
                <select id="contact-type" onchange={on_contact_type} disabled={submitting}>
                    { for ContactType::ALL.into_iter().map(|contact_type| html! {
                        <option
                            value={contact_type.value()}
                            selected={contact_type == form.contact_type}
                        >
                            {contact_type.label(content)}
                        </option>
                    }) }
                </select>
            </div>
            <fieldset class="contact-field" style="border: none; padding: 0;">
                <label>{content.preferred_contact_label}</label>
                <div class="contact-radios">
                    { for PreferredContact::ALL.into_iter().map(|method| {
                        let onchange = {
                            let state = state.clone();
                            Callback::from(move |_: Event| {
                                state.dispatch(FormAction::SetPreferredContact(method));
                            })
                        };
                        html! {
                            <label>
                                <input
                                    type="radio"
                                    name="preferred-contact"
                                    value={method.value()}
                                    checked={method == form.preferred_contact}
                                    disabled={submitting}
                                    {onchange}
                                />
                                {method.label(content)}
                            </label>
                        }
                    }) }
                </div>
            </fieldset>
            <div class="contact-field">
                <label for="contact-reason">{content.reason_label}</label>
                <textarea
                    id="contact-reason"
                    placeholder={content.reason_placeholder}
                    value={form.reason.clone()}
                    required=true
                    disabled={submitting}
                    oninput={on_reason}
                />
            </div>
            <div class="contact-consent">
                <h3>{content.privacy_consent.title}</h3>
                <label>
                    <input
                        type="checkbox"
                        checked={form.privacy_consent}
                        disabled={submitting}
                        onchange={on_consent}
                    />
                    <span>
                        {content.privacy_consent.text}{" "}
                        <Link<Route> to={Route::PrivacyPolicy}>
                            {content.privacy_consent.privacy_policy_link}
                        </Link<Route>>
                    </span>
                </label>
            </div>
            <div class="contact-actions">
                <button type="button" onclick={close} disabled={submitting}>
                    {content.cancel_button}
                </button>
                <button
                    type="submit"
                    class="contact-primary"
                    disabled={submitting || !form.privacy_consent}
                >
                    { if submitting { content.submitting_button } else { content.submit_button } }
                </button>
            </div>
        </form>
    }
}
