//! Contact form model: the fields a visitor fills in, the checks run before
//! sending, and the open/edit/submit lifecycle of the modal.

use std::cell::Cell;
use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use yew::Reducible;

use crate::content::ContactFormContent;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactType {
    #[default]
    EarlyAccess,
    Consultation,
    Partnership,
    General,
}

impl ContactType {
    pub const ALL: [ContactType; 4] = [
        ContactType::EarlyAccess,
        ContactType::Consultation,
        ContactType::Partnership,
        ContactType::General,
    ];

    /// Wire value, also used as the `<option>` value.
    pub fn value(self) -> &'static str {
        match self {
            ContactType::EarlyAccess => "early_access",
            ContactType::Consultation => "consultation",
            ContactType::Partnership => "partnership",
            ContactType::General => "general",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }

    pub fn label(self, content: &ContactFormContent) -> &'static str {
        let labels = &content.inquiry_types;
        match self {
            ContactType::EarlyAccess => labels.early_access,
            ContactType::Consultation => labels.consultation,
            ContactType::Partnership => labels.partnership,
            ContactType::General => labels.general,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredContact {
    #[default]
    Email,
    Phone,
}

impl PreferredContact {
    pub const ALL: [PreferredContact; 2] = [PreferredContact::Email, PreferredContact::Phone];

    pub fn value(self) -> &'static str {
        match self {
            PreferredContact::Email => "email",
            PreferredContact::Phone => "phone",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }

    pub fn label(self, content: &ContactFormContent) -> &'static str {
        match self {
            PreferredContact::Email => content.contact_methods.email,
            PreferredContact::Phone => content.contact_methods.phone,
        }
    }
}

/// Free-text inputs of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Organization,
    Reason,
}

impl Field {
    /// Form order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Organization,
        Field::Reason,
    ];

    pub fn is_required(self) -> bool {
        matches!(self, Field::Name | Field::Email | Field::Reason)
    }

    pub fn label(self, content: &ContactFormContent) -> &'static str {
        match self {
            Field::Name => content.name_label,
            Field::Email => content.email_label,
            Field::Phone => content.phone_label,
            Field::Organization => content.org_label,
            Field::Reason => content.reason_label,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("privacy consent not given")]
    ConsentRequired,
    #[error("required field {0:?} is empty")]
    MissingField(Field),
    #[error("email address is malformed")]
    InvalidEmail,
    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

impl ValidationError {
    /// Text shown to the visitor in the blocking alert.
    pub fn user_message(&self, content: &ContactFormContent) -> String {
        match self {
            ValidationError::ConsentRequired => content.privacy_consent_required.to_string(),
            ValidationError::MissingField(field) => {
                format!("{} {}", content.missing_field, field.label(content).trim_end_matches(" *"))
            }
            ValidationError::InvalidEmail => content.invalid_email.to_string(),
            ValidationError::AlreadySubmitting => content.already_submitting.to_string(),
        }
    }
}

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

/// `local@domain.tld` shape check. The endpoint does the real validation.
pub fn looks_like_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

/// What the visitor has typed so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub reason: String,
    pub contact_type: ContactType,
    pub preferred_contact: PreferredContact,
    pub privacy_consent: bool,
}

impl LeadForm {
    pub fn new(contact_type: ContactType) -> Self {
        Self {
            contact_type,
            ..Self::default()
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Organization => &self.organization,
            Field::Reason => &self.reason,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Organization => &mut self.organization,
            Field::Reason => &mut self.reason,
        };
        *slot = value;
    }

    /// Consent is checked before anything else, then required fields, then the email shape.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.privacy_consent {
            return Err(ValidationError::ConsentRequired);
        }
        for field in Field::ALL.into_iter().filter(|f| f.is_required()) {
            if self.get(field).trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        if !looks_like_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    pub fn to_submission(&self, consent_timestamp: String) -> Result<ContactSubmission, ValidationError> {
        self.validate()?;
        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            organization: self.organization.trim().to_string(),
            contact_type: self.contact_type,
            reason: self.reason.trim().to_string(),
            preferred_contact: self.preferred_contact,
            privacy_consent: true,
            consent_timestamp,
        })
    }
}

/// JSON body posted to the form endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub contact_type: ContactType,
    pub reason: String,
    pub preferred_contact: PreferredContact,
    pub privacy_consent: bool,
    pub consent_timestamp: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Closed,
    Editing,
    Submitting,
    Submitted,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub phase: Phase,
    pub form: LeadForm,
}

impl FormState {
    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }
}

pub enum FormAction {
    Open(ContactType),
    Close,
    Edit(Field, String),
    SetContactType(ContactType),
    SetPreferredContact(PreferredContact),
    SetConsent(bool),
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed,
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let phase = self.phase;
        let mut form = self.form.clone();
        let next_phase = match action {
            FormAction::Open(_) | FormAction::Close if phase == Phase::Submitting => return self,
            FormAction::Open(contact_type) => {
                form = LeadForm::new(contact_type);
                Phase::Editing
            }
            FormAction::Close => {
                form = LeadForm::default();
                Phase::Closed
            }
            FormAction::Edit(..)
            | FormAction::SetContactType(_)
            | FormAction::SetPreferredContact(_)
            | FormAction::SetConsent(_)
                if phase != Phase::Editing =>
            {
                return self;
            }
            FormAction::Edit(field, value) => {
                form.set(field, value);
                phase
            }
            FormAction::SetContactType(contact_type) => {
                form.contact_type = contact_type;
                phase
            }
            FormAction::SetPreferredContact(preferred) => {
                form.preferred_contact = preferred;
                phase
            }
            FormAction::SetConsent(consent) => {
                form.privacy_consent = consent;
                phase
            }
            FormAction::SubmitStarted if phase == Phase::Editing => Phase::Submitting,
            FormAction::SubmitSucceeded if phase == Phase::Submitting => {
                form = LeadForm::default();
                Phase::Submitted
            }
            FormAction::SubmitFailed if phase == Phase::Submitting => Phase::Editing,
            FormAction::SubmitStarted | FormAction::SubmitSucceeded | FormAction::SubmitFailed => {
                return self;
            }
        };
        Rc::new(FormState {
            phase: next_phase,
            form,
        })
    }
}

/// Shared busy flag so only one send can be in flight, even if two clicks
/// land before the component re-renders.
#[derive(Clone, Debug, Default)]
pub struct SubmitGuard(Rc<Cell<bool>>);

impl SubmitGuard {
    pub fn try_acquire(&self) -> Result<InFlight, ValidationError> {
        if self.0.replace(true) {
            Err(ValidationError::AlreadySubmitting)
        } else {
            Ok(InFlight(self.0.clone()))
        }
    }

    pub fn is_busy(&self) -> bool {
        self.0.get()
    }
}

/// Held for the lifetime of one send; dropping it frees the guard.
#[derive(Debug)]
pub struct InFlight(Rc<Cell<bool>>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::for_language;
    use crate::state::Language;
    use pretty_assertions::assert_eq;

    const TS: &str = "2025-08-04T16:39:18.000Z";

    fn dana() -> LeadForm {
        LeadForm {
            name: "Dana".into(),
            email: "dana@clinic.co.il".into(),
            reason: "need a demo".into(),
            contact_type: ContactType::Consultation,
            privacy_consent: true,
            ..LeadForm::default()
        }
    }

    fn reduce(state: Rc<FormState>, actions: Vec<FormAction>) -> Rc<FormState> {
        actions.into_iter().fold(state, |s, a| s.reduce(a))
    }

    #[test]
    fn dana_submission_serializes_to_wire_shape() {
        let submission = dana().to_submission(TS.to_string()).unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Dana",
                "email": "dana@clinic.co.il",
                "phone": "",
                "organization": "",
                "contact_type": "consultation",
                "reason": "need a demo",
                "preferred_contact": "email",
                "privacy_consent": true,
                "consent_timestamp": TS,
            })
        );
    }

    #[test]
    fn consent_is_checked_first() {
        let form = LeadForm::default();
        assert_eq!(form.validate(), Err(ValidationError::ConsentRequired));
        let form = LeadForm {
            email: "dana@example.com".into(),
            privacy_consent: false,
            ..dana()
        };
        assert_eq!(form.to_submission(TS.into()), Err(ValidationError::ConsentRequired));
    }

    #[test]
    fn required_fields_then_email_shape() {
        let mut form = dana();
        form.name = "   ".into();
        assert_eq!(form.validate(), Err(ValidationError::MissingField(Field::Name)));
        form.name = "Dana".into();
        form.email = String::new();
        assert_eq!(form.validate(), Err(ValidationError::MissingField(Field::Email)));
        form.email = "dana@clinic.co.il".into();
        form.reason = "\n".into();
        assert_eq!(form.validate(), Err(ValidationError::MissingField(Field::Reason)));
        form.reason = "need a demo".into();
        assert_eq!(form.validate(), Ok(()));
        form.email = "dana.clinic".into();
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.co", " dana@clinic.co.il ", "x.y+z@sub.example.org"] {
            assert!(looks_like_email(ok), "{ok}");
        }
        for bad in [
            "",
            "@b.co",
            "a@",
            "a@b",
            "a@.co",
            "a@b.",
            "a b@c.de",
            "a@b@c.de",
            "a@b.c",
            "a;b@c.de",
            "a<script>@x.yz",
            "a@-.-",
        ] {
            assert!(!looks_like_email(bad), "{bad}");
        }
    }

    #[test]
    fn user_messages_come_from_locale() {
        let en = &for_language(Language::En).contact_form;
        assert_eq!(
            ValidationError::ConsentRequired.user_message(en),
            en.privacy_consent_required
        );
        let msg = ValidationError::MissingField(Field::Email).user_message(en);
        assert!(msg.starts_with(en.missing_field));
        assert!(msg.ends_with("Email"));
        assert!(!msg.contains('*'));
        let busy = ValidationError::AlreadySubmitting.user_message(en);
        assert_eq!(busy, en.already_submitting);
        assert_ne!(busy, en.submitting_button);
    }

    #[test]
    fn wire_values_round_trip_through_option_values() {
        for t in ContactType::ALL {
            assert_eq!(ContactType::from_value(t.value()), Some(t));
        }
        for p in PreferredContact::ALL {
            assert_eq!(PreferredContact::from_value(p.value()), Some(p));
        }
        assert_eq!(ContactType::from_value("sales"), None);
    }

    #[test]
    fn open_preselects_type_and_clears_previous_values() {
        let state = reduce(
            Rc::new(FormState::default()),
            vec![
                FormAction::Open(ContactType::Partnership),
                FormAction::Edit(Field::Name, "Dana".into()),
                FormAction::Close,
                FormAction::Open(ContactType::Consultation),
            ],
        );
        assert_eq!(state.phase, Phase::Editing);
        assert_eq!(state.form.contact_type, ContactType::Consultation);
        assert_eq!(state.form.name, "");
    }

    #[test]
    fn failed_submit_returns_to_editing_with_values() {
        let state = reduce(
            Rc::new(FormState::default()),
            vec![
                FormAction::Open(ContactType::EarlyAccess),
                FormAction::Edit(Field::Name, "Dana".into()),
                FormAction::SetConsent(true),
                FormAction::SubmitStarted,
                FormAction::SubmitFailed,
            ],
        );
        assert_eq!(state.phase, Phase::Editing);
        assert_eq!(state.form.name, "Dana");
        assert!(state.form.privacy_consent);
    }

    #[test]
    fn success_clears_form_and_shows_confirmation() {
        let state = reduce(
            Rc::new(FormState::default()),
            vec![
                FormAction::Open(ContactType::General),
                FormAction::Edit(Field::Email, "dana@clinic.co.il".into()),
                FormAction::SubmitStarted,
                FormAction::SubmitSucceeded,
            ],
        );
        assert_eq!(state.phase, Phase::Submitted);
        assert_eq!(state.form, LeadForm::default());
        let closed = state.reduce(FormAction::Close);
        assert!(!closed.is_open());
    }

    #[test]
    fn submit_started_twice_is_ignored() {
        let submitting = reduce(
            Rc::new(FormState::default()),
            vec![FormAction::Open(ContactType::General), FormAction::SubmitStarted],
        );
        let again = submitting.clone().reduce(FormAction::SubmitStarted);
        assert!(Rc::ptr_eq(&submitting, &again));
    }

    #[test]
    fn edits_are_ignored_while_submitting_or_closed() {
        let submitting = reduce(
            Rc::new(FormState::default()),
            vec![FormAction::Open(ContactType::General), FormAction::SubmitStarted],
        );
        let after = submitting.clone().reduce(FormAction::Edit(Field::Name, "x".into()));
        assert_eq!(after.form.name, "");

        let closed = Rc::new(FormState::default());
        let after = closed.reduce(FormAction::SetConsent(true));
        assert!(!after.form.privacy_consent);
    }

    #[test]
    fn close_is_ignored_while_sending() {
        let guard = SubmitGuard::default();
        let in_flight = guard.try_acquire().unwrap();
        let state = reduce(
            Rc::new(FormState::default()),
            vec![
                FormAction::Open(ContactType::General),
                FormAction::Edit(Field::Name, "Dana".into()),
                FormAction::SubmitStarted,
                FormAction::Close,
                FormAction::Open(ContactType::Consultation),
            ],
        );
        assert_eq!(state.phase, Phase::Submitting);
        assert_eq!(state.form.name, "Dana");

        drop(in_flight);
        let state = state.reduce(FormAction::SubmitFailed);
        assert_eq!(state.phase, Phase::Editing);
        assert!(guard.try_acquire().is_ok());
    }

    #[test]
    fn late_reply_after_close_is_ignored() {
        let state = reduce(
            Rc::new(FormState::default()),
            vec![
                FormAction::Open(ContactType::General),
                FormAction::SubmitStarted,
                FormAction::SubmitSucceeded,
                FormAction::Close,
                FormAction::SubmitFailed,
            ],
        );
        assert_eq!(state.phase, Phase::Closed);
    }

    #[test]
    fn guard_allows_one_send_at_a_time() {
        let guard = SubmitGuard::default();
        let first = guard.try_acquire().unwrap();
        assert!(guard.is_busy());
        assert_eq!(
            guard.clone().try_acquire().unwrap_err(),
            ValidationError::AlreadySubmitting
        );
        drop(first);
        assert!(!guard.is_busy());
        assert!(guard.try_acquire().is_ok());
    }
}
