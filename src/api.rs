use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use crate::config;
use crate::content::ContactFormContent;
use crate::lead::ContactSubmission;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("form endpoint rejected the submission: {}", .messages.join(", "))]
    Rejected { messages: Vec<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("could not encode submission: {0}")]
    Encode(String),
}

impl SubmitError {
    pub fn user_message(&self, content: &ContactFormContent) -> String {
        match self {
            SubmitError::Rejected { messages } => {
                let detail = if messages.is_empty() {
                    content.unknown_error.to_string()
                } else {
                    messages.join(", ")
                };
                format!("{} (Error: {})", content.submit_error, detail)
            }
            SubmitError::Network(_) | SubmitError::Encode(_) => {
                content.submit_error_network.to_string()
            }
        }
    }
}

#[derive(Deserialize, Debug, Default)]
struct FormReply {
    #[serde(default)]
    errors: Option<Vec<FormReplyError>>,
}

#[derive(Deserialize, Debug)]
struct FormReplyError {
    #[serde(default)]
    message: String,
}

/// Turn the endpoint's status and body into an outcome. Any 2xx is success;
/// otherwise the body's `errors[].message` list is surfaced when present.
pub fn interpret(ok: bool, body: &str) -> Result<(), SubmitError> {
    if ok {
        return Ok(());
    }
    let messages = serde_json::from_str::<FormReply>(body)
        .ok()
        .and_then(|reply| reply.errors)
        .map(|errors| {
            errors
                .into_iter()
                .map(|e| e.message)
                .filter(|m| !m.is_empty())
                .collect()
        })
        .unwrap_or_default();
    Err(SubmitError::Rejected { messages })
}

pub async fn submit_lead(submission: &ContactSubmission) -> Result<(), SubmitError> {
    log::info!(
        "Submitting {} inquiry to form endpoint",
        submission.contact_type.value()
    );
    let request = Request::post(config::FORM_ENDPOINT)
        .header("Accept", "application/json")
        .json(submission)
        .map_err(|e| SubmitError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        return interpret(true, "");
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("Form endpoint answered {}: {}", status, body);
    interpret(false, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::for_language;
    use crate::state::Language;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_ignores_body() {
        assert_eq!(interpret(true, "not json at all"), Ok(()));
    }

    #[test]
    fn rejection_collects_messages() {
        let body = r#"{"errors":[{"message":"Invalid email"},{"message":"Too many requests","code":"X"}]}"#;
        assert_eq!(
            interpret(false, body),
            Err(SubmitError::Rejected {
                messages: vec!["Invalid email".into(), "Too many requests".into()]
            })
        );
    }

    #[test]
    fn rejection_without_error_list() {
        for body in ["", "{}", "<html>502</html>", r#"{"errors":null}"#] {
            assert_eq!(
                interpret(false, body),
                Err(SubmitError::Rejected { messages: vec![] }),
                "{body}"
            );
        }
    }

    #[test]
    fn rejected_alert_text() {
        let en = &for_language(Language::En).contact_form;
        let err = interpret(false, r#"{"errors":[{"message":"Invalid email"}]}"#).unwrap_err();
        assert_eq!(
            err.user_message(en),
            format!("{} (Error: Invalid email)", en.submit_error)
        );
        let err = SubmitError::Rejected { messages: vec![] };
        assert_eq!(
            err.user_message(en),
            format!("{} (Error: {})", en.submit_error, en.unknown_error)
        );
    }

    #[test]
    fn transport_failure_uses_network_message() {
        let he = &for_language(Language::He).contact_form;
        let err = SubmitError::Network("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message(he), he.submit_error_network);
    }
}
