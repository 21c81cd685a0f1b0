#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use thiserror::Error;
use url::{Url, form_urlencoded};

/// The inputs of the contact form, in form order.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn placeholder(&self) -> &'static str)]
#[func(pub fn key(&self) -> &'static str)]
pub enum ContactField {
    #[assoc(placeholder = "Votre nom", key = "name")]
    Name,
    #[assoc(placeholder = "Votre email", key = "email")]
    Email,
    #[assoc(placeholder = "Votre message", key = "message")]
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] =
        [ContactField::Name, ContactField::Email, ContactField::Message];
}

#[derive(Debug, Error)]
pub enum ContactFormError {
    /// One or more required fields are empty or whitespace-only.
    #[error("missing required fields: {}", display_fields(.0))]
    MissingFields(Vec<ContactField>),

    /// The recipient can't form a `mailto:` URL.
    #[error("invalid recipient: {0}")]
    InvalidRecipient(#[from] url::ParseError),
}

fn display_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(ContactField::key)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The values typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Fields that are empty once trimmed, in form order.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }

    /// Builds the mail addressed to `recipient`.
    ///
    /// Nothing is produced unless every field holds something other than
    /// whitespace. The sender's address is not checked for format.
    pub fn compose(&self, recipient: &str) -> Result<MailDraft, ContactFormError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(?missing, "contact submission rejected");
            return Err(ContactFormError::MissingFields(missing));
        }

        Url::parse(&mailto_href(recipient))?;

        let name = self.name.trim();
        let email = self.email.trim();

        Ok(MailDraft {
            to: recipient.to_string(),
            subject: format!("Contact portfolio — {name}"),
            body: format!("{}\n\n{name} <{email}>", self.message.trim_end()),
        })
    }
}

/// A mail ready to be handed to the system mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    /// The `mailto:` URL carrying the subject and body.
    pub fn href(&self) -> String {
        format!(
            "{}?subject={}&body={}",
            mailto_href(&self.to),
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }
}

/// A bare `mailto:` target for `email`.
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

/// Percent-encodes a header value. Spaces become `%20` and every line break
/// becomes `%0D%0A`.
fn encode_component(value: &str) -> String {
    let normalized = value.replace("\r\n", "\n").replace('\n', "\r\n");

    form_urlencoded::byte_serialize(normalized.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPIENT: &str = "lyamtorres@hotmail.com";

    #[test]
    fn test_mailto_href_is_bare_address() {
        assert_eq!(mailto_href(RECIPIENT), "mailto:lyamtorres@hotmail.com");
    }

    #[test]
    fn test_any_empty_field_rejects() {
        let cases = [
            (ContactSubmission::new("", "a@b.c", "Hi"), vec![ContactField::Name]),
            (ContactSubmission::new("Ana", " ", "Hi"), vec![ContactField::Email]),
            (
                ContactSubmission::new("Ana", "a@b.c", "\n\t "),
                vec![ContactField::Message],
            ),
            (ContactSubmission::default(), ContactField::ALL.to_vec()),
        ];

        for (submission, expected) in cases {
            match submission.compose(RECIPIENT) {
                Err(ContactFormError::MissingFields(fields)) => assert_eq!(fields, expected),
                other => panic!("expected missing fields, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_compose_addresses_profile_email() {
        let draft = ContactSubmission::new("Ana Silva", "ana@example.com", "Bonjour !")
            .compose(RECIPIENT)
            .unwrap();

        assert_eq!(draft.to, RECIPIENT);
        assert_eq!(draft.subject, "Contact portfolio — Ana Silva");
        assert_eq!(draft.body, "Bonjour !\n\nAna Silva <ana@example.com>");
    }

    #[test]
    fn test_sender_email_is_not_format_checked() {
        let draft = ContactSubmission::new("Ana", "not an email", "Hi")
            .compose(RECIPIENT)
            .unwrap();

        assert!(draft.body.ends_with("Ana <not an email>"));
    }

    #[test]
    fn test_href_percent_encodes_subject_and_body() {
        let draft = MailDraft {
            to: RECIPIENT.into(),
            subject: "Salut toi".into(),
            body: "Ligne 1\nLigne 2 & co".into(),
        };

        assert_eq!(
            draft.href(),
            "mailto:lyamtorres@hotmail.com?subject=Salut%20toi&body=Ligne%201%0D%0ALigne%202%20%26%20co"
        );
    }

    #[test]
    fn test_href_keeps_literal_plus() {
        let draft = MailDraft {
            to: RECIPIENT.into(),
            subject: "C++".into(),
            body: "a\r\nb".into(),
        };

        assert_eq!(
            draft.href(),
            "mailto:lyamtorres@hotmail.com?subject=C%2B%2B&body=a%0D%0Ab"
        );
    }

    #[test]
    fn test_href_parses_as_url() {
        let href = ContactSubmission::new("Élise", "e@x.fr", "Un projet ?")
            .compose(RECIPIENT)
            .unwrap()
            .href();

        let url = Url::parse(&href).unwrap();
        assert_eq!(url.scheme(), "mailto");
        assert_eq!(url.path(), RECIPIENT);

        let subject = url
            .query_pairs()
            .find(|(key, _)| key == "subject")
            .map(|(_, value)| value.into_owned());
        assert_eq!(subject.as_deref(), Some("Contact portfolio — Élise"));
    }

    #[test]
    fn test_missing_fields_error_message() {
        let err = ContactSubmission::new("", "", "x").compose(RECIPIENT).unwrap_err();
        assert_eq!(err.to_string(), "missing required fields: name, email");
    }
}
