//! Mailto contact form: field definitions and native constraint checks.
//!
//! Mirrors what a browser does before submitting the form: value
//! sanitisation per input type, `required` checks, and the `type=email`
//! syntax check. Nothing past that is validated.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// WHATWG "valid e-mail address".
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

/// One labelled input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

pub const FORM_FIELDS: &[FormField] = &[
    FormField {
        name: "name",
        label: "Name",
        kind: FieldKind::Text,
        required: true,
    },
    FormField {
        name: "email",
        label: "Email",
        kind: FieldKind::Email,
        required: true,
    },
    FormField {
        name: "message",
        label: "Message",
        kind: FieldKind::TextArea,
        required: false,
    },
];

/// Why the browser refused to submit.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormRejection {
    #[error("please fill out the name field")]
    MissingName,

    #[error("please fill out the email field")]
    MissingEmail,

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// Raw values as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// A submission that passed every constraint. Only these can be transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    name: String,
    email: String,
    message: String,
}

impl FormSubmission {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Run the constraint checks in field order; the first failure wins.
    pub fn validate(&self) -> Result<ValidatedSubmission, FormRejection> {
        let name = strip_newlines(&self.name);
        if name.is_empty() {
            return Err(FormRejection::MissingName);
        }

        let email = sanitize_email(&self.email);
        if email.is_empty() {
            return Err(FormRejection::MissingEmail);
        }
        if !is_valid_email(&email) {
            return Err(FormRejection::InvalidEmail(email));
        }

        Ok(ValidatedSubmission {
            name,
            email,
            message: self.message.clone(),
        })
    }
}

impl ValidatedSubmission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// `text/plain` form encoding: every `name=value` pair ends with CRLF,
    /// and line breaks inside values are normalised to CRLF.
    pub fn encode_plain_text(&self) -> String {
        let mut body = String::new();
        for (field, value) in [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("message", self.message.as_str()),
        ] {
            body.push_str(field);
            body.push('=');
            body.push_str(&normalize_line_breaks(value));
            body.push_str("\r\n");
        }
        body
    }
}

/// `type=email` syntax check on an already sanitised value.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Lone CR, lone LF and CRLF all become CRLF.
fn normalize_line_breaks(value: &str) -> String {
    value.replace("\r\n", "\n").replace('\r', "\n").replace('\n', "\r\n")
}

fn strip_newlines(value: &str) -> String {
    value.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

fn sanitize_email(value: &str) -> String {
    strip_newlines(value)
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        let submission = FormSubmission::new("", "adam@example.com", "hi");
        assert_eq!(submission.validate(), Err(FormRejection::MissingName));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let submission = FormSubmission::new("Sam", "not-an-email", "");
        assert_eq!(
            submission.validate(),
            Err(FormRejection::InvalidEmail("not-an-email".to_string()))
        );

        let missing = FormSubmission::new("Sam", "   ", "");
        assert_eq!(missing.validate(), Err(FormRejection::MissingEmail));
    }

    #[test]
    fn test_whitespace_name_passes_required() {
        let validated = FormSubmission::new("   ", "a@b.co", "").validate().unwrap();
        assert_eq!(validated.name(), "   ");
    }

    #[test]
    fn test_empty_message_accepted() {
        let validated = FormSubmission::new("Sam", "sam@example.com", "").validate().unwrap();
        assert_eq!(validated.name(), "Sam");
        assert_eq!(validated.email(), "sam@example.com");
        assert_eq!(validated.message(), "");
    }

    #[test]
    fn test_email_is_trimmed() {
        let validated = FormSubmission::new("Sam", "  sam@example.com\n", "x").validate().unwrap();
        assert_eq!(validated.email(), "sam@example.com");
    }

    #[test]
    fn test_email_syntax() {
        assert!(is_valid_email("a.b+tag@stage-one.org.uk"));
        assert!(is_valid_email("producer@localhost"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("trailing@example-.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("space in@example.com"));
    }

    #[test]
    fn test_plain_text_encoding() {
        let validated = FormSubmission::new("Sam", "sam@example.com", "Hello\nthere")
            .validate()
            .unwrap();
        assert_eq!(
            validated.encode_plain_text(),
            "name=Sam\r\nemail=sam@example.com\r\nmessage=Hello\r\nthere\r\n"
        );

        let crlf = FormSubmission::new("Sam", "sam@example.com", "a\r\nb\rc")
            .validate()
            .unwrap();
        assert!(crlf.encode_plain_text().ends_with("message=a\r\nb\r\nc\r\n"));
    }

    #[test]
    fn test_form_fields_order() {
        let names: Vec<_> = FORM_FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["name", "email", "message"]);
        assert!(!FORM_FIELDS[2].required);
    }
}
