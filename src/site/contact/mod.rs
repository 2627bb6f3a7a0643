//! Contact affordances.
//!
//! The contact section renders one of three affordances, picked by
//! configuration:
//! - `StatusOnly`: availability note and LinkedIn link, nothing to submit
//! - `MailtoForm`: name/email/message form posted to a `mailto:` address
//! - `EmbeddedWidget`: anchor element plus external script for a hosted form

pub mod form;

use serde::{Deserialize, Serialize};

use crate::utils::attr;
use form::{FieldKind, FormField, ValidatedSubmission, FORM_FIELDS};

pub use form::{FormRejection, FormSubmission};

pub const DEFAULT_WIDGET_FORM_ID: &str = "01KDC35C886WXGBP17411ZWTK5";
pub const DEFAULT_WIDGET_SCRIPT: &str = "//embed.typeform.com/next/embed.js";

const INPUT_CLASS: &str =
    "w-full border border-black bg-white px-4 py-3 text-lg text-black focus:outline-none";

/// Capability shared by every contact method.
pub trait ContactAffordance {
    /// Markup placed between the status lead and the copyright line.
    fn render_affordance(&self) -> String;

    /// Whether the availability note is shown above the affordance.
    fn shows_status(&self) -> bool {
        true
    }
}

/// Availability note only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOnly {}

impl ContactAffordance for StatusOnly {
    fn render_affordance(&self) -> String {
        String::new()
    }
}

/// Native form submitted through the visitor's mail client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailtoForm {
    pub recipient: String,
}

impl MailtoForm {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    /// `action` attribute of the form.
    pub fn action(&self) -> String {
        format!("mailto:{}", self.recipient)
    }

    /// The URI the browser hands to the mail client for a `text/plain` post.
    ///
    /// Takes a `ValidatedSubmission`, so a rejected submission can never
    /// reach this point.
    ///
    /// A recipient that already carries headers (`?subject=...`) gets the
    /// body appended with `&`.
    pub fn transmit(&self, submission: &ValidatedSubmission) -> String {
        let action = self.action();
        let separator = if action.contains('?') { '&' } else { '?' };
        let uri = format!(
            "{}{}body={}",
            action,
            separator,
            urlencoding::encode(&submission.encode_plain_text())
        );
        tracing::debug!("Mailto submission prepared ({} bytes)", uri.len());
        uri
    }
}

impl ContactAffordance for MailtoForm {
    fn render_affordance(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!(
            "<form action=\"{}\" method=\"post\" enctype=\"text/plain\" class=\"space-y-6\">",
            attr(&self.action())
        ));
        for field in FORM_FIELDS {
            lines.push(render_field(field));
        }
        lines.push(
            "<button type=\"submit\" class=\"w-full bg-black text-white font-bold text-lg px-6 py-3 hover:bg-dark-grey transition-colors duration-200\">Send</button>"
                .to_string(),
        );
        lines.push("</form>".to_string());
        lines.join("\n")
    }

    fn shows_status(&self) -> bool {
        false
    }
}

fn render_field(field: &FormField) -> String {
    let id = format!("contact-{}", field.name);
    let required = if field.required { " required" } else { "" };
    let control = match field.kind {
        FieldKind::Text | FieldKind::Email => {
            let input_type = if field.kind == FieldKind::Email { "email" } else { "text" };
            format!(
                "<input id=\"{id}\" name=\"{}\" type=\"{}\"{} class=\"{}\">",
                field.name, input_type, required, INPUT_CLASS
            )
        }
        FieldKind::TextArea => format!(
            "<textarea id=\"{id}\" name=\"{}\" rows=\"5\"{} class=\"{}\"></textarea>",
            field.name, required, INPUT_CLASS
        ),
    };
    format!(
        "<div>\n<label for=\"{id}\" class=\"block text-sm font-bold mb-2 text-black\">{}</label>\n{}\n</div>",
        field.label, control
    )
}

/// Hosted form loaded by a third-party script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddedWidget {
    pub form_id: String,
    pub script_src: String,
}

impl Default for EmbeddedWidget {
    fn default() -> Self {
        Self {
            form_id: DEFAULT_WIDGET_FORM_ID.to_string(),
            script_src: DEFAULT_WIDGET_SCRIPT.to_string(),
        }
    }
}

impl ContactAffordance for EmbeddedWidget {
    fn render_affordance(&self) -> String {
        format!(
            "<div data-tf-live=\"{}\"></div><script src=\"{}\"></script>",
            attr(&self.form_id),
            attr(&self.script_src)
        )
    }
}

/// Contact method selected by configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ContactMethod {
    StatusOnly(StatusOnly),
    MailtoForm(MailtoForm),
    EmbeddedWidget(EmbeddedWidget),
}

impl Default for ContactMethod {
    fn default() -> Self {
        ContactMethod::EmbeddedWidget(EmbeddedWidget::default())
    }
}

impl ContactMethod {
    pub fn affordance(&self) -> &dyn ContactAffordance {
        match self {
            ContactMethod::StatusOnly(m) => m,
            ContactMethod::MailtoForm(m) => m,
            ContactMethod::EmbeddedWidget(m) => m,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ContactMethod::StatusOnly(_) => "status_only",
            ContactMethod::MailtoForm(_) => "mailto_form",
            ContactMethod::EmbeddedWidget(_) => "embedded_widget",
        }
    }
}
