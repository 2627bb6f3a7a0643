//! S5: Contact
//!
//! Heading, availability note (unless the affordance replaces it), the
//! configured contact affordance and the copyright line.

use crate::site::contact::ContactMethod;
use crate::site::content::{CONTACT_HEADING, CONTACT_STATUS, LINKEDIN_URL};
use crate::site::types::SectionKind;
use crate::utils::{attr, copyright_line, section_close, section_open, text};

const SECTION_CLASS: &str = "py-24 px-8 bg-soft-pink w-full";

/// Generate the S5 Contact section.
pub fn generate(method: &ContactMethod, year: i32) -> String {
    let affordance = method.affordance();

    let mut lines = Vec::new();
    lines.push(section_open(SectionKind::Contact, SECTION_CLASS));
    lines.push("<div class=\"max-w-xl mx-auto\">".to_string());
    lines.push(format!(
        "<h2 class=\"text-4xl font-bold mb-8 text-black text-center\">{}</h2>",
        text(CONTACT_HEADING)
    ));

    if affordance.shows_status() {
        lines.push(status_lead());
    }

    let body = affordance.render_affordance();
    if !body.is_empty() {
        lines.push(body);
    }

    lines.push(format!(
        "<div class=\"mt-16 text-sm text-dark-grey text-center opacity-60\" data-copyright>{}</div>",
        text(&copyright_line(year))
    ));
    lines.push("</div>".to_string());
    lines.push(section_close().to_string());
    lines.join("\n")
}

fn status_lead() -> String {
    format!(
        "<p class=\"text-lg text-dark-grey text-center mb-12\">{}<br><br>\
         You can find me on LinkedIn <a href=\"{}\" target=\"_blank\" rel=\"noopener\"><u>here</u></a>.</p>",
        text(CONTACT_STATUS),
        attr(LINKEDIN_URL)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::contact::{EmbeddedWidget, MailtoForm, StatusOnly};

    #[test]
    fn test_status_only() {
        let html = generate(&ContactMethod::StatusOnly(StatusOnly::default()), 2024);
        assert!(html.contains("not currently taking on any new projects"));
        assert!(html.contains("https://www.linkedin.com/in/adam-line-9688a624a/"));
        assert!(!html.contains("<form"));
        assert!(!html.contains("data-tf-live"));
        assert!(html.contains("© 2024 Adam Line. All rights reserved."));
    }

    #[test]
    fn test_mailto_form_replaces_status() {
        let html = generate(&ContactMethod::MailtoForm(MailtoForm::new("a@b.co")), 2024);
        assert!(html.contains("<form action=\"mailto:a@b.co\""));
        assert!(!html.contains("LinkedIn"));
    }

    #[test]
    fn test_widget_keeps_status() {
        let html = generate(&ContactMethod::EmbeddedWidget(EmbeddedWidget::default()), 2025);
        let status = html.find("LinkedIn").unwrap();
        let widget = html.find("data-tf-live").unwrap();
        let footer = html.find("data-copyright").unwrap();
        assert!(status < widget && widget < footer);
        assert!(html.contains("© 2025 Adam Line"));
    }
}
