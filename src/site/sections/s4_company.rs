//! S4: Company
//!
//! Established year, company name, tagline and bursary badge. The `Branded`
//! layout adds the logo and closes with the copyright line.

use crate::site::content::{COMPANY_BADGE, COMPANY_ESTABLISHED, COMPANY_NAME, COMPANY_TAGLINE};
use crate::site::types::{CompanyVariant, SectionKind};
use crate::utils::{attr, copyright_line, section_close, section_open, text};

const SECTION_CLASS: &str = "py-32 px-8 bg-soft-pink w-full flex items-center justify-center";

/// Generate the S4 Company section.
///
/// `year` is only printed by the `Branded` layout.
pub fn generate(variant: CompanyVariant, logo: &str, year: i32) -> String {
    let mut lines = Vec::new();
    lines.push(section_open(SectionKind::Company, SECTION_CLASS));
    lines.push("<div class=\"max-w-4xl text-center\">".to_string());

    if variant == CompanyVariant::Branded {
        lines.push(format!(
            "<img src=\"{}\" alt=\"{}\" class=\"h-24 mx-auto mb-8\">",
            attr(logo),
            attr(COMPANY_NAME)
        ));
    }

    lines.push(format!(
        "<span class=\"block text-sm font-bold tracking-[0.2em] mb-4 text-black uppercase opacity-60\">{}</span>",
        text(COMPANY_ESTABLISHED)
    ));
    lines.push(format!(
        "<h2 class=\"text-5xl md:text-6xl font-black mb-8 text-black tracking-tight leading-tight\">{}</h2>",
        text(COMPANY_NAME)
    ));
    lines.push("<div class=\"w-32 h-1 bg-black mx-auto mb-10\"></div>".to_string());
    lines.push(format!(
        "<p class=\"text-2xl md:text-3xl font-medium text-dark-grey italic mb-12\">{}</p>",
        text(COMPANY_TAGLINE)
    ));
    lines.push("<div class=\"inline-block border border-black px-6 py-3\">".to_string());
    lines.push(format!(
        "<p class=\"text-lg font-bold text-black\">{}</p>",
        text(COMPANY_BADGE)
    ));
    lines.push("</div>".to_string());

    if variant == CompanyVariant::Branded {
        lines.push(format!(
            "<div class=\"mt-16 text-sm text-dark-grey opacity-60\" data-copyright>{}</div>",
            text(&copyright_line(year))
        ));
    }

    lines.push("</div>".to_string());
    lines.push(section_close().to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement() {
        let html = generate(CompanyVariant::Statement, "/assets/logo.png", 2024);
        assert!(html.contains(">Adam Line Creative Ltd</h2>"));
        assert!(html.contains("\"Uplifting stories and uplifting people.\""));
        assert!(html.contains("Recipient of Stage One New Producers Bursary"));
        assert!(!html.contains("data-copyright"));
        assert!(!html.contains("2024"));
    }

    #[test]
    fn test_branded_has_logo_and_copyright() {
        let html = generate(CompanyVariant::Branded, "/assets/logo.png", 2031);
        assert!(html.contains("<img src=\"/assets/logo.png\""));
        assert!(html.contains("© 2031 Adam Line. All rights reserved."));
    }
}
