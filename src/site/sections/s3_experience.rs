//! S3: Experience
//!
//! Two columns: companies worked with (one list item each) and notable venues
//! (one chip each). The `Collage` layout adds the production collage below.

use crate::site::types::{ExperienceVariant, SectionKind};
use crate::utils::{attr, section_close, section_open, text};

const SECTION_CLASS: &str = "py-24 px-8 bg-white w-full";
const COLUMN_HEADING_CLASS: &str =
    "text-3xl font-bold mb-8 text-black border-b-2 border-soft-pink pb-2 inline-block";

/// Record sets consumed by the Experience section.
#[derive(Debug, Clone, Copy)]
pub struct ExperienceContent<'a> {
    pub experience_heading: &'a str,
    pub experience: &'a [&'a str],
    pub venues_heading: &'a str,
    pub venues: &'a [&'a str],
}

/// Generate the S3 Experience section.
pub fn generate(content: &ExperienceContent<'_>, variant: ExperienceVariant, collage: &str) -> String {
    let mut lines = Vec::new();
    lines.push(section_open(SectionKind::Experience, SECTION_CLASS));
    lines.push("<div class=\"max-w-6xl mx-auto grid grid-cols-1 md:grid-cols-2 gap-16\">".to_string());

    // Professional experience
    lines.push("<div>".to_string());
    lines.push(format!(
        "<h2 class=\"{}\">{}</h2>",
        COLUMN_HEADING_CLASS,
        text(content.experience_heading)
    ));
    lines.push("<ul class=\"space-y-4\">".to_string());
    for item in content.experience {
        lines.push(format!(
            "<li class=\"text-xl text-dark-grey hover:text-black transition-colors duration-200\">{}</li>",
            text(item)
        ));
    }
    lines.push("</ul>".to_string());
    lines.push("</div>".to_string());

    // Notable venues
    lines.push("<div>".to_string());
    lines.push(format!(
        "<h2 class=\"{}\">{}</h2>",
        COLUMN_HEADING_CLASS,
        text(content.venues_heading)
    ));
    lines.push("<div class=\"flex flex-wrap gap-3\">".to_string());
    for venue in content.venues {
        lines.push(format!(
            "<span class=\"px-4 py-2 bg-gray-50 border border-gray-100 text-dark-grey rounded-sm text-lg\">{}</span>",
            text(venue)
        ));
    }
    lines.push("</div>".to_string());
    lines.push("</div>".to_string());

    lines.push("</div>".to_string());

    if variant == ExperienceVariant::Collage {
        lines.push(format!(
            "<img src=\"{}\" alt=\"Production collage\" class=\"max-w-6xl w-full mx-auto mt-16 object-cover\">",
            attr(collage)
        ));
    }

    lines.push(section_close().to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::content::{EXPERIENCE, EXPERIENCE_HEADING, VENUES, VENUES_HEADING};

    fn content() -> ExperienceContent<'static> {
        ExperienceContent {
            experience_heading: EXPERIENCE_HEADING,
            experience: EXPERIENCE,
            venues_heading: VENUES_HEADING,
            venues: VENUES,
        }
    }

    #[test]
    fn test_one_list_item_per_company() {
        let html = generate(&content(), ExperienceVariant::Listing, "/assets/collage.jpg");
        assert_eq!(html.matches("<li ").count(), 5);
        assert_eq!(html.matches("<span ").count(), 7);
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_collage_variant() {
        let html = generate(&content(), ExperienceVariant::Collage, "/assets/collage.jpg");
        assert!(html.contains("<img src=\"/assets/collage.jpg\""));
        // image sits after both columns
        assert!(html.find("<img").unwrap() > html.find("Marylebone Theatre").unwrap());
    }
}
