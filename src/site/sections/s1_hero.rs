//! S1: Hero
//!
//! Name, accent rule and the one-paragraph introduction. The `Portrait`
//! layout places the headshot beside the text.

use crate::site::content::{HERO_BLURB, OWNER_NAME};
use crate::site::types::{HeroVariant, SectionKind};
use crate::utils::{attr, section_close, section_open, text};

const SECTION_CLASS: &str = "py-24 px-8 bg-white min-h-[60vh] flex items-center justify-center";
const NAME_CLASS: &str = "text-6xl md:text-7xl font-bold mb-8 tracking-tighter text-black";
const BLURB_CLASS: &str = "text-xl md:text-2xl text-dark-grey leading-relaxed max-w-2xl font-medium";

/// Generate the S1 Hero section.
pub fn generate(variant: HeroVariant, headshot: &str) -> String {
    let mut lines = Vec::new();
    lines.push(section_open(SectionKind::Hero, SECTION_CLASS));

    match variant {
        HeroVariant::Centered => {
            lines.push("<div class=\"max-w-4xl w-full text-center\">".to_string());
            lines.push(format!("<h1 class=\"{}\">{}</h1>", NAME_CLASS, text(OWNER_NAME)));
            lines.push("<div class=\"w-24 h-1 bg-soft-pink mx-auto mb-8\"></div>".to_string());
            lines.push(format!("<p class=\"{} mx-auto\">{}</p>", BLURB_CLASS, text(HERO_BLURB)));
            lines.push("</div>".to_string());
        }
        HeroVariant::Portrait => {
            lines.push(
                "<div class=\"max-w-5xl w-full grid grid-cols-1 md:grid-cols-2 gap-12 items-center\">"
                    .to_string(),
            );
            lines.push(format!(
                "<img src=\"{}\" alt=\"{}\" class=\"w-full max-w-sm mx-auto rounded-sm object-cover\">",
                attr(headshot),
                attr(OWNER_NAME)
            ));
            lines.push("<div class=\"text-left\">".to_string());
            lines.push(format!("<h1 class=\"{}\">{}</h1>", NAME_CLASS, text(OWNER_NAME)));
            lines.push("<div class=\"w-24 h-1 bg-soft-pink mb-8\"></div>".to_string());
            lines.push(format!("<p class=\"{}\">{}</p>", BLURB_CLASS, text(HERO_BLURB)));
            lines.push("</div>".to_string());
            lines.push("</div>".to_string());
        }
    }

    lines.push(section_close().to_string());
    lines.join("\n")
}
