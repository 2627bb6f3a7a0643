//! S2: Core Pillars ("What I Do")
//!
//! One card per pillar record, in record order.

use crate::site::content::Pillar;
use crate::site::types::SectionKind;
use crate::utils::{section_close, section_open, text};

const SECTION_CLASS: &str = "py-24 px-8 bg-soft-pink w-full";

/// Generate the S2 Core Pillars section.
pub fn generate(heading: &str, pillars: &[Pillar]) -> String {
    let mut lines = Vec::new();
    lines.push(section_open(SectionKind::CorePillars, SECTION_CLASS));
    lines.push("<div class=\"max-w-6xl mx-auto\">".to_string());
    lines.push(format!(
        "<h2 class=\"text-4xl md:text-5xl font-bold mb-16 text-center text-black tracking-tight\">{}</h2>",
        text(heading)
    ));
    lines.push("<div class=\"grid grid-cols-1 md:grid-cols-3 gap-12 text-center\">".to_string());

    for pillar in pillars {
        lines.push(pillar_card(pillar));
    }

    lines.push("</div>".to_string());
    lines.push("</div>".to_string());
    lines.push(section_close().to_string());
    lines.join("\n")
}

fn pillar_card(pillar: &Pillar) -> String {
    format!(
        "<div class=\"flex flex-col items-center group\" data-pillar>\n\
         <div class=\"w-12 h-1 bg-black mb-6 transition-all duration-300 group-hover:w-24\"></div>\n\
         <h3 class=\"text-2xl font-bold mb-4 text-black\">{}</h3>\n\
         <p class=\"text-lg text-dark-grey leading-relaxed\">{}</p>\n\
         </div>",
        text(pillar.title),
        text(pillar.description)
    )
}
