//! Page Generator
//!
//! Main entry point for rendering the portfolio page.
//! Runs all five sections (S1-S5) in page order and wraps them in the
//! document shell.
//!
//! Public API (consumed by render_site.rs):
//! - SiteGenerator::new(config) -> Self
//! - SiteGenerator::generate() -> Result<String>
//! - SiteGenerator::generate_json() -> PageView

use askama::Template;

use crate::clock::{Clock, SystemClock};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::site::content::{
    EXPERIENCE, EXPERIENCE_HEADING, PILLARS, PILLARS_HEADING, VENUES, VENUES_HEADING,
};
use crate::site::generator_json::generate_page_data;
use crate::site::sections::s3_experience::ExperienceContent;
use crate::site::sections::{s1_hero, s2_pillars, s3_experience, s4_company, s5_contact};
use crate::site::types::{RenderedSection, SectionKind};
use crate::site::view_models::PageView;

/// Document shell around the composed sections.
#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    description: &'a str,
    stylesheet: &'a str,
    body: &'a str,
}

/// Page generator. Holds no render state; every call re-reads the clock.
pub struct SiteGenerator {
    config: SiteConfig,
    clock: Box<dyn Clock>,
}

impl SiteGenerator {
    /// Generator reading the wall clock.
    pub fn new(config: SiteConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: SiteConfig, clock: impl Clock + 'static) -> Self {
        Self {
            config,
            clock: Box::new(clock),
        }
    }

    /// Render the five sections in page order.
    pub fn render_sections(&self) -> Vec<RenderedSection> {
        self.sections_for_year(self.clock.current_year())
    }

    /// Render the `<main>` element holding every section.
    pub fn render_body(&self) -> String {
        compose_main(&self.render_sections())
    }

    /// Render the complete HTML document.
    pub fn generate(&self) -> Result<String> {
        let year = self.clock.current_year();
        let sections = self.sections_for_year(year);
        let body = compose_main(&sections);

        let page = PageTemplate {
            title: &self.config.title,
            description: &self.config.description,
            stylesheet: &self.config.stylesheet,
            body: &body,
        };
        let html = page.render()?;

        tracing::info!(
            "Rendered page: {} sections, {} bytes, copyright year {}",
            sections.len(),
            html.len(),
            year
        );
        Ok(html)
    }

    /// Build the page as JSON view models.
    pub fn generate_json(&self) -> PageView {
        generate_page_data(&self.config, self.clock.current_year())
    }

    fn sections_for_year(&self, year: i32) -> Vec<RenderedSection> {
        SectionKind::ALL
            .iter()
            .map(|&kind| {
                let html = self.render_section(kind, year);
                tracing::debug!("Rendered section {} ({} bytes)", kind.anchor(), html.len());
                RenderedSection { kind, html }
            })
            .collect()
    }

    fn render_section(&self, kind: SectionKind, year: i32) -> String {
        let config = &self.config;
        match kind {
            // S1: Hero
            SectionKind::Hero => s1_hero::generate(config.hero, &config.assets.headshot),

            // S2: Core Pillars
            SectionKind::CorePillars => s2_pillars::generate(PILLARS_HEADING, PILLARS),

            // S3: Experience
            SectionKind::Experience => s3_experience::generate(
                &ExperienceContent {
                    experience_heading: EXPERIENCE_HEADING,
                    experience: EXPERIENCE,
                    venues_heading: VENUES_HEADING,
                    venues: VENUES,
                },
                config.experience,
                &config.assets.collage,
            ),

            // S4: Company
            SectionKind::Company => s4_company::generate(config.company, &config.assets.logo, year),

            // S5: Contact
            SectionKind::Contact => s5_contact::generate(&config.contact, year),
        }
    }
}

fn compose_main(sections: &[RenderedSection]) -> String {
    let mut body = String::with_capacity(sections.iter().map(|s| s.html.len() + 1).sum::<usize>() + 32);
    body.push_str("<main class=\"w-full\">\n");
    for section in sections {
        body.push_str(&section.html);
        body.push('\n');
    }
    body.push_str("</main>");
    body
}
