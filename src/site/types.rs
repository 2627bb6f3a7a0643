//! Shared types for the page sections.

use serde::{Deserialize, Serialize};

/// The five page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    CorePillars,
    Experience,
    Company,
    Contact,
}

impl SectionKind {
    /// Fixed top-to-bottom order of the page.
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Hero,
        SectionKind::CorePillars,
        SectionKind::Experience,
        SectionKind::Company,
        SectionKind::Contact,
    ];

    /// Element id / `data-section` value.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::CorePillars => "core-pillars",
            SectionKind::Experience => "experience",
            SectionKind::Company => "company",
            SectionKind::Contact => "contact",
        }
    }
}

/// Hero layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroVariant {
    #[default]
    Centered,
    /// Headshot beside the text.
    Portrait,
}

/// Experience layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceVariant {
    #[default]
    Listing,
    /// Listing followed by the collage image.
    Collage,
}

/// Company layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyVariant {
    #[default]
    Statement,
    /// Logo above the statement, copyright line below the badge.
    Branded,
}

/// Output of one section renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub kind: SectionKind,
    pub html: String,
}
