//! View Models for the JSON page
//!
//! Structured form of the same page the HTML renderer produces, for
//! consumers that do their own layout.

use serde::Serialize;

use crate::site::contact::form::FormField;
use crate::site::contact::ContactMethod;
use crate::site::types::{CompanyVariant, ExperienceVariant, HeroVariant, SectionKind};

/// Complete page data
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub title: String,
    pub description: String,
    pub copyright: String,
    pub sections: Vec<SectionView>,
}

/// One section, tagged with its kind
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionView {
    Hero(HeroView),
    CorePillars(PillarsView),
    Experience(ExperienceView),
    Company(CompanyView),
    Contact(ContactView),
}

impl SectionView {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionView::Hero(_) => SectionKind::Hero,
            SectionView::CorePillars(_) => SectionKind::CorePillars,
            SectionView::Experience(_) => SectionKind::Experience,
            SectionView::Company(_) => SectionKind::Company,
            SectionView::Contact(_) => SectionKind::Contact,
        }
    }
}

// ============================================================================
// S1: Hero
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HeroView {
    pub variant: HeroVariant,
    pub name: String,
    pub blurb: String,
    pub headshot: Option<String>,
}

// ============================================================================
// S2: Core Pillars
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PillarsView {
    pub heading: String,
    pub pillars: Vec<PillarView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PillarView {
    pub title: String,
    pub description: String,
}

// ============================================================================
// S3: Experience
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceView {
    pub variant: ExperienceVariant,
    pub experience_heading: String,
    pub experience: Vec<String>,
    pub venues_heading: String,
    pub venues: Vec<String>,
    pub collage: Option<String>,
}

// ============================================================================
// S4: Company
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CompanyView {
    pub variant: CompanyVariant,
    pub established: String,
    pub name: String,
    pub tagline: String,
    pub badge: String,
    pub logo: Option<String>,
    /// Only the branded layout prints the copyright line.
    pub copyright: Option<String>,
}

// ============================================================================
// S5: Contact
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ContactView {
    pub heading: String,
    pub status: Option<String>,
    pub linkedin_url: Option<String>,
    pub method: ContactMethod,
    /// Empty unless the method is a mailto form.
    pub form_fields: Vec<FormField>,
    pub copyright: String,
}
