//! Page Generator (JSON)
//!
//! Builds the same five sections as `generator.rs`, as view model structs
//! instead of markup.

use crate::config::SiteConfig;
use crate::site::contact::form::FORM_FIELDS;
use crate::site::contact::ContactMethod;
use crate::site::content::*;
use crate::site::types::{CompanyVariant, ExperienceVariant, HeroVariant, SectionKind};
use crate::site::view_models::*;
use crate::utils::copyright_line;

/// Build the page view for a given copyright year.
pub fn generate_page_data(config: &SiteConfig, year: i32) -> PageView {
    let copyright = copyright_line(year);

    let sections = SectionKind::ALL
        .iter()
        .map(|kind| match kind {
            SectionKind::Hero => SectionView::Hero(hero(config)),
            SectionKind::CorePillars => SectionView::CorePillars(pillars()),
            SectionKind::Experience => SectionView::Experience(experience(config)),
            SectionKind::Company => SectionView::Company(company(config, &copyright)),
            SectionKind::Contact => SectionView::Contact(contact(config, &copyright)),
        })
        .collect();

    PageView {
        title: config.title.clone(),
        description: config.description.clone(),
        copyright,
        sections,
    }
}

fn hero(config: &SiteConfig) -> HeroView {
    HeroView {
        variant: config.hero,
        name: OWNER_NAME.to_string(),
        blurb: HERO_BLURB.to_string(),
        headshot: (config.hero == HeroVariant::Portrait).then(|| config.assets.headshot.clone()),
    }
}

fn pillars() -> PillarsView {
    PillarsView {
        heading: PILLARS_HEADING.to_string(),
        pillars: PILLARS
            .iter()
            .map(|p| PillarView {
                title: p.title.to_string(),
                description: p.description.to_string(),
            })
            .collect(),
    }
}

fn experience(config: &SiteConfig) -> ExperienceView {
    ExperienceView {
        variant: config.experience,
        experience_heading: EXPERIENCE_HEADING.to_string(),
        experience: EXPERIENCE.iter().map(|s| s.to_string()).collect(),
        venues_heading: VENUES_HEADING.to_string(),
        venues: VENUES.iter().map(|s| s.to_string()).collect(),
        collage: (config.experience == ExperienceVariant::Collage)
            .then(|| config.assets.collage.clone()),
    }
}

fn company(config: &SiteConfig, copyright: &str) -> CompanyView {
    let branded = config.company == CompanyVariant::Branded;
    CompanyView {
        variant: config.company,
        established: COMPANY_ESTABLISHED.to_string(),
        name: COMPANY_NAME.to_string(),
        tagline: COMPANY_TAGLINE.to_string(),
        badge: COMPANY_BADGE.to_string(),
        logo: branded.then(|| config.assets.logo.clone()),
        copyright: branded.then(|| copyright.to_string()),
    }
}

fn contact(config: &SiteConfig, copyright: &str) -> ContactView {
    let shows_status = config.contact.affordance().shows_status();
    let form_fields = match config.contact {
        ContactMethod::MailtoForm(_) => FORM_FIELDS.to_vec(),
        _ => Vec::new(),
    };

    ContactView {
        heading: CONTACT_HEADING.to_string(),
        status: shows_status.then(|| CONTACT_STATUS.to_string()),
        linkedin_url: shows_status.then(|| LINKEDIN_URL.to_string()),
        method: config.contact.clone(),
        form_fields,
        copyright: copyright.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::contact::MailtoForm;

    #[test]
    fn test_page_data_order_and_records() {
        let page = generate_page_data(&SiteConfig::default(), 2024);
        let kinds: Vec<_> = page.sections.iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, SectionKind::ALL.to_vec());
        assert_eq!(page.copyright, "© 2024 Adam Line. All rights reserved.");

        match &page.sections[2] {
            SectionView::Experience(view) => {
                assert_eq!(view.experience[0], "Theatre503");
                assert_eq!(view.venues.len(), 7);
                assert!(view.collage.is_none());
            }
            other => panic!("expected experience, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_json_shape() {
        let page = generate_page_data(&SiteConfig::default(), 2024);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["sections"][1]["kind"], "core_pillars");
        assert_eq!(json["sections"][1]["pillars"][0]["title"], "Numbers & Documents");
        assert_eq!(json["sections"][4]["method"]["method"], "embedded_widget");
        assert_eq!(
            json["sections"][4]["method"]["form_id"],
            "01KDC35C886WXGBP17411ZWTK5"
        );
    }

    #[test]
    fn test_mailto_contact_lists_fields() {
        let mut config = SiteConfig::default();
        config.contact = ContactMethod::MailtoForm(MailtoForm::new("a@b.co"));

        let page = generate_page_data(&config, 2024);
        match &page.sections[4] {
            SectionView::Contact(view) => {
                assert_eq!(view.form_fields.len(), 3);
                assert!(view.status.is_none());
            }
            other => panic!("expected contact, got {:?}", other.kind()),
        }
    }
}
