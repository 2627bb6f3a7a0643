//! Page content.
//!
//! Every record set here is a literal constant: non-empty, with every text
//! field filled in. Position in a set is only a rendering order.

/// One "What I Do" card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pillar {
    pub title: &'static str,
    pub description: &'static str,
}

pub const OWNER_NAME: &str = "Adam Line";

pub const HERO_BLURB: &str = "London-based theatre producer with experience in UK subsidised and commercial sectors. \
     Currently Participation Manager for an arts charity.";

pub const PILLARS_HEADING: &str = "What I Do";

pub const PILLARS: &[Pillar] = &[
    Pillar {
        title: "Numbers & Documents",
        description: "Budget management, contracting, and administration.",
    },
    Pillar {
        title: "Artists & Collaborators",
        description: "Fostering collaborative environments and respecting artistic vision.",
    },
    Pillar {
        title: "Management & Guidance",
        description: "Facilitating workshops and creative processes.",
    },
];

pub const EXPERIENCE_HEADING: &str = "Professional Experience";

pub const EXPERIENCE: &[&str] = &[
    "Theatre503",
    "David Adkin Ltd",
    "Spare Tyre Theatre Company",
    "Smart Entertainment",
    "Vicky Graham Productions",
];

pub const VENUES_HEADING: &str = "Notable Venues";

pub const VENUES: &[&str] = &[
    "Park Theatre",
    "Jermyn Street Theatre",
    "Finborough Theatre",
    "Southwark Playhouse",
    "Hampstead Theatre",
    "VAULT Festival",
    "Marylebone Theatre",
];

pub const COMPANY_ESTABLISHED: &str = "Est. 2022";
pub const COMPANY_NAME: &str = "Adam Line Creative Ltd";
pub const COMPANY_TAGLINE: &str = "\"Uplifting stories and uplifting people.\"";
pub const COMPANY_BADGE: &str = "Recipient of Stage One New Producers Bursary";

pub const CONTACT_HEADING: &str = "Contact";
pub const CONTACT_STATUS: &str =
    "I work full time and I am not currently taking on any new projects.";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/adam-line-9688a624a/";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_sets_non_empty() {
        assert!(!PILLARS.is_empty());
        assert!(!EXPERIENCE.is_empty());
        assert!(!VENUES.is_empty());

        for pillar in PILLARS {
            assert!(!pillar.title.is_empty());
            assert!(!pillar.description.is_empty());
        }
        assert!(EXPERIENCE.iter().chain(VENUES).all(|s| !s.is_empty()));
    }

    #[test]
    fn test_hero_blurb_is_single_spaced() {
        assert!(!HERO_BLURB.contains("  "));
        assert!(HERO_BLURB.ends_with("arts charity."));
    }
}
