//! Portfolio Page Module
//!
//! Renders the single-page portfolio as an HTML document or as JSON view
//! models.
//!
//! ## Sections
//! 1. Hero - name and introduction
//! 2. Core Pillars - "What I Do" cards
//! 3. Experience - companies and notable venues
//! 4. Company - production company statement
//! 5. Contact - availability, contact affordance, copyright

pub mod contact;
pub mod content;
pub mod generator;
pub mod generator_json;
pub mod sections;
pub mod types;
pub mod view_models;

pub use contact::{ContactAffordance, ContactMethod, FormRejection, FormSubmission};
pub use generator::SiteGenerator;
pub use generator_json::generate_page_data;
pub use types::{RenderedSection, SectionKind};
pub use view_models::{PageView, SectionView};
