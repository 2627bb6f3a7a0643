//! Producer Site
//!
//! Static renderer for a single-page theatre producer portfolio.
//!
//! Layout:
//! - `site/`: content records, section renderers, page composer (HTML + JSON)
//! - `clock`: injectable "today" for the copyright year
//! - `config`: variant selection and contact method, loaded from JSON
//! - `utils/`: markup helpers shared by the section renderers

pub mod clock;
pub mod config;
pub mod error;
pub mod site;
pub mod utils;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use site::{
    ContactMethod, FormRejection, FormSubmission, PageView, SectionKind, SiteGenerator,
};
