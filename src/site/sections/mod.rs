//! Page section renderers.
//!
//! Each renderer returns a self-contained `<section>` fragment and never reads
//! another section's output.

pub mod s1_hero;
pub mod s2_pillars;
pub mod s3_experience;
pub mod s4_company;
pub mod s5_contact;
