//! Utility modules shared by the section renderers
//!
//! - Markup: escaping, section wrappers, copyright line

pub mod markup;

// Re-export commonly used helpers
pub use markup::{attr, copyright_line, section_close, section_open, text};
