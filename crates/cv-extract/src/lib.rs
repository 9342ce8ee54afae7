//! Skill and experience extraction for CV Manager
//!
//! Stateless helpers for LaTeX command and environment syntax, plus
//! read-only extractors that walk the named sections of a parsed
//! [`cv_document::Document`].

pub mod experience;
pub mod latex;
pub mod skills;

pub use experience::{ExperienceEntry, extract_experience};
pub use latex::{command_arguments, environment_blocks, environment_bodies};
pub use skills::extract_skills;
