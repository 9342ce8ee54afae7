//! Experience extraction from environment-structured experience sections.

use std::sync::LazyLock;

use cv_document::Document;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::latex::environment_blocks;

/// Section titles treated as experience sections.
const EXPERIENCE_SECTION_NAMES: [&str; 3] =
    ["Experience", "Work Experience", "Professional Experience"];

static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\textbf\{(.*?)\}").expect("Invalid title regex"));
static COMPANY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\textit\{(.*?)\}").expect("Invalid company regex"));
/// Captures the line tail after `\hfill`, dropping optional braces and a
/// trailing line-break command.
static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)\\hfill\s*\{?(.*?)\}?\s*(?:\\\\)?\s*$").expect("Invalid date regex")
});

/// One experience entry recovered from an environment block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Bolded role title; empty when the block has none.
    pub title: String,
    /// Italicized company name; empty when the block has none.
    pub company: String,
    /// Right-aligned date fragment; empty when the block has none.
    pub date: String,
    /// The full block body between the environment markers.
    pub content: String,
}

/// Builds one entry per environment block found in each experience section.
///
/// Sections are probed under the fixed synonyms "Experience", "Work
/// Experience", and "Professional Experience". Every begin/end block inside
/// a matching section becomes one entry; the field probes are best-effort
/// and leave a field empty rather than failing.
pub fn extract_experience(document: &Document) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();

    for name in EXPERIENCE_SECTION_NAMES {
        let Some(content) = document.get_section(name) else {
            continue;
        };
        for (_, body) in environment_blocks(content) {
            entries.push(ExperienceEntry {
                title: capture(&TITLE_REGEX, &body),
                company: capture(&COMPANY_REGEX, &body),
                date: capture(&DATE_REGEX, &body).trim().to_string(),
                content: body,
            });
        }
    }

    entries
}

/// First match's first group, or empty.
fn capture(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
