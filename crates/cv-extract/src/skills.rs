//! Skill extraction from itemized skill sections.

use cv_document::Document;

use crate::latex::environment_bodies;

/// Section titles treated as skill sections.
const SKILL_SECTION_NAMES: [&str; 3] = ["Skills", "Technical Skills", "Core Competencies"];

/// Collects every `\item` entry from the first `itemize` block of each
/// skill section present in the document.
///
/// Sections are probed under the fixed synonyms "Skills", "Technical
/// Skills", and "Core Competencies"; items are returned trimmed, in
/// document order, across all matching sections. Absent sections and
/// sections without a list block contribute nothing.
pub fn extract_skills(document: &Document) -> Vec<String> {
    let mut skills = Vec::new();

    for name in SKILL_SECTION_NAMES {
        let Some(content) = document.get_section(name) else {
            continue;
        };
        let Some(body) = environment_bodies(content, "itemize").into_iter().next() else {
            tracing::debug!(section = name, "Skill section has no itemize block");
            continue;
        };
        skills.extend(
            body.split(r"\item")
                .skip(1)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string),
        );
    }

    skills
}
