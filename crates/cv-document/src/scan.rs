//! Line-level scanning for document boundaries and section headers.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::section::Section;

/// Literal marker line content opening the document body.
pub(crate) const BEGIN_MARKER: &str = r"\begin{document}";
/// Literal marker line content closing the document body.
pub(crate) const END_MARKER: &str = r"\end{document}";

/// Matches a section header at any of the three flat levels. The title is
/// the second capture group.
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(section|subsection|subsubsection)\{([^}]+)\}")
        .expect("Invalid section header regex")
});

/// Returns the header title if `line` declares a section.
pub(crate) fn header_title(line: &str) -> Option<&str> {
    HEADER_REGEX
        .captures(line)
        .map(|caps| caps.get(2).unwrap().as_str())
}

/// Whether `line` declares a section at any level.
pub(crate) fn is_header(line: &str) -> bool {
    HEADER_REGEX.is_match(line)
}

/// Locates the boundary marker lines in a single pass.
///
/// The *last* line containing each marker wins; a line containing both
/// markers counts as the begin marker only. Missing markers, or markers in
/// inverted order, are a fatal parse error.
pub(crate) fn find_boundaries(lines: &[String]) -> Result<(usize, usize)> {
    let mut begin = None;
    let mut end = None;

    for (index, line) in lines.iter().enumerate() {
        if line.contains(BEGIN_MARKER) {
            begin = Some(index);
        } else if line.contains(END_MARKER) {
            end = Some(index);
        }
    }

    match (begin, end) {
        (Some(begin), Some(end)) if begin < end => Ok((begin, end)),
        _ => Err(Error::BoundariesNotFound),
    }
}

/// The section currently accumulating lines during a scan.
struct OpenSection {
    name: String,
    start_line: usize,
}

/// Scans the body span (strictly between the boundary lines) for sections.
///
/// Two-state walk over the line index: either no section is open, or exactly
/// one is, accumulating until the next header or the end boundary. Lines
/// before the first header belong to no section; a later duplicate name
/// overwrites the earlier entry.
pub(crate) fn scan_sections(
    lines: &[String],
    begin_boundary: usize,
    end_boundary: usize,
) -> HashMap<String, Section> {
    let mut sections = HashMap::new();
    let mut open: Option<OpenSection> = None;

    for index in begin_boundary + 1..end_boundary {
        if let Some(title) = header_title(&lines[index]) {
            let name = title.to_string();
            if let Some(previous) = open.take() {
                close_section(&mut sections, lines, previous, index - 1);
            }
            open = Some(OpenSection {
                name,
                start_line: index,
            });
        }
    }

    if let Some(last) = open.take() {
        close_section(&mut sections, lines, last, end_boundary - 1);
    }

    sections
}

fn close_section(
    sections: &mut HashMap<String, Section>,
    lines: &[String],
    open: OpenSection,
    end_line: usize,
) {
    let content = lines[open.start_line..=end_line].concat();
    sections.insert(
        open.name.clone(),
        Section {
            name: open.name,
            content,
            start_line: open.start_line,
            end_line,
        },
    );
}
