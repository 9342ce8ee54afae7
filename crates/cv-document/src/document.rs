//! The document aggregate: parse, inspect, edit, regenerate.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::scan;
use crate::section::{InsertPosition, Section};

/// A parsed LaTeX CV document.
///
/// Owns the raw line sequence (each line keeps its own trailing terminator)
/// plus state derived from it: boundary indices, the preamble, and the map
/// of named sections. All mutating operations splice the line sequence
/// directly and then rescan, so derived state never goes stale.
///
/// Not synchronized: one owner mutates; sharing across threads requires
/// external locking.
///
/// # Example
/// ```
/// use cv_document::Document;
///
/// let source = "\\documentclass{article}\n\\begin{document}\n\\section{Skills}\nRust\n\\end{document}\n";
/// let doc = Document::parse(source).unwrap();
/// assert_eq!(doc.preamble(), "\\documentclass{article}\n");
/// assert_eq!(doc.get_section("Skills"), Some("\\section{Skills}\nRust\n"));
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    /// Original source as provided to parse (for is_modified tracking)
    original_source: String,
    /// Raw lines, each keeping its trailing terminator. The single mutable
    /// source of truth; everything below is derived from it.
    lines: Vec<String>,
    begin_boundary: usize,
    end_boundary: usize,
    preamble: String,
    sections: HashMap<String, Section>,
}

impl Document {
    /// Parse a document from source text.
    ///
    /// Splits into terminator-preserving lines, locates the body boundaries,
    /// derives the preamble, and scans the body for sections. No partial
    /// state survives a failure: the value exists only once parsing
    /// succeeded.
    ///
    /// # Errors
    /// Returns `BoundariesNotFound` if either boundary marker is missing or
    /// the markers appear in inverted order.
    pub fn parse(source: &str) -> Result<Self> {
        let lines = split_lines(source);
        let (begin, end) = scan::find_boundaries(&lines)?;
        let preamble = lines[..begin].concat();
        let sections = scan::scan_sections(&lines, begin, end);
        tracing::debug!(sections = sections.len(), "Parsed document body");

        Ok(Self {
            original_source: source.to_string(),
            lines,
            begin_boundary: begin,
            end_boundary: end,
            preamble,
            sections,
        })
    }

    /// Parse a document from a UTF-8 file.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, or any error `parse` can
    /// produce.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        match Self::parse(&source) {
            Ok(document) => {
                tracing::debug!(?path, "Loaded document");
                Ok(document)
            }
            Err(e) => {
                tracing::warn!(?path, "Failed to parse document: {}", e);
                Err(e)
            }
        }
    }

    /// The content of the named section, header line included.
    pub fn get_section(&self, name: &str) -> Option<&str> {
        self.sections.get(name).map(|s| s.content.as_str())
    }

    /// Whether the named section exists.
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// The full section map, keyed by name.
    ///
    /// Read-only view: all mutation goes through the editing operations.
    pub fn sections(&self) -> &HashMap<String, Section> {
        &self.sections
    }

    /// Section names in document order.
    pub fn section_names(&self) -> Vec<&str> {
        let mut sections: Vec<&Section> = self.sections.values().collect();
        sections.sort_by_key(|s| s.start_line);
        sections.iter().map(|s| s.name.as_str()).collect()
    }

    /// Everything strictly before the begin boundary marker.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// 0-based line index of the begin boundary marker.
    pub fn begin_boundary(&self) -> usize {
        self.begin_boundary
    }

    /// 0-based line index of the end boundary marker.
    pub fn end_boundary(&self) -> usize {
        self.end_boundary
    }

    /// Whether the document differs from the source it was parsed from.
    pub fn is_modified(&self) -> bool {
        self.render() != self.original_source
    }

    /// Replace the named section's content.
    ///
    /// If the first line of `new_content` is itself a section header, the
    /// whole section (header included) is replaced verbatim. Otherwise the
    /// existing header line is kept and only the body after it is replaced,
    /// so a subsequent `get_section` returns the header line followed by
    /// exactly `new_content`.
    ///
    /// # Errors
    /// Returns `SectionNotFound` if the section does not exist; the line
    /// sequence is left untouched.
    ///
    /// # Example
    /// ```
    /// use cv_document::Document;
    ///
    /// let source = "\\begin{document}\n\\section{Skills}\nC\n\\end{document}\n";
    /// let mut doc = Document::parse(source).unwrap();
    /// doc.replace_section("Skills", "Rust\n").unwrap();
    /// assert_eq!(doc.get_section("Skills"), Some("\\section{Skills}\nRust\n"));
    /// ```
    pub fn replace_section(&mut self, name: &str, new_content: &str) -> Result<()> {
        let Some(section) = self.sections.get(name) else {
            tracing::warn!(name, "Cannot replace section: not found");
            return Err(Error::SectionNotFound {
                name: name.to_string(),
            });
        };
        let (start, end) = (section.start_line, section.end_line);

        // Keep the existing header line unless the replacement carries its
        // own on the first line.
        let replaces_header = new_content
            .split_inclusive('\n')
            .next()
            .is_some_and(scan::is_header);
        let splice_from = if replaces_header { start } else { start + 1 };

        self.lines.splice(splice_from..=end, split_lines(new_content));
        self.rescan()
    }

    /// Insert a new section built from a synthesized `\section{name}` header
    /// line followed by `content`.
    ///
    /// The inserted block is normalized to end with a newline so the line
    /// that follows the insertion point keeps its own line.
    ///
    /// # Errors
    /// Returns `InvalidPosition` if the position anchors on a section that
    /// does not exist; the line sequence is left untouched.
    pub fn insert_section(
        &mut self,
        name: &str,
        content: &str,
        position: InsertPosition,
    ) -> Result<()> {
        let insert_at = match self.resolve_position(&position) {
            Ok(index) => index,
            Err(e) => {
                tracing::warn!(name, %position, "Cannot insert section: {}", e);
                return Err(e);
            }
        };

        let mut block = format!("\\section{{{name}}}\n{content}");
        if !block.ends_with('\n') {
            block.push('\n');
        }

        self.lines.splice(insert_at..insert_at, split_lines(&block));
        self.rescan()
    }

    /// Delete the named section, header line included.
    ///
    /// # Errors
    /// Returns `SectionNotFound` if the section does not exist; the line
    /// sequence is left untouched.
    pub fn remove_section(&mut self, name: &str) -> Result<()> {
        let Some(section) = self.sections.get(name) else {
            tracing::warn!(name, "Cannot remove section: not found");
            return Err(Error::SectionNotFound {
                name: name.to_string(),
            });
        };
        let (start, end) = (section.start_line, section.end_line);

        self.lines.splice(start..=end, std::iter::empty());
        self.rescan()
    }

    /// Rebuild the body as the named sections in the given order.
    ///
    /// Subtractive: the whole body span is replaced by the concatenation of
    /// the listed sections' current line ranges, so sections not listed (and
    /// any body lines belonging to no section) are gone afterwards.
    ///
    /// # Errors
    /// Returns `SectionNotFound` if any listed name is unknown; the line
    /// sequence is left untouched.
    pub fn reorder_sections(&mut self, order: &[&str]) -> Result<()> {
        let mut ranges = Vec::with_capacity(order.len());
        for &name in order {
            let Some(section) = self.sections.get(name) else {
                tracing::warn!(name, "Cannot reorder sections: not found");
                return Err(Error::SectionNotFound {
                    name: name.to_string(),
                });
            };
            ranges.push((section.start_line, section.end_line));
        }

        let mut body = Vec::new();
        for (start, end) in ranges {
            body.extend(self.lines[start..=end].iter().cloned());
        }

        self.lines
            .splice(self.begin_boundary + 1..self.end_boundary, body);
        self.rescan()
    }

    /// The current document text: all lines concatenated verbatim.
    pub fn render(&self) -> String {
        self.lines.concat()
    }

    /// Write `render()` to `path`, overwriting any existing file.
    ///
    /// Plain whole-file write; no atomic-rename guarantee.
    ///
    /// # Errors
    /// Returns `Io` on any write failure.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match fs::write(path, self.render()) {
            Ok(()) => {
                tracing::debug!(?path, "Saved document");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(?path, "Failed to save document: {}", e);
                Err(Error::io(path, e))
            }
        }
    }

    /// Map an insert position to the line index new content goes in at.
    fn resolve_position(&self, position: &InsertPosition) -> Result<usize> {
        match position {
            InsertPosition::Start => Ok(self.begin_boundary + 1),
            InsertPosition::End => Ok(self.end_boundary),
            InsertPosition::After(anchor) => self
                .sections
                .get(anchor)
                .map(|s| s.end_line + 1)
                .ok_or_else(|| Error::InvalidPosition {
                    position: position.to_string(),
                }),
            InsertPosition::Before(anchor) => self
                .sections
                .get(anchor)
                .map(|s| s.start_line)
                .ok_or_else(|| Error::InvalidPosition {
                    position: position.to_string(),
                }),
        }
    }

    /// Rederive boundaries, preamble, and the section map from `lines`.
    ///
    /// Mutators never splice the marker lines themselves, so the markers
    /// survive every edit; spliced-in content that happens to contain extra
    /// marker lines only shifts the recorded indices under the
    /// last-match-wins policy.
    fn rescan(&mut self) -> Result<()> {
        let (begin, end) = scan::find_boundaries(&self.lines)?;
        self.begin_boundary = begin;
        self.end_boundary = end;
        self.preamble = self.lines[..begin].concat();
        self.sections = scan::scan_sections(&self.lines, begin, end);
        Ok(())
    }
}

/// Splits text into lines, each keeping its trailing terminator, so that
/// concatenating the pieces reproduces the input bytes exactly.
fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}
