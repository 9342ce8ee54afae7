//! Section types and insert positions

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named section of the document body.
///
/// `start_line` and `end_line` are snapshot values taken at scan time: any
/// mutation of the owning document shifts line positions and invalidates
/// every previously-held range. The document rescans after each mutation and
/// never hands out a section handle that outlives one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// The title captured from the section header's brace group.
    pub name: String,
    /// Section text from the header line (inclusive) through the last line
    /// before the next header or the end boundary.
    pub content: String,
    /// 0-based index of the header line at scan time.
    pub start_line: usize,
    /// 0-based index of the section's last line at scan time (inclusive).
    pub end_line: usize,
}

/// Where to insert a new section in the document body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsertPosition {
    /// Immediately after the begin boundary marker.
    Start,
    /// Immediately before the end boundary marker.
    #[default]
    End,
    /// Immediately after the named section.
    After(String),
    /// Immediately before the named section.
    Before(String),
}

impl fmt::Display for InsertPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
            Self::After(name) => write!(f, "after '{name}'"),
            Self::Before(name) => write!(f, "before '{name}'"),
        }
    }
}
