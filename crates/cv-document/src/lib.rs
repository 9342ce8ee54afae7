//! LaTeX document parsing and editing for CV Manager
//!
//! Provides a line-oriented model for CV documents delimited by
//! `\begin{document}` / `\end{document}`: boundary location, named section
//! scanning, in-place section editing, and byte-faithful regeneration.
//!
//! The raw line sequence is the single source of truth. Every mutating
//! operation splices it directly and then rederives boundaries and the
//! section map, so no section range is ever valid across a mutation.

pub mod document;
pub mod error;
pub mod section;

mod scan;

pub use document::Document;
pub use error::{Error, Result};
pub use section::{InsertPosition, Section};
