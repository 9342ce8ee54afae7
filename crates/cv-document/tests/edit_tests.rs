//! Tests for Document editing operations.

use cv_document::{Document, Error, InsertPosition};
use pretty_assertions::assert_eq;

const SAMPLE: &str = r"\begin{document}
\section{Summary}
Engineer.
\section{Skills}
Rust.
\section{Projects}
Things.
\end{document}
";

#[test]
fn replace_keeps_the_header_when_content_has_none() {
    let mut doc = Document::parse(SAMPLE).unwrap();
    doc.replace_section("Skills", "Go.\nRust.\n").unwrap();

    assert_eq!(
        doc.get_section("Skills"),
        Some("\\section{Skills}\nGo.\nRust.\n")
    );
    // The following section shifted down but is intact.
    assert_eq!(
        doc.get_section("Projects"),
        Some("\\section{Projects}\nThings.\n")
    );
    assert_eq!(doc.sections()["Projects"].start_line, 6);
}

#[test]
fn replace_with_a_header_replaces_the_whole_section() {
    let mut doc = Document::parse(SAMPLE).unwrap();
    doc.replace_section("Skills", "\\section{Skills}\nGo only.\n")
        .unwrap();

    assert_eq!(doc.get_section("Skills"), Some("\\section{Skills}\nGo only.\n"));
    assert_eq!(doc.section_names(), vec!["Summary", "Skills", "Projects"]);
}

#[test]
fn replace_can_rename_a_section() {
    let mut doc = Document::parse(SAMPLE).unwrap();
    doc.replace_section("Skills", "\\section{Expertise}\nGo.\n")
        .unwrap();

    assert!(!doc.has_section("Skills"));
    assert_eq!(doc.get_section("Expertise"), Some("\\section{Expertise}\nGo.\n"));
    assert_eq!(doc.section_names(), vec!["Summary", "Expertise", "Projects"]);
}

#[test]
fn replace_unknown_section_leaves_lines_untouched() {
    let mut doc = Document::parse(SAMPLE).unwrap();
    let before = doc.render();

    let err = doc.replace_section("Nope", "x\n").unwrap_err();
    assert!(matches!(err, Error::SectionNotFound { .. }));
    assert_eq!(doc.render(), before);
}

#[test]
fn insert_at_start_goes_right_after_the_begin_marker() {
    let mut doc = Document::parse(SAMPLE).unwrap();
    doc.insert_section("Contact", "me@example.com\n", InsertPosition::Start)
        .unwrap();

    assert_eq!(
        doc.section_names(),
        vec!["Contact", "Summary", "Skills", "Projects"]
    );
    assert_eq!(
        doc.get_section("Contact"),
        Some("\\section{Contact}\nme@example.com\n")
    );
}

#[test]
fn insert_at_end_goes_right_before_the_end_marker() {
    let mut doc = Document::parse(SAMPLE).unwrap();
    doc.insert_section("References", "Available.\n", InsertPosition::End)
        .unwrap();

    assert_eq!(doc.section_names().last(), Some(&"References"));
    assert!(
        doc.render()
            .ends_with("\\section{References}\nAvailable.\n\\end{document}\n")
    );
}

#[test]
fn insert_after_a_named_section() {
    let mut doc = Document::parse(SAMPLE).unwrap();
    doc.insert_section("Awards", "Medal.\n", InsertPosition::After("Summary".to_string()))
        .unwrap();

    assert_eq!(
        doc.section_names(),
        vec!["Summary", "Awards", "Skills", "Projects"]
    );
}

#[test]
fn insert_before_a_named_section() {
    let mut doc = Document::parse(SAMPLE).unwrap();
    doc.insert_section("Awards", "Medal.\n", InsertPosition::Before("Skills".to_string()))
        .unwrap();

    assert_eq!(
        doc.section_names(),
        vec!["Summary", "Awards", "Skills", "Projects"]
    );
}

#[test]
fn insert_with_an_unknown_anchor_fails_without_mutation() {
    let mut doc = Document::parse(SAMPLE).unwrap();
    let before = doc.render();

    let err = doc
        .insert_section("X", "y\n", InsertPosition::After("Nope".to_string()))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidPosition { .. }));
    assert_eq!(doc.render(), before);
}

#[test]
fn inserted_content_without_a_trailing_newline_is_terminated() {
    let mut doc = Document::parse(SAMPLE).unwrap();
    doc.insert_section("Notes", "no newline", InsertPosition::End)
        .unwrap();

    assert!(doc.render().contains("no newline\n\\end{document}\n"));
}

#[test]
fn remove_section_deletes_its_lines() {
    let mut doc = Document::parse(SAMPLE).unwrap();
    doc.remove_section("Skills").unwrap();

    assert_eq!(doc.section_names(), vec!["Summary", "Projects"]);
    assert!(!doc.render().contains("Rust."));

    let err = doc.remove_section("Skills").unwrap_err();
    assert!(matches!(err, Error::SectionNotFound { .. }));
}

#[test]
fn reorder_is_subtractive() {
    let mut doc = Document::parse(SAMPLE).unwrap();
    doc.reorder_sections(&["Projects", "Summary"]).unwrap();

    assert_eq!(doc.section_names(), vec!["Projects", "Summary"]);
    assert!(!doc.has_section("Skills"));
    assert_eq!(
        doc.render(),
        "\\begin{document}\n\\section{Projects}\nThings.\n\\section{Summary}\nEngineer.\n\\end{document}\n"
    );
}

#[test]
fn reorder_with_an_unknown_name_fails_without_mutation() {
    let mut doc = Document::parse(SAMPLE).unwrap();
    let before = doc.render();

    let err = doc.reorder_sections(&["Skills", "Nope"]).unwrap_err();
    assert!(matches!(err, Error::SectionNotFound { .. }));
    assert_eq!(doc.render(), before);
}

#[test]
fn reorder_drops_body_lines_outside_any_section() {
    let source = "\\begin{document}\nintro\n\\section{A}\na\n\\end{document}\n";
    let mut doc = Document::parse(source).unwrap();
    doc.reorder_sections(&["A"]).unwrap();

    assert_eq!(
        doc.render(),
        "\\begin{document}\n\\section{A}\na\n\\end{document}\n"
    );
}

#[test]
fn edits_compose_and_rescan_each_time() {
    let mut doc = Document::parse(SAMPLE).unwrap();
    doc.replace_section("Summary", "Veteran engineer.\n").unwrap();
    doc.insert_section(
        "Contact",
        "me@example.com\n",
        InsertPosition::Before("Skills".to_string()),
    )
    .unwrap();
    doc.reorder_sections(&["Skills", "Contact", "Summary"]).unwrap();

    assert_eq!(
        doc.render(),
        "\\begin{document}\n\\section{Skills}\nRust.\n\\section{Contact}\nme@example.com\n\\section{Summary}\nVeteran engineer.\n\\end{document}\n"
    );
}
