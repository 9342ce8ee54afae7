//! End-to-end workflow: load a CV, extract, edit, save, reload.

use cv_document::{Document, InsertPosition};
use cv_extract::{extract_experience, extract_skills};

const CV: &str = r"\documentclass{article}
\begin{document}
\section{Summary}
Engineer with ten years of plumbing.
\section{Skills}
\begin{itemize}
\item Go
\item Rust
\end{itemize}
\section{Experience}
\begin{rSubsection}
\textbf{Staff Engineer}
\textit{Initech}
\hfill 2019 -- 2024 \\
Kept the printers alive.
\end{rSubsection}
\end{document}
";

#[test]
fn load_edit_save_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cv.tex");
    std::fs::write(&path, CV).unwrap();

    let mut doc = Document::from_file(&path).unwrap();
    assert_eq!(extract_skills(&doc), vec!["Go", "Rust"]);

    doc.replace_section("Summary", "Engineer who tailors documents.\n")
        .unwrap();
    doc.insert_section(
        "Education",
        "BSc, Somewhere.\n",
        InsertPosition::After("Skills".to_string()),
    )
    .unwrap();
    doc.reorder_sections(&["Summary", "Education", "Skills", "Experience"])
        .unwrap();
    doc.save_to_file(&path).unwrap();

    let reloaded = Document::from_file(&path).unwrap();
    assert_eq!(
        reloaded.section_names(),
        vec!["Summary", "Education", "Skills", "Experience"]
    );
    assert_eq!(reloaded.render(), doc.render());
    assert!(!reloaded.is_modified());

    let entries = extract_experience(&reloaded);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Staff Engineer");
    assert_eq!(entries[0].company, "Initech");
    assert_eq!(entries[0].date, "2019 -- 2024");
}

#[test]
fn experience_entries_serialize_to_json() {
    let doc = Document::parse(CV).unwrap();
    let entries = extract_experience(&doc);

    let json = serde_json::to_value(&entries).unwrap();
    assert_eq!(json[0]["title"], "Staff Engineer");
    assert_eq!(json[0]["company"], "Initech");
    assert_eq!(json[0]["date"], "2019 -- 2024");
}
