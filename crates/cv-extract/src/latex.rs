//! Stateless helpers for LaTeX command and environment syntax.

use std::sync::LazyLock;

use regex::Regex;

/// Matches any environment's open marker; the name is the first group.
static BEGIN_ENV_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\begin\{([^}]*)\}").expect("Invalid begin marker regex"));

/// Extracts every `{...}` argument following `\command` in `text`.
///
/// Matching is non-greedy and spans newlines, so multi-line arguments come
/// back whole. `command` is taken literally (escaped before compiling).
///
/// # Example
/// ```
/// use cv_extract::command_arguments;
///
/// let text = "\\textbf{Engineer} and \\textbf{Lead}";
/// assert_eq!(command_arguments(text, "textbf"), vec!["Engineer", "Lead"]);
/// ```
pub fn command_arguments(text: &str, command: &str) -> Vec<String> {
    let pattern = format!(r"(?s)\\{}\{{(.*?)\}}", regex::escape(command));
    let re = Regex::new(&pattern).expect("escaped command pattern is valid");
    re.captures_iter(text)
        .map(|caps| caps.get(1).unwrap().as_str().to_string())
        .collect()
}

/// Extracts the body of every `\begin{name}` .. `\end{name}` pair in `text`.
///
/// Marker search rather than a single regex: each open marker is found
/// literally, then the first matching close marker after it ends the body
/// (non-greedy, newlines allowed). An open marker with no close marker is
/// ignored.
pub fn environment_bodies(text: &str, name: &str) -> Vec<String> {
    let open = format!(r"\begin{{{name}}}");
    let close = format!(r"\end{{{name}}}");

    let mut bodies = Vec::new();
    let mut cursor = 0;
    while let Some(offset) = text[cursor..].find(&open) {
        let body_start = cursor + offset + open.len();
        let Some(body_len) = text[body_start..].find(&close) else {
            break;
        };
        bodies.push(text[body_start..body_start + body_len].to_string());
        cursor = body_start + body_len + close.len();
    }
    bodies
}

/// Extracts every environment block in `text` as `(name, body)` pairs.
///
/// Blocks are non-overlapping: once a block is matched the scan resumes
/// past its close marker, so environments nested inside a matched body are
/// not reported separately.
pub fn environment_blocks(text: &str) -> Vec<(String, String)> {
    let mut blocks = Vec::new();
    let mut cursor = 0;
    while let Some(caps) = BEGIN_ENV_REGEX.captures(&text[cursor..]) {
        let open = caps.get(0).unwrap();
        let name = caps.get(1).unwrap().as_str();
        let body_start = cursor + open.end();
        let close = format!(r"\end{{{name}}}");
        match text[body_start..].find(&close) {
            Some(body_len) => {
                blocks.push((
                    name.to_string(),
                    text[body_start..body_start + body_len].to_string(),
                ));
                cursor = body_start + body_len + close.len();
            }
            // Unmatched open marker: skip past it and keep scanning.
            None => cursor = body_start,
        }
    }
    blocks
}
