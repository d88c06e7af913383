use once_cell::sync::Lazy;
use regex::Regex;

static BEFORE_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+(## )").unwrap());
static AFTER_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(## [^\n]*)\n+").unwrap());
static HORIZONTAL_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n*---\n*").unwrap());
static ADJACENT_BULLETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(- [^\n]*)\n(- )").unwrap());
static NEWLINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{4,}").unwrap());

/// Whitespace normalization for raw model output. A fixed, order-dependent
/// sequence of substitutions; idempotent on already-well-formatted input.
pub fn normalize_markdown(content: &str) -> String {
    let content = BEFORE_HEADER.replace_all(content, "\n\n\n${1}");
    let content = AFTER_HEADER.replace_all(&content, "${1}\n\n");
    let content = HORIZONTAL_RULE.replace_all(&content, "\n\n---\n\n");

    let mut content = content.into_owned();
    loop {
        let separated = ADJACENT_BULLETS.replace_all(&content, "${1}\n\n${2}");
        if separated == content {
            break;
        }
        content = separated.into_owned();
    }

    let content = NEWLINE_RUNS.replace_all(&content, "\n\n\n");

    content.trim().to_string()
}
