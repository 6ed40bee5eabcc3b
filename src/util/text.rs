// src/util/text.rs
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Extract the first non-empty line of a free-text field.
///
/// This function:
/// 1. Skips blank lines
/// 2. Collapses runs of whitespace inside the line to a single space
/// 3. Trims the result
///
/// # Examples
///
/// ```
/// use notelist::util::text::extract_first_line;
///
/// let text = "\n  Buy   milk\nand bread";
/// assert_eq!(extract_first_line(text), "Buy milk");
/// ```
pub fn extract_first_line(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .map(|line| WHITESPACE_RUN.replace_all(line, " ").into_owned())
        .unwrap_or_default()
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with "...".
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}
