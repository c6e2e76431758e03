/// Maximum characters taken from the matching field
pub const SNIPPET_CHARS: usize = 100;

/// Appended to every snippet, including ones shorter than [`SNIPPET_CHARS`]
pub const SNIPPET_SUFFIX: &str = "...";

/// First [`SNIPPET_CHARS`] characters of `text` followed by `...`.
///
/// Truncation counts characters, not bytes, and ignores word boundaries.
pub fn make_snippet(text: &str) -> String {
    let mut snippet: String = text.chars().take(SNIPPET_CHARS).collect();
    snippet.push_str(SNIPPET_SUFFIX);
    snippet
}
