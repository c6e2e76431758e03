//! Terminal output sanitization for catalog text
//!
//! Catalog cells come from an arbitrary CSV file. Before they are printed in a
//! table they are flattened to a single line and stripped of ANSI escape
//! sequences, so a crafted cell cannot move the cursor, recolor the terminal or
//! break the table layout.

/// Flatten a cell to one printable line.
///
/// - ANSI CSI sequences (`ESC [ ... letter`) are removed
/// - Line breaks and tabs become spaces, and whitespace runs collapse to one
/// - Other control characters (bell, backspace, ...) are dropped
///
/// # Examples
///
/// ```
/// use content_search::utils::sanitize_cell;
///
/// assert_eq!(sanitize_cell("\x1b[31mRed\x1b[0m\nnext line"), "Red next line");
/// ```
pub fn sanitize_cell(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut pending_space = false;

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            if chars.peek() == Some(&'[') {
                chars.next();
                // Skip parameters up to the final letter
                for next_ch in chars.by_ref() {
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }

        if ch.is_whitespace() {
            pending_space = !result.is_empty();
            continue;
        }

        if ch.is_control() {
            continue;
        }

        if pending_space {
            result.push(' ');
            pending_space = false;
        }
        result.push(ch);
    }

    result
}

/// Fit `text` into exactly `width` characters: pad with spaces, or cut and end
/// with `…` when too long.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        let mut padded = String::with_capacity(text.len() + width - len);
        padded.push_str(text);
        padded.extend(std::iter::repeat_n(' ', width - len));
        padded
    } else if width == 0 {
        String::new()
    } else {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}
