//! Copying search results to the system clipboard.

use anyhow::{Context, Result};
use arboard::Clipboard;

use crate::models::SearchResult;

/// Seam over the system clipboard so copy logic can be tested headless
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Text placed on the clipboard for a result:
/// `Title (type, YYYY-MM-DD)` on the first line, the snippet on the second.
/// Empty type or date are left out of the parentheses.
pub fn format_result(result: &SearchResult) -> String {
    let details: Vec<&str> = [result.content_type.as_str(), result.date.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();

    if details.is_empty() {
        format!("{}\n{}", result.title, result.snippet)
    } else {
        format!("{} ({})\n{}", result.title, details.join(", "), result.snippet)
    }
}

fn copy_with_provider(result: &SearchResult, provider: &mut dyn ClipboardProvider) -> Result<()> {
    provider.set_text(&format_result(result))
}

/// Copy a search result to the system clipboard.
///
/// # Errors
///
/// Fails when the system clipboard is unavailable (headless sessions, missing
/// X11/Wayland support) or refuses the write.
pub fn copy_result(result: &SearchResult) -> Result<()> {
    let mut clipboard = SystemClipboard::new()?;
    copy_with_provider(result, &mut clipboard)
}
