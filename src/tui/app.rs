//! TUI application state and event handling.
//!
//! The UI mirrors a search form: the keyword is edited in the input box and
//! only searched when Enter submits it. It manages:
//!
//! - **Form submission**: Empty keywords are rejected with an error status
//! - **Result selection**: Moving through the results table
//! - **Reload**: Ctrl+R re-reads the source through the [`CatalogCache`] and
//!   re-runs the last submitted keyword against the new catalog
//! - **Status messages**: Transient feedback for searches, reloads and copies
//! - **Dirty state tracking**: Only redraws when state changes

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_result;
use crate::errors::LoadError;
use crate::loader::CatalogCache;
use crate::models::{Catalog, SearchResult};
use crate::search::{normalize_keyword, search};
use crate::utils::sanitize_cell;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for warning and error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Keyword input limit in characters
const MAX_KEYWORD_CHARS: usize = 256;
/// Minimum spacing between two submits of the same keyword
const SUBMIT_DEBOUNCE_MS: u64 = 150;
const PAGE_SIZE: isize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Warning,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    source: PathBuf,
    cache: CatalogCache,
    catalog: Catalog,
    input: String,
    /// Keyword of the last accepted submit, re-run on reload
    submitted_keyword: Option<String>,
    results: Vec<SearchResult>,
    selected_idx: usize,
    should_quit: bool,
    last_submit: Option<(Instant, String)>,
    status_message: Option<StatusMessage>,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(source: PathBuf, cache: CatalogCache, catalog: Catalog) -> Self {
        Self {
            source,
            cache,
            catalog,
            input: String::new(),
            submitted_keyword: None,
            results: Vec::new(),
            selected_idx: 0,
            should_quit: false,
            last_submit: None,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType) {
        let duration_ms = match message_type {
            MessageType::Success => STATUS_SUCCESS_DURATION_MS,
            MessageType::Warning | MessageType::Error => STATUS_ERROR_DURATION_MS,
        };
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn clear_expired_status(&mut self) {
        let expired = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.clear_expired_status();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let redraw_due = now.duration_since(self.last_draw_time) >= Duration::from_millis(100);
            if self.needs_redraw || redraw_due {
                terminal.draw(|f| {
                    let state = RenderState {
                        input: &self.input,
                        submitted_keyword: self.submitted_keyword.as_deref(),
                        catalog_len: self.catalog.len(),
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &self.results, self.selected_idx, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearInput => {
                if self.input.is_empty() {
                    self.should_quit = true;
                } else {
                    self.input.clear();
                    self.needs_redraw = true;
                }
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-PAGE_SIZE),
            Action::PageDown => self.move_selection(PAGE_SIZE),
            Action::TypeChar(c) => self.type_char(c),
            Action::DeleteChar => self.delete_char(),
            Action::Submit => {
                // Only repeats of the same keyword are throttled
                let repeated = self.last_submit.as_ref().is_some_and(|(at, keyword)| {
                    *keyword == self.input
                        && at.elapsed() < Duration::from_millis(SUBMIT_DEBOUNCE_MS)
                });
                if !repeated {
                    self.submit();
                    self.last_submit = Some((Instant::now(), self.input.clone()));
                }
            }
            Action::CopyToClipboard => self.copy_selected(),
            Action::Reload => self.reload(),
            Action::None => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.results.len();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn type_char(&mut self, c: char) {
        if self.input.chars().count() < MAX_KEYWORD_CHARS {
            self.input.push(c);
            self.needs_redraw = true;
        }
    }

    fn delete_char(&mut self) {
        if self.input.pop().is_some() {
            self.needs_redraw = true;
        }
    }

    /// Search for the current input, like pressing the form's submit button
    fn submit(&mut self) {
        if normalize_keyword(&self.input).is_empty() {
            self.submitted_keyword = None;
            self.results.clear();
            self.selected_idx = 0;
            self.set_status("Please enter a keyword to search.", MessageType::Error);
            return;
        }

        self.submitted_keyword = Some(self.input.clone());
        self.refresh_results();

        let keyword = sanitize_cell(&self.input);
        if self.results.is_empty() {
            self.set_status(
                format!("No blogs or case studies found containing '{}'.", keyword),
                MessageType::Warning,
            );
        } else {
            self.set_status(
                format!("Found {} matching entries for '{}'!", self.results.len(), keyword),
                MessageType::Success,
            );
        }
    }

    /// Re-run the submitted keyword against the current catalog
    fn refresh_results(&mut self) {
        self.results = match &self.submitted_keyword {
            Some(keyword) => search(&self.catalog, keyword),
            None => Vec::new(),
        };
        self.selected_idx = 0;
        self.needs_redraw = true;
    }

    fn reload(&mut self) {
        match self.cache.get_or_load(&self.source) {
            Ok(catalog) => {
                if catalog.ptr_eq(&self.catalog) {
                    self.set_status("✓ Catalog unchanged", MessageType::Success);
                } else {
                    self.catalog = catalog;
                    self.refresh_results();
                    self.set_status(
                        format!("✓ Catalog reloaded ({} entries)", self.catalog.len()),
                        MessageType::Success,
                    );
                }
            }
            Err(LoadError::SourceNotFound { path, .. }) => {
                self.set_status(
                    format!("✗ '{}' not found, keeping previous catalog", path.display()),
                    MessageType::Error,
                );
            }
            Err(e) => {
                self.set_status(format!("✗ Reload failed: {}", e), MessageType::Error);
            }
        }
    }

    fn copy_selected(&mut self) {
        let Some(result) = self.results.get(self.selected_idx) else {
            self.set_status("✗ No result to copy", MessageType::Error);
            return;
        };

        match copy_result(result) {
            Ok(()) => self.set_status("✓ Copied to clipboard", MessageType::Success),
            Err(e) => self.set_status(format!("✗ Clipboard error: {}", e), MessageType::Error),
        }
    }
}
