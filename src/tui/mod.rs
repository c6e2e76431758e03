// TUI module: keyword form, results table and preview
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use std::path::PathBuf;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::loader::CatalogCache;
use crate::models::Catalog;

/// Run the interactive TUI over an already loaded catalog.
///
/// `cache` is kept so Ctrl+R can pick up changes to `source`.
pub fn run_interactive(source: PathBuf, cache: CatalogCache, catalog: Catalog) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(source, cache, catalog);

    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
