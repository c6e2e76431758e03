pub mod environment;
pub mod terminal;

pub use environment::{DEFAULT_SOURCE, SOURCE_ENV_VAR, resolve_source_path};
pub use terminal::{pad_to_width, sanitize_cell};
