//! Configuration loading for texsearch
//!
//! Reads an optional TOML file. Every section and field has a default.

mod loader;
mod types;

pub use loader::{default_config_path, load_config};
pub use types::{Config, LayoutMode, SourceConfig, StyleConfig};
