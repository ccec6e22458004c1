//! File logging
//!
//! The terminal belongs to the TUI, so log lines go to a file under the
//! user's cache directory.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use env_logger::{Env, Target};

use crate::error::TexsearchError;

const LOG_FILE_NAME: &str = "texsearch.log";

/// Default log file location: `<cache_dir>/texsearch/texsearch.log`
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("texsearch").join(LOG_FILE_NAME))
}

/// Whether logging should be on for this run
pub fn enabled(debug_flag: bool) -> bool {
    debug_flag || cfg!(debug_assertions)
}

/// Open `path` for appending, creating parent directories
pub fn open_log_file(path: &Path) -> Result<File, TexsearchError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Install the global logger writing to `path`
///
/// `RUST_LOG` overrides the default `debug` filter.
pub fn init(path: &Path) -> Result<(), TexsearchError> {
    let file = open_log_file(path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| TexsearchError::Logging(e.to_string()))
}
