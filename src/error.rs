use thiserror::Error;

/// Startup errors for texsearch
///
/// Fetch failures never surface here; the widget absorbs and renders them.
#[derive(Debug, Error)]
pub enum TexsearchError {
    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Invalid texture catalog: {0}")]
    Catalog(String),

    #[error(
        "No suggestion source configured.\n\nPass --endpoint <URL> or --catalog <FILE>, or set [source] endpoint in the config file."
    )]
    NoSource,

    #[error("Failed to start logging: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
