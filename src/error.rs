//! Error types for totui
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::ui::widgets::tree_menu::SelectError;

/// Result type alias for totui operations
pub type TotuiResult<T> = Result<T, TotuiError>;

/// Main error type for totui operations
#[derive(Error, Debug)]
pub enum TotuiError {
    /// A node label cannot be rendered on a single terminal line
    #[error("invalid label {label:?} at node path {}: labels must not contain control characters", format_path(.path))]
    InvalidLabel { label: String, path: Vec<usize> },

    /// The selection callback of a node failed after the cursor moved onto it
    #[error("select callback for '{label}' failed: {source}")]
    Select {
        label: String,
        #[source]
        source: SelectError,
    },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Logging could not be set up
    #[error("failed to initialise logging: {0}")]
    Logging(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_path(path: &[usize]) -> String {
    if path.is_empty() {
        return "root".to_string();
    }
    let parts: Vec<String> = path.iter().map(usize::to_string).collect();
    format!("root/{}", parts.join("/"))
}
