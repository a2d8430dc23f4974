//! Error types for scrim_modal

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring a modal
///
/// The widget itself has no failure modes; only loading configuration can fail.
#[derive(Error, Debug)]
pub enum ModalError {
    /// Configuration text is not valid TOML, or a field has the wrong type
    #[error("Invalid modal configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration file could not be read
    #[error("Failed to read modal configuration from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for scrim_modal operations
pub type Result<T> = std::result::Result<T, ModalError>;
