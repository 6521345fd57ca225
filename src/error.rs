//! Error handling for the mas generator.
//! Defines the error type and result alias used throughout the crate.

use crate::constants::EXIT_FAILURE;
use std::io;
use thiserror::Error;

/// Errors that can stop project generation.
///
/// Everything except [`Error::Aborted`] is fatal: it is reported once and the
/// process exits. Nothing is retried and nothing already written is rolled back.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during template processing
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Errors produced by the MiniJinja engine, including unbound variables
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// A template id that is not part of the bundled set
    #[error("Template '{path}' is not bundled with mas.")]
    MissingTemplateError { path: String },

    /// A text template that is not valid UTF-8
    #[error("Template '{path}' is not valid UTF-8.")]
    EncodingError { path: String },

    /// Invalid file name pattern used to select bundled templates
    #[error("Template pattern error: {0}.")]
    GlobError(#[from] globset::Error),

    /// Failure serializing the package manifest
    #[error("Manifest error: {0}.")]
    ManifestError(#[from] serde_json::Error),

    /// Failure while reading the interactive confirmation
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// The user declined to generate into a non-empty destination
    #[error("aborting")]
    Aborted,
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::PromptError(err.to_string())
    }
}

/// Writes the diagnostic for `err` and returns the exit status to use.
///
/// A declined overwrite prints only `aborting`. Fatal errors are prefixed with
/// `Error:` and their debug form is logged.
pub fn default_error_handler<W: io::Write>(err: &Error, stderr: &mut W) -> i32 {
    match err {
        Error::Aborted => {
            let _ = writeln!(stderr, "{err}");
        }
        _ => {
            log::debug!("{err:?}");
            let _ = writeln!(stderr, "Error: {err}");
        }
    }
    EXIT_FAILURE
}
