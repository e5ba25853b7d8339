//! Error types for generation runs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation run. There are no retries: the run is
/// re-executed from scratch after the inputs are fixed.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// An input document could not be opened or read.
    #[error("failed to read {document}: {source}")]
    Read {
        /// Display name of the input document.
        document: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The output sink could not be created or written.
    #[error("failed to write {sink}: {source}")]
    Write {
        /// Display name of the output sink.
        sink: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A function signature was still open when its document ended.
    #[error("unterminated signature for `{name}` in {document} (opened at line {line})")]
    UnterminatedSignature {
        /// Display name of the input document.
        document: String,
        /// 1-based line on which the signature opened.
        line: usize,
        /// Function name captured from the opening line.
        name: String,
    },

    /// The JSON config file could not be read or parsed.
    #[error("invalid config {path}: {message}")]
    Config {
        /// Path of the config file.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },
}
