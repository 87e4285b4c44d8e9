//! Error types produced by the aggregation pass.

use std::error::Error;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error as ThisError;

use crate::resolver::STREAM_NAMESPACE;

/// Result alias used throughout the crate.
pub type TributaryResult<T> = Result<T, TributaryError>;

/// Errors that can occur while assembling a configuration snapshot.
///
/// Every variant is fatal to the pass that raised it: the aggregator never
/// recovers locally and never returns a partial snapshot.
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum TributaryError {
    /// The bootstrap document (or a stream's document) could not be read or
    /// parsed.
    #[error("configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying error reported by the document loader.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    /// The bootstrap document's stream list was not a sequence of
    /// declaration records.
    #[error("invalid stream declarations: {found}")]
    InvalidStreamList {
        /// Description of what was found instead of a declaration sequence.
        found: String,
    },

    /// A declared module identifier resolved to no registered implementation.
    #[error("no stream implementation for '{module}': tried '{namespaced}' and '{module}'")]
    StreamNotFound {
        /// The identifier as declared in the bootstrap document.
        module: String,
        /// The namespaced candidate that was tried first.
        namespaced: String,
    },

    /// A stream type failed to provide the retrieval capability.
    #[error("stream '{stream}' does not implement get()")]
    NotImplemented {
        /// Name of the offending stream.
        stream: String,
    },

    /// A stream's retrieval operation failed; the cause is preserved as-is.
    #[error("stream '{stream}' failed: {source}")]
    Stream {
        /// Name of the failing stream.
        stream: String,
        /// The implementation-defined error, untranslated.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl TributaryError {
    /// Construct a [`TributaryError::File`] for a configuration path.
    #[must_use]
    pub fn file(path: &Utf8Path, err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::File {
            path: path.to_owned(),
            source: err.into(),
        }
    }

    /// Construct a [`TributaryError::StreamNotFound`] for a module identifier,
    /// recording both candidate forms that were tried.
    #[must_use]
    pub fn stream_not_found(module: &str) -> Self {
        Self::StreamNotFound {
            module: module.to_owned(),
            namespaced: format!("{STREAM_NAMESPACE}::{module}"),
        }
    }

    /// Construct a [`TributaryError::Stream`] wrapping a stream-specific
    /// retrieval failure.
    #[must_use]
    pub fn stream(name: &str, err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::Stream {
            stream: name.to_owned(),
            source: err.into(),
        }
    }
}
