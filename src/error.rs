//! Error taxonomy and failure reporting
//!
//! Load and store failures never propagate to callers of the boolean
//! operations; they are handed to an [`ErrorSink`] instead. The default sink
//! forwards to `tracing`, tests swap in a recording one.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{error, warn};

use crate::store::xml::DocumentError;

/// Everything that can go wrong inside a [`PropertyStore`](crate::PropertyStore)
#[derive(Debug, Error)]
pub enum StoreError {
    /// The property file does not exist (not reported by `load`)
    #[error("property file {path:?} does not exist")]
    NotFound { path: PathBuf },

    /// Reading or writing the property file failed
    #[error("I/O error on property file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a valid properties document
    #[error("malformed property file {path:?}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    /// A geometry key holds a value that doesn't parse
    #[error("malformed value {value:?} for geometry key `{key}`")]
    InvalidValue { key: &'static str, value: String },
}

/// Receives failures from the store's non-propagating operations
pub trait ErrorSink: Send + Sync {
    fn report(&self, error: &StoreError);
}

impl<F> ErrorSink for F
where
    F: Fn(&StoreError) + Send + Sync,
{
    fn report(&self, error: &StoreError) {
        self(error)
    }
}

/// Default sink: logs through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, err: &StoreError) {
        match err {
            StoreError::InvalidValue { key, value } => {
                warn!(key = %key, value = %value, "Skipping malformed geometry value");
            }
            StoreError::NotFound { path } => {
                warn!(path = %path.display(), "Property file not found");
            }
            StoreError::Io { path, source } => {
                error!(path = %path.display(), error = %source, "Property file I/O failed");
            }
            StoreError::Document { path, source } => {
                error!(path = %path.display(), error = %source, "Failed to parse property file");
            }
        }
    }
}
