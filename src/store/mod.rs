//! File-backed property store
//!
//! A flat `String -> String` mapping bound to one file path and persisted
//! as a properties-in-XML document. `load` and `store` never fail loudly:
//! problems go to the store's [`ErrorSink`] and the caller gets `false`.

pub mod xml;

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::error::{ErrorSink, StoreError, TracingSink};

pub struct PropertyStore {
    pub(crate) properties: BTreeMap<String, String>,
    path: PathBuf,
    pub(crate) sink: Arc<dyn ErrorSink>,
}

impl PropertyStore {
    /// Create an empty store for `path`. Nothing is read until [`load`](Self::load).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_sink(path, Arc::new(TracingSink))
    }

    /// Create an empty store that reports failures to `sink`
    pub fn with_sink(path: impl Into<PathBuf>, sink: Arc<dyn ErrorSink>) -> Self {
        Self {
            properties: BTreeMap::new(),
            path: path.into(),
            sink,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the file into the mapping, returning whether it succeeded
    ///
    /// A missing file yields `false` without touching the disk or reporting
    /// anything. Read and parse failures are reported to the sink. Loaded
    /// entries are merged over the current ones; on failure the mapping is
    /// left as it was.
    pub fn load(&mut self) -> bool {
        match self.try_load() {
            Ok(()) => true,
            Err(StoreError::NotFound { path }) => {
                debug!(path = %path.display(), "No property file to load");
                false
            }
            Err(err) => {
                self.sink.report(&err);
                false
            }
        }
    }

    /// [`load`](Self::load) with the failure returned instead of reported
    pub fn try_load(&mut self) -> Result<(), StoreError> {
        if !self.path.exists() {
            return Err(StoreError::NotFound {
                path: self.path.clone(),
            });
        }

        let source = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        let document = xml::parse(&source).map_err(|source| StoreError::Document {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            path = %self.path.display(),
            entries = document.entries.len(),
            "Loaded properties"
        );
        self.properties.extend(document.entries);
        Ok(())
    }

    /// Write the mapping to the file, returning whether it succeeded
    ///
    /// The file is truncated and rewritten in place. `comment` becomes the
    /// document's `<comment>` element. Parent directories are not created.
    pub fn store(&self, comment: Option<&str>) -> bool {
        match self.try_store(comment) {
            Ok(()) => true,
            Err(err) => {
                self.sink.report(&err);
                false
            }
        }
    }

    /// [`store`](Self::store) with the failure returned instead of reported
    pub fn try_store(&self, comment: Option<&str>) -> Result<(), StoreError> {
        let bytes =
            xml::render(comment, &self.properties).map_err(|source| StoreError::Document {
                path: self.path.clone(),
                source,
            })?;

        fs::write(&self.path, bytes).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            path = %self.path.display(),
            entries = self.properties.len(),
            "Stored properties"
        );
        Ok(())
    }

    /// Whether the file is on disk right now
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn get_property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Insert or overwrite a value, returning the previous one
    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.properties.insert(key.into(), value.into())
    }

    pub fn remove_property(&mut self, key: &str) -> Option<String> {
        self.properties.remove(key)
    }

    /// The live mapping
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// The live mapping, mutably. Changes are what the next `store` writes.
    pub fn properties_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.properties
    }
}

impl fmt::Debug for PropertyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyStore")
            .field("path", &self.path)
            .field("properties", &self.properties)
            .finish_non_exhaustive()
    }
}
