//! File-backed string properties with XML persistence
//!
//! [`PropertyStore`] keeps a flat string-to-string mapping bound to one
//! file, written as a properties-in-XML document. On top of that it can
//! capture and restore a window's position, size and maximized state under
//! fixed keys, through the toolkit-neutral [`Window`] trait.
//!
//! ```no_run
//! use property_store::PropertyStore;
//!
//! let mut props = PropertyStore::new("settings.xml");
//! if !props.load() {
//!     props.set_property("theme", "dark");
//! }
//! assert!(props.store(Some("app settings")));
//! ```

#![deny(unsafe_code)]

pub mod constants;
pub mod error;
pub mod geometry;
pub mod paths;
pub mod store;
pub mod types;

#[cfg(test)]
mod testing;

pub use error::{ErrorSink, StoreError, TracingSink};
pub use geometry::{Component, Window};
pub use store::PropertyStore;
pub use store::xml::{DocumentError, PropertiesDocument};
pub use types::{Geometry, Position, Size, StoredGeometry};
