//! Crate-wide constants
//!
//! Fixed property keys, the XML vocabulary of the properties document and
//! the default on-disk location, kept in one place.

/// Keys of the window geometry record
///
/// These are fixed: every store reads and writes geometry under exactly
/// these names.
pub mod geometry {
    pub const X: &str = "x";
    pub const Y: &str = "y";
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const IS_MAXIMIZED: &str = "isMaximized";
}

/// Properties-in-XML document vocabulary
pub mod xml {
    pub const VERSION: &str = "1.0";
    pub const ENCODING: &str = "UTF-8";
    pub const STANDALONE: &str = "no";

    /// Body of the `<!DOCTYPE ...>` declaration
    pub const DOCTYPE: &str = r#"properties SYSTEM "http://java.sun.com/dtd/properties.dtd""#;

    pub const ROOT: &str = "properties";
    pub const COMMENT: &str = "comment";
    pub const ENTRY: &str = "entry";
    pub const KEY_ATTRIBUTE: &str = "key";

    /// Spaces per nesting level in rendered documents
    pub const INDENT_SIZE: usize = 2;
}

/// Default file location used by hosts that don't pick their own
pub mod config {
    /// Application directory name under the user config directory
    pub const APP_DIR: &str = "property-store";

    /// Properties filename
    pub const FILENAME: &str = "properties.xml";

    /// Environment variable overriding the default file path
    pub const PATH_ENV: &str = "PROPERTY_STORE_FILE";
}
