//! Default property file location

use std::path::PathBuf;

use crate::constants::config::{APP_DIR, FILENAME, PATH_ENV};

/// `<user config dir>/property-store/properties.xml`, or relative to the
/// working directory when the platform has no config dir
pub fn default_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push(FILENAME);
    path
}

/// Pick the property file: an explicit path wins, then `$PROPERTY_STORE_FILE`,
/// then [`default_path`]
pub fn resolve_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(PATH_ENV).map(PathBuf::from))
        .unwrap_or_else(default_path)
}
