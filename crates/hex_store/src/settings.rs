use std::path::PathBuf;

/// Extension of sequence files.
pub const EXTENSION: &str = "hexpattern";

/// Store configuration.
#[derive(Clone, Debug)]
pub struct StoreSettings {
    /// Directory holding the folders and index files.
    pub root: PathBuf,
    /// Most entries kept in the history folder. Favorites are never trimmed.
    pub history_limit: usize,
}

impl StoreSettings {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        StoreSettings {
            root: root.into(),
            ..StoreSettings::default()
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            root: PathBuf::from("hexpatterns"),
            history_limit: 100,
        }
    }
}
