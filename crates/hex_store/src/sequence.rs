use std::time::SystemTime;

use hex_ir::Pattern;

use crate::folder::{favorite_key, DEFAULT_FOLDER};

/// A named pattern sequence as stored on disk.
#[derive(Clone, PartialEq, Debug)]
pub struct SavedPatternSequence {
    pub name: String,
    pub patterns: Vec<Pattern>,
    pub folder: String,
    /// Looked up in the favorites index, never stored in the file.
    pub favorite: bool,
    /// File modification time; only populated in trash and history.
    pub last_modified: Option<SystemTime>,
}

impl SavedPatternSequence {
    pub fn new(name: impl Into<String>, patterns: Vec<Pattern>) -> Self {
        SavedPatternSequence {
            name: name.into(),
            patterns,
            folder: DEFAULT_FOLDER.to_string(),
            favorite: false,
            last_modified: None,
        }
    }

    /// `folder/name` key used by the favorites index.
    pub fn key(&self) -> String {
        favorite_key(&self.folder, &self.name)
    }
}
