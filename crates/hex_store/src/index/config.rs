use serde::{Deserialize, Serialize};

use crate::folder::DEFAULT_FOLDER;

/// Small persisted settings.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Folder the user last saved into or moved to.
    pub last_folder: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            last_folder: DEFAULT_FOLDER.to_string(),
        }
    }
}
