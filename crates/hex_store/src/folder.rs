//! Folder and sequence naming rules.

use crate::{StoreError, StoreResult};

/// The folder that always exists and cannot be renamed or deleted.
pub const DEFAULT_FOLDER: &str = "default";

/// Soft-deleted sequences.
pub const TRASH_FOLDER: &str = ".trash";

/// Automatically recorded casts.
pub const HISTORY_FOLDER: &str = ".history";

/// Folders whose name starts with this are hidden and reserved.
pub const RESERVED_PREFIX: char = '.';

/// Trash or history: favorites-first ordering, timestamps, no config updates.
pub fn is_special(folder: &str) -> bool {
    folder == TRASH_FOLDER || folder == HISTORY_FOLDER
}

/// Reserved names cannot be created, renamed or deleted by the user.
pub fn is_reserved(folder: &str) -> bool {
    folder == DEFAULT_FOLDER || folder.starts_with(RESERVED_PREFIX)
}

/// Check a sequence or user folder name.
///
/// Rejects empty names, surrounding whitespace, path separators, control
/// characters and the reserved prefix.
pub fn validate_name(name: &str) -> StoreResult<()> {
    let valid = !name.is_empty()
        && name.trim() == name
        && !name.starts_with(RESERVED_PREFIX)
        && !name.contains(['/', '\\'])
        && !name.chars().any(char::is_control);
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidName(name.to_string()))
    }
}

/// Check a folder that sequences are read from or written to.
pub(crate) fn validate_folder(folder: &str) -> StoreResult<()> {
    if is_special(folder) {
        return Ok(());
    }
    validate_name(folder)
}

/// Check the name of a sequence that should already exist.
///
/// Looser than [`validate_name`] so files created outside the store stay
/// reachable, but still a single path component.
pub(crate) fn validate_existing(name: &str) -> StoreResult<()> {
    let valid = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.chars().any(char::is_control);
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidName(name.to_string()))
    }
}

/// Check the folder and name of a sequence an operation reads or changes.
pub(crate) fn validate_sequence(folder: &str, name: &str) -> StoreResult<()> {
    validate_folder(folder)?;
    validate_existing(name)
}

/// Favorites index key.
pub fn favorite_key(folder: &str, name: &str) -> String {
    format!("{folder}/{name}")
}
