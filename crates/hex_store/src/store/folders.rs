//! Folder management.

use std::fs;
use std::path::Path;

use crate::folder::{is_reserved, validate_name, DEFAULT_FOLDER, RESERVED_PREFIX, TRASH_FOLDER};
use crate::index::{DisplayOrder, Favorites};
use crate::{PatternStore, StoreError, StoreResult};

impl PatternStore {
    /// Create an empty user folder.
    pub fn create_folder(&mut self, folder: &str) -> StoreResult<()> {
        if is_reserved(folder) {
            return Err(StoreError::ReservedFolder(folder.to_string()));
        }
        validate_name(folder)?;
        let dir = self.folder_dir(folder);
        if dir.exists() {
            return Err(StoreError::FolderExists(folder.to_string()));
        }
        fs::create_dir_all(&dir).map_err(|err| StoreError::io(&dir, err))
    }

    /// User-facing folders: `default` first, then the rest by name.
    /// Reserved folders are never listed.
    pub fn list_folders(&self) -> StoreResult<Vec<String>> {
        let root = self.root();
        let entries = fs::read_dir(root).map_err(|err| StoreError::io(root, err))?;
        let mut folders = Vec::new();
        for entry in entries {
            let path = entry.map_err(|err| StoreError::io(root, err))?.path();
            if !path.is_dir() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if name != DEFAULT_FOLDER && !name.starts_with(RESERVED_PREFIX) {
                folders.push(name.to_string());
            }
        }
        folders.sort_by_key(|name| name.to_lowercase());
        folders.insert(0, DEFAULT_FOLDER.to_string());
        Ok(folders)
    }

    /// Rename a user folder, re-keying its favorites and display order.
    ///
    /// If persisting the indexes fails, the directory move and both
    /// indexes are rolled back before the error is returned.
    #[tracing::instrument(level = "debug", skip_all, fields(old = %old, new = %new))]
    pub fn rename_folder(&mut self, old: &str, new: &str) -> StoreResult<()> {
        for folder in [old, new] {
            if is_reserved(folder) {
                return Err(StoreError::ReservedFolder(folder.to_string()));
            }
        }
        validate_name(old)?;
        validate_name(new)?;
        let from = self.folder_dir(old);
        if !from.is_dir() {
            return Err(StoreError::FolderNotFound(old.to_string()));
        }
        if old == new {
            return Ok(());
        }
        let to = self.folder_dir(new);
        if to.exists() && old.to_lowercase() != new.to_lowercase() {
            return Err(StoreError::FolderExists(new.to_string()));
        }

        let favorites_snapshot = self.favorites.clone();
        let order_snapshot = self.order.clone();

        fs::rename(&from, &to).map_err(|err| StoreError::io(&from, err))?;
        self.favorites.rename_folder(old, new);
        self.order.rename_folder(old, new);

        let persisted = match self.persist_favorites() {
            Ok(()) => self.persist_order().map_err(|err| (err, true)),
            Err(err) => Err((err, false)),
        };
        if let Err((err, favorites_written)) = persisted {
            tracing::warn!(%err, "folder rename failed, rolling back");
            self.rollback_rename(&to, &from, favorites_snapshot, order_snapshot, favorites_written);
            return Err(err);
        }

        if self.config.last_folder == old {
            self.config.last_folder = new.to_string();
            self.persist_config()?;
        }
        Ok(())
    }

    /// Best-effort undo of a folder rename. Failures are logged.
    fn rollback_rename(
        &mut self,
        moved_to: &Path,
        moved_from: &Path,
        favorites: Favorites,
        order: DisplayOrder,
        favorites_written: bool,
    ) {
        if let Err(err) = fs::rename(moved_to, moved_from) {
            tracing::warn!(%err, path = %moved_to.display(), "rollback of directory move failed");
        }
        self.favorites = favorites;
        self.order = order;
        if favorites_written {
            if let Err(err) = self.persist_favorites() {
                tracing::warn!(%err, "rollback of favorites failed");
            }
        }
    }

    /// Move every sequence of a user folder to the trash, then remove it.
    #[tracing::instrument(level = "debug", skip_all, fields(folder = %folder))]
    pub fn delete_folder(&mut self, folder: &str) -> StoreResult<()> {
        if is_reserved(folder) {
            return Err(StoreError::ReservedFolder(folder.to_string()));
        }
        validate_name(folder)?;
        let dir = self.folder_dir(folder);
        if !dir.is_dir() {
            return Err(StoreError::FolderNotFound(folder.to_string()));
        }

        for name in self.names_on_disk(folder)? {
            self.move_to(folder, &name, TRASH_FOLDER, None)?;
        }
        fs::remove_dir_all(&dir).map_err(|err| StoreError::io(&dir, err))?;

        if self.order.remove_folder(folder) {
            self.persist_order()?;
        }
        if self.config.last_folder == folder {
            self.config.last_folder = DEFAULT_FOLDER.to_string();
            self.persist_config()?;
        }
        Ok(())
    }
}
