//! Rename, move and restore.

use std::fs::{self, File, FileTimes};
use std::path::Path;
use std::time::SystemTime;

use rustc_hash::FxHashSet;

use crate::folder::{is_reserved, is_special, validate_folder, validate_name, validate_sequence};
use crate::index::favorites_boundary;
use crate::{PatternStore, StoreError, StoreResult};

impl PatternStore {
    /// Rename a sequence within its folder.
    ///
    /// A change of letter case only is done as delete and recreate, keeping
    /// the file's timestamps. Any other change picks a free name and keeps
    /// the item's place in the display order. Returns the name used.
    #[tracing::instrument(level = "debug", skip_all, fields(folder = %folder, name = %name))]
    pub fn rename(&mut self, folder: &str, name: &str, new_name: &str) -> StoreResult<String> {
        validate_sequence(folder, name)?;
        if name == new_name {
            return Ok(name.to_string());
        }
        validate_name(new_name)?;
        let source = self.sequence_path(folder, name);
        if !source.is_file() {
            return Err(StoreError::not_found(folder, name));
        }

        // On a case-sensitive filesystem `new_name` may be a different file.
        let same_letters = name.to_lowercase() == new_name.to_lowercase();
        let case_only =
            same_letters && !self.names_on_disk(folder)?.iter().any(|n| n == new_name);
        let target_name = if case_only {
            let target = self.sequence_path(folder, new_name);
            recreate(&source, &target)?;
            new_name.to_string()
        } else {
            let excluding = (!same_letters).then_some(name);
            let target_name = self.ensure_unique_name(new_name, folder, excluding)?;
            let target = self.sequence_path(folder, &target_name);
            fs::rename(&source, &target).map_err(|err| StoreError::io(&source, err))?;
            target_name
        };
        tracing::debug!(new_name = %target_name, "sequence renamed");

        self.order.replace(folder, name, &target_name);
        if self.favorites.relocate((folder, name), (folder, &target_name)) {
            self.persist_favorites()?;
        }
        self.persist_order()?;
        Ok(target_name)
    }

    /// Move a sequence to another folder.
    ///
    /// Moving out of trash or history goes through [`Self::restore`].
    /// `index` picks the position in the target's display order; without
    /// it the item goes to the bottom, or right after the favorites when
    /// the target is trash or history. Returns the name used in the target.
    #[tracing::instrument(level = "debug", skip_all, fields(folder = %folder, name = %name, target = %target))]
    pub fn move_to(
        &mut self,
        folder: &str,
        name: &str,
        target: &str,
        index: Option<usize>,
    ) -> StoreResult<String> {
        validate_sequence(folder, name)?;
        validate_folder(target)?;
        if folder == target {
            if !self.exists(folder, name) {
                return Err(StoreError::not_found(folder, name));
            }
            if let Some(index) = index {
                self.reorder(folder, name, index)?;
            }
            return Ok(name.to_string());
        }
        if is_special(folder) {
            return self.restore(folder, name, target, index);
        }
        self.relocate(folder, name, target, index)
    }

    /// Move a sequence out of trash or history.
    ///
    /// When the target is itself trash or history, its favorite count is
    /// taken before the move and a non-favorite item is never placed above
    /// it.
    pub fn restore(
        &mut self,
        folder: &str,
        name: &str,
        target: &str,
        index: Option<usize>,
    ) -> StoreResult<String> {
        validate_sequence(folder, name)?;
        validate_folder(target)?;
        if folder == target {
            return self.move_to(folder, name, target, index);
        }
        self.relocate(folder, name, target, index)
    }

    fn relocate(
        &mut self,
        folder: &str,
        name: &str,
        target: &str,
        index: Option<usize>,
    ) -> StoreResult<String> {
        let source = self.sequence_path(folder, name);
        if !source.is_file() {
            return Err(StoreError::not_found(folder, name));
        }
        let target_dir = self.folder_dir(target);
        if !target_dir.is_dir() {
            if !is_reserved(target) {
                return Err(StoreError::FolderNotFound(target.to_string()));
            }
            fs::create_dir_all(&target_dir).map_err(|err| StoreError::io(&target_dir, err))?;
        }

        let special_target = is_special(target);
        let favorite = self.favorites.contains(folder, name);
        let favorites_before = if special_target {
            self.favorite_count(target)
        } else {
            0
        };

        let target_name = self.ensure_unique_name(name, target, None)?;
        let destination = self.sequence_path(target, &target_name);
        fs::rename(&source, &destination).map_err(|err| StoreError::io(&source, err))?;
        if special_target {
            touch(&destination);
        }
        tracing::debug!(new_name = %target_name, "sequence moved");

        self.favorites
            .relocate((folder, name), (target, &target_name));
        self.order.remove(folder, name);

        let on_disk = self.names_on_disk(target)?;
        let present: FxHashSet<&str> = on_disk.iter().map(String::as_str).collect();
        let mut names: Vec<String> = self
            .order
            .get(target)
            .iter()
            .filter(|n| **n != target_name && present.contains(n.as_str()))
            .cloned()
            .collect();
        for n in &on_disk {
            if *n != target_name && !names.contains(n) {
                names.push(n.clone());
            }
        }

        let position = match index {
            Some(index) if special_target && !favorite => index.max(favorites_before),
            Some(index) => index,
            None if special_target => {
                favorites_boundary(&names, |n| self.favorites.contains(target, n))
            }
            None => names.len(),
        };
        names.insert(position.min(names.len()), target_name.clone());
        self.order.set(target, names);

        self.persist_favorites()?;
        self.persist_order()?;
        self.remember_folder(target)?;
        Ok(target_name)
    }
}

/// Replace `source` by `target` with the same content and timestamps.
fn recreate(source: &Path, target: &Path) -> StoreResult<()> {
    let bytes = fs::read(source).map_err(|err| StoreError::io(source, err))?;
    let times = fs::metadata(source).ok().and_then(|meta| file_times(&meta));
    fs::remove_file(source).map_err(|err| StoreError::io(source, err))?;

    if let Err(err) = fs::write(target, &bytes) {
        if let Err(restore_err) = fs::write(source, &bytes) {
            tracing::warn!(%restore_err, path = %source.display(), "failed to restore file");
        }
        return Err(StoreError::io(target, err));
    }

    if let Some(times) = times {
        let restored = File::options()
            .write(true)
            .open(target)
            .and_then(|file| file.set_times(times));
        if let Err(err) = restored {
            tracing::warn!(%err, path = %target.display(), "failed to keep file timestamps");
        }
    }
    Ok(())
}

fn file_times(meta: &fs::Metadata) -> Option<FileTimes> {
    let mut times = FileTimes::new().set_modified(meta.modified().ok()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    Some(times)
}

/// Set a file's modification time to now.
fn touch(path: &Path) {
    let result = File::options()
        .write(true)
        .open(path)
        .and_then(|file| file.set_modified(SystemTime::now()));
    if let Err(err) = result {
        tracing::warn!(%err, path = %path.display(), "failed to update modification time");
    }
}
