//! `PatternStore`: the single writer of sequence files and their indexes.

mod folders;
mod moves;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rustc_hash::{FxHashMap, FxHashSet};

use hex_diagnostic::{ContextId, ErrorReporter, Report};
use hex_ir::Pattern;
use hex_registry::PatternRegistry;

use crate::folder::{
    favorite_key, is_special, validate_folder, validate_name, validate_sequence, DEFAULT_FOLDER,
    HISTORY_FOLDER, TRASH_FOLDER,
};
use crate::index::{
    favorites_boundary, load_or_default, write_json, DisplayOrder, Favorites, StoreConfig,
    CONFIG_FILE, FAVORITES_FILE, ORDER_FILE,
};
use crate::migrate::{migrate_tree, MigrationSummary};
use crate::settings::EXTENSION;
use crate::text::render_sequence;
use crate::{SavedPatternSequence, StoreError, StoreResult, StoreSettings};

/// Highest numeric suffix tried by [`PatternStore::ensure_unique_name`].
const UNIQUE_SUFFIX_LIMIT: u32 = 9999;

/// Ordered, favorite-aware store rooted at one directory.
///
/// One store per storage root. All operations block on file I/O and take
/// `&mut self`; callers serialize access.
pub struct PatternStore {
    settings: StoreSettings,
    registry: Arc<PatternRegistry>,
    favorites: Favorites,
    order: DisplayOrder,
    config: StoreConfig,
    /// Migration and index pruning have run for this store.
    migrated: bool,
    reporter: ErrorReporter,
}

impl PatternStore {
    /// Open (creating if needed) the store at `settings.root`.
    #[tracing::instrument(level = "debug", skip_all, fields(root = %settings.root.display()))]
    pub fn open(settings: StoreSettings, registry: Arc<PatternRegistry>) -> StoreResult<Self> {
        let default_dir = settings.root.join(DEFAULT_FOLDER);
        fs::create_dir_all(&default_dir).map_err(|err| StoreError::io(&default_dir, err))?;

        let favorites = load_or_default(&settings.root.join(FAVORITES_FILE))?;
        let order = load_or_default(&settings.root.join(ORDER_FILE))?;
        let config = load_or_default(&settings.root.join(CONFIG_FILE))?;

        Ok(PatternStore {
            settings,
            registry,
            favorites,
            order,
            config,
            migrated: false,
            reporter: ErrorReporter::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.settings.root
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    pub fn registry(&self) -> &Arc<PatternRegistry> {
        &self.registry
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Persisted display order of a folder.
    pub fn display_order(&self, folder: &str) -> &[String] {
        self.order.get(folder)
    }

    /// Folder the user last saved into or moved to.
    pub fn last_folder(&self) -> &str {
        &self.config.last_folder
    }

    /// Problems found while reading sequence files.
    pub fn reports(&self) -> &[Report] {
        self.reporter.reports()
    }

    pub fn take_reports(&mut self) -> Vec<Report> {
        self.reporter.take_reports()
    }

    pub fn is_favorite(&self, folder: &str, name: &str) -> bool {
        self.favorites.contains(folder, name)
    }

    pub fn exists(&self, folder: &str, name: &str) -> bool {
        self.sequence_path(folder, name).is_file()
    }

    pub(crate) fn folder_dir(&self, folder: &str) -> PathBuf {
        self.settings.root.join(folder)
    }

    pub(crate) fn sequence_path(&self, folder: &str, name: &str) -> PathBuf {
        sequence_file(&self.settings.root, folder, name)
    }

    /// Names of the sequence files in a folder, sorted.
    pub(crate) fn names_on_disk(&self, folder: &str) -> StoreResult<Vec<String>> {
        let dir = self.folder_dir(folder);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::io(&dir, err)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|err| StoreError::io(&dir, err))?.path();
            if !path.is_file() || path.extension().map_or(true, |ext| ext != EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    pub(crate) fn persist_favorites(&self) -> StoreResult<()> {
        write_json(&self.settings.root.join(FAVORITES_FILE), &self.favorites)
    }

    pub(crate) fn persist_order(&self) -> StoreResult<()> {
        write_json(&self.settings.root.join(ORDER_FILE), &self.order)
    }

    pub(crate) fn persist_config(&self) -> StoreResult<()> {
        write_json(&self.settings.root.join(CONFIG_FILE), &self.config)
    }

    pub(crate) fn remember_folder(&mut self, folder: &str) -> StoreResult<()> {
        if is_special(folder) || self.config.last_folder == folder {
            return Ok(());
        }
        self.config.last_folder = folder.to_string();
        self.persist_config()
    }

    /// Position just after the last favorite in a folder's order.
    pub(crate) fn favorites_boundary(&self, folder: &str) -> usize {
        favorites_boundary(self.order.get(folder), |name| {
            self.favorites.contains(folder, name)
        })
    }

    /// Favorites in a folder whose files exist.
    pub(crate) fn favorite_count(&self, folder: &str) -> usize {
        self.favorites
            .names_in(folder)
            .filter(|name| self.exists(folder, name))
            .count()
    }

    /// Write a sequence, replacing any file of the same name.
    ///
    /// A sequence that decodes to one clean number is written as a single
    /// `Numerical Reflection:` line; otherwise each pattern gets its own
    /// line (see [`render_sequence`]). The name is appended to the folder's
    /// display order unless the folder is trash or history.
    #[tracing::instrument(level = "debug", skip_all, fields(folder = %folder, name = %name))]
    pub fn save(
        &mut self,
        name: &str,
        patterns: &[Pattern],
        folder: &str,
    ) -> StoreResult<SavedPatternSequence> {
        validate_name(name)?;
        validate_folder(folder)?;

        let dir = self.folder_dir(folder);
        fs::create_dir_all(&dir).map_err(|err| StoreError::io(&dir, err))?;
        let path = self.sequence_path(folder, name);
        let text = render_sequence(&self.registry, patterns);
        fs::write(&path, text).map_err(|err| StoreError::io(&path, err))?;
        tracing::debug!(patterns = patterns.len(), "sequence written");

        if !is_special(folder) {
            if self.order.append(folder, name) {
                self.persist_order()?;
            }
            self.remember_folder(folder)?;
        }

        Ok(SavedPatternSequence {
            name: name.to_string(),
            patterns: patterns.to_vec(),
            folder: folder.to_string(),
            favorite: self.favorites.contains(folder, name),
            last_modified: modified_time(&path, folder),
        })
    }

    /// Read one sequence.
    pub fn load(&mut self, folder: &str, name: &str) -> StoreResult<SavedPatternSequence> {
        validate_sequence(folder, name)?;
        let context = self.reporter.begin_context(format!("load {folder}"));
        let sequence = self.read_sequence(folder, name, context);
        self.reporter.end_context(context);
        sequence
    }

    /// Every sequence in a folder, favorites first, then by name ignoring
    /// case.
    ///
    /// The first call on a store runs migration and prunes index entries
    /// whose files are gone. Names found on disk but missing from the
    /// display order are added to it.
    #[tracing::instrument(level = "debug", skip_all, fields(folder = %folder))]
    pub fn list(&mut self, folder: &str) -> StoreResult<Vec<SavedPatternSequence>> {
        validate_folder(folder)?;
        self.ensure_migrated();

        let names = self.names_on_disk(folder)?;
        let context = self.reporter.begin_context(format!("list {folder}"));
        let mut sequences = Vec::with_capacity(names.len());
        for name in &names {
            match self.read_sequence(folder, name, context) {
                Ok(sequence) => sequences.push(sequence),
                Err(err) => tracing::warn!(%err, "skipping unreadable sequence"),
            }
        }
        self.reporter.end_context(context);

        self.heal_order(folder, &names)?;

        sequences.sort_by(|a, b| {
            b.favorite
                .cmp(&a.favorite)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Ok(sequences)
    }

    /// Every sequence in a folder, in display order.
    pub fn list_ordered(&mut self, folder: &str) -> StoreResult<Vec<SavedPatternSequence>> {
        let mut sequences = self.list(folder)?;
        let position: FxHashMap<&str, usize> = self
            .order
            .get(folder)
            .iter()
            .enumerate()
            .map(|(index, name)| (name.as_str(), index))
            .collect();
        sequences.sort_by_key(|sequence| {
            position
                .get(sequence.name.as_str())
                .copied()
                .unwrap_or(usize::MAX)
        });
        Ok(sequences)
    }

    /// Remove a sequence file and its favorite entry.
    ///
    /// The display order is pruned on the next [`Self::list`].
    #[tracing::instrument(level = "debug", skip_all, fields(folder = %folder, name = %name))]
    pub fn delete(&mut self, folder: &str, name: &str) -> StoreResult<()> {
        validate_sequence(folder, name)?;
        let path = self.sequence_path(folder, name);
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StoreError::not_found(folder, name));
            }
            Err(err) => return Err(StoreError::io(&path, err)),
        }
        if self.favorites.remove(folder, name) {
            self.persist_favorites()?;
        }
        Ok(())
    }

    /// Duplicate a sequence file byte for byte. The copy is not a favorite.
    ///
    /// Returns the name actually used, which differs from `dest` if that
    /// name is taken.
    #[tracing::instrument(level = "debug", skip_all, fields(folder = %folder, source = %source))]
    pub fn copy(&mut self, source: &str, dest: &str, folder: &str) -> StoreResult<String> {
        validate_sequence(folder, source)?;
        validate_name(dest)?;
        let from = self.sequence_path(folder, source);
        if !from.is_file() {
            return Err(StoreError::not_found(folder, source));
        }
        let name = self.ensure_unique_name(dest, folder, None)?;
        let to = self.sequence_path(folder, &name);
        fs::copy(&from, &to).map_err(|err| StoreError::io(&to, err))?;

        if self.favorites.set(folder, &name, false) {
            self.persist_favorites()?;
        }
        if is_special(folder) {
            let boundary = self.favorites_boundary(folder);
            self.order.insert(folder, &name, boundary);
        } else {
            self.order.append(folder, &name);
        }
        self.persist_order()?;
        Ok(name)
    }

    /// A name in `folder` that no existing file uses, ignoring case.
    ///
    /// Tries `base`, then `base_2` up to `base_9999`, then a timestamp
    /// suffix. `excluding` is treated as free (the item being renamed).
    pub fn ensure_unique_name(
        &self,
        base: &str,
        folder: &str,
        excluding: Option<&str>,
    ) -> StoreResult<String> {
        validate_folder(folder)?;
        let excluding = excluding.map(str::to_lowercase);
        let taken: FxHashSet<String> = self
            .names_on_disk(folder)?
            .into_iter()
            .map(|name| name.to_lowercase())
            .filter(|name| excluding.as_ref() != Some(name))
            .collect();
        let is_free = |candidate: &str| !taken.contains(&candidate.to_lowercase());

        if is_free(base) {
            return Ok(base.to_string());
        }
        for suffix in 2..=UNIQUE_SUFFIX_LIMIT {
            let candidate = format!("{base}_{suffix}");
            if is_free(&candidate) {
                return Ok(candidate);
            }
        }
        Ok(format!("{base}_{}", timestamp_millis()))
    }

    /// Mark or unmark a favorite.
    ///
    /// In trash and history the item is moved so favorites stay at the top
    /// of the display order.
    #[tracing::instrument(level = "debug", skip_all, fields(folder = %folder, name = %name))]
    pub fn set_favorite(&mut self, folder: &str, name: &str, favorite: bool) -> StoreResult<()> {
        validate_sequence(folder, name)?;
        if !self.exists(folder, name) {
            return Err(StoreError::not_found(folder, name));
        }
        if !self.favorites.set(folder, name, favorite) {
            return Ok(());
        }
        if is_special(folder) {
            self.order.remove(folder, name);
            let boundary = self.favorites_boundary(folder);
            self.order.insert(folder, name, boundary);
            self.persist_order()?;
        }
        self.persist_favorites()
    }

    /// Move an entry within its folder's display order.
    pub fn reorder(&mut self, folder: &str, name: &str, index: usize) -> StoreResult<()> {
        validate_sequence(folder, name)?;
        if !self.exists(folder, name) {
            return Err(StoreError::not_found(folder, name));
        }
        self.order.remove(folder, name);
        let index = if is_special(folder) {
            let boundary = self.favorites_boundary(folder);
            if self.favorites.contains(folder, name) {
                index.min(boundary)
            } else {
                index.max(boundary)
            }
        } else {
            index
        };
        self.order.insert(folder, name, index);
        self.persist_order()
    }

    /// Store a cast in history under a fresh timestamp name, right after
    /// the favorites, then trim history to the configured limit.
    #[tracing::instrument(level = "debug", skip_all, fields(patterns = patterns.len()))]
    pub fn record_history(&mut self, patterns: &[Pattern]) -> StoreResult<SavedPatternSequence> {
        let base = format!("cast_{}", timestamp_millis());
        let name = self.ensure_unique_name(&base, HISTORY_FOLDER, None)?;
        let sequence = self.save(&name, patterns, HISTORY_FOLDER)?;

        let boundary = self.favorites_boundary(HISTORY_FOLDER);
        self.order.insert(HISTORY_FOLDER, &name, boundary);
        self.trim_history()?;
        self.persist_order()?;
        Ok(sequence)
    }

    /// Drop the oldest non-favorite history entries beyond the limit.
    fn trim_history(&mut self) -> StoreResult<()> {
        let names = self.order.get(HISTORY_FOLDER).to_vec();
        let excess = names.len().saturating_sub(self.settings.history_limit);
        if excess == 0 {
            return Ok(());
        }
        let victims: Vec<String> = names
            .into_iter()
            .rev()
            .filter(|name| !self.favorites.contains(HISTORY_FOLDER, name))
            .take(excess)
            .collect();
        for name in victims {
            let path = self.sequence_path(HISTORY_FOLDER, &name);
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => return Err(StoreError::io(&path, err)),
            }
            self.order.remove(HISTORY_FOLDER, &name);
            tracing::debug!(name = %name, "trimmed history entry");
        }
        Ok(())
    }

    /// Move a sequence into the trash.
    pub fn trash(&mut self, folder: &str, name: &str) -> StoreResult<String> {
        self.move_to(folder, name, TRASH_FOLDER, None)
    }

    /// Permanently delete every non-favorite sequence in the trash.
    ///
    /// Returns the number of files removed.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn empty_trash(&mut self) -> StoreResult<usize> {
        let mut removed = 0;
        for name in self.names_on_disk(TRASH_FOLDER)? {
            if self.favorites.contains(TRASH_FOLDER, &name) {
                continue;
            }
            let path = self.sequence_path(TRASH_FOLDER, &name);
            fs::remove_file(&path).map_err(|err| StoreError::io(&path, err))?;
            self.order.remove(TRASH_FOLDER, &name);
            removed += 1;
        }
        self.persist_order()?;
        Ok(removed)
    }

    /// Rewrite legacy raw lines across the whole tree.
    ///
    /// [`Self::list`] runs this once per store; calling it again is safe.
    pub fn migrate(&mut self) -> MigrationSummary {
        self.migrated = true;
        migrate_tree(&self.settings.root, &self.registry)
    }

    fn ensure_migrated(&mut self) {
        if self.migrated {
            return;
        }
        let summary = self.migrate();
        tracing::debug!(?summary, "one-time migration finished");
        if let Err(err) = self.prune_indexes() {
            tracing::warn!(%err, "failed to prune stale index entries");
        }
    }

    /// Drop order and favorite entries whose files no longer exist.
    fn prune_indexes(&mut self) -> StoreResult<()> {
        let root = self.settings.root.clone();
        let exists = |folder: &str, name: &str| sequence_file(&root, folder, name).is_file();

        let stale_order = self.order.retain(exists);
        let stale_favorites = self.favorites.retain(exists);
        if stale_order > 0 {
            tracing::debug!(stale_order, "pruned display order");
            self.persist_order()?;
        }
        if stale_favorites > 0 {
            tracing::debug!(stale_favorites, "pruned favorites");
            self.persist_favorites()?;
        }
        Ok(())
    }

    /// Add names found on disk to the display order.
    fn heal_order(&mut self, folder: &str, names: &[String]) -> StoreResult<()> {
        let mut healed = false;
        for name in names {
            if self.order.contains(folder, name) {
                continue;
            }
            if is_special(folder) && self.favorites.contains(folder, name) {
                let boundary = self.favorites_boundary(folder);
                self.order.insert(folder, name, boundary);
            } else {
                self.order.append(folder, name);
            }
            healed = true;
        }
        if healed {
            tracing::debug!(folder = %folder, "display order repaired");
            self.persist_order()?;
        }
        Ok(())
    }

    /// Parse a sequence file, reporting and skipping bad lines.
    fn read_sequence(
        &mut self,
        folder: &str,
        name: &str,
        context: ContextId,
    ) -> StoreResult<SavedPatternSequence> {
        let path = self.sequence_path(folder, name);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StoreError::not_found(folder, name));
            }
            Err(err) => return Err(StoreError::io(&path, err)),
        };

        let file = favorite_key(folder, name);
        let mut patterns = Vec::new();
        for (number, line) in text.lines().enumerate() {
            match self.registry.parse_line(line) {
                Ok(parsed) => patterns.extend(parsed),
                Err(err) => {
                    tracing::debug!(file = %file, line = number + 1, %err, "skipping line");
                    self.reporter.report(context, &file, err.report_kind());
                }
            }
        }

        Ok(SavedPatternSequence {
            name: name.to_string(),
            patterns,
            folder: folder.to_string(),
            favorite: self.favorites.contains(folder, name),
            last_modified: modified_time(&path, folder),
        })
    }
}

impl std::fmt::Debug for PatternStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternStore")
            .field("root", &self.settings.root)
            .field("favorites", &self.favorites.len())
            .field("migrated", &self.migrated)
            .finish_non_exhaustive()
    }
}

fn sequence_file(root: &Path, folder: &str, name: &str) -> PathBuf {
    root.join(folder).join(format!("{name}.{EXTENSION}"))
}

fn modified_time(path: &Path, folder: &str) -> Option<SystemTime> {
    if !is_special(folder) {
        return None;
    }
    fs::metadata(path).and_then(|meta| meta.modified()).ok()
}

fn timestamp_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis())
}

#[cfg(test)]
mod tests;
