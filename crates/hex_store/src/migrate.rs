//! One-time rewrite of the legacy on-disk format.
//!
//! Older files store every pattern as a raw `<signature>,<DIRECTION>` line.
//! Migration replaces each such line with its resolved text where the
//! registry knows the pattern. Files without a changed line are left
//! untouched, so running it twice is a no-op.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use hex_ir::Pattern;
use hex_registry::PatternRegistry;

use crate::settings::EXTENSION;
use crate::{StoreError, StoreResult};

/// Per-file outcome counts of one migration run.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct MigrationSummary {
    pub rewritten: usize,
    pub unchanged: usize,
    pub failed: usize,
}

/// Migrate every sequence file under `root`, in parallel.
///
/// A failing file is logged and counted; it never stops the rest.
#[tracing::instrument(level = "debug", skip_all, fields(root = %root.display()))]
pub fn migrate_tree(root: &Path, registry: &PatternRegistry) -> MigrationSummary {
    let mut files = Vec::new();
    visit_pattern_files(root, &mut files);

    let rewritten = AtomicUsize::new(0);
    let unchanged = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    files
        .par_iter()
        .for_each(|path| match migrate_file(path, registry) {
            Ok(true) => {
                tracing::debug!(path = %path.display(), "migrated");
                rewritten.fetch_add(1, Ordering::Relaxed);
            }
            Ok(false) => {
                unchanged.fetch_add(1, Ordering::Relaxed);
            }
            Err(err) => {
                tracing::warn!(%err, "migration failed");
                failed.fetch_add(1, Ordering::Relaxed);
            }
        });

    MigrationSummary {
        rewritten: rewritten.load(Ordering::Relaxed),
        unchanged: unchanged.load(Ordering::Relaxed),
        failed: failed.load(Ordering::Relaxed),
    }
}

fn visit_pattern_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(%err, path = %dir.display(), "cannot read directory");
            return;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            visit_pattern_files(&path, files);
        } else if path.extension().is_some_and(|ext| ext == EXTENSION) {
            files.push(path);
        }
    }
}

/// Migrate one file. Returns `true` if it was rewritten.
pub fn migrate_file(path: &Path, registry: &PatternRegistry) -> StoreResult<bool> {
    let text = fs::read_to_string(path).map_err(|err| StoreError::io(path, err))?;

    let mut changed = false;
    let lines: Vec<String> = text
        .lines()
        .map(|line| match migrate_line(line, registry) {
            Some(migrated) => {
                changed = true;
                migrated
            }
            None => line.to_string(),
        })
        .collect();
    if !changed {
        return Ok(false);
    }

    let mut migrated = lines.join("\n");
    if text.ends_with('\n') {
        migrated.push('\n');
    }
    fs::write(path, migrated).map_err(|err| StoreError::io(path, err))?;
    Ok(true)
}

/// New text for a legacy raw line, keeping any trailing comment.
///
/// `None` if the line is not a raw pattern or the pattern is unknown.
pub fn migrate_line(line: &str, registry: &PatternRegistry) -> Option<String> {
    let (code, comment) = match line.split_once("//") {
        Some((code, comment)) => (code, Some(comment)),
        None => (line, None),
    };
    let pattern: Pattern = code.trim().parse().ok()?;
    let resolved = registry.resolve(&pattern)?;
    Some(match comment {
        Some(comment) => format!("{resolved} //{comment}"),
        None => resolved,
    })
}
