//! Commands on individual sequences.

use std::fs;
use std::io::Write;
use std::path::Path;

use hex_ir::Pattern;
use hex_store::{render_sequence, PatternStore, TRASH_FOLDER};

use crate::CliError;

/// Parse a text file into patterns, line by line. The first bad line
/// fails the whole file.
pub fn read_patterns(store: &PatternStore, path: &Path) -> Result<Vec<Pattern>, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let registry = store.registry();
    let mut patterns = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let parsed = registry.parse_line(line).map_err(|source| CliError::Line {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
        patterns.extend(parsed);
    }
    Ok(patterns)
}

/// Print a folder in display order, favorites marked with `*`.
pub fn list_sequences(
    store: &mut PatternStore,
    folder: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    for sequence in store.list_ordered(folder)? {
        let marker = if sequence.favorite { '*' } else { ' ' };
        writeln!(out, "{marker} {}", sequence.name)?;
    }
    Ok(())
}

pub fn show_sequence(
    store: &mut PatternStore,
    folder: &str,
    name: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let sequence = store.load(folder, name)?;
    let text = render_sequence(store.registry(), &sequence.patterns);
    out.write_all(text.as_bytes())?;
    Ok(())
}

pub fn save_sequence(
    store: &mut PatternStore,
    folder: &str,
    name: &str,
    file: &Path,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let patterns = read_patterns(store, file)?;
    let saved = store.save(name, &patterns, folder)?;
    writeln!(
        out,
        "saved {}/{} ({} patterns)",
        saved.folder,
        saved.name,
        saved.patterns.len()
    )?;
    Ok(())
}

/// Store the patterns of `file` as a new history entry.
pub fn record_cast(
    store: &mut PatternStore,
    file: &Path,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let patterns = read_patterns(store, file)?;
    let recorded = store.record_history(&patterns)?;
    writeln!(out, "recorded {}", recorded.name)?;
    Ok(())
}

pub fn rename_sequence(
    store: &mut PatternStore,
    folder: &str,
    name: &str,
    new_name: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let used = store.rename(folder, name, new_name)?;
    writeln!(out, "renamed {folder}/{name} to {used}")?;
    Ok(())
}

pub fn move_sequence(
    store: &mut PatternStore,
    folder: &str,
    name: &str,
    target: &str,
    index: Option<usize>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let used = store.move_to(folder, name, target, index)?;
    writeln!(out, "moved {folder}/{name} to {target}/{used}")?;
    Ok(())
}

pub fn copy_sequence(
    store: &mut PatternStore,
    folder: &str,
    name: &str,
    dest: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let used = store.copy(name, dest, folder)?;
    writeln!(out, "copied {folder}/{name} to {folder}/{used}")?;
    Ok(())
}

/// Delete permanently, bypassing the trash.
pub fn delete_sequence(
    store: &mut PatternStore,
    folder: &str,
    name: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    store.delete(folder, name)?;
    writeln!(out, "deleted {folder}/{name}")?;
    Ok(())
}

pub fn trash_sequence(
    store: &mut PatternStore,
    folder: &str,
    name: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let used = store.trash(folder, name)?;
    writeln!(out, "moved {folder}/{name} to the trash as {used}")?;
    Ok(())
}

/// Move a sequence out of the trash.
pub fn restore_sequence(
    store: &mut PatternStore,
    name: &str,
    target: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let used = store.restore(TRASH_FOLDER, name, target, None)?;
    writeln!(out, "restored {name} to {target}/{used}")?;
    Ok(())
}

pub fn empty_trash(store: &mut PatternStore, out: &mut dyn Write) -> Result<(), CliError> {
    let removed = store.empty_trash()?;
    writeln!(out, "removed {removed} sequences from the trash")?;
    Ok(())
}

pub fn set_favorite(
    store: &mut PatternStore,
    folder: &str,
    name: &str,
    favorite: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    store.set_favorite(folder, name, favorite)?;
    let state = if favorite { "marked" } else { "unmarked" };
    writeln!(out, "{state} {folder}/{name} as favorite")?;
    Ok(())
}

pub fn run_migration(store: &mut PatternStore, out: &mut dyn Write) -> Result<(), CliError> {
    let summary = store.migrate();
    writeln!(
        out,
        "migrated {} files ({} unchanged, {} failed)",
        summary.rewritten, summary.unchanged, summary.failed
    )?;
    Ok(())
}

/// Print the text form of a raw `<signature>,<DIRECTION>` pattern.
pub fn resolve_pattern(
    store: &PatternStore,
    text: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let pattern = text.parse::<Pattern>().map_err(|source| CliError::Pattern {
        text: text.to_string(),
        source,
    })?;
    let line = store
        .registry()
        .resolve(&pattern)
        .unwrap_or_else(|| pattern.to_string());
    writeln!(out, "{line}")?;
    Ok(())
}
