//! Folder commands.

use std::io::Write;

use hex_store::PatternStore;

use crate::CliError;

pub fn list_folders(store: &mut PatternStore, out: &mut dyn Write) -> Result<(), CliError> {
    let last = store.last_folder().to_string();
    for folder in store.list_folders()? {
        let marker = if folder == last { '>' } else { ' ' };
        writeln!(out, "{marker} {folder}")?;
    }
    Ok(())
}

pub fn create_folder(
    store: &mut PatternStore,
    folder: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    store.create_folder(folder)?;
    writeln!(out, "created folder {folder}")?;
    Ok(())
}

pub fn rename_folder(
    store: &mut PatternStore,
    old: &str,
    new: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    store.rename_folder(old, new)?;
    writeln!(out, "renamed folder {old} to {new}")?;
    Ok(())
}

/// Trash a folder's sequences and remove the folder.
pub fn delete_folder(
    store: &mut PatternStore,
    folder: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    store.delete_folder(folder)?;
    writeln!(out, "moved the contents of {folder} to the trash and removed it")?;
    Ok(())
}
