//! Hexbook pattern store.
//!
//! Named pattern sequences live as `<root>/<folder>/<name>.hexpattern`
//! text files. Next to them the store keeps three whole-file JSON indexes:
//! favorites, per-folder display order, and a small config.
//!
//! # Operation order
//!
//! Multi-step operations mutate the filesystem first, then the in-memory
//! indexes, then persist the indexes. An interruption leaves at worst a
//! stale or missing order entry, which the next [`PatternStore::list`]
//! repairs.

mod error;
mod folder;
mod index;
mod migrate;
mod sequence;
mod settings;
mod store;
mod text;

pub use error::{StoreError, StoreResult};
pub use folder::{
    favorite_key, is_reserved, is_special, validate_name, DEFAULT_FOLDER, HISTORY_FOLDER,
    RESERVED_PREFIX, TRASH_FOLDER,
};
pub use index::{
    DisplayOrder, Favorites, StoreConfig, CONFIG_FILE, FAVORITES_FILE, ORDER_FILE,
};
pub use migrate::{migrate_file, migrate_line, migrate_tree, MigrationSummary};
pub use sequence::SavedPatternSequence;
pub use settings::{StoreSettings, EXTENSION};
pub use store::PatternStore;
pub use text::{is_consolidatable, render_sequence, simplify_lines, MAX_CONSOLIDATED_DIGITS};

#[cfg(test)]
mod fixture;
