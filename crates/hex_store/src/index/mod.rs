//! Persisted indexes kept at the storage root.
//!
//! All three files are pretty-printed JSON, overwritten whole on every
//! change. A missing file reads as the empty index.

mod config;
mod favorites;
mod order;

pub use config::StoreConfig;
pub use favorites::Favorites;
pub use order::DisplayOrder;
pub(crate) use order::favorites_boundary;

use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{StoreError, StoreResult};

pub const FAVORITES_FILE: &str = "favorites.json";
pub const ORDER_FILE: &str = "order.json";
pub const CONFIG_FILE: &str = "config.json";

pub(crate) fn read_json<T: DeserializeOwned + Default>(path: &Path) -> StoreResult<T> {
    match std::fs::read_to_string(path) {
        Ok(text) => serde_json::from_str(&text).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        }),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(T::default()),
        Err(err) => Err(StoreError::io(path, err)),
    }
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> StoreResult<()> {
    let mut text = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    text.push('\n');
    std::fs::write(path, text).map_err(|err| StoreError::io(path, err))
}

/// Read an index, starting empty if the file is malformed.
pub(crate) fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> StoreResult<T> {
    match read_json(path) {
        Err(StoreError::Json { path, source }) => {
            tracing::warn!(path = %path.display(), %source, "ignoring malformed index file");
            Ok(T::default())
        }
        other => other,
    }
}
