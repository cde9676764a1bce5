//! Host data loaded from JSON exports.
//!
//! The action table is a JSON array of actions:
//!
//! ```text
//! [
//!   { "id": "hexcasting:get_caster", "pattern": "qaq,NORTH_EAST", "name": "Mind's Reflection" },
//!   { "id": "hexcasting:flight", "pattern": "eawwaeawawaa,NORTH_WEST", "per_world": true }
//! ]
//! ```
//!
//! Solved per-world patterns are a JSON object mapping a resource id to
//! `"signature[,DIRECTION]"`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use hex_ir::{ParsePatternError, Pattern};
use hex_registry::{ActionEntry, ActionTable, ResourceId, SolvedPatternMap};

/// Failure to load a host export.
#[derive(Debug, thiserror::Error)]
pub enum HostFileError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed host file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("action `{id}` has an invalid pattern: {source}")]
    InvalidPattern {
        id: String,
        source: ParsePatternError,
    },
}

#[derive(Deserialize)]
struct RawAction {
    id: String,
    pattern: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    per_world: bool,
}

/// Action table read from a JSON export.
#[derive(Clone, Debug, Default)]
pub struct JsonActionTable {
    entries: Vec<ActionEntry>,
}

impl JsonActionTable {
    pub fn load(path: &Path) -> Result<Self, HostFileError> {
        let text = read(path)?;
        Self::from_json(&text).map_err(|err| match err {
            HostFileError::Json { source, .. } => HostFileError::Json {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse an export held in memory. `Json` errors carry an empty path.
    pub fn from_json(text: &str) -> Result<Self, HostFileError> {
        let raw: Vec<RawAction> =
            serde_json::from_str(text).map_err(|source| HostFileError::Json {
                path: PathBuf::new(),
                source,
            })?;
        let entries = raw
            .into_iter()
            .map(|action| {
                let pattern = action.pattern.parse::<Pattern>().map_err(|source| {
                    HostFileError::InvalidPattern {
                        id: action.id.clone(),
                        source,
                    }
                })?;
                Ok(ActionEntry {
                    id: ResourceId::new(action.id),
                    pattern,
                    localized_name: action.name,
                    per_world: action.per_world,
                })
            })
            .collect::<Result<Vec<_>, HostFileError>>()?;
        tracing::debug!(actions = entries.len(), "action table loaded");
        Ok(JsonActionTable { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ActionTable for JsonActionTable {
    fn entries(&self) -> Vec<ActionEntry> {
        self.entries.clone()
    }
}

/// Read a solved-pattern export.
pub fn load_solved(path: &Path) -> Result<SolvedPatternMap, HostFileError> {
    let text = read(path)?;
    let raw: BTreeMap<String, String> =
        serde_json::from_str(&text).map_err(|source| HostFileError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(raw
        .into_iter()
        .map(|(id, signature)| (ResourceId::new(id), signature))
        .collect())
}

fn read(path: &Path) -> Result<String, HostFileError> {
    fs::read_to_string(path).map_err(|source| HostFileError::Io {
        path: path.to_path_buf(),
        source,
    })
}
