//! Interfaces supplied by the host game.

use std::fmt;

use rustc_hash::FxHashMap;

use hex_ir::{Direction, Pattern};

/// Opaque `namespace:path` identifier of a host action.
#[derive(Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        ResourceId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part after the namespace separator (the whole id if there is none).
    pub fn path(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_str(), |(_, path)| path)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One known action as exposed by the host.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ActionEntry {
    pub id: ResourceId,
    /// Canonical pattern (a placeholder for per-world patterns).
    pub pattern: Pattern,
    /// Host-localized display name, if the host has one.
    pub localized_name: Option<String>,
    /// Concrete form is solved per world rather than fixed.
    pub per_world: bool,
}

/// Read-only table of the host's known actions.
pub trait ActionTable {
    fn entries(&self) -> Vec<ActionEntry>;
}

impl ActionTable for Vec<ActionEntry> {
    fn entries(&self) -> Vec<ActionEntry> {
        self.clone()
    }
}

/// A solved per-world pattern: signature plus optional start direction.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SolvedSignature {
    pub signature: String,
    pub start_dir: Option<Direction>,
}

impl SolvedSignature {
    /// Parse `"signature[,DIRECTION]"`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (signature, start_dir) = match text.split_once(',') {
            Some((signature, dir)) => (signature.trim(), Some(Direction::from_name(dir)?)),
            None => (text, None),
        };
        if !hex_ir::signature::is_signature(signature) {
            return None;
        }
        Some(SolvedSignature {
            signature: signature.to_string(),
            start_dir,
        })
    }

    /// Exact match: same signature and, when known, same start direction.
    pub fn matches(&self, pattern: &Pattern) -> bool {
        self.signature == pattern.signature()
            && self.start_dir.map_or(true, |dir| dir == pattern.start_dir())
    }

    /// Build the pattern, drawing from `EAST` when no direction is known.
    pub fn to_pattern(&self) -> Option<Pattern> {
        Pattern::from_signature(self.start_dir.unwrap_or(Direction::East), &self.signature)
    }
}

/// Supplies the concrete form of per-world patterns.
pub trait SolvedPatternOracle: Send + Sync {
    /// `"signature[,DIRECTION]"` for a solved pattern, `None` if unsolved.
    fn solved_signature(&self, id: &ResourceId) -> Option<String>;

    /// Turn a solved signature into a pattern.
    fn signature_to_pattern(&self, signature: &str) -> Option<Pattern> {
        SolvedSignature::parse(signature)?.to_pattern()
    }
}

/// Oracle for a world where nothing has been solved.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoSolvedPatterns;

impl SolvedPatternOracle for NoSolvedPatterns {
    fn solved_signature(&self, _id: &ResourceId) -> Option<String> {
        None
    }
}

/// Oracle backed by an in-memory map of resource id to solved signature.
#[derive(Clone, Debug, Default)]
pub struct SolvedPatternMap {
    solved: FxHashMap<ResourceId, String>,
}

impl SolvedPatternMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ResourceId, signature: impl Into<String>) {
        self.solved.insert(id, signature.into());
    }
}

impl FromIterator<(ResourceId, String)> for SolvedPatternMap {
    fn from_iter<I: IntoIterator<Item = (ResourceId, String)>>(iter: I) -> Self {
        SolvedPatternMap {
            solved: iter.into_iter().collect(),
        }
    }
}

impl SolvedPatternOracle for SolvedPatternMap {
    fn solved_signature(&self, id: &ResourceId) -> Option<String> {
        self.solved.get(id).cloned()
    }
}
