//! Pattern registry: lookup tables built from the host's action table.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use hex_codec::gambit::{self, GAMBIT_LINE_PREFIX};
use hex_codec::number::{self, NumberEncoder, NumberPatternGenerator, Operator, OperatorTable};
use hex_ir::{Direction, Pattern};

use crate::info::title_case_fallback;
use crate::special::SPECIALS;
use crate::{ActionTable, PatternInfo, ResourceId, SolvedPatternOracle, SolvedSignature};

/// Lookup tables. Empty until the registry is initialized.
#[derive(Default)]
pub(crate) struct Tables {
    pub(crate) initialized: bool,
    pub(crate) entries: Vec<PatternInfo>,
    /// Exact `(signature, start direction)` lookup.
    pub(crate) by_key: FxHashMap<(String, Direction), usize>,
    /// Rotation-independent lookup; first registration wins.
    pub(crate) by_signature: FxHashMap<String, usize>,
    /// Lower-cased display name lookup.
    pub(crate) by_name: FxHashMap<String, usize>,
    /// Indices of per-world entries.
    pub(crate) per_world: Vec<usize>,
    pub(crate) operators: OperatorTable,
}

impl Tables {
    fn build(actions: &dyn ActionTable) -> Self {
        let mut tables = Tables {
            initialized: true,
            ..Tables::default()
        };

        for special in &SPECIALS {
            if let Some(pattern) = Pattern::from_signature(special.start_dir, special.signature) {
                tables.register(PatternInfo {
                    name: special.name.to_string(),
                    pattern,
                    per_world: false,
                    id: ResourceId::new(special.id),
                });
            }
        }

        for entry in actions.entries() {
            let name = entry
                .localized_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| title_case_fallback(&entry.id));
            if let Some(op) = Operator::from_resource_path(entry.id.as_str()) {
                tables.operators.insert(op, entry.pattern.clone(), name.clone());
            }
            tables.register(PatternInfo {
                name,
                pattern: entry.pattern,
                per_world: entry.per_world,
                id: entry.id,
            });
        }

        tracing::debug!(
            entries = tables.entries.len(),
            per_world = tables.per_world.len(),
            "pattern registry initialized"
        );
        tables
    }

    fn register(&mut self, info: PatternInfo) {
        let signature = info.signature();
        let key = (signature.clone(), info.start_dir());
        if self.by_key.contains_key(&key) {
            tracing::debug!(id = %info.id, "duplicate pattern key ignored");
            return;
        }
        let index = self.entries.len();
        self.by_key.insert(key, index);
        self.by_signature.entry(signature).or_insert(index);
        self.by_name
            .entry(info.name.to_lowercase())
            .or_insert(index);
        if info.per_world {
            self.per_world.push(index);
        }
        self.entries.push(info);
    }
}

/// Registry of known patterns.
///
/// Cheap to share behind an `Arc`: lookups take a read lock, and
/// initialization happens at most once unless explicitly rebuilt.
pub struct PatternRegistry {
    pub(crate) tables: RwLock<Tables>,
    pub(crate) oracle: Arc<dyn SolvedPatternOracle>,
    pub(crate) encoder: Box<dyn NumberEncoder>,
}

impl PatternRegistry {
    /// Create an uninitialized registry.
    pub fn new(oracle: Arc<dyn SolvedPatternOracle>) -> Self {
        PatternRegistry {
            tables: RwLock::new(Tables::default()),
            oracle,
            encoder: Box::new(NumberPatternGenerator),
        }
    }

    /// Replace the number encoder used by [`Self::parse_line`].
    #[must_use]
    pub fn with_encoder(mut self, encoder: Box<dyn NumberEncoder>) -> Self {
        self.encoder = encoder;
        self
    }

    /// Build the lookup tables from the host's action table.
    ///
    /// Returns `false` (and does nothing) if already initialized.
    pub fn initialize(&self, actions: &dyn ActionTable) -> bool {
        let mut tables = self.tables.write();
        if tables.initialized {
            return false;
        }
        *tables = Tables::build(actions);
        true
    }

    /// Rebuild the lookup tables unconditionally.
    pub fn reinitialize(&self, actions: &dyn ActionTable) {
        *self.tables.write() = Tables::build(actions);
    }

    pub fn is_initialized(&self) -> bool {
        self.tables.read().initialized
    }

    /// All registered entries, in registration order.
    pub fn entries(&self) -> Vec<PatternInfo> {
        self.tables.read().entries.clone()
    }

    /// Entry with the given display name, ignoring case.
    pub fn info_named(&self, name: &str) -> Option<PatternInfo> {
        let tables = self.tables.read();
        let index = *tables.by_name.get(&name.trim().to_lowercase())?;
        tables.entries.get(index).cloned()
    }

    /// Solved form of a per-world entry.
    pub fn solved(&self, info: &PatternInfo) -> Option<SolvedSignature> {
        SolvedSignature::parse(&self.oracle.solved_signature(&info.id)?)
    }

    /// The pattern an entry denotes in this world.
    ///
    /// Per-world entries use the oracle's solution; `None` if unsolved.
    pub fn pattern_of(&self, info: &PatternInfo) -> Option<Pattern> {
        if info.per_world {
            let solved = self.oracle.solved_signature(&info.id)?;
            return self.oracle.signature_to_pattern(&solved);
        }
        Some(info.pattern.clone())
    }

    /// Decode a whole sequence as one number (see [`number::decode_sequence`]).
    pub fn decode_number(&self, patterns: &[Pattern]) -> Option<f64> {
        number::decode_sequence(patterns, &self.tables.read().operators)
    }

    /// Operator whose display name is `name`.
    pub fn operator_named(&self, name: &str) -> Option<Operator> {
        self.tables.read().operators.operator_named(name)
    }

    /// Canonical text line for a pattern.
    ///
    /// Tries, in order: numeral, Bookkeeper's Gambit, solved per-world
    /// pattern, registered entry. Returns `None` for unknown patterns and
    /// for per-world patterns that have not been solved.
    pub fn resolve(&self, pattern: &Pattern) -> Option<String> {
        if let Some(value) = number::decode_pattern(pattern) {
            return Some(number::number_line(value));
        }
        if let Some(visual) = gambit::decode_visual(pattern) {
            return Some(format!("{GAMBIT_LINE_PREFIX} {visual}"));
        }

        let tables = self.tables.read();
        for &index in &tables.per_world {
            let info = &tables.entries[index];
            if self.solved(info).is_some_and(|solved| solved.matches(pattern)) {
                return Some(info.name.clone());
            }
        }

        let signature = pattern.signature();
        let index = tables
            .by_key
            .get(&(signature.clone(), pattern.start_dir()))
            .or_else(|| tables.by_signature.get(&signature))?;
        let info = &tables.entries[*index];
        if info.per_world && self.solved(info).is_none() {
            tracing::debug!(id = %info.id, "per-world pattern is unsolved");
            return None;
        }
        Some(info.name.clone())
    }
}

impl std::fmt::Debug for PatternRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tables = self.tables.read();
        f.debug_struct("PatternRegistry")
            .field("initialized", &tables.initialized)
            .field("entries", &tables.entries.len())
            .finish_non_exhaustive()
    }
}
