//! Arithmetic operators ("distillations") and their pattern lookup.

use rustc_hash::FxHashMap;

use hex_ir::Pattern;

/// A binary arithmetic operator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Resource path of the host action.
    const fn path(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "sub",
            Operator::Multiply => "mul_dot",
            Operator::Divide => "div_dot",
        }
    }

    /// Resource path of the distillation-named variant.
    const fn distillation_path(self) -> &'static str {
        match self {
            Operator::Add => "additive_distillation",
            Operator::Subtract => "subtractive_distillation",
            Operator::Multiply => "multiplicative_distillation",
            Operator::Divide => "division_distillation",
        }
    }

    /// Name used when the host does not supply one.
    pub const fn default_name(self) -> &'static str {
        match self {
            Operator::Add => "Additive Distillation",
            Operator::Subtract => "Subtractive Distillation",
            Operator::Multiply => "Multiplicative Distillation",
            Operator::Divide => "Division Distillation",
        }
    }

    /// Identify an operator from a resource identifier (`namespace:path`).
    ///
    /// The namespace is ignored; the path must equal the exact operator path
    /// or its distillation variant.
    pub fn from_resource_path(id: &str) -> Option<Self> {
        let path = id.rsplit_once(':').map_or(id, |(_, path)| path);
        Self::ALL
            .into_iter()
            .find(|op| op.path() == path || op.distillation_path() == path)
    }

    /// `a op b`. Division by zero yields `None`.
    pub fn apply(self, a: f64, b: f64) -> Option<f64> {
        match self {
            Operator::Add => Some(a + b),
            Operator::Subtract => Some(a - b),
            Operator::Multiply => Some(a * b),
            Operator::Divide => (b != 0.0).then(|| a / b),
        }
    }
}

#[derive(Clone, Debug)]
struct OperatorEntry {
    pattern: Pattern,
    name: String,
}

/// Operator lookup built from the host's action table.
///
/// Matching is by signature only; the start direction is ignored.
#[derive(Clone, Debug, Default)]
pub struct OperatorTable {
    by_signature: FxHashMap<String, Operator>,
    entries: FxHashMap<Operator, OperatorEntry>,
}

impl OperatorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an operator pattern. The first registration of each
    /// operator and each signature wins.
    pub fn insert(&mut self, op: Operator, pattern: Pattern, name: impl Into<String>) {
        self.by_signature.entry(pattern.signature()).or_insert(op);
        self.entries.entry(op).or_insert_with(|| OperatorEntry {
            pattern,
            name: name.into(),
        });
    }

    /// The operator drawn by `pattern`, if any.
    pub fn operator_of(&self, pattern: &Pattern) -> Option<Operator> {
        self.by_signature.get(&pattern.signature()).copied()
    }

    /// Canonical pattern for an operator.
    pub fn pattern_for(&self, op: Operator) -> Option<&Pattern> {
        self.entries.get(&op).map(|entry| &entry.pattern)
    }

    /// Display name for an operator.
    pub fn name_for(&self, op: Operator) -> &str {
        self.entries
            .get(&op)
            .map_or(op.default_name(), |entry| entry.name.as_str())
    }

    /// Operator whose display name matches `name`, ignoring ASCII case.
    pub fn operator_named(&self, name: &str) -> Option<Operator> {
        let name = name.trim();
        Operator::ALL
            .into_iter()
            .find(|&op| self.name_for(op).eq_ignore_ascii_case(name))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
