use hex_ir::{Direction, Pattern};

use crate::ResourceId;

/// A registry entry.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PatternInfo {
    /// Display name (host-localized or derived from the resource path).
    pub name: String,
    /// Canonical pattern as registered.
    pub pattern: Pattern,
    /// The concrete form is solved per world.
    pub per_world: bool,
    /// Identifier used to query the solved-pattern oracle.
    pub id: ResourceId,
}

impl PatternInfo {
    pub fn signature(&self) -> String {
        self.pattern.signature()
    }

    pub fn start_dir(&self) -> Direction {
        self.pattern.start_dir()
    }
}

/// Display name derived from a resource path: `"hexcasting:get_caster"`
/// becomes `"Get Caster"`.
pub fn title_case_fallback(id: &ResourceId) -> String {
    let path = id.path();
    let last = path.rsplit('/').next().unwrap_or(path);
    last.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
