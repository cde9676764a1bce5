//! Registry used by unit tests.

use std::sync::Arc;

use hex_ir::{Direction, Pattern};
use hex_registry::{ActionEntry, PatternRegistry, ResourceId, SolvedPatternMap};

fn entry(id: &str, name: &str, sig: &str, dir: Direction, per_world: bool) -> ActionEntry {
    ActionEntry {
        id: ResourceId::new(id),
        pattern: Pattern::from_signature(dir, sig).unwrap(),
        localized_name: Some(name.to_string()),
        per_world,
    }
}

pub(crate) fn registry() -> Arc<PatternRegistry> {
    let actions = vec![
        entry("hexcasting:get_caster", "Mind's Reflection", "qaq", Direction::NorthEast, false),
        entry("hexcasting:add", "Additive Distillation", "waaw", Direction::NorthEast, false),
        entry("hexcasting:sub", "Subtractive Distillation", "wddw", Direction::NorthWest, false),
        entry("hexcasting:mul_dot", "Multiplicative Distillation", "waqaw", Direction::SouthEast, false),
        entry("hexcasting:div_dot", "Division Distillation", "wdedw", Direction::NorthEast, false),
        entry("hexcasting:flight", "Flight", "eawwaeawawaa", Direction::NorthWest, true),
    ];
    let mut solved = SolvedPatternMap::new();
    solved.insert(ResourceId::new("hexcasting:flight"), "qwwqqwwqqwwq,EAST");
    let registry = PatternRegistry::new(Arc::new(solved));
    registry.initialize(&actions);
    Arc::new(registry)
}

pub(crate) fn pat(text: &str) -> Pattern {
    text.parse().unwrap()
}

pub(crate) fn num(value: f64) -> Pattern {
    hex_codec::NumberPatternGenerator::encode_single(value).unwrap()
}
