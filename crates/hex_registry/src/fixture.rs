//! Shared action table for unit tests.

use std::sync::Arc;

use hex_ir::{Direction, Pattern};

use crate::{ActionEntry, PatternRegistry, ResourceId, SolvedPatternMap};

pub(crate) const FLIGHT_SOLVED: &str = "qwwqqwwqqwwq,EAST";

fn entry(id: &str, name: Option<&str>, sig: &str, dir: Direction, per_world: bool) -> ActionEntry {
    ActionEntry {
        id: ResourceId::new(id),
        pattern: Pattern::from_signature(dir, sig).unwrap(),
        localized_name: name.map(str::to_string),
        per_world,
    }
}

pub(crate) fn actions() -> Vec<ActionEntry> {
    vec![
        entry("hexcasting:get_caster", Some("Mind's Reflection"), "qaq", Direction::NorthEast, false),
        entry("hexcasting:entity_pos/eye", Some("Compass' Purification"), "aa", Direction::East, false),
        entry("hexcasting:add", Some("Additive Distillation"), "waaw", Direction::NorthEast, false),
        entry("hexcasting:sub", Some("Subtractive Distillation"), "wddw", Direction::NorthWest, false),
        entry("hexcasting:mul_dot", Some("Multiplicative Distillation"), "waqaw", Direction::SouthEast, false),
        entry("hexcasting:div_dot", Some("Division Distillation"), "wdedw", Direction::NorthEast, false),
        entry("hexcasting:flight", Some("Flight"), "eawwaeawawaa", Direction::NorthWest, true),
        entry(
            "hexcasting:teleport/great",
            Some("Greater Teleport"),
            "wwwqqqwwwqqeqqwwwqqwqqdqqqqqdqq",
            Direction::East,
            true,
        ),
        entry("hexcasting:get_entity_height", None, "awq", Direction::NorthEast, false),
    ]
}

pub(crate) fn solved() -> SolvedPatternMap {
    let mut solved = SolvedPatternMap::new();
    solved.insert(ResourceId::new("hexcasting:flight"), FLIGHT_SOLVED);
    solved
}

pub(crate) fn registry() -> PatternRegistry {
    let registry = PatternRegistry::new(Arc::new(solved()));
    registry.initialize(&actions());
    registry
}
