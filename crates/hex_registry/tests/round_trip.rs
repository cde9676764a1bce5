//! Text round-trips through the public registry API.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use hex_codec::encode_mask;
use hex_ir::{Direction, Pattern};
use hex_registry::{
    ActionEntry, NoSolvedPatterns, PatternRegistry, ResourceId, SolvedPatternMap,
};

fn action(id: &str, sig: &str, dir: Direction, per_world: bool) -> ActionEntry {
    ActionEntry {
        id: ResourceId::new(id),
        pattern: Pattern::from_signature(dir, sig).unwrap(),
        localized_name: None,
        per_world,
    }
}

fn host_table() -> Vec<ActionEntry> {
    vec![
        action("hexcasting:add", "waaw", Direction::NorthEast, false),
        action("hexcasting:sub", "wddw", Direction::NorthWest, false),
        action("hexcasting:mul_dot", "waqaw", Direction::SouthEast, false),
        action("hexcasting:div_dot", "wdedw", Direction::NorthEast, false),
        action("hexcasting:get_caster", "qaq", Direction::NorthEast, false),
        action("hexcasting:lightning", "waadwawdaaweewq", Direction::East, true),
    ]
}

fn registry() -> PatternRegistry {
    let registry = PatternRegistry::new(Arc::new(NoSolvedPatterns));
    registry.initialize(&host_table());
    registry
}

#[test]
fn fallback_names_round_trip() {
    let registry = registry();
    let caster = Pattern::from_signature(Direction::NorthEast, "qaq").unwrap();
    assert_eq!(registry.resolve(&caster).as_deref(), Some("Get Caster"));
    assert_eq!(registry.parse_line("Get Caster"), Ok(vec![caster]));
    assert_eq!(registry.resolve(&host_table()[0].pattern).as_deref(), Some("Add"));
}

#[test]
fn per_world_entry_resolves_once_solved() {
    let unsolved = registry();
    let placeholder = host_table()[5].pattern.clone();
    assert_eq!(unsolved.resolve(&placeholder), None);
    assert!(unsolved.parse_line("Lightning").is_err());

    let mut solved = SolvedPatternMap::new();
    solved.insert(ResourceId::new("hexcasting:lightning"), "wewewe,WEST");
    let registry = PatternRegistry::new(Arc::new(solved));
    registry.initialize(&host_table());

    let concrete: Pattern = "wewewe,WEST".parse().unwrap();
    assert_eq!(registry.resolve(&concrete).as_deref(), Some("Lightning"));
    assert_eq!(registry.parse_line("lightning"), Ok(vec![concrete]));
}

proptest! {
    #[test]
    fn integers_round_trip(value in -1_000_000i64..1_000_000) {
        let registry = registry();
        let patterns = registry.parse_line(&value.to_string()).unwrap();
        prop_assert_eq!(patterns.len(), 1);
        let line = registry.resolve(&patterns[0]).unwrap();
        prop_assert_eq!(line, format!("Numerical Reflection: {value}"));
    }

    #[test]
    fn gambits_round_trip(mask in prop::collection::vec(any::<bool>(), 1..12)) {
        let registry = registry();
        let line = registry.resolve(&encode_mask(&mask)).unwrap();
        let parsed = registry.parse_line(&line).unwrap();
        prop_assert_eq!(parsed, vec![encode_mask(&mask)]);
    }
}
