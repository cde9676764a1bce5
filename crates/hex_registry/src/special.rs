//! Built-in patterns registered by literal signature.

use hex_ir::Direction;

/// Shortcut token for Introspection.
pub const OPEN_BRACKET: &str = "{";

/// Shortcut token for Retrospection.
pub const CLOSE_BRACKET: &str = "}";

pub(crate) struct Special {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) signature: &'static str,
    pub(crate) start_dir: Direction,
}

pub(crate) const INTROSPECTION: Special = Special {
    id: "hexcasting:open_paren",
    name: "Introspection",
    signature: "qqq",
    start_dir: Direction::West,
};

pub(crate) const RETROSPECTION: Special = Special {
    id: "hexcasting:close_paren",
    name: "Retrospection",
    signature: "eee",
    start_dir: Direction::East,
};

pub(crate) const SPECIALS: [Special; 4] = [
    INTROSPECTION,
    RETROSPECTION,
    Special {
        id: "hexcasting:escape",
        name: "Consideration",
        signature: "qqqaw",
        start_dir: Direction::East,
    },
    Special {
        id: "hexcasting:undo",
        name: "Evanition",
        signature: "eeedw",
        start_dir: Direction::East,
    },
];
