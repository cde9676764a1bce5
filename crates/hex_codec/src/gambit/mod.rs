//! Bookkeeper's Gambit: keep/drop masks drawn as a flat zig-zag.
//!
//! Each mask slot is drawn relative to a "flat" reference direction:
//! - keep (`-`): one segment along the flat direction
//! - drop (`v`): a dip, one segment 60 degrees clockwise of flat followed
//!   by one 60 degrees counter-clockwise of flat
//!
//! ```text
//!   -   v   -        mask "-v-"
//!  ___\/___          drawn from EAST
//! ```

use hex_ir::{Angle, Direction, Pattern};

/// Visual symbol for a kept slot.
pub const KEEP: char = '-';

/// Visual symbol for a dropped slot.
pub const DROP: char = 'v';

/// Display-name prefix used for masks in text form.
pub const GAMBIT_LINE_PREFIX: &str = "Bookkeeper's Gambit:";

/// Canonical flat direction used when encoding.
const FLAT: Direction = Direction::East;

/// Decode a pattern into a keep (`true`) / drop (`false`) mask.
///
/// Returns `None` if the pattern is not a gambit.
pub fn decode_mask(pattern: &Pattern) -> Option<Vec<bool>> {
    let directions = pattern.directions();
    let flat = match pattern.angles().first() {
        Some(Angle::LeftBack) => pattern.start_dir().rotated_by(Angle::Left),
        _ => pattern.start_dir(),
    };

    let mut mask = Vec::with_capacity(directions.len());
    let mut i = 0;
    while i < directions.len() {
        match directions[i].angle_from(flat) {
            Angle::Forward => {
                mask.push(true);
                i += 1;
            }
            Angle::Right => {
                let next = directions.get(i + 1)?;
                if next.angle_from(flat) != Angle::Left {
                    return None;
                }
                mask.push(false);
                i += 2;
            }
            _ => return None,
        }
    }
    Some(mask)
}

/// Encode a mask. An empty mask is the empty pattern drawn from `EAST`.
pub fn encode_mask(mask: &[bool]) -> Pattern {
    let Some((&first, rest)) = mask.split_first() else {
        return Pattern::new(FLAT, Vec::new());
    };

    let mut angles = Vec::with_capacity(mask.len() * 2);
    let start_dir = if first {
        FLAT
    } else {
        // Open with the second half of the dip
        angles.push(Angle::LeftBack);
        FLAT.rotated_by(Angle::Right)
    };

    let mut previous = first;
    for &keep in rest {
        match (previous, keep) {
            (true, true) => angles.push(Angle::Forward),
            (false, true) => angles.push(Angle::Right),
            (true, false) => angles.extend([Angle::Right, Angle::LeftBack]),
            (false, false) => angles.extend([Angle::RightBack, Angle::LeftBack]),
        }
        previous = keep;
    }
    Pattern::new(start_dir, angles)
}

/// Render a mask as `-`/`v` text.
pub fn mask_to_visual(mask: &[bool]) -> String {
    mask.iter().map(|&keep| if keep { KEEP } else { DROP }).collect()
}

/// Parse `-`/`v` text into a mask. Surrounding whitespace is ignored.
pub fn visual_to_mask(visual: &str) -> Option<Vec<bool>> {
    visual
        .trim()
        .chars()
        .map(|c| match c {
            KEEP => Some(true),
            DROP => Some(false),
            _ => None,
        })
        .collect()
}

/// Decode a pattern straight to its visual string.
pub fn decode_visual(pattern: &Pattern) -> Option<String> {
    decode_mask(pattern).map(|mask| mask_to_visual(&mask))
}

/// Encode a visual string. `None` if it contains characters other than
/// `-` and `v`.
pub fn encode_visual(visual: &str) -> Option<Pattern> {
    visual_to_mask(visual).map(|mask| encode_mask(&mask))
}
