//! Hexbook codecs.
//!
//! This crate provides the two pattern families with a value-level text
//! notation:
//! - [`number`]: numeral patterns (`Numerical Reflection`), arithmetic
//!   operator sequences, display formatting and the default number encoder
//! - [`gambit`]: keep/drop masks (`Bookkeeper's Gambit`) drawn as a flat
//!   zig-zag
//!
//! Decoding never fails loudly: every decoder returns `None` for input it
//! cannot interpret and the caller picks a fallback.

pub mod gambit;
pub mod number;

pub use gambit::{decode_mask, decode_visual, encode_mask, encode_visual};
pub use number::{
    decode_pattern, decode_sequence, format_number, format_number_exact, fraction_digits,
    NumberComponent, NumberEncoder, NumberPatternGenerator, Operator, OperatorTable,
};
