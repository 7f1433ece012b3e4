//! test data shared between the glyph outline crates.

pub mod glyf;
pub mod type1;
