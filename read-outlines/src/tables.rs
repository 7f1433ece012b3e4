//! The raw glyph sources

pub mod glyf;
pub mod postscript;
