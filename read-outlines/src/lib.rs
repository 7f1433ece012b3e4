//! Reading raw glyph outline data
//!
//! This crate provides access to the per-glyph structures that outline
//! reconstruction starts from, once a font container has already located
//! them:
//!
//! - TrueType style simple glyph descriptions: coordinates, on/off-curve
//!   flags and contour end points, exposed through the
//!   [`GlyphDescription`](tables::glyf::GlyphDescription) capability.
//! - Type 1 charstrings: decryption, tokenization into operands and a
//!   closed set of [`Operator`](tables::postscript::charstring::Operator)s,
//!   the operand stack and the Standard Encoding used to resolve composite
//!   (`seac`) references by name.
//!
//! Parsing of the container itself (table directory, `head`, `cmap`,
//! `hmtx` and friends) is left to other crates.
//!
//! For turning this data into paths, see the `glyph-outlines` crate.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

extern crate alloc;

mod font_data;
mod read;
pub mod tables;

pub use font_data::{Cursor, FontData};
pub use read::{ReadError, ReadScalar};

/// Public re-export of the outline-types crate.
pub extern crate outline_types as types;
