//! Common geometry types used when reconstructing glyph outlines.
//!
//! Coordinates are generic so that the same [`Point`] and [`BoundingBox`]
//! serve both design-unit integer outlines and scaled floating point
//! output.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod bbox;
mod glyph_id;
mod point;

#[cfg(all(test, feature = "serde"))]
mod serde_test;

pub use bbox::BoundingBox;
pub use glyph_id::GlyphId;
pub use point::Point;
