//! Glyph outline reconstruction.
//!
//! This crate turns the raw per-glyph data exposed by
//! [`read-outlines`](raw) into [`Path`]s made of move, line, quadratic and
//! cubic segments:
//!
//! - [`outline::glyf`] rebuilds TrueType style contours from on-curve and
//!   off-curve points, synthesizing the implied on-curve points between
//!   consecutive control points.
//! - [`outline::type1`] interprets Type 1 charstrings, accumulating relative
//!   coordinates and assembling `seac` accented composites.
//!
//! Both decoders are pure functions of their input. Decoded outlines can be
//! shared between threads through the [`OutlineCache`], which computes each
//! glyph at most once.
//!
//! Paths are in font design units. [`ScalePen`] maps them to a pixel space
//! while drawing.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
extern crate alloc;

/// Expose our "raw" underlying parser crate.
pub extern crate read_outlines as raw;

pub mod outline;

pub use outline::{
    DrawError, FontMetrics, OutlinePen, Path, PathSegment, ScalePen, ToPathError, Type1Outline,
};

#[cfg(feature = "std")]
pub use outline::OutlineCache;

/// Type for a glyph identifier.
pub type GlyphId = read_outlines::types::GlyphId;
