//! Decoding glyph outlines into paths.
//!
//! Two unrelated encodings are supported, both producing a [`Path`] in font
//! design units:
//!
//! ```
//! use glyph_outlines::{
//!     outline::{glyf, type1, PathSegment},
//!     raw::{tables::glyf::ContourPoint, tables::postscript::tokenize, types::Point},
//! };
//!
//! // A quadratic contour starting on an off-curve point.
//! let points = [
//!     ContourPoint::off(0, 0),
//!     ContourPoint::on(10, 10),
//!     ContourPoint::off(20, 0).end(),
//! ];
//! let path = glyf::points_to_path(&points).unwrap();
//! assert_eq!(path.segments()[0], PathSegment::MoveTo(Point::new(10, 0)));
//!
//! // A Type 1 charstring: 50 600 hsbw 10 20 rmoveto endchar
//! let tokens = tokenize(&[189, 248, 236, 13, 149, 159, 21, 14]).unwrap();
//! let outline = type1::evaluate(&tokens, &type1::NoComposites).unwrap();
//! assert_eq!(outline.width, 600);
//! assert_eq!(outline.path.segments(), &[PathSegment::MoveTo(Point::new(60, 20))]);
//! ```

pub mod error;
pub mod glyf;
pub mod pen;
pub mod type1;

#[cfg(feature = "std")]
mod cache;
mod path;
mod scale;

/// Maximum nesting depth of `seac` composite components.
pub const COMPOSITE_NESTING_LIMIT: usize = 10;

#[cfg(feature = "std")]
pub use cache::OutlineCache;
pub use error::{DrawError, ToPathError};
pub use path::{Path, PathSegment};
pub use pen::{NullPen, OutlinePen, PathElement, SvgPen};
pub use scale::{FontMetrics, ScalePen};
pub use type1::{CharstringLookup, DecodeWarning, NoComposites, Type1Outline};
