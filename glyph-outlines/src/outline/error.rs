//! Error types associated with outlines.

use alloc::string::String;
use core::fmt;

pub use raw::{tables::postscript::Error as PostScriptError, ReadError};

/// Errors that can occur when converting a point list to a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToPathError {
    /// There were no points to convert.
    Empty,
    /// The final point did not end a contour.
    MissingContourEnd,
}

impl fmt::Display for ToPathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Expected at least one contour"),
            Self::MissingContourEnd => {
                write!(f, "Points remain after the last contour end point")
            }
        }
    }
}

/// Errors that may occur when drawing glyphs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawError {
    /// Conversion from points to path failed.
    ToPath(ToPathError),
    /// Error occurred while evaluating a Type 1 charstring.
    PostScript(PostScriptError),
    /// Error occurred when reading glyph data.
    Read(ReadError),
    /// Exceeded the nesting limit for composite glyphs.
    RecursionLimitExceeded,
    /// A composite glyph referenced itself through this component.
    CompositeCycle(String),
}

impl From<ToPathError> for DrawError {
    fn from(e: ToPathError) -> Self {
        Self::ToPath(e)
    }
}

impl From<ReadError> for DrawError {
    fn from(e: ReadError) -> Self {
        Self::Read(e)
    }
}

impl From<PostScriptError> for DrawError {
    fn from(value: PostScriptError) -> Self {
        Self::PostScript(value)
    }
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ToPath(e) => write!(f, "{e}"),
            Self::PostScript(e) => write!(f, "{e}"),
            Self::Read(e) => write!(f, "{e}"),
            Self::RecursionLimitExceeded => write!(
                f,
                "Recursion limit ({}) exceeded when loading composite components",
                super::COMPOSITE_NESTING_LIMIT,
            ),
            Self::CompositeCycle(name) => {
                write!(f, "Composite glyph component '{name}' references itself")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ToPathError {}

#[cfg(feature = "std")]
impl std::error::Error for DrawError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            DrawError::RecursionLimitExceeded.to_string(),
            "Recursion limit (10) exceeded when loading composite components"
        );
        assert_eq!(
            DrawError::from(ToPathError::MissingContourEnd).to_string(),
            "Points remain after the last contour end point"
        );
        assert_eq!(
            DrawError::from(PostScriptError::StackUnderflow).to_string(),
            "attempted to pop a value from an empty stack"
        );
        assert_eq!(
            DrawError::CompositeCycle("Aacute".into()).to_string(),
            "Composite glyph component 'Aacute' references itself"
        );
    }
}
