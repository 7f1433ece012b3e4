//! Type 1 charstring building blocks.

use std::fmt;

use crate::ReadError;

pub mod charstring;
pub mod crypt;
pub mod encoding;
pub mod stack;
pub mod string;

pub use charstring::{tokenize, Operator, Token, Tokens};
pub use crypt::decrypt;
pub use encoding::{standard_encoding_name, STANDARD_ENCODING};
pub use stack::Stack;
pub use string::{StringId, STANDARD_STRINGS};

/// Errors that are specific to charstring processing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    StackOverflow,
    StackUnderflow,
    /// Underlying parsing error.
    Read(ReadError),
}

impl From<ReadError> for Error {
    fn from(value: ReadError) -> Self {
        Self::Read(value)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StackOverflow => {
                write!(f, "attempted to push a value to a full stack")
            }
            Self::StackUnderflow => {
                write!(f, "attempted to pop a value from an empty stack")
            }
            Self::Read(err) => write!(f, "{err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
