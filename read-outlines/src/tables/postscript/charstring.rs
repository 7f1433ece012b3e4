//! Tokenizing Type 1 charstrings.

use alloc::vec::Vec;

use super::Error;
use crate::{Cursor, FontData};

/// Escape opcode for accessing two byte operators.
const ESCAPE: u8 = 12;

/// Type 1 charstring operators.
///
/// See "6 CharString Command Reference" in the Type 1 font format
/// specification.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
    HStem,
    VStem,
    VMoveTo,
    RLineTo,
    HLineTo,
    VLineTo,
    RrCurveTo,
    ClosePath,
    CallSubr,
    Return,
    Hsbw,
    EndChar,
    RMoveTo,
    HMoveTo,
    VhCurveTo,
    HvCurveTo,
    // escaped
    DotSection,
    VStem3,
    HStem3,
    Seac,
    Sbw,
    Div,
    CallOtherSubr,
    Pop,
    SetCurrentPoint,
}

impl Operator {
    /// All operators, in opcode order.
    pub const ALL: [Operator; 25] = [
        Self::HStem,
        Self::VStem,
        Self::VMoveTo,
        Self::RLineTo,
        Self::HLineTo,
        Self::VLineTo,
        Self::RrCurveTo,
        Self::ClosePath,
        Self::CallSubr,
        Self::Return,
        Self::Hsbw,
        Self::EndChar,
        Self::RMoveTo,
        Self::HMoveTo,
        Self::VhCurveTo,
        Self::HvCurveTo,
        Self::DotSection,
        Self::VStem3,
        Self::HStem3,
        Self::Seac,
        Self::Sbw,
        Self::Div,
        Self::CallOtherSubr,
        Self::Pop,
        Self::SetCurrentPoint,
    ];

    /// Creates an operator from the given opcode.
    pub fn from_opcode(opcode: u8) -> Option<Self> {
        use Operator::*;
        Some(match opcode {
            1 => HStem,
            3 => VStem,
            4 => VMoveTo,
            5 => RLineTo,
            6 => HLineTo,
            7 => VLineTo,
            8 => RrCurveTo,
            9 => ClosePath,
            10 => CallSubr,
            11 => Return,
            13 => Hsbw,
            14 => EndChar,
            21 => RMoveTo,
            22 => HMoveTo,
            30 => VhCurveTo,
            31 => HvCurveTo,
            _ => return None,
        })
    }

    /// Creates an operator from the given extended opcode.
    ///
    /// These are preceded by a byte containing the escape value of 12.
    pub fn from_two_byte_opcode(opcode: u8) -> Option<Self> {
        use Operator::*;
        Some(match opcode {
            0 => DotSection,
            1 => VStem3,
            2 => HStem3,
            6 => Seac,
            7 => Sbw,
            12 => Div,
            16 => CallOtherSubr,
            17 => Pop,
            33 => SetCurrentPoint,
            _ => return None,
        })
    }

    /// Returns the opcode of this operator.
    ///
    /// Escaped operators are encoded as `(12 << 8) | opcode`.
    pub fn opcode(self) -> u16 {
        use Operator::*;
        let (escaped, opcode) = match self {
            HStem => (false, 1),
            VStem => (false, 3),
            VMoveTo => (false, 4),
            RLineTo => (false, 5),
            HLineTo => (false, 6),
            VLineTo => (false, 7),
            RrCurveTo => (false, 8),
            ClosePath => (false, 9),
            CallSubr => (false, 10),
            Return => (false, 11),
            Hsbw => (false, 13),
            EndChar => (false, 14),
            RMoveTo => (false, 21),
            HMoveTo => (false, 22),
            VhCurveTo => (false, 30),
            HvCurveTo => (false, 31),
            DotSection => (true, 0),
            VStem3 => (true, 1),
            HStem3 => (true, 2),
            Seac => (true, 6),
            Sbw => (true, 7),
            Div => (true, 12),
            CallOtherSubr => (true, 16),
            Pop => (true, 17),
            SetCurrentPoint => (true, 33),
        };
        if escaped {
            escaped_opcode(opcode)
        } else {
            opcode as u16
        }
    }

    /// Returns the mnemonic name of this operator.
    pub fn name(self) -> &'static str {
        use Operator::*;
        match self {
            HStem => "hstem",
            VStem => "vstem",
            VMoveTo => "vmoveto",
            RLineTo => "rlineto",
            HLineTo => "hlineto",
            VLineTo => "vlineto",
            RrCurveTo => "rrcurveto",
            ClosePath => "closepath",
            CallSubr => "callsubr",
            Return => "return",
            Hsbw => "hsbw",
            EndChar => "endchar",
            RMoveTo => "rmoveto",
            HMoveTo => "hmoveto",
            VhCurveTo => "vhcurveto",
            HvCurveTo => "hvcurveto",
            DotSection => "dotsection",
            VStem3 => "vstem3",
            HStem3 => "hstem3",
            Seac => "seac",
            Sbw => "sbw",
            Div => "div",
            CallOtherSubr => "callothersubr",
            Pop => "pop",
            SetCurrentPoint => "setcurrentpoint",
        }
    }

    /// Creates an operator from its mnemonic name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl core::fmt::Display for Operator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

fn escaped_opcode(opcode: u8) -> u16 {
    ((ESCAPE as u16) << 8) | opcode as u16
}

/// A single element of a charstring.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Token {
    Operand(i32),
    Operator(Operator),
    /// An opcode that does not name a known operator, encoded as for
    /// [`Operator::opcode`].
    Unknown(u16),
}

impl From<i32> for Token {
    fn from(value: i32) -> Self {
        Self::Operand(value)
    }
}

impl From<Operator> for Token {
    fn from(value: Operator) -> Self {
        Self::Operator(value)
    }
}

/// Iterator over the tokens of a decrypted charstring.
///
/// Yields an error and then stops if the data ends in the middle of a
/// number or escaped operator.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    cursor: Cursor<'a>,
    done: bool,
}

impl<'a> Tokens<'a> {
    pub fn new(charstring_data: &'a [u8]) -> Self {
        Self {
            cursor: FontData::new(charstring_data).cursor(),
            done: false,
        }
    }

    fn read_token(&mut self) -> Result<Token, Error> {
        let b0 = self.cursor.read::<u8>()?;
        Ok(match b0 {
            // See "6.2 Charstring Number Encoding" in the Type 1 font format
            // specification
            32..=246 => Token::Operand(b0 as i32 - 139),
            247..=250 => {
                let b1 = self.cursor.read::<u8>()? as i32;
                Token::Operand((b0 as i32 - 247) * 256 + b1 + 108)
            }
            251..=254 => {
                let b1 = self.cursor.read::<u8>()? as i32;
                Token::Operand(-(b0 as i32 - 251) * 256 - b1 - 108)
            }
            255 => Token::Operand(self.cursor.read::<i32>()?),
            ESCAPE => {
                let b1 = self.cursor.read::<u8>()?;
                Operator::from_two_byte_opcode(b1)
                    .map(Token::Operator)
                    .unwrap_or(Token::Unknown(escaped_opcode(b1)))
            }
            _ => Operator::from_opcode(b0)
                .map(Token::Operator)
                .unwrap_or(Token::Unknown(b0 as u16)),
        })
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.cursor.remaining_bytes() == 0 {
            return None;
        }
        let token = self.read_token();
        self.done = token.is_err();
        Some(token)
    }
}

/// Tokenizes a decrypted charstring.
pub fn tokenize(charstring_data: &[u8]) -> Result<Vec<Token>, Error> {
    Tokens::new(charstring_data).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReadError;

    #[test]
    fn number_encoding() {
        let data = [
            // one byte
            32, 139, 246, // two byte positive
            247, 0, 250, 255, // two byte negative
            251, 0, 254, 255, // four byte
            255, 0x00, 0x01, 0x86, 0xA0, 255, 0xFF, 0xFF, 0xFF, 0xFF,
        ];
        let tokens = tokenize(&data).unwrap();
        let values = [-107, 0, 107, 108, 1131, -108, -1131, 100_000, -1];
        assert_eq!(tokens, values.map(Token::Operand));
    }

    #[test]
    fn operators() {
        // hsbw, closepath, seac, sbw, endchar
        let data = [13, 9, 12, 6, 12, 7, 14];
        let tokens = tokenize(&data).unwrap();
        assert_eq!(
            tokens,
            [
                Token::Operator(Operator::Hsbw),
                Token::Operator(Operator::ClosePath),
                Token::Operator(Operator::Seac),
                Token::Operator(Operator::Sbw),
                Token::Operator(Operator::EndChar),
            ]
        );
    }

    #[test]
    fn unknown_opcodes() {
        let data = [2, 12, 99, 28];
        let tokens = tokenize(&data).unwrap();
        assert_eq!(
            tokens,
            [
                Token::Unknown(2),
                Token::Unknown(0x0C63),
                Token::Unknown(28)
            ]
        );
    }

    #[test]
    fn truncated_data() {
        assert_eq!(tokenize(&[247]), Err(Error::Read(ReadError::OutOfBounds)));
        assert_eq!(tokenize(&[12]), Err(Error::Read(ReadError::OutOfBounds)));
        assert_eq!(
            tokenize(&[255, 0, 0]),
            Err(Error::Read(ReadError::OutOfBounds))
        );
        let mut tokens = Tokens::new(&[139, 250]);
        assert_eq!(tokens.next(), Some(Ok(Token::Operand(0))));
        assert!(matches!(tokens.next(), Some(Err(_))));
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn opcode_round_trip() {
        for op in Operator::ALL {
            let opcode = op.opcode();
            let decoded = if opcode >> 8 == ESCAPE as u16 {
                Operator::from_two_byte_opcode(opcode as u8)
            } else {
                Operator::from_opcode(opcode as u8)
            };
            assert_eq!(decoded, Some(op));
            assert_eq!(Operator::from_name(op.name()), Some(op));
        }
        assert_eq!(Operator::from_name("flex"), None);
    }

    #[test]
    fn seac_fixture() {
        let tokens = tokenize(outline_test_data::type1::AACUTE).unwrap();
        assert_eq!(
            tokens,
            [
                Token::Operand(20),
                Token::Operand(600),
                Token::Operator(Operator::Hsbw),
                Token::Operand(0),
                Token::Operand(180),
                Token::Operand(0),
                Token::Operand(65),
                Token::Operand(194),
                Token::Operator(Operator::Seac),
                Token::Operator(Operator::EndChar),
            ]
        );
    }

    #[test]
    fn empty_charstring() {
        assert_eq!(tokenize(&[]), Ok(Vec::new()));
    }
}
