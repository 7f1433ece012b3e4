//! Type 1 charstrings, already decrypted unless noted otherwise.
//!
//! Each line holds the encoding of one command: its operands followed by
//! the operator.

/// Only sets the side bearing and advance width.
#[rustfmt::skip]
pub static HSBW_ONLY: &[u8] = &[
    189, 248, 236, 13,          // 50 600 hsbw
    14,                         // endchar
];

/// A single closed square drawn with line operators.
#[rustfmt::skip]
pub static SQUARE: &[u8] = &[
    139, 248, 136, 13,          // 0 500 hsbw
    239, 239, 21,               // 100 100 rmoveto
    247, 192, 6,                // 300 hlineto
    247, 192, 7,                // 300 vlineto
    251, 192, 6,                // -300 hlineto
    9,                          // closepath
    14,                         // endchar
];

/// One contour of each curve operator.
#[rustfmt::skip]
pub static CURVES: &[u8] = &[
    159, 248, 236, 13,          // 20 600 hsbw
    149, 139, 21,               // 10 0 rmoveto
    140, 141, 142, 143, 144, 145, 8, // 1 2 3 4 5 6 rrcurveto
    189, 159, 169, 179, 31,     // 50 20 30 40 hvcurveto
    179, 119, 109, 89, 30,      // 40 -20 -30 -50 vhcurveto
    9,                          // closepath
    14,                         // endchar
];

/// Two contours, the second positioned relative to the end of the first.
#[rustfmt::skip]
pub static TWO_CONTOURS: &[u8] = &[
    139, 248, 136, 13,          // 0 500 hsbw
    139, 139, 21,               // 0 0 rmoveto
    247, 92, 139, 5,            // 200 0 rlineto
    139, 247, 92, 5,            // 0 200 rlineto
    9,                          // closepath
    189, 251, 42, 21,           // 50 -150 rmoveto
    139, 89, 5,                 // 0 -50 rlineto
    9,                          // closepath
    14,                         // endchar
];

/// Hints, flex machinery and an unknown escaped operator mixed into a single line.
#[rustfmt::skip]
pub static HINTED: &[u8] = &[
    149, 248, 36, 13,           // 10 400 hsbw
    139, 189, 1,                // 0 50 hstem
    149, 159, 3,                // 10 20 vstem
    12, 0,                      // dotsection
    189, 189, 21,               // 50 50 rmoveto
    139, 140, 141, 142, 143, 144, 12, 99, // 0 1 2 3 4 5 unknown
    250, 124, 139, 5,           // 1000 0 rlineto
    142, 139, 12, 16,           // 3 0 callothersubr
    12, 17,                     // pop
    12, 17,                     // pop
    12, 33,                     // setcurrentpoint
    9,                          // closepath
    14,                         // endchar
];

/// Side bearing with a vertical component.
#[rustfmt::skip]
pub static SBW: &[u8] = &[
    169, 119, 249, 80, 139, 12, 7, // 30 -20 700 0 sbw
    144, 144, 21,               // 5 5 rmoveto
    239, 7,                     // 100 vlineto
    9,                          // closepath
    14,                         // endchar
];

/// Base glyph for the `seac` fixtures.
#[rustfmt::skip]
pub static A: &[u8] = &[
    159, 248, 236, 13,          // 20 600 hsbw
    139, 139, 21,               // 0 0 rmoveto
    247, 192, 249, 80, 5,       // 300 700 rlineto
    247, 192, 253, 80, 5,       // 300 -700 rlineto
    9,                          // closepath
    14,                         // endchar
];

/// Accent glyph for the `seac` fixtures.
#[rustfmt::skip]
pub static ACUTE: &[u8] = &[
    139, 247, 192, 13,          // 0 300 hsbw
    239, 249, 130, 21,          // 100 750 rmoveto
    219, 239, 5,                // 80 100 rlineto
    169, 119, 5,                // 30 -20 rlineto
    9,                          // closepath
    14,                         // endchar
];

/// `A` with `acute` placed 180 units to the right.
#[rustfmt::skip]
pub static AACUTE: &[u8] = &[
    159, 248, 236, 13,          // 20 600 hsbw
    139, 247, 72, 139, 204, 247, 86, 12, 6, // 0 180 0 65 194 seac
    14,                         // endchar
];

/// Base code 0 is unassigned in the Standard Encoding.
#[rustfmt::skip]
pub static AACUTE_MISSING_BASE: &[u8] = &[
    159, 248, 236, 13,          // 20 600 hsbw
    139, 247, 72, 139, 139, 247, 86, 12, 6, // 0 180 0 0 194 seac
    14,                         // endchar
];

/// A curve with only five operands.
#[rustfmt::skip]
pub static TRUNCATED_CURVE: &[u8] = &[
    139, 248, 136, 13,          // 0 500 hsbw
    139, 139, 21,               // 0 0 rmoveto
    140, 141, 142, 143, 144, 8, // 1 2 3 4 5 rrcurveto
    14,                         // endchar
];

/// Exercises every number encoding.
#[rustfmt::skip]
pub static LARGE_NUMBERS: &[u8] = &[
    254, 255, 255, 0, 1, 134, 160, 13, // -1131 100000 hsbw
    32, 250, 255, 21,           // -107 1131 rmoveto
    139, 251, 0, 5,             // 0 -108 rlineto
    9,                          // closepath
    14,                         // endchar
];

/// [`SQUARE`] encrypted with the charstring key and four lead bytes.
#[rustfmt::skip]
pub static SQUARE_ENCRYPTED: &[u8] = &[
    0x10, 0xBF, 0x31, 0x70, 0x79, 0xC8, 0x2F, 0x06, 0x61, 0x71, 0x02, 0x16,
    0x85, 0x18, 0x17, 0xB4, 0x84, 0x96, 0xB6, 0x3B, 0x96, 0xCE,
];
