//! The Standard Encoding.

use super::string::StringId;

/// Maps character codes of the Standard Encoding to standard string
/// identifiers.
///
/// A zero entry means the code is unassigned.
#[rustfmt::skip]
pub const STANDARD_ENCODING: [u8; 256] = [
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      1,   2,   3,   4,   5,   6,   7,   8,   9,  10,  11,  12,  13,  14,  15,  16,
     17,  18,  19,  20,  21,  22,  23,  24,  25,  26,  27,  28,  29,  30,  31,  32,
     33,  34,  35,  36,  37,  38,  39,  40,  41,  42,  43,  44,  45,  46,  47,  48,
     49,  50,  51,  52,  53,  54,  55,  56,  57,  58,  59,  60,  61,  62,  63,  64,
     65,  66,  67,  68,  69,  70,  71,  72,  73,  74,  75,  76,  77,  78,  79,  80,
     81,  82,  83,  84,  85,  86,  87,  88,  89,  90,  91,  92,  93,  94,  95,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,  96,  97,  98,  99, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110,
      0, 111, 112, 113, 114,   0, 115, 116, 117, 118, 119, 120, 121, 122,   0, 123,
      0, 124, 125, 126, 127, 128, 129, 130, 131,   0, 132, 133,   0, 134, 135, 136,
    137,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0, 138,   0, 139,   0,   0,   0,   0, 140, 141, 142, 143,   0,   0,   0,   0,
      0, 144,   0,   0,   0, 145,   0,   0, 146, 147, 148, 149,   0,   0,   0,   0,
];

/// Returns the glyph name the Standard Encoding assigns to `code`.
///
/// Codes outside `0..=255` and unassigned codes return `None`.
pub fn standard_encoding_name(code: i32) -> Option<&'static str> {
    let code = usize::try_from(code).ok()?;
    let sid = *STANDARD_ENCODING.get(code)?;
    if sid == 0 {
        return None;
    }
    StringId::from(sid).standard_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_names() {
        assert_eq!(standard_encoding_name(b'A' as i32), Some("A"));
        assert_eq!(standard_encoding_name(b'a' as i32), Some("a"));
        assert_eq!(standard_encoding_name(b' ' as i32), Some("space"));
        assert_eq!(standard_encoding_name(0x27), Some("quoteright"));
    }

    #[test]
    fn accent_names() {
        assert_eq!(standard_encoding_name(193), Some("grave"));
        assert_eq!(standard_encoding_name(194), Some("acute"));
        assert_eq!(standard_encoding_name(200), Some("dieresis"));
        assert_eq!(standard_encoding_name(207), Some("caron"));
    }

    #[test]
    fn unassigned_codes() {
        assert_eq!(standard_encoding_name(0), None);
        assert_eq!(standard_encoding_name(31), None);
        assert_eq!(standard_encoding_name(128), None);
        assert_eq!(standard_encoding_name(-1), None);
        assert_eq!(standard_encoding_name(256), None);
    }

    #[test]
    fn every_assigned_code_has_a_name() {
        for code in 0..256 {
            let sid = STANDARD_ENCODING[code as usize];
            assert_eq!(standard_encoding_name(code).is_some(), sid != 0);
        }
    }
}
