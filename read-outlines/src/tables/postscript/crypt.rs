//! Type 1 charstring encryption.

use alloc::vec::Vec;

const CHARSTRING_KEY: u16 = 4330;
const C1: u16 = 52845;
const C2: u16 = 22719;

/// Decrypts an encrypted charstring.
///
/// The first `len_iv` plaintext bytes are random padding and are dropped
/// from the result. If `len_iv` exceeds the length of the data, the result
/// is empty.
pub fn decrypt(data: &[u8], len_iv: usize) -> Vec<u8> {
    let mut r = CHARSTRING_KEY;
    let mut plain = Vec::with_capacity(data.len().saturating_sub(len_iv));
    for (ix, &cipher) in data.iter().enumerate() {
        let byte = cipher ^ (r >> 8) as u8;
        r = (cipher as u16)
            .wrapping_add(r)
            .wrapping_mul(C1)
            .wrapping_add(C2);
        if ix >= len_iv {
            plain.push(byte);
        }
    }
    plain
}
