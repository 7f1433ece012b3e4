#![no_main]
use std::collections::BTreeMap;

use libfuzzer_sys::{arbitrary::Arbitrary, fuzz_target};

use glyph_outlines::outline::{type1, NullPen};
use read_outlines::tables::postscript::{decrypt, tokenize};

#[derive(Arbitrary, Debug)]
struct FuzzCharstring {
    data: Vec<u8>,
    /// Decrypt with this many lead bytes before tokenizing.
    len_iv: Option<u8>,
    /// Also register the charstring under a glyph name so that `seac`
    /// can reach it.
    component_code: Option<u8>,
}

fuzz_target!(|input: FuzzCharstring| {
    let data = match input.len_iv {
        Some(len_iv) => decrypt(&input.data, len_iv as usize),
        None => input.data,
    };
    let Ok(tokens) = tokenize(&data) else {
        return;
    };
    let mut glyphs = BTreeMap::new();
    if let Some(name) = input
        .component_code
        .and_then(|code| read_outlines::tables::postscript::standard_encoding_name(code as i32))
    {
        glyphs.insert(name.to_string(), tokens.clone());
    }
    if let Ok(outline) = type1::evaluate(&tokens, &glyphs) {
        outline.path.draw(&mut NullPen);
    }
});
