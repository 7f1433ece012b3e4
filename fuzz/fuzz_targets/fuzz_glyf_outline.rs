#![no_main]
use libfuzzer_sys::{arbitrary::Arbitrary, fuzz_target};

use glyph_outlines::outline::{glyf, NullPen};
use outline_types::Point;
use read_outlines::tables::glyf::{PointFlags, SimpleGlyph};

/// A simple glyph with arbitrary points, flags and contour end points.
#[derive(Arbitrary, Debug)]
struct FuzzGlyph {
    points: Vec<(i32, i32, u8)>,
    end_pts: Vec<u16>,
}

fuzz_target!(|glyph: FuzzGlyph| {
    let points = glyph
        .points
        .iter()
        .map(|(x, y, _)| Point::new(*x, *y))
        .collect::<Vec<_>>();
    let flags = glyph
        .points
        .iter()
        .map(|(_, _, flags)| PointFlags::from_bits(*flags))
        .collect::<Vec<_>>();
    let Ok(glyph) = SimpleGlyph::new(&points, &flags, &glyph.end_pts) else {
        return;
    };
    if let Ok(path) = glyf::to_path(&glyph) {
        path.draw(&mut NullPen);
        let _ = path.bounds();
    }
});
