use std::collections::BTreeMap;

use criterion::{criterion_group, criterion_main, Criterion};
use glyph_outlines::{
    outline::{glyf, type1, NullPen},
    raw::{
        tables::{
            glyf::{PointFlags, SimpleGlyph},
            postscript::tokenize,
        },
        types::Point,
    },
};
use outline_test_data::{glyf as glyf_data, type1 as type1_data};

fn quadratic(c: &mut Criterion) {
    for (name, data) in [
        ("glyf/ring", &glyf_data::RING),
        ("glyf/circle", &glyf_data::CIRCLE),
    ] {
        let points = data
            .points
            .iter()
            .map(|[x, y]| Point::new(*x, *y))
            .collect::<Vec<_>>();
        let glyph =
            SimpleGlyph::new(&points, PointFlags::from_raw_slice(data.flags), data.end_pts).unwrap();
        c.bench_function(name, |b| {
            b.iter(|| glyf::to_path(&glyph).unwrap().draw(&mut NullPen))
        });
    }
}

fn charstrings(c: &mut Criterion) {
    let font: BTreeMap<String, _> = [("A", type1_data::A), ("acute", type1_data::ACUTE)]
        .into_iter()
        .map(|(name, data)| (name.to_string(), tokenize(data).unwrap()))
        .collect();
    for (name, data) in [
        ("type1/curves", type1_data::CURVES),
        ("type1/aacute", type1_data::AACUTE),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| {
                let tokens = tokenize(data).unwrap();
                type1::evaluate(&tokens, &font)
                    .unwrap()
                    .path
                    .draw(&mut NullPen)
            })
        });
    }
}

criterion_group!(benches, quadratic, charstrings);
criterion_main!(benches);
