//! Mapping design units to pixel space.

use super::OutlinePen;

/// Font wide metrics needed to position outlines, in font design units.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontMetrics {
    pub units_per_em: u16,
    pub ascender: i16,
    /// Usually negative.
    pub descender: i16,
}

impl FontMetrics {
    /// Returns the factor converting design units to pixels at the given
    /// size in pixels per em.
    ///
    /// A non-positive size or a zero `units_per_em` yields a scale of 1,
    /// leaving outlines in design units.
    pub fn scale(&self, size: f32) -> f32 {
        if size > 0.0 && self.units_per_em != 0 {
            size / self.units_per_em as f32
        } else {
            1.0
        }
    }

    /// The ascender at the given size, truncated to whole pixels.
    pub fn scaled_ascent(&self, size: f32) -> i32 {
        (self.ascender as f32 * self.scale(size)) as i32
    }

    /// The descender at the given size, truncated to whole pixels.
    pub fn scaled_descent(&self, size: f32) -> i32 {
        (self.descender as f32 * self.scale(size)) as i32
    }

    /// An advance width at the given size, truncated to whole pixels.
    ///
    /// Use this to measure runs of glyphs, e.g. with the `width` of a
    /// [`Type1Outline`](super::Type1Outline).
    pub fn scaled_advance(&self, advance: i32, size: f32) -> i32 {
        if size > 0.0 && self.units_per_em != 0 {
            (size * advance as f32 / self.units_per_em as f32) as i32
        } else {
            advance
        }
    }
}

/// Pen adapter that scales design unit outlines into a y-down pixel space.
///
/// Each point `(px, py)` is sent to the inner pen as
/// `(x + px * s, y + ascender * s - py * s)` where `s` is the
/// [scale](FontMetrics::scale) for the size and `(x, y)` is the top left
/// corner of the line box the glyph is drawn into.
pub struct ScalePen<'a, P: ?Sized> {
    inner: &'a mut P,
    scale: f32,
    x: f32,
    baseline: f32,
}

impl<'a, P> ScalePen<'a, P>
where
    P: OutlinePen + ?Sized,
{
    pub fn new(inner: &'a mut P, metrics: &FontMetrics, size: f32, x: f32, y: f32) -> Self {
        let scale = metrics.scale(size);
        Self {
            inner,
            scale,
            x,
            baseline: y + metrics.ascender as f32 * scale,
        }
    }

    fn map(&self, px: f32, py: f32) -> (f32, f32) {
        (self.x + px * self.scale, self.baseline - py * self.scale)
    }
}

impl<P> OutlinePen for ScalePen<'_, P>
where
    P: OutlinePen + ?Sized,
{
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.inner.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.inner.line_to(x, y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.map(cx0, cy0);
        let (x, y) = self.map(x, y);
        self.inner.quad_to(cx0, cy0, x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.map(cx0, cy0);
        let (cx1, cy1) = self.map(cx1, cy1);
        let (x, y) = self.map(x, y);
        self.inner.curve_to(cx0, cy0, cx1, cy1, x, y);
    }

    fn close(&mut self) {
        self.inner.close();
    }
}
