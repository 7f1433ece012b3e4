//! TrueType style simple glyph descriptions

use alloc::vec::Vec;

use crate::ReadError;
use types::Point;

/// Flags describing the properties of a point.
///
/// Only the on-curve bit is meaningful to outline reconstruction; all
/// other bits of the raw simple glyph flag byte are masked off when
/// constructed with [`from_bits`](Self::from_bits).
#[derive(
    Copy, Clone, PartialEq, Eq, Default, Debug, bytemuck::AnyBitPattern, bytemuck::NoUninit,
)]
#[repr(transparent)]
pub struct PointFlags(u8);

impl PointFlags {
    const ON_CURVE: u8 = 0x01;

    /// Creates a new on curve point flag.
    pub const fn on_curve() -> Self {
        Self(Self::ON_CURVE)
    }

    /// Creates a new off curve (quadratic control) point flag.
    pub const fn off_curve() -> Self {
        Self(0)
    }

    /// Creates a point flag from the given bits. These are truncated
    /// to the on curve bit.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ON_CURVE)
    }

    /// Views a slice of raw flag bytes as point flags.
    ///
    /// No bits are masked: use [`is_on_curve`](Self::is_on_curve) rather
    /// than comparing the result for equality.
    pub fn from_raw_slice(bytes: &[u8]) -> &[PointFlags] {
        bytemuck::cast_slice(bytes)
    }

    /// Returns true if this is an on curve point.
    #[inline]
    pub const fn is_on_curve(self) -> bool {
        self.0 & Self::ON_CURVE != 0
    }

    /// Returns true if this is an off curve point.
    #[inline]
    pub const fn is_off_curve(self) -> bool {
        !self.is_on_curve()
    }

    /// Returns the underlying bits.
    pub const fn to_bits(self) -> u8 {
        self.0
    }
}

/// Access to the points of an already parsed simple glyph.
///
/// This is the boundary with whatever parsed the font container: indices
/// are assumed to be in range for the declared counts.
pub trait GlyphDescription {
    /// Total number of points in the glyph.
    fn point_count(&self) -> usize;

    /// Number of contours in the glyph.
    fn contour_count(&self) -> usize;

    fn x_coordinate(&self, index: usize) -> i32;

    fn y_coordinate(&self, index: usize) -> i32;

    fn flags(&self, index: usize) -> PointFlags;

    /// Index of the last point of the given contour.
    fn end_point_of_contour(&self, contour_index: usize) -> usize;
}

/// A simple glyph borrowing its points, flags and contour end points.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleGlyph<'a> {
    points: &'a [Point<i32>],
    flags: &'a [PointFlags],
    end_pts_of_contours: &'a [u16],
}

impl<'a> SimpleGlyph<'a> {
    /// Creates a new glyph over the given data.
    ///
    /// Fails if the points and flags differ in length.
    pub fn new(
        points: &'a [Point<i32>],
        flags: &'a [PointFlags],
        end_pts_of_contours: &'a [u16],
    ) -> Result<Self, ReadError> {
        if points.len() != flags.len() {
            return Err(ReadError::MalformedData(
                "point and flag counts do not match",
            ));
        }
        Ok(Self {
            points,
            flags,
            end_pts_of_contours,
        })
    }
}

impl GlyphDescription for SimpleGlyph<'_> {
    fn point_count(&self) -> usize {
        self.points.len()
    }

    fn contour_count(&self) -> usize {
        self.end_pts_of_contours.len()
    }

    fn x_coordinate(&self, index: usize) -> i32 {
        self.points[index].x
    }

    fn y_coordinate(&self, index: usize) -> i32 {
        self.points[index].y
    }

    fn flags(&self, index: usize) -> PointFlags {
        self.flags[index]
    }

    fn end_point_of_contour(&self, contour_index: usize) -> usize {
        self.end_pts_of_contours[contour_index] as usize
    }
}

/// A single point of a glyph, annotated with its contour membership.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContourPoint {
    pub x: i32,
    pub y: i32,
    pub on_curve: bool,
    /// True for the last point of a contour.
    pub end_of_contour: bool,
}

impl ContourPoint {
    pub const fn on(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            on_curve: true,
            end_of_contour: false,
        }
    }

    pub const fn off(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            on_curve: false,
            end_of_contour: false,
        }
    }

    /// Returns a copy of this point marked as the end of its contour.
    pub const fn end(self) -> Self {
        Self {
            end_of_contour: true,
            ..self
        }
    }

    pub const fn position(&self) -> Point<i32> {
        Point::new(self.x, self.y)
    }
}

/// Flattens a glyph description into a list of annotated points.
///
/// Contour end points must be strictly increasing and in range, and the
/// last point of the glyph must end the last contour, so that the
/// contours cover every point exactly once.
pub fn contour_points(glyph: &impl GlyphDescription) -> Result<Vec<ContourPoint>, ReadError> {
    let point_count = glyph.point_count();
    let contour_count = glyph.contour_count();
    let mut points: Vec<ContourPoint> = (0..point_count)
        .map(|ix| ContourPoint {
            x: glyph.x_coordinate(ix),
            y: glyph.y_coordinate(ix),
            on_curve: glyph.flags(ix).is_on_curve(),
            end_of_contour: false,
        })
        .collect();
    let mut next_start = 0;
    for contour_ix in 0..contour_count {
        let end = glyph.end_point_of_contour(contour_ix);
        if end < next_start {
            return Err(ReadError::MalformedData(
                "contour end points are not increasing",
            ));
        }
        let point = points.get_mut(end).ok_or(ReadError::InvalidIndex(end))?;
        point.end_of_contour = true;
        next_start = end + 1;
    }
    if next_start != point_count {
        return Err(ReadError::MalformedData(
            "points without a terminating contour",
        ));
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(i32, i32)]) -> Vec<Point<i32>> {
        coords.iter().map(|(x, y)| Point::new(*x, *y)).collect()
    }

    #[test]
    fn flags_mask_to_on_curve_bit() {
        assert!(PointFlags::from_bits(0x37).is_on_curve());
        assert!(PointFlags::from_bits(0x36).is_off_curve());
        assert_eq!(PointFlags::from_bits(0xFF), PointFlags::on_curve());
    }

    #[test]
    fn raw_flag_bytes_as_slice() {
        let raw = [0x01u8, 0x00, 0x21, 0x08];
        let flags = PointFlags::from_raw_slice(&raw);
        let on_curve = flags.iter().map(|f| f.is_on_curve()).collect::<Vec<_>>();
        assert_eq!(on_curve, [true, false, true, false]);
    }

    #[test]
    fn simple_glyph_rejects_mismatched_flags() {
        let pts = points(&[(0, 0), (10, 0)]);
        let flags = [PointFlags::on_curve()];
        assert!(SimpleGlyph::new(&pts, &flags, &[1]).is_err());
    }

    #[test]
    fn contour_points_marks_ends() {
        let pts = points(&[(0, 0), (10, 0), (10, 10), (50, 50), (60, 50), (60, 60)]);
        let flags = [
            PointFlags::on_curve(),
            PointFlags::off_curve(),
            PointFlags::on_curve(),
            PointFlags::on_curve(),
            PointFlags::on_curve(),
            PointFlags::off_curve(),
        ];
        let glyph = SimpleGlyph::new(&pts, &flags, &[2, 5]).unwrap();
        let result = contour_points(&glyph).unwrap();
        assert_eq!(
            result,
            [
                ContourPoint::on(0, 0),
                ContourPoint::off(10, 0),
                ContourPoint::on(10, 10).end(),
                ContourPoint::on(50, 50),
                ContourPoint::on(60, 50),
                ContourPoint::off(60, 60).end(),
            ]
        );
    }

    #[test]
    fn contour_points_empty_glyph() {
        let glyph = SimpleGlyph::default();
        assert_eq!(contour_points(&glyph), Ok(Vec::new()));
    }

    #[test]
    fn contour_points_unterminated() {
        let pts = points(&[(0, 0), (10, 0), (10, 10)]);
        let flags = [PointFlags::on_curve(); 3];
        let glyph = SimpleGlyph::new(&pts, &flags, &[1]).unwrap();
        assert!(matches!(
            contour_points(&glyph),
            Err(ReadError::MalformedData(_))
        ));
    }

    #[test]
    fn contour_points_decreasing_ends() {
        let pts = points(&[(0, 0), (10, 0), (10, 10)]);
        let flags = [PointFlags::on_curve(); 3];
        let glyph = SimpleGlyph::new(&pts, &flags, &[2, 1]).unwrap();
        assert!(matches!(
            contour_points(&glyph),
            Err(ReadError::MalformedData(_))
        ));
    }

    #[test]
    fn contour_points_end_out_of_range() {
        let pts = points(&[(0, 0), (10, 0)]);
        let flags = [PointFlags::on_curve(); 2];
        let glyph = SimpleGlyph::new(&pts, &flags, &[4]).unwrap();
        assert_eq!(contour_points(&glyph), Err(ReadError::InvalidIndex(4)));
    }
}
