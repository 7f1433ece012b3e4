//! The decoded outline representation.

use alloc::{string::String, vec::Vec};

use raw::types::{BoundingBox, Point};

use super::pen::{OutlinePen, SvgPen};

/// Single segment of a [`Path`], in font design units.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathSegment {
    /// Begin a new contour at the given point.
    MoveTo(Point<i32>),
    /// Straight line from the current point.
    LineTo(Point<i32>),
    /// Quadratic bezier from the current point.
    QuadTo { control: Point<i32>, end: Point<i32> },
    /// Cubic bezier from the current point.
    CurveTo {
        control0: Point<i32>,
        control1: Point<i32>,
        end: Point<i32>,
    },
    /// Close the current contour.
    Close,
}

impl PathSegment {
    /// Returns the point at which this segment ends, or `None` for
    /// [`Close`](Self::Close).
    pub fn end_point(&self) -> Option<Point<i32>> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => Some(p),
            Self::QuadTo { end, .. } | Self::CurveTo { end, .. } => Some(end),
            Self::Close => None,
        }
    }

    /// Calls `f` for every control and end point of the segment.
    fn for_each_point(&self, mut f: impl FnMut(Point<i32>)) {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => f(p),
            Self::QuadTo { control, end } => {
                f(control);
                f(end);
            }
            Self::CurveTo {
                control0,
                control1,
                end,
            } => {
                f(control0);
                f(control1);
                f(end);
            }
            Self::Close => {}
        }
    }

    /// Returns this segment moved by `offset`.
    pub fn translated(self, offset: Point<i32>) -> Self {
        let t = |p: Point<i32>| Point::new(p.x.wrapping_add(offset.x), p.y.wrapping_add(offset.y));
        match self {
            Self::MoveTo(p) => Self::MoveTo(t(p)),
            Self::LineTo(p) => Self::LineTo(t(p)),
            Self::QuadTo { control, end } => Self::QuadTo {
                control: t(control),
                end: t(end),
            },
            Self::CurveTo {
                control0,
                control1,
                end,
            } => Self::CurveTo {
                control0: t(control0),
                control1: t(control1),
                end: t(end),
            },
            Self::Close => Self::Close,
        }
    }

    /// Sends this segment to the given pen.
    pub fn draw(&self, pen: &mut impl OutlinePen) {
        let f = |p: Point<i32>| (p.x as f32, p.y as f32);
        match *self {
            Self::MoveTo(p) => {
                let (x, y) = f(p);
                pen.move_to(x, y);
            }
            Self::LineTo(p) => {
                let (x, y) = f(p);
                pen.line_to(x, y);
            }
            Self::QuadTo { control, end } => {
                let ((cx0, cy0), (x, y)) = (f(control), f(end));
                pen.quad_to(cx0, cy0, x, y);
            }
            Self::CurveTo {
                control0,
                control1,
                end,
            } => {
                let ((cx0, cy0), (cx1, cy1), (x, y)) = (f(control0), f(control1), f(end));
                pen.curve_to(cx0, cy0, cx1, cy1, x, y);
            }
            Self::Close => pen.close(),
        }
    }
}

/// An outline: a sequence of contours, each starting with a
/// [`MoveTo`](PathSegment::MoveTo).
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the end point of the last segment that has one.
    ///
    /// Closing a contour does not move the current point.
    pub fn current_point(&self) -> Option<Point<i32>> {
        self.segments.iter().rev().find_map(PathSegment::end_point)
    }

    pub fn move_to(&mut self, p: Point<i32>) {
        self.segments.push(PathSegment::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point<i32>) {
        self.segments.push(PathSegment::LineTo(p));
    }

    pub fn quad_to(&mut self, control: Point<i32>, end: Point<i32>) {
        self.segments.push(PathSegment::QuadTo { control, end });
    }

    pub fn curve_to(&mut self, control0: Point<i32>, control1: Point<i32>, end: Point<i32>) {
        self.segments.push(PathSegment::CurveTo {
            control0,
            control1,
            end,
        });
    }

    pub fn close(&mut self) {
        self.segments.push(PathSegment::Close);
    }

    pub(crate) fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    /// Computes the bounds of every control and end point in the path.
    ///
    /// Returns `None` for an empty path.
    pub fn bounds(&self) -> Option<BoundingBox<i32>> {
        let mut bounds: Option<BoundingBox<i32>> = None;
        for segment in &self.segments {
            segment.for_each_point(|p| match bounds.as_mut() {
                Some(b) => b.extend(p),
                None => bounds = Some(BoundingBox::from_point(p)),
            });
        }
        bounds
    }

    /// Appends all segments of `other` to this path.
    pub fn append(&mut self, other: &Path) {
        self.segments.extend_from_slice(&other.segments);
    }

    /// Returns a copy of this path moved by `offset`.
    pub fn translated(&self, offset: Point<i32>) -> Path {
        self.segments
            .iter()
            .map(|segment| segment.translated(offset))
            .collect()
    }

    /// Sends every segment to the given pen.
    pub fn draw(&self, pen: &mut impl OutlinePen) {
        for segment in &self.segments {
            segment.draw(pen);
        }
    }

    /// Formats the path as SVG path data.
    pub fn to_svg(&self) -> String {
        let mut pen = SvgPen::new();
        self.draw(&mut pen);
        pen.into()
    }

    /// Converts the path to a [`kurbo::BezPath`].
    #[cfg(feature = "kurbo")]
    pub fn to_bez_path(&self) -> kurbo::BezPath {
        let mut path = kurbo::BezPath::new();
        let pt = |p: Point<i32>| kurbo::Point::new(p.x as f64, p.y as f64);
        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) => path.move_to(pt(p)),
                PathSegment::LineTo(p) => path.line_to(pt(p)),
                PathSegment::QuadTo { control, end } => path.quad_to(pt(control), pt(end)),
                PathSegment::CurveTo {
                    control0,
                    control1,
                    end,
                } => path.curve_to(pt(control0), pt(control1), pt(end)),
                PathSegment::Close => path.close_path(),
            }
        }
        path
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::pen::PathElement;

    fn triangle() -> Path {
        let mut path = Path::new();
        path.move_to(Point::new(0, 0));
        path.quad_to(Point::new(50, 120), Point::new(100, 0));
        path.curve_to(Point::new(80, -20), Point::new(20, -30), Point::new(-10, 5));
        path.close();
        path
    }

    #[test]
    fn bounds_include_control_points() {
        let bounds = triangle().bounds().unwrap();
        assert_eq!(
            bounds,
            BoundingBox {
                x_min: -10,
                y_min: -30,
                x_max: 100,
                y_max: 120,
            }
        );
        assert_eq!(Path::new().bounds(), None);
    }

    #[test]
    fn current_point_skips_close() {
        let path = triangle();
        assert_eq!(path.current_point(), Some(Point::new(-10, 5)));
        assert_eq!(Path::new().current_point(), None);
    }

    #[test]
    fn translate_and_append() {
        let mut path = triangle();
        let moved = path.translated(Point::new(10, -5));
        assert_eq!(moved.len(), 4);
        assert_eq!(moved.segments()[0], PathSegment::MoveTo(Point::new(10, -5)));
        assert_eq!(
            moved.segments()[1],
            PathSegment::QuadTo {
                control: Point::new(60, 115),
                end: Point::new(110, -5)
            }
        );
        path.append(&moved);
        assert_eq!(path.len(), 8);
        assert_eq!(path.segments()[7], PathSegment::Close);
        assert_eq!(path.current_point(), Some(Point::new(0, 0)));
    }

    #[test]
    fn draw_to_pen() {
        let mut elements: Vec<PathElement> = Vec::new();
        triangle().draw(&mut elements);
        assert_eq!(
            elements,
            [
                PathElement::MoveTo { x: 0.0, y: 0.0 },
                PathElement::QuadTo {
                    cx0: 50.0,
                    cy0: 120.0,
                    x: 100.0,
                    y: 0.0
                },
                PathElement::CurveTo {
                    cx0: 80.0,
                    cy0: -20.0,
                    cx1: 20.0,
                    cy1: -30.0,
                    x: -10.0,
                    y: 5.0
                },
                PathElement::Close,
            ]
        );
    }

    #[test]
    fn svg_parses_with_kurbo() {
        let svg = triangle().to_svg();
        assert_eq!(svg, "M0,0 Q50,120 100,0 C80,-20 20,-30 -10,5 Z");
        let bez = kurbo::BezPath::from_svg(&svg).unwrap();
        assert_eq!(bez.elements().len(), 4);
    }

    #[cfg(feature = "kurbo")]
    #[test]
    fn bez_path_matches_svg() {
        let path = triangle();
        let expected = kurbo::BezPath::from_svg(&path.to_svg()).unwrap();
        assert_eq!(path.to_bez_path(), expected);
    }
}
