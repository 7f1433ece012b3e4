//! Types for collecting the output when drawing a glyph outline.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write};

/// Interface for accepting a sequence of path commands.
///
/// Coordinates are always `f32`, regardless of the units the producer
/// works in.
pub trait OutlinePen {
    /// Emit a command to begin a new subpath at (x, y).
    fn move_to(&mut self, x: f32, y: f32);

    /// Emit a line segment from the current point to (x, y).
    fn line_to(&mut self, x: f32, y: f32);

    /// Emit a quadratic bezier segment from the current point with a control
    /// point at (cx0, cy0) and ending at (x, y).
    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32);

    /// Emit a cubic bezier segment from the current point with control
    /// points at (cx0, cy0) and (cx1, cy1) and ending at (x, y).
    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32);

    /// Emit a command to close the current subpath.
    fn close(&mut self);
}

/// Single element of a drawn path.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub enum PathElement {
    MoveTo {
        x: f32,
        y: f32,
    },
    LineTo {
        x: f32,
        y: f32,
    },
    QuadTo {
        cx0: f32,
        cy0: f32,
        x: f32,
        y: f32,
    },
    CurveTo {
        cx0: f32,
        cy0: f32,
        cx1: f32,
        cy1: f32,
        x: f32,
        y: f32,
    },
    Close,
}

impl OutlinePen for Vec<PathElement> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.push(PathElement::MoveTo { x, y })
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(PathElement::LineTo { x, y })
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.push(PathElement::QuadTo { cx0, cy0, x, y })
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.push(PathElement::CurveTo {
            cx0,
            cy0,
            cx1,
            cy1,
            x,
            y,
        })
    }

    fn close(&mut self) {
        self.push(PathElement::Close)
    }
}

/// Pen that discards all drawing output.
pub struct NullPen;

impl OutlinePen for NullPen {
    fn move_to(&mut self, _x: f32, _y: f32) {}
    fn line_to(&mut self, _x: f32, _y: f32) {}
    fn quad_to(&mut self, _cx0: f32, _cy0: f32, _x: f32, _y: f32) {}
    fn curve_to(&mut self, _cx0: f32, _cy0: f32, _cx1: f32, _cy1: f32, _x: f32, _y: f32) {}
    fn close(&mut self) {}
}

/// Pen that generates SVG style path data.
///
/// Commands are separated by a single space and coordinate pairs by a
/// comma, e.g. `M10,20 L30,40 Z`.
#[derive(Clone, Default, Debug)]
pub struct SvgPen {
    data: String,
    precision: Option<usize>,
}

impl SvgPen {
    /// Creates a new SVG pen that formats values with the shortest
    /// representation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new SVG pen that prints `precision` digits after the
    /// decimal point.
    pub fn with_precision(precision: usize) -> Self {
        Self {
            data: String::new(),
            precision: Some(precision),
        }
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    fn command(&mut self, cmd: char, coords: &[f32]) {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        self.data.push(cmd);
        for (ix, pair) in coords.chunks(2).enumerate() {
            if ix != 0 {
                self.data.push(' ');
            }
            let (x, y) = (pair[0], pair[1]);
            let _ = match self.precision {
                Some(prec) => write!(self.data, "{x:.prec$},{y:.prec$}"),
                None => write!(self.data, "{x},{y}"),
            };
        }
    }
}

impl core::ops::Deref for SvgPen {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.data.as_str()
    }
}

impl OutlinePen for SvgPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.command('M', &[x, y]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.command('L', &[x, y]);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.command('Q', &[cx0, cy0, x, y]);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.command('C', &[cx0, cy0, cx1, cy1, x, y]);
    }

    fn close(&mut self) {
        self.command('Z', &[]);
    }
}

impl AsRef<str> for SvgPen {
    fn as_ref(&self) -> &str {
        self.data.as_ref()
    }
}

impl From<SvgPen> for String {
    fn from(value: SvgPen) -> Self {
        value.data
    }
}

impl fmt::Display for SvgPen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(pen: &mut impl OutlinePen) {
        pen.move_to(1.0, 2.45556);
        pen.line_to(1.2, 4.0);
        pen.quad_to(2.0345, 3.56789, -0.157, -425.07);
        pen.curve_to(-37.0010, 4.5, 2.0, 1.0, -0.5, -0.25);
        pen.close();
    }

    #[test]
    fn svg_pen_precision() {
        let svg_data = [None, Some(1), Some(4)].map(|prec| {
            let mut pen = match prec {
                None => SvgPen::new(),
                Some(prec) => SvgPen::with_precision(prec),
            };
            draw(&mut pen);
            pen.to_string()
        });
        let expected = [
            "M1,2.45556 L1.2,4 Q2.0345,3.56789 -0.157,-425.07 C-37.001,4.5 2,1 -0.5,-0.25 Z",
            "M1.0,2.5 L1.2,4.0 Q2.0,3.6 -0.2,-425.1 C-37.0,4.5 2.0,1.0 -0.5,-0.2 Z",
            "M1.0000,2.4556 L1.2000,4.0000 Q2.0345,3.5679 -0.1570,-425.0700 C-37.0010,4.5000 2.0000,1.0000 -0.5000,-0.2500 Z",
        ];
        for (result, expected) in svg_data.iter().zip(&expected) {
            assert_eq!(result, expected);
        }
    }

    #[test]
    fn svg_pen_clear() {
        let mut pen = SvgPen::new();
        draw(&mut pen);
        pen.clear();
        pen.move_to(3.0, -4.0);
        assert_eq!(&*pen, "M3,-4");
    }

    #[test]
    fn collect_elements() {
        let mut elements: Vec<PathElement> = Vec::new();
        draw(&mut elements);
        assert_eq!(elements.len(), 5);
        assert_eq!(elements[1], PathElement::LineTo { x: 1.2, y: 4.0 });
        assert_eq!(elements[4], PathElement::Close);
        draw(&mut NullPen);
    }
}
