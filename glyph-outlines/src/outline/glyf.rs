//! TrueType style point list to path conversion.

use alloc::vec::Vec;

use raw::tables::glyf::{contour_points, ContourPoint, GlyphDescription};

use super::{DrawError, Path, ToPathError};

/// Converts a simple glyph description to a path.
///
/// Contour end points that are not strictly increasing, out of range, or
/// that leave trailing points are reported as [`DrawError::Read`] by
/// [`contour_points`].
pub fn to_path(glyph: &impl GlyphDescription) -> Result<Path, DrawError> {
    let points = contour_points(glyph)?;
    Ok(points_to_path(&points)?)
}

/// Converts a list of annotated points to a path.
///
/// Every contour produces a [`MoveTo`](super::PathSegment::MoveTo) followed by
/// line and quadratic segments and a final
/// [`Close`](super::PathSegment::Close). When a contour starts with an
/// off-curve point, the last point is used as the start if it is on-curve,
/// otherwise the start is the midpoint of the first and last points.
/// Between two consecutive off-curve points an on-curve point is implied at
/// their midpoint. Midpoints use truncating integer division.
///
/// An empty point list is an error, as is a list whose final point does not
/// end a contour.
pub fn points_to_path(points: &[ContourPoint]) -> Result<Path, ToPathError> {
    if points.is_empty() {
        return Err(ToPathError::Empty);
    }
    log::trace!("building path from {} points", points.len());
    let mut path = Path::new();
    let mut working = Vec::with_capacity(points.len() + 2);
    let mut start = 0;
    for (ix, point) in points.iter().enumerate() {
        if point.end_of_contour {
            contour_to_path(&points[start..=ix], &mut working, &mut path);
            start = ix + 1;
        }
    }
    if start != points.len() {
        return Err(ToPathError::MissingContourEnd);
    }
    Ok(path)
}

/// Emits the segments for a single non-empty contour.
///
/// `working` is scratch space for the contour with its start point
/// repeated at both ends.
fn contour_to_path(contour: &[ContourPoint], working: &mut Vec<ContourPoint>, path: &mut Path) {
    let (Some(&first), Some(&last)) = (contour.first(), contour.last()) else {
        return;
    };
    working.clear();
    if first.on_curve {
        working.extend_from_slice(contour);
        working.push(first);
    } else if last.on_curve {
        working.push(last);
        working.extend_from_slice(contour);
    } else {
        let mid = first.position().midpoint(last.position());
        let implied = ContourPoint::on(mid.x, mid.y);
        working.push(implied);
        working.extend_from_slice(contour);
        working.push(implied);
    }
    path.move_to(working[0].position());
    // The working list always ends on-curve, so every off-curve point
    // has a successor.
    let mut ix = 1;
    while let Some(point) = working.get(ix) {
        if point.on_curve {
            path.line_to(point.position());
            ix += 1;
            continue;
        }
        let Some(next) = working.get(ix + 1) else {
            break;
        };
        if next.on_curve {
            path.quad_to(point.position(), next.position());
            ix += 2;
        } else {
            let implied = point.position().midpoint(next.position());
            path.quad_to(point.position(), implied);
            ix += 1;
        }
    }
    path.close();
}
