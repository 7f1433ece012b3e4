//! Simple glyph descriptions.
//!
//! Flags are raw simple glyph flag bytes, so bits other than the on-curve
//! bit (0x01) are frequently set.

/// The arrays of an already parsed simple glyph.
#[derive(Copy, Clone, Debug)]
pub struct SimpleGlyphData {
    pub points: &'static [[i32; 2]],
    pub flags: &'static [u8],
    pub end_pts: &'static [u16],
}

/// A 400 unit square, all points on-curve.
pub static SQUARE: SimpleGlyphData = SimpleGlyphData {
    points: &[[100, 0], [500, 0], [500, 400], [100, 400]],
    flags: &[0x33, 0x31, 0x21, 0x11],
    end_pts: &[3],
};

/// Four off-curve points with implied on-curve points between each pair.
pub static CIRCLE: SimpleGlyphData = SimpleGlyphData {
    points: &[[-100, 0], [-100, 100], [0, 100], [0, 0]],
    flags: &[0x30, 0x20, 0x10, 0x00],
    end_pts: &[3],
};

/// An outer square and an inner contour mixing on and off-curve points.
pub static RING: SimpleGlyphData = SimpleGlyphData {
    points: &[
        // outer
        [0, 0],
        [600, 0],
        [600, 600],
        [0, 600],
        // inner
        [150, 300],
        [150, 450],
        [450, 450],
        [450, 150],
        [150, 150],
    ],
    flags: &[0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x01, 0x00],
    end_pts: &[3, 8],
};

/// Contour end points that decrease.
pub static BAD_CONTOUR_ORDER: SimpleGlyphData = SimpleGlyphData {
    points: &[[0, 0], [10, 0], [10, 10], [0, 10]],
    flags: &[0x01, 0x01, 0x01, 0x01],
    end_pts: &[3, 2],
};

/// Points left over after the last contour end point.
pub static UNTERMINATED: SimpleGlyphData = SimpleGlyphData {
    points: &[[0, 0], [10, 0], [10, 10], [0, 10]],
    flags: &[0x01, 0x01, 0x01, 0x01],
    end_pts: &[1],
};
