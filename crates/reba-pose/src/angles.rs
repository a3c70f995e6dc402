//! 2D angle helpers

use reba_core::Point;

/// Reference axis in image coordinates (Y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// (0, -1): trunk and neck
    Up,
    /// (0, +1): limb segments
    Down,
}

impl Axis {
    #[inline]
    pub fn vector(self) -> (f64, f64) {
        match self {
            Axis::Up => (0.0, -1.0),
            Axis::Down => (0.0, 1.0),
        }
    }
}

/// Signed angle in degrees between `v` and `axis`, negative when the
/// vector points left. Zero-length or non-finite vectors give 0°.
pub fn signed_axis_angle(v: (f64, f64), axis: Axis) -> f64 {
    let (dx, dy) = v;
    let len = (dx * dx + dy * dy).sqrt();
    if !len.is_finite() || len == 0.0 {
        return 0.0;
    }

    let (rx, ry) = axis.vector();
    let cos = ((dx * rx + dy * ry) / len).clamp(-1.0, 1.0);
    let degrees = cos.acos().to_degrees();

    if dx < 0.0 {
        -degrees
    } else {
        degrees
    }
}

/// Absolute deviation in degrees [0, 180] between `v` and `axis`
#[inline]
pub fn axis_angle(v: (f64, f64), axis: Axis) -> f64 {
    signed_axis_angle(v, axis).abs()
}

/// Angle of the segment `from -> to` against `axis`
#[inline]
pub fn segment_angle(from: Point, to: Point, axis: Axis) -> f64 {
    axis_angle(from.to(&to), axis)
}

/// Interior angle at `vertex` between `vertex -> a` and `vertex -> b`.
/// Degenerate segments count as fully extended (180°).
pub fn interior_angle(a: Point, vertex: Point, b: Point) -> f64 {
    let (ax, ay) = vertex.to(&a);
    let (bx, by) = vertex.to(&b);

    let len_a = (ax * ax + ay * ay).sqrt();
    let len_b = (bx * bx + by * by).sqrt();
    if len_a == 0.0 || len_b == 0.0 || !(len_a * len_b).is_finite() {
        return 180.0;
    }

    let cos = ((ax * bx + ay * by) / (len_a * len_b)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Reduce a left/right pair to one representative absolute angle
pub fn pair_mean(left: Option<f64>, right: Option<f64>) -> Option<f64> {
    match (left, right) {
        (Some(l), Some(r)) => Some((l.abs() + r.abs()) / 2.0),
        (Some(l), None) => Some(l.abs()),
        (None, Some(r)) => Some(r.abs()),
        (None, None) => None,
    }
}
