// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Geometry primitives over 2-D points in normalized image space.
//!
//! All math is planar: depth is never consulted.

use serde::{Deserialize, Serialize};

/// A 2-D point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate, growing downwards.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Midpoint between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Point one unit straight up from `self` (image y axis points down).
    #[must_use]
    pub fn above(self) -> Self {
        Self::new(self.x, self.y - 1.0)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Calculate the angle at vertex `p2` between the rays `p2→p1` and `p2→p3`.
///
/// Uses `acos(v1·v2 / (|v1||v2|))`, evaluated in `f64` so coordinates near the
/// `f32` range cannot overflow. The cosine is clamped to `[-1, 1]`; a zero-length
/// ray or a non-finite coordinate makes it `1.0`, so the result is never `NaN`.
///
/// # Arguments
///
/// * `p1` - End of the first ray.
/// * `p2` - Vertex.
/// * `p3` - End of the second ray.
///
/// # Returns
///
/// Angle in degrees in `[0, 180]`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn angle(p1: Point, p2: Point, p3: Point) -> f32 {
    let v1 = (
        f64::from(p1.x) - f64::from(p2.x),
        f64::from(p1.y) - f64::from(p2.y),
    );
    let v2 = (
        f64::from(p3.x) - f64::from(p2.x),
        f64::from(p3.y) - f64::from(p2.y),
    );

    let dot = v1.0 * v2.0 + v1.1 * v2.1;
    let magnitude = v1.0.hypot(v1.1) * v2.0.hypot(v2.1);
    let cosine = dot / magnitude;

    let cosine = if magnitude > 0.0 && cosine.is_finite() {
        cosine.clamp(-1.0, 1.0)
    } else {
        1.0
    };

    cosine.acos().to_degrees() as f32
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(p1: Point, p2: Point) -> f32 {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}

/// Orientation of `p1` relative to the directed edge `p3→p2`.
fn sign(p1: Point, p2: Point, p3: Point) -> f32 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}

/// Check whether `pt` lies inside the triangle `v1 v2 v3`.
///
/// Points on an edge or vertex count as inside. Winding order does not matter.
#[must_use]
pub fn point_in_triangle(pt: Point, v1: Point, v2: Point, v3: Point) -> bool {
    let d1 = sign(pt, v1, v2);
    let d2 = sign(pt, v2, v3);
    let d3 = sign(pt, v3, v1);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}
