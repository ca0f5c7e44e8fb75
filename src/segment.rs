//! Line segment in 3D space.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Point, Vec3};

/// A finite line piece between two points.
///
/// The segment owns copies of its endpoints, so its derived metrics are
/// unaffected by anything the caller does with the originals.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl Segment {
    /// Creates a segment between two points.
    pub fn new(start: Point, end: Point) -> Segment {
        debug!(%start, %end, "segment created");
        Self { start, end }
    }

    /// Returns the start point.
    #[inline]
    pub const fn start(&self) -> Point {
        self.start
    }

    /// Returns the end point.
    #[inline]
    pub const fn end(&self) -> Point {
        self.end
    }

    /// Computes the segment length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Returns the direction vector (end - start, not normalized).
    #[inline]
    pub fn direction(&self) -> Vec3 {
        Vec3::from_points(&self.start, &self.end)
    }

    /// Returns the midpoint of the segment.
    pub fn midpoint(&self) -> Point {
        let half = self.direction().scaled(0.5);
        self.start.translated(half.x, half.y, half.z)
    }

    /// Returns true if the two segments have parallel (or anti-parallel)
    /// direction vectors: the cross product has exactly zero magnitude.
    pub fn is_parallel_to(&self, other: &Segment) -> bool {
        self.direction()
            .cross(&other.direction())
            .square_magnitude()
            == 0.0
    }

    /// Computes the distance from a point to the infinite line through
    /// this segment's endpoints: `|(b-a) x (p-a)| / |b-a|`.
    ///
    /// A zero-length segment is degenerate here; the division yields a
    /// non-finite result rather than an error.
    pub fn distance_to_point(&self, p: &Point) -> f64 {
        let ab = self.direction();
        let ap = Vec3::from_points(&self.start, p);
        let distance = ab.cross(&ap).magnitude() / ab.magnitude();
        debug!(distance, "point-to-line distance computed");
        distance
    }

    /// Computes the shortest distance between the infinite lines carrying
    /// this segment and `other`.
    ///
    /// For skew lines this is the scalar triple product over the cross
    /// magnitude; for parallel lines it falls back to the distance from
    /// this segment's start to the other line. The result is NOT clamped
    /// to the segment extents, so when the lines' closest points fall
    /// outside the segments it underestimates the true segment-to-segment
    /// minimum.
    pub fn shortest_distance(&self, other: &Segment) -> f64 {
        let u = self.direction();
        let v = other.direction();
        let w0 = Vec3::from_points(&other.start, &self.start);

        let cross = u.cross(&v);
        let cross_mag = cross.magnitude();

        if cross_mag == 0.0 {
            warn!(%self, %other, "parallel segments; using point-to-line fallback");
            return other.distance_to_point(&self.start);
        }

        let distance = w0.dot(&cross).abs() / cross_mag;
        debug!(distance, "line-to-line shortest distance computed");
        distance
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment(start={}, end={})", self.start, self.end)
    }
}
