//! Axis-aligned cube.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::{GeomError, Point, Result, Segment};

/// Vertex index pairs for the 12 edges: bottom face loop, top face loop,
/// then the four verticals.
const EDGE_INDICES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// An axis-aligned cube defined by an origin corner and a side length.
///
/// The 8 vertices are derived once at construction and kept in a fixed
/// order so [`EDGE_INDICES`] stays valid after any transform: indices
/// 0..4 trace the bottom face from the origin, 4..8 the top face in the
/// same XY order. The origin is always vertex 0, including after
/// rotation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cuboid {
    origin: Point,
    side: f64,
    vertices: [Point; 8],
}

impl Cuboid {
    /// Creates a cube from its origin corner and side length.
    ///
    /// Fails with [`GeomError::InvalidArgument`] if the side length is
    /// not positive and finite.
    pub fn new(origin: Point, side: f64) -> Result<Cuboid> {
        if !side.is_finite() || side <= 0.0 {
            error!(%origin, side, "rejecting invalid cube side length");
            return Err(GeomError::InvalidArgument(format!(
                "cube side length must be positive and finite, got {side}"
            )));
        }

        let s = side;
        let vertices = [
            origin,
            origin.translated(s, 0.0, 0.0),
            origin.translated(s, s, 0.0),
            origin.translated(0.0, s, 0.0),
            origin.translated(0.0, 0.0, s),
            origin.translated(s, 0.0, s),
            origin.translated(s, s, s),
            origin.translated(0.0, s, s),
        ];

        debug!(%origin, side, "cuboid created");
        Ok(Self {
            origin,
            side,
            vertices,
        })
    }

    /// Returns the origin corner (vertex 0).
    #[inline]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the side length.
    #[inline]
    pub const fn side(&self) -> f64 {
        self.side
    }

    /// Returns the 8 vertices in fixed index order, by value.
    #[inline]
    pub const fn vertices(&self) -> [Point; 8] {
        self.vertices
    }

    /// Translates the origin and every vertex by the same deltas.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        debug!(dx, dy, dz, "translating cuboid");
        self.origin.translate(dx, dy, dz);
        for vertex in &mut self.vertices {
            vertex.translate(dx, dy, dz);
        }
    }

    /// Returns the translated cube.
    pub fn translated(&self, dx: f64, dy: f64, dz: f64) -> Cuboid {
        let mut result = *self;
        result.translate(dx, dy, dz);
        result
    }

    /// Rotates every vertex about the global Z axis by an angle in
    /// degrees. The origin tracks vertex 0 afterwards, so it can never
    /// diverge from the vertex list.
    pub fn rotate_z(&mut self, angle_degrees: f64) {
        debug!(angle_degrees, "rotating cuboid around Z axis");
        for vertex in &mut self.vertices {
            vertex.rotate_z(angle_degrees);
        }
        self.origin = self.vertices[0];
    }

    /// Returns the rotated cube.
    pub fn rotated_z(&self, angle_degrees: f64) -> Cuboid {
        let mut result = *self;
        result.rotate_z(angle_degrees);
        result
    }

    /// Computes the perimeter: the sum of all 12 equal edge lengths.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        12.0 * self.side
    }

    /// Computes the volume.
    #[inline]
    pub fn volume(&self) -> f64 {
        self.side.powi(3)
    }

    /// Builds the 12 edges from the current vertex values.
    pub fn edges(&self) -> Vec<Segment> {
        EDGE_INDICES
            .iter()
            .map(|&(a, b)| Segment::new(self.vertices[a], self.vertices[b]))
            .collect()
    }
}

impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cuboid(origin={}, side={:.2})", self.origin, self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pnt(x: f64, y: f64, z: f64) -> Point {
        Point::new(x, y, z).unwrap()
    }

    fn unit_cube2() -> Cuboid {
        Cuboid::new(Point::origin(), 2.0).unwrap()
    }

    #[test]
    fn test_rejects_non_positive_side() {
        assert!(Cuboid::new(Point::origin(), 0.0).is_err());
        assert!(Cuboid::new(Point::origin(), -1.0).is_err());
        assert!(Cuboid::new(Point::origin(), f64::NAN).is_err());
    }

    #[test]
    fn test_vertex_order() {
        let cube = Cuboid::new(pnt(1.0, 2.0, 3.0), 2.0).unwrap();
        let v = cube.vertices();
        assert_eq!(v[0].coords(), (1.0, 2.0, 3.0));
        assert_eq!(v[1].coords(), (3.0, 2.0, 3.0));
        assert_eq!(v[2].coords(), (3.0, 4.0, 3.0));
        assert_eq!(v[3].coords(), (1.0, 4.0, 3.0));
        assert_eq!(v[4].coords(), (1.0, 2.0, 5.0));
        assert_eq!(v[5].coords(), (3.0, 2.0, 5.0));
        assert_eq!(v[6].coords(), (3.0, 4.0, 5.0));
        assert_eq!(v[7].coords(), (1.0, 4.0, 5.0));
    }

    #[test]
    fn test_metrics() {
        let cube = unit_cube2();
        assert_relative_eq!(cube.volume(), 8.0, epsilon = 1e-12);
        assert_relative_eq!(cube.perimeter(), 24.0, epsilon = 1e-12);
        assert_eq!(cube.vertices()[6].coords(), (2.0, 2.0, 2.0));
    }

    #[test]
    fn test_twelve_edges_of_side_length() {
        let cube = unit_cube2();
        let edges = cube.edges();
        assert_eq!(edges.len(), 12);
        for edge in &edges {
            assert_relative_eq!(edge.length(), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_translate_moves_everything() {
        let mut cube = unit_cube2();
        let before = cube.vertices();
        cube.translate(1.0, -2.0, 0.5);

        assert!(cube.origin().is_equal(&pnt(1.0, -2.0, 0.5), 1e-12));
        for (v, old) in cube.vertices().iter().zip(before.iter()) {
            assert!(v.is_equal(&old.translated(1.0, -2.0, 0.5), 1e-12));
        }
        // Edge lengths are translation-invariant.
        for edge in cube.edges() {
            assert_relative_eq!(edge.length(), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rotate_keeps_origin_as_vertex_zero() {
        let mut cube = Cuboid::new(pnt(1.0, 0.0, 0.0), 2.0).unwrap();
        cube.rotate_z(90.0);
        assert!(cube.origin().is_equal(&cube.vertices()[0], 0.0));
        assert!(cube.origin().is_equal(&pnt(0.0, 1.0, 0.0), 1e-10));
    }

    #[test]
    fn test_rotate_preserves_edge_lengths() {
        let cube = unit_cube2().rotated_z(33.0);
        for edge in cube.edges() {
            assert_relative_eq!(edge.length(), 2.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_vertices_returned_by_value() {
        let cube = unit_cube2();
        let mut copy = cube.vertices();
        copy[0].translate(100.0, 0.0, 0.0);
        assert!(cube.vertices()[0].is_equal(&Point::origin(), 0.0));
    }

    #[test]
    fn test_display() {
        let cube = unit_cube2();
        assert_eq!(
            cube.to_string(),
            "Cuboid(origin=Point(x=0.00, y=0.00, z=0.00), side=2.00)"
        );
    }
}
