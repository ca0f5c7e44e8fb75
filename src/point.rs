//! 3D point.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::{GeomError, Result};

/// A 3D cartesian point.
///
/// Coordinates are always finite; the factory rejects NaN and infinite
/// inputs, and the transform operations preserve finiteness for finite
/// deltas and angles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
}

impl Point {
    /// Creates a point from coordinates.
    ///
    /// Fails with [`GeomError::InvalidArgument`] if any coordinate is
    /// NaN or infinite.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Point> {
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            error!(x, y, z, "rejecting non-finite point coordinates");
            return Err(GeomError::InvalidArgument(format!(
                "point coordinates must be finite, got ({x}, {y}, {z})"
            )));
        }
        debug!(x, y, z, "point created");
        Ok(Self { x, y, z })
    }

    /// Returns the point at (0, 0, 0).
    #[inline]
    pub const fn origin() -> Point {
        Point {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Returns the X coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y coordinate.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the Z coordinate.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns all coordinates as a tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        self.square_distance(other).sqrt()
    }

    /// Computes the square of the distance to another point.
    #[inline]
    pub fn square_distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Returns true if the distance to `other` is <= `linear_tolerance`.
    #[inline]
    pub fn is_equal(&self, other: &Point, linear_tolerance: f64) -> bool {
        self.distance(other) <= linear_tolerance
    }

    /// Rotates the point about the global Z axis by an angle in degrees.
    ///
    /// Applies the standard 2D rotation matrix to (x, y); z is unchanged.
    pub fn rotate_z(&mut self, angle_degrees: f64) {
        let theta = angle_degrees.to_radians();
        let (sin, cos) = theta.sin_cos();
        // Both new components must come from the original pair.
        let (x, y) = (self.x, self.y);
        self.x = x * cos - y * sin;
        self.y = x * sin + y * cos;
        debug!(angle_degrees, "point rotated around Z axis");
    }

    /// Returns the point rotated about the global Z axis.
    pub fn rotated_z(&self, angle_degrees: f64) -> Point {
        let mut result = *self;
        result.rotate_z(angle_degrees);
        result
    }

    /// Translates the point by the given deltas.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
        debug!(dx, dy, dz, "point translated");
    }

    /// Returns the translated point.
    pub fn translated(&self, dx: f64, dy: f64, dz: f64) -> Point {
        let mut result = *self;
        result.translate(dx, dy, dz);
        result
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point(x={:.2}, y={:.2}, z={:.2})",
            self.x, self.y, self.z
        )
    }
}
