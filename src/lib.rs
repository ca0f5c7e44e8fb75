//! geom3: 3D analytic geometry primitives.
//!
//! Points, line segments and axis-aligned cubes with distance,
//! transform and metric operations:
//!
//! - [`Point`]: a cartesian coordinate with Euclidean distance,
//!   Z-axis rotation and translation.
//! - [`Segment`]: a finite line piece between two points, with length
//!   and the shortest distance between the lines carrying two segments
//!   (including the degenerate parallel fallback).
//! - [`Cuboid`]: an axis-aligned cube derived from an origin and a side
//!   length, exposing its 8 vertices and 12 edges.
//!
//! All types have value semantics: segments and cuboids own copies of
//! their points, so derived metrics never observe external mutation.
//!
//! Construction and each operation emit `tracing` events; no subscriber
//! is installed by this crate and none is required for correctness.

pub mod precision;

mod cuboid;
mod point;
mod segment;
mod vec3;

pub use cuboid::Cuboid;
pub use point::Point;
pub use segment::Segment;
pub use vec3::Vec3;

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeomError>;

/// Errors raised by validated constructors.
///
/// These are programmer-error-class failures: they are raised
/// synchronously, never recovered internally, and nothing is retriable.
#[derive(Debug, thiserror::Error)]
pub enum GeomError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
