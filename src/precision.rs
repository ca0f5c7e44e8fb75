//! Precision constants for geometric comparisons.

/// Confusion tolerance for checking coincidence of two points in real space.
/// Two points are coincident if their distance <= CONFUSION.
/// Value: 1.0e-7
pub const CONFUSION: f64 = 1.0e-7;

/// Square of CONFUSION for squared-distance comparisons.
pub const SQUARE_CONFUSION: f64 = CONFUSION * CONFUSION;
