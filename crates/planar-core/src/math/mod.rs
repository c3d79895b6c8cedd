// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Planar math: vectors, affine matrices, and the scalar helpers the shape
//! types build on.
//!
//! All angles are radians and rotate counter-clockwise.

mod matrix;
mod vec2;

pub use matrix::Matrix;
pub use vec2::Vec2;

/// Default absolute tolerance for approximate comparisons.
pub const EPSILON: f64 = 1e-12;

/// Clamps `value` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics; callers own the `min <= max`
/// precondition and an inverted range simply yields `max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Linear interpolation `a + (b - a) * t`; `t` outside `[0, 1]` extrapolates.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Returns `true` when `a` and `b` differ by at most `tolerance`.
///
/// NaN never compares equal, including to itself.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: f64) -> f64 {
    value.to_radians()
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f64) -> f64 {
    value.to_degrees()
}
