// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use tracing::{debug, trace};

use crate::math::Vec2;
use crate::GeomError;

/// 2D affine transformation stored as six coefficients `[a, b, c, d, e, f]`.
///
/// A point `p` is projected as
///
/// ```text
/// | a c e |   | x |
/// | b d f | * | y |
///             | 1 |
/// ```
///
/// - `[a, b]` and `[c, d]` are the images of the X and Y basis vectors,
///   `[e, f]` is the translation.
/// - Builders ([`moved`](Self::moved), [`scaled`](Self::scaled),
///   [`rotated`](Self::rotated), [`chained`](Self::chained)) return a new
///   matrix with the operation applied *after* everything already composed,
///   so calls read left to right in application order.
///
/// # Examples
/// ```
/// use core::f64::consts::FRAC_PI_2;
/// use planar_core::math::{Matrix, Vec2};
/// let m = Matrix::IDENTITY
///     .scaled(Vec2::ZERO, 2.0)
///     .rotated(Vec2::ZERO, FRAC_PI_2)
///     .moved(Vec2::new(2.0, 2.0));
/// let p = m.project(Vec2::new(2.0, 2.0));
/// assert!((p.x + 2.0).abs() < 1e-12 && (p.y - 6.0).abs() < 1e-12);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    data: [f64; 6],
}

impl Matrix {
    /// The identity matrix; projects every point onto itself.
    pub const IDENTITY: Self = Self::new([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from raw `[a, b, c, d, e, f]` coefficients.
    ///
    /// No validation is performed; a singular linear part is allowed and
    /// makes [`unproject`](Self::unproject) return NaN.
    pub const fn new(data: [f64; 6]) -> Self {
        Self { data }
    }

    /// Returns the raw `[a, b, c, d, e, f]` coefficients.
    pub fn to_array(self) -> [f64; 6] {
        self.data
    }

    /// Translates everything by `delta`.
    pub fn moved(&self, delta: Vec2) -> Self {
        let mut m = self.data;
        m[4] += delta.x;
        m[5] += delta.y;
        Self::new(m)
    }

    /// Scales uniformly by `factor` around `anchor`.
    pub fn scaled(&self, anchor: Vec2, factor: f64) -> Self {
        self.scaled_xy(anchor, Vec2::new(factor, factor))
    }

    /// Scales by `factors.x` horizontally and `factors.y` vertically around
    /// `anchor`.
    pub fn scaled_xy(&self, anchor: Vec2, factors: Vec2) -> Self {
        let mut m = self.moved(-anchor).data;
        m[0] *= factors.x;
        m[2] *= factors.x;
        m[4] *= factors.x;
        m[1] *= factors.y;
        m[3] *= factors.y;
        m[5] *= factors.y;
        Self::new(m).moved(anchor)
    }

    /// Rotates counter-clockwise by `angle` radians around `anchor`.
    pub fn rotated(&self, anchor: Vec2, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        self.moved(-anchor)
            .chained(&Self::new([c, s, -s, c, 0.0, 0.0]))
            .moved(anchor)
    }

    /// Composes `next` after `self`: the result projects `p` to
    /// `next.project(self.project(p))`.
    pub fn chained(&self, next: &Self) -> Self {
        let m = &self.data;
        let n = &next.data;
        Self::new([
            n[0] * m[0] + n[2] * m[1],
            n[1] * m[0] + n[3] * m[1],
            n[0] * m[2] + n[2] * m[3],
            n[1] * m[2] + n[3] * m[3],
            n[0] * m[4] + n[2] * m[5] + n[4],
            n[1] * m[4] + n[3] * m[5] + n[5],
        ])
    }

    /// Determinant of the 2×2 linear part.
    pub fn determinant(&self) -> f64 {
        let m = &self.data;
        m[0] * m[3] - m[2] * m[1]
    }

    /// Applies the forward transform to `point`.
    pub fn project(&self, point: Vec2) -> Vec2 {
        let m = &self.data;
        Vec2::new(
            m[0] * point.x + m[2] * point.y + m[4],
            m[1] * point.x + m[3] * point.y + m[5],
        )
    }

    /// Applies the inverse transform to `point`, solving `M·p = point` for `p`.
    ///
    /// Uses the closed-form inverse of the linear part. When the determinant
    /// is zero both coordinates of the result are NaN; this is the documented
    /// outcome for degenerate matrices rather than an error.
    pub fn unproject(&self, point: Vec2) -> Vec2 {
        let m = &self.data;
        let det = self.determinant();
        if det == 0.0 {
            trace!(matrix = %self, "unprojecting through a singular matrix");
            return Vec2::new(f64::NAN, f64::NAN);
        }
        let dx = point.x - m[4];
        let dy = point.y - m[5];
        Vec2::new(
            (m[3] * dx - m[2] * dy) / det,
            (-m[1] * dx + m[0] * dy) / det,
        )
    }

    /// Returns the inverse transform as a matrix.
    ///
    /// `inverted()?.project(q)` agrees with [`unproject`](Self::unproject)
    /// for every invertible matrix.
    ///
    /// # Errors
    /// [`GeomError::SingularMatrix`] when the determinant is zero or not
    /// finite.
    pub fn inverted(&self) -> Result<Self, GeomError> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            debug!(determinant = det, "refusing to invert singular matrix");
            return Err(GeomError::SingularMatrix { determinant: det });
        }
        let [a, b, c, d, e, f] = self.data;
        Ok(Self::new([
            d / det,
            -b / det,
            -c / det,
            a / det,
            (c * f - d * e) / det,
            (b * e - a * f) / det,
        ]))
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f64; 6]> for Matrix {
    fn from(value: [f64; 6]) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.data;
        write!(
            f,
            "Matrix({} {} {} | {} {} {})",
            m[0], m[2], m[4], m[1], m[3], m[5]
        )
    }
}
