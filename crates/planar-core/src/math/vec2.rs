// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops;

/// 2D vector used for both points and directions.
///
/// * Components are plain `f64`; NaN and infinities propagate through every
///   operation rather than being rejected.
/// * All operations return new values, the receiver is never mutated.
/// * Use [`crate::math::Matrix::project`] to move points between spaces.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Vec2 {
    /// The zero vector (origin).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector at `angle` radians counter-clockwise from the positive X axis.
    pub fn from_angle(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, s)
    }

    /// Returns the components as `[x, y]`.
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Vector from `self` to `other` (`other - self`).
    pub fn to(&self, other: &Self) -> Self {
        other.sub(self)
    }

    /// Scales both components by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Component-wise product.
    pub fn scaled_xy(&self, factors: &Self) -> Self {
        Self::new(self.x * factors.x, self.y * factors.y)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of `self` and `other`.
    pub fn cross(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Vector length (magnitude).
    pub fn len(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Squared magnitude of the vector.
    pub fn len_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Angle from the positive X axis in radians, in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Returns the vector scaled to length 1.
    ///
    /// A zero-length vector yields [`Vec2::ZERO`] so callers can detect the
    /// degenerate case without NaN checks. NaN components still propagate.
    pub fn unit(&self) -> Self {
        let len = self.len();
        if len == 0.0 {
            return Self::ZERO;
        }
        self.scaled(1.0 / len)
    }

    /// Perpendicular vector, rotated a quarter turn counter-clockwise.
    pub fn normal(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotates the vector counter-clockwise by `angle` radians.
    pub fn rotated(&self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Projection of `self` onto the direction of `onto`.
    ///
    /// Projecting onto the zero vector yields the zero vector.
    pub fn project(&self, onto: &Self) -> Self {
        let len = self.dot(&onto.unit());
        onto.unit().scaled(len)
    }

    /// Applies `f` to each component.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y))
    }

    /// Rounds both components down.
    pub fn floor(&self) -> Self {
        self.map(f64::floor)
    }

    /// Linear interpolation towards `other`; `t` outside `[0, 1]` extrapolates.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        self.scaled(1.0 - t).add(&other.scaled(t))
    }

    /// Returns `true` when neither component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec({}, {})", self.x, self.y)
    }
}

impl ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::add(&self, &rhs)
    }
}

impl ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::sub(&self, &rhs)
    }
}

impl ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl ops::Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.scaled(rhs)
    }
}

impl ops::Div<f64> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}
