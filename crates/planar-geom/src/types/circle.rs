// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::f64::consts::PI;
use core::fmt;

use planar_core::math::Vec2;

use crate::types::rect::Rect;

/// Disk given by a center and a radius.
///
/// The stored radius may be negative (for example after
/// [`resized`](Self::resized) with a negative delta). Queries that need a
/// true radius use its absolute value or its square;
/// [`normalized`](Self::normalized) canonicalizes the sign.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// Center point.
    pub center: Vec2,
    /// Signed radius.
    pub radius: f64,
}

impl Circle {
    /// Creates a circle; the radius is stored exactly as given.
    pub const fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Same circle with a non-negative radius.
    pub fn normalized(&self) -> Self {
        Self::new(self.center, self.radius.abs())
    }

    /// `π·r²`; independent of the radius sign.
    pub fn area(&self) -> f64 {
        PI * (self.radius * self.radius)
    }

    /// Translates the center by `delta`.
    pub fn moved(&self, delta: Vec2) -> Self {
        Self::new(self.center.add(&delta), self.radius)
    }

    /// Adds `delta` to the stored radius. The result may be negative.
    pub fn resized(&self, delta: f64) -> Self {
        Self::new(self.center, self.radius + delta)
    }

    /// Returns `true` if `point` lies inside or on the circumference.
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.to(&point).len_squared() <= self.radius * self.radius
    }

    /// Returns `(larger, smaller)` by absolute radius; ties keep `self` first.
    fn ordered<'a>(&'a self, other: &'a Self) -> (&'a Self, &'a Self) {
        if other.radius.abs() > self.radius.abs() {
            (other, self)
        } else {
            (self, other)
        }
    }

    /// Smallest circle enclosing both circles.
    ///
    /// If one circle already contains the other (including coincident
    /// centers) the containing circle is returned as stored. Otherwise the
    /// result touches both circles on the line through their centers.
    pub fn union(&self, other: &Self) -> Self {
        let (bigger, smaller) = self.ordered(other);
        let offset = self.center.to(&other.center);
        let dist = offset.len();
        if dist + smaller.radius.abs() <= bigger.radius.abs() {
            return *bigger;
        }

        let r1 = self.radius.abs();
        let r2 = other.radius.abs();
        let radius = (dist + r1 + r2) / 2.0;
        let center = self.center.add(&offset.scaled((dist + r2 - r1) / (2.0 * dist)));
        Self::new(center, radius)
    }

    /// Geometric intersection of both circles.
    ///
    /// - One circle contains the other: the containing circle, as stored.
    /// - Disjoint or tangent: a zero-radius circle at the midpoint of the
    ///   centers, so the result still carries a location.
    /// - Partial overlap: centered at the midpoint of the centers with the
    ///   overlap depth `|r1| + |r2| - d` as radius. The depth is symmetric,
    ///   shrinks to zero as the circles separate, and equals `r` for two
    ///   radius-`r` circles whose centers are `r` apart.
    ///
    /// The radius is continuous only where partial overlap meets the
    /// disjoint case. At the containment boundary it jumps: with radii 10
    /// and 1, `d = 9` returns the radius-10 circle while `d = 9.0001`
    /// returns a depth of about 2.
    pub fn intersect(&self, other: &Self) -> Self {
        let (bigger, smaller) = self.ordered(other);
        let dist = self.center.to(&other.center).len();
        if bigger.radius.abs() >= dist + smaller.radius.abs() {
            return *bigger;
        }

        let center = self.center.lerp(&other.center, 0.5);
        let reach = self.radius.abs() + other.radius.abs();
        if dist >= reach {
            return Self::new(center, 0.0);
        }
        Self::new(center, reach - dist)
    }

    /// Separation vector from the circle's point of view: the displacement
    /// to apply to `rect` to resolve the overlap.
    ///
    /// Always `-rect.intersect_circle(self)`.
    pub fn intersect_rect(&self, rect: &Rect) -> Vec2 {
        -rect.intersect_circle(self)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle({}, {:.2})", self.center, self.radius)
    }
}
