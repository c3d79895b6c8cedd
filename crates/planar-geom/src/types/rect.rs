// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use planar_core::math::{self, Vec2};
use planar_core::{Axis, GeomError};
use tracing::{debug, trace};

use crate::types::circle::Circle;

/// Axis-aligned rectangle spanned by two opposite corners.
///
/// Invariants:
/// - Geometry queries (`center`, `size`, containment, collision) assume
///   `min <= max` on both axes; callers own that invariant.
/// - [`resized`](Self::resized) and [`moved`](Self::moved) do not require it,
///   so rectangles can pass through inverted states mid-transform.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Minimum (bottom-left) corner.
    pub min: Vec2,
    /// Maximum (top-right) corner.
    pub max: Vec2,
}

/// Rectangle side, used to pick the direction of a separation vector.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// Unit vector pointing out of the rectangle through this side.
    fn outward(self) -> Vec2 {
        match self {
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
            Self::Top => Vec2::new(0.0, 1.0),
            Self::Bottom => Vec2::new(0.0, -1.0),
        }
    }

    /// Unit vector pointing into the rectangle through this side.
    fn inward(self) -> Vec2 {
        match self {
            Self::Left => Vec2::new(1.0, 0.0),
            Self::Right => Vec2::new(-1.0, 0.0),
            Self::Top => Vec2::new(0.0, -1.0),
            Self::Bottom => Vec2::new(0.0, 1.0),
        }
    }
}

impl Rect {
    /// The zero rectangle at the origin.
    pub const ZERO: Self = Self::new(Vec2::ZERO, Vec2::ZERO);

    /// Constructs a rectangle from its corners without validation.
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Constructs a rectangle from raw corner coordinates.
    pub const fn from_coords(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
    }

    /// Constructs a rectangle, rejecting corners that break the query invariants.
    ///
    /// # Errors
    /// - [`GeomError::NonFinite`] if any coordinate is NaN or infinite.
    /// - [`GeomError::InvertedBounds`] if `min` exceeds `max` on an axis.
    pub fn checked(min: Vec2, max: Vec2) -> Result<Self, GeomError> {
        if !min.is_finite() || !max.is_finite() {
            debug!(%min, %max, "rejecting rectangle with non-finite corner");
            return Err(GeomError::NonFinite);
        }
        let axis = if min.x > max.x {
            Some(Axis::X)
        } else if min.y > max.y {
            Some(Axis::Y)
        } else {
            None
        };
        if let Some(axis) = axis {
            debug!(%min, %max, %axis, "rejecting rectangle with inverted bounds");
            return Err(GeomError::InvertedBounds { axis });
        }
        Ok(Self::new(min, max))
    }

    /// Returns the same rectangle with corners swapped so that `min <= max`.
    pub fn normalized(&self) -> Self {
        Self::new(
            Vec2::new(self.min.x.min(self.max.x), self.min.y.min(self.max.y)),
            Vec2::new(self.min.x.max(self.max.x), self.min.y.max(self.max.y)),
        )
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// `max - min`.
    pub fn size(&self) -> Vec2 {
        self.max.sub(&self.min)
    }

    /// Width times height.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Midpoint of the two corners.
    pub fn center(&self) -> Vec2 {
        self.min.add(&self.max).scaled(0.5)
    }

    /// The four corners: `[min, (min.x, max.y), max, (max.x, min.y)]`.
    pub fn vertices(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.min.x, self.max.y),
            self.max,
            Vec2::new(self.max.x, self.min.y),
        ]
    }

    /// Translates both corners by `delta`.
    pub fn moved(&self, delta: Vec2) -> Self {
        Self::new(self.min.add(&delta), self.max.add(&delta))
    }

    /// Resizes to `size` keeping `anchor` at the same relative position.
    ///
    /// The anchor's fractional position `t = (anchor - min) / size()` is
    /// preserved: the result has `min = anchor - t * size` and
    /// `max = min + size`. `t` may lie outside `[0, 1]` when `anchor` is
    /// outside the rectangle. A zero-size axis makes `t` NaN or infinite and
    /// the result propagates it.
    pub fn resized(&self, anchor: Vec2, size: Vec2) -> Self {
        let current = self.size();
        if current.x == 0.0 || current.y == 0.0 {
            trace!(rect = %self, %anchor, "resizing a rectangle with a zero-size axis");
        }
        let t = Vec2::new(
            (anchor.x - self.min.x) / current.x,
            (anchor.y - self.min.y) / current.y,
        );
        let min = anchor.sub(&t.scaled_xy(&size));
        Self::new(min, min.add(&size))
    }

    /// Resizes to `size` keeping `min` fixed.
    pub fn resized_min(&self, size: Vec2) -> Self {
        Self::new(self.min, self.min.add(&size))
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    pub fn contains(&self, point: Vec2) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }

    /// Returns `true` if the interiors overlap; touching edges do not count.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Smallest rectangle containing both rectangles.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            Vec2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            Vec2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        )
    }

    /// Overlap of both rectangles, or [`Rect::ZERO`] if it has no area.
    pub fn intersect(&self, other: &Self) -> Self {
        let overlap = Self::new(
            Vec2::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            Vec2::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        );
        if overlap.min.x >= overlap.max.x || overlap.min.y >= overlap.max.y {
            return Self::ZERO;
        }
        overlap
    }

    /// Minimum-separation vector resolving an overlap with `circle`.
    ///
    /// Returns [`Vec2::ZERO`] when the shapes do not overlap; exact tangency
    /// is not an overlap. Otherwise the vector is meant to be added to the
    /// circle's position:
    ///
    /// - Center outside the rectangle: push the circle directly away from
    ///   the closest point until it clears the boundary.
    /// - Center inside (or on the boundary): find the nearest side, ties
    ///   resolved in the order left, right, top, bottom. If the circle
    ///   reaches no side, or reaches all four, push it fully out through
    ///   that side (`nearest + radius`). Otherwise it pokes through some
    ///   sides only, so pull it fully inside (`radius - nearest`).
    ///
    /// The stored radius sign is ignored.
    pub fn intersect_circle(&self, circle: &Circle) -> Vec2 {
        let center = circle.center;
        let radius = circle.radius.abs();
        let closest = Vec2::new(
            math::clamp(center.x, self.min.x, self.max.x),
            math::clamp(center.y, self.min.y, self.max.y),
        );

        if closest != center {
            let away = closest.to(&center);
            let dist = away.len();
            if dist >= radius {
                return Vec2::ZERO;
            }
            return away.unit().scaled(radius - dist);
        }

        let distances = [
            (Side::Left, center.x - self.min.x),
            (Side::Right, self.max.x - center.x),
            (Side::Top, self.max.y - center.y),
            (Side::Bottom, center.y - self.min.y),
        ];
        let (mut side, mut nearest) = distances[0];
        let mut farthest = nearest;
        for &(s, d) in &distances[1..] {
            // Strict comparison keeps the earliest side on ties.
            if d < nearest {
                side = s;
                nearest = d;
            }
            farthest = farthest.max(d);
        }

        if radius <= nearest || radius > farthest {
            side.outward().scaled(nearest + radius)
        } else {
            side.inward().scaled(radius - nearest)
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect({}, {})", self.min, self.max)
    }
}
