// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Core shape types (rectangle, circle).
//!
//! Boundary conventions:
//! - Point containment is closed for both shapes: points on the edge or
//!   circumference are inside.
//! - Separation vectors treat exact tangency as *no* overlap.
//! - Rectangle queries assume `min <= max` per axis; use
//!   [`Rect::normalized`](rect::Rect::normalized) or
//!   [`Rect::checked`](rect::Rect::checked) when that is not known.

#[doc = "Circles (disks) with signed stored radius."]
pub mod circle;
#[doc = "Axis-aligned rectangles."]
pub mod rect;
