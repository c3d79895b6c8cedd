// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![doc = r"Shape primitives for the planar geometry kernel.

This crate provides:
- Axis-aligned rectangles (`Rect`) with anchored resizing and the
  rectangle/circle minimum-separation vector.
- Circles (`Circle`) with containment, enclosing union, and intersection.

Design notes:
- Pure value types: every query returns a new value, nothing mutates.
- Float64 throughout; degenerate inputs produce NaN/infinity instead of
  errors, matching `planar-core`.
- Rustdoc is treated as part of the contract; public items are documented.
"]
#![forbid(unsafe_code)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::suboptimal_flops
)]

/// Foundational shape types.
pub mod types;

pub use types::circle::Circle;
pub use types::rect::Rect;
