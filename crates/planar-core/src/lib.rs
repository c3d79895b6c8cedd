// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! planar-core: the numeric foundation of the planar geometry kernel.
//!
//! This crate provides:
//! - A 2D vector (`Vec2`) with the usual point/direction algebra.
//! - A 2D affine matrix (`Matrix`) with fluent, value-returning builders and
//!   forward/inverse projection.
//! - Small scalar helpers shared by the higher-level shape types.
//!
//! Numeric policy:
//! - `f64` throughout; NaN and infinities propagate per IEEE-754 instead of
//!   being reported as errors.
//! - Every value type is `Copy` and immutable; builders return new values.
//! - Only helpers that are fallible by name (`Matrix::inverted`) return
//!   [`GeomError`].
#![forbid(unsafe_code)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::suboptimal_flops
)]

mod error;
pub mod math;

pub use error::{Axis, GeomError};
pub use math::{Matrix, Vec2};
