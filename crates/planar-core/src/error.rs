// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Axis of a 2D quantity, used to point at the offending component.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal component.
    X,
    /// Vertical component.
    Y,
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Errors emitted by the explicitly fallible geometry helpers.
///
/// The core operations never return these; degenerate math surfaces as NaN
/// or infinity instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeomError {
    /// The linear part of a matrix has no inverse.
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix {
        /// Determinant of the 2×2 linear part.
        determinant: f64,
    },
    /// A coordinate was NaN or infinite where a finite value is required.
    #[error("non-finite coordinate")]
    NonFinite,
    /// A minimum corner lies past its maximum corner.
    #[error("inverted bounds on the {axis} axis: min > max")]
    InvertedBounds {
        /// Axis whose bounds are inverted.
        axis: Axis,
    },
}
