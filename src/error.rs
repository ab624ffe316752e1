// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the Tait-0 engine.

use crate::symbolic::Symbolic;
use thiserror::Error;

/// Errors raised by the planar-layout, spin-sweep and cross-check routines.
///
/// Malformed inputs (non-square matrices, size mismatches between a Faces
/// Matrix and a fixed-spin map, …) are programmer errors and are not part of
/// this enum; they panic via `assert!` at the boundary instead.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// No planar embedding exists for the given adjacency matrix.
    #[error("graph has no planar embedding")]
    NotPlanar,

    /// The given adjacency matrix is not 3-regular. The planar layout and
    /// face tracer are only grounded on cubic graphs.
    #[error("graph is not cubic: vertex degrees must all be 3")]
    NotCubic,

    /// The linear system `(M(sigma_free) | l)` is inconsistent for some
    /// assignment of the free vertices.
    #[error(
        "fixed-spin system is inconsistent for sigma_free={sigma_free:?}: rank(M)={rank_m} != rank(M|l)={rank_aug}"
    )]
    Inconsistent {
        sigma_free: Vec<i8>,
        augmented: Vec<Vec<i8>>,
        rank_m: usize,
        rank_aug: usize,
    },

    /// The aggregate sum of Gaussian-sum terms did not simplify to a
    /// rational integer. This always indicates a bug or a malformed input.
    #[error("sum of gaussian terms did not simplify to an integer: {value}")]
    NotInteger { value: Symbolic },

    /// The dual chromatic polynomial evaluated at 4 was not divisible by 12.
    #[error("chromatic_polynomial(dual, 4) = {value} is not divisible by 12")]
    NotDivisibleBy12 { value: i64 },

    /// A sweep observed its cooperative cancellation flag set.
    #[error("sweep cancelled")]
    CancelledSweep,
}
