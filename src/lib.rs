// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tait colorings of planar cubic graphs via an F3-algebraic representation.
//!
//! Given a planar cubic graph's adjacency matrix, this crate:
//!
//! 1. Finds a planar embedding (rotation-system search + Tutte layout).
//! 2. Traces the embedding's faces and builds their Faces Matrix.
//! 3. Counts Tait colorings (`Tait-0`) by summing Gaussian sums of the
//!    Faces Matrix over every spin assignment `sigma in {-1,+1}^V`, exactly,
//!    in `Z[i,sqrt(3)][1/d]`.
//!
//! Four independent routes compute (or cross-check) the same count:
//!
//! - [`tait::calc_tait_0_detailed`] / [`tait::calc_tait_0_aggregated`]: the
//!   direct spin sweep, respectively per-sigma and grouped by
//!   `(det', rank, gauss)`.
//! - [`fixed::calc_tait_0_fixed`]: the same sweep restricted to the
//!   vertices a partial spin assignment leaves free.
//! - [`dual::calc_tait_0_dual_chromatic`]: an independent cross-check via
//!   the face-adjacency graph's chromatic polynomial at `x = 4`.
//!
//! # References
//!
//! Distilled from the Tait-coloring chapter of an unpublished manuscript on
//! algebraic approaches to graph coloring.

pub mod dual;
pub mod error;
pub mod faces_matrix;
pub mod field3;
pub mod fixed;
pub mod graph;
pub mod heawood;
pub mod svalues;
pub mod sweep;
pub mod symbolic;
pub mod tait;

pub use dual::{calc_tait_0_dual_chromatic, DualAdjacency};
pub use error::Error;
pub use faces_matrix::{build_faces_matrix, FacesMatrix};
pub use fixed::{calc_tait_0_fixed, FixedResult};
pub use graph::{find_faces, positions, AdjacencyMatrix, Face};
pub use heawood::calc_heawood;
pub use svalues::calc_s_values;
pub use sweep::SweepOptions;
pub use tait::{
    calc_tait_0_aggregated, calc_tait_0_detailed, AggregatedResult, DetailedResult,
};
