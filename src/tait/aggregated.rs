// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The aggregated Tait-0 enumerator: the same sweep as [`super::detailed`],
//! grouped by `(det', rank, gauss)`.

use super::masks::{fill_matrix, sigma_from_index};
use crate::error::Error;
use crate::faces_matrix::FacesMatrix;
use crate::field3::{largest_nonzero_principal_minor, Trit};
use crate::sweep::SweepOptions;
use crate::symbolic::Symbolic;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct AggregatedResult {
    pub n_tait_0: i64,
    pub n_even_ranks: usize,
    pub n_odd_ranks: usize,
    pub n_zero_ranks: usize,
    pub det_minors: Vec<Trit>,
    pub ranks: Vec<usize>,
    pub gauss_sums: Vec<Symbolic>,
    pub nums: Vec<usize>,
    pub total_gauss_sums: Vec<Symbolic>,
}

/// Aggregation key: `Symbolic` doesn't implement `Ord` (it carries
/// `BigInt`s over an unbounded denominator lattice), so keys are grouped by
/// `(det', rank)` plus the Gaussian term's `Display` string, which is a
/// stable canonical form since every value is already kept in lowest terms.
type AggKey = (Trit, usize, String);

#[tracing::instrument(skip_all, fields(f = fm.n_faces(), v = fm.n_vertices()))]
pub fn calc_tait_0_aggregated(
    fm: &FacesMatrix,
    opts: &SweepOptions,
) -> Result<AggregatedResult, Error> {
    let n_faces = fm.n_faces();
    let v = fm.n_vertices();
    let masks = fm.masks_tensor();
    let total: u64 = 1u64 << v;
    tracing::debug!(total, "starting aggregated sweep");

    let compute = |k: u64| -> Result<(Symbolic, Trit, usize), Error> {
        if opts.is_cancelled() {
            return Err(Error::CancelledSweep);
        }
        let sigma = sigma_from_index(v, k);
        let m = fill_matrix(&masks, &sigma, n_faces);
        let (det_prime, rank, _) = largest_nonzero_principal_minor(&m);
        let gauss = Symbolic::from_gauss_term(det_prime, rank);
        Ok((gauss, det_prime, rank))
    };

    let results: Vec<(Symbolic, Trit, usize)> = if opts.parallel {
        use rayon::prelude::*;
        (0..total)
            .into_par_iter()
            .map(compute)
            .collect::<Result<Vec<_>, Error>>()?
    } else {
        (0..total).map(compute).collect::<Result<Vec<_>, Error>>()?
    };

    let mut n_zero_ranks = 0;
    let mut n_even_ranks = 0;
    let mut n_odd_ranks = 0;
    let mut data: BTreeMap<AggKey, (Trit, usize, Symbolic, usize)> = BTreeMap::new();
    let mut running = Symbolic::zero();

    for (gauss, det_prime, rank) in results {
        let key = (det_prime, rank, gauss.to_string());
        let entry = data
            .entry(key)
            .or_insert_with(|| (det_prime, rank, gauss.clone(), 0));
        entry.3 += 1;

        running = running.add(&gauss);

        if rank == 0 {
            n_zero_ranks += 1;
        } else if rank % 2 == 1 {
            n_odd_ranks += 1;
        } else {
            n_even_ranks += 1;
        }
    }

    let n_tait_0 = running
        .to_integer()
        .ok_or_else(|| Error::NotInteger { value: running.clone() })?;

    let mut det_minors = Vec::with_capacity(data.len());
    let mut ranks = Vec::with_capacity(data.len());
    let mut gauss_sums = Vec::with_capacity(data.len());
    let mut nums = Vec::with_capacity(data.len());
    let mut total_gauss_sums = Vec::with_capacity(data.len());
    for (det_prime, rank, gauss, num) in data.into_values() {
        let total_gauss = Symbolic::sum(std::iter::repeat(gauss.clone()).take(num));
        det_minors.push(det_prime);
        ranks.push(rank);
        gauss_sums.push(gauss);
        nums.push(num);
        total_gauss_sums.push(total_gauss);
    }

    tracing::debug!(n_tait_0, keys = nums.len(), "aggregated sweep complete");

    Ok(AggregatedResult {
        n_tait_0,
        n_even_ranks,
        n_odd_ranks,
        n_zero_ranks,
        det_minors,
        ranks,
        gauss_sums,
        nums,
        total_gauss_sums,
    })
}
