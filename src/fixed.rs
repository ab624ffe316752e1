// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The fixed-spin Tait-0 enumerator: sweep only the vertices left free by a
//! partial spin assignment, with a consistency check on the augmented
//! linear system and a bordered-determinant character twist.

use crate::error::Error;
use crate::faces_matrix::FacesMatrix;
use crate::field3::{det_symmetric, largest_nonzero_principal_minor, rank_rect, reduce_mod3, Trit};
use crate::sweep::SweepOptions;
use crate::symbolic::Symbolic;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct FixedResult {
    pub n_tait_0: i64,
    pub det_list: Vec<Trit>,
    pub rank_list: Vec<usize>,
    pub gauss_list: Vec<Symbolic>,
    pub bordered_det_list: Vec<Trit>,
    pub chi_list: Vec<Symbolic>,
    pub term_list: Vec<Symbolic>,
}

fn fill_matrix(masks: &[Vec<Vec<bool>>], sigma: &[i8], n_faces: usize) -> Vec<Vec<i64>> {
    let mut m = vec![vec![0i64; n_faces]; n_faces];
    for (idx, &s) in sigma.iter().enumerate() {
        let mv = &masks[idx];
        for (i, row) in mv.iter().enumerate() {
            for (j, &present) in row.iter().enumerate() {
                if present {
                    m[i][j] += s as i64;
                }
            }
        }
    }
    m
}

fn sigma_from_index(v: usize, k: u64) -> Vec<i8> {
    (0..v)
        .map(|p| if (k >> (v - 1 - p)) & 1 == 1 { 1i8 } else { -1i8 })
        .collect()
}

/// `calc_tait_0_fixed`: the same sweep as [`crate::tait::calc_tait_0_detailed`]
/// restricted to the vertices `fixed` doesn't pin, with a consistency check
/// against the linear functional `ell` the fixed spins induce on each face.
/// Returns `Error::Inconsistent` if `(M(sigma_free) | ell)` ever has higher
/// rank than `M(sigma_free)` alone — no spin coloring can extend a fixed
/// assignment that makes that system overdetermined.
#[tracing::instrument(skip_all, fields(f = fm.n_faces(), fixed = fixed.len()))]
pub fn calc_tait_0_fixed(
    fm: &FacesMatrix,
    fixed: &BTreeMap<usize, i8>,
    opts: &SweepOptions,
) -> Result<FixedResult, Error> {
    let n_faces = fm.n_faces();
    let n_vertices = fm.n_vertices();

    let ell: Vec<Trit> = (0..n_faces)
        .map(|i| {
            let s: i64 = fm
                .cell(i, i)
                .iter()
                .map(|v| *fixed.get(v).unwrap_or(&0) as i64)
                .sum();
            reduce_mod3(s)
        })
        .collect();

    let free: Vec<usize> = (0..n_vertices).filter(|v| !fixed.contains_key(v)).collect();
    let full_masks = fm.masks_tensor();
    let free_masks: Vec<Vec<Vec<bool>>> = free.iter().map(|&v| full_masks[v].clone()).collect();

    let total: u64 = 1u64 << free.len();
    tracing::debug!(total, free = free.len(), "starting fixed-spin sweep");

    let mut det_list = Vec::with_capacity(total as usize);
    let mut rank_list = Vec::with_capacity(total as usize);
    let mut gauss_list = Vec::with_capacity(total as usize);
    let mut bordered_det_list = Vec::with_capacity(total as usize);
    let mut chi_list = Vec::with_capacity(total as usize);
    let mut term_list = Vec::with_capacity(total as usize);

    for k in 0..total {
        if opts.is_cancelled() {
            return Err(Error::CancelledSweep);
        }
        let sigma_free = sigma_from_index(free.len(), k);
        let m = fill_matrix(&free_masks, &sigma_free, n_faces);
        let (det_prime, rank, rows) = largest_nonzero_principal_minor(&m);

        let mut augmented: Vec<Vec<i64>> = m
            .iter()
            .zip(ell.iter())
            .map(|(row, &l)| {
                let mut r = row.clone();
                r.push(l as i64);
                r
            })
            .collect();
        let rank_aug = rank_rect(&augmented);
        if rank != rank_aug {
            let augmented_trit: Vec<Vec<Trit>> = augmented
                .drain(..)
                .map(|row| row.into_iter().map(reduce_mod3).collect())
                .collect();
            return Err(Error::Inconsistent {
                sigma_free,
                augmented: augmented_trit,
                rank_m: rank,
                rank_aug,
            });
        }

        let r = rows.len();
        let mut bordered = vec![vec![0i64; r + 1]; r + 1];
        for (a, &ra) in rows.iter().enumerate() {
            for (b, &rb) in rows.iter().enumerate() {
                bordered[a][b] = m[ra][rb];
            }
            bordered[a][r] = ell[ra] as i64;
            bordered[r][a] = ell[ra] as i64;
        }
        let bordered_det = det_symmetric(&bordered);

        let chi_exponent = reduce_mod3(bordered_det as i64 * det_prime as i64);
        let chi_val = Symbolic::chi(chi_exponent);
        let gauss = Symbolic::from_gauss_term(det_prime, rank);
        let term = chi_val.mul(&gauss);

        det_list.push(det_prime);
        rank_list.push(rank);
        gauss_list.push(gauss);
        bordered_det_list.push(bordered_det);
        chi_list.push(chi_val);
        term_list.push(term);
    }

    let sum = Symbolic::sum(term_list.iter().cloned());
    let n_tait_0 = sum
        .to_integer()
        .ok_or_else(|| Error::NotInteger { value: sum.clone() })?;
    tracing::debug!(n_tait_0, "fixed-spin sweep complete");

    Ok(FixedResult {
        n_tait_0,
        det_list,
        rank_list,
        gauss_list,
        bordered_det_list,
        chi_list,
        term_list,
    })
}
