// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `s`-values: for every `x in {-1,0,1}^F` and every spin assignment on a
//! "mid" subset of vertices, sum `chi(x^T M x mod 3)` over every spin
//! assignment on an "in" subset, where `M` combines both groups' masks.

use crate::faces_matrix::FacesMatrix;
use crate::field3::reduce_mod3;
use crate::symbolic::Symbolic;
use crate::tait::masks::{fill_matrix, sigma_from_index};

fn trit_vector_from_index(n: usize, idx: u64) -> Vec<i8> {
    let mut digits = vec![0u8; n];
    let mut rem = idx;
    for p in (0..n).rev() {
        digits[p] = (rem % 3) as u8;
        rem /= 3;
    }
    digits
        .into_iter()
        .map(|d| match d {
            0 => -1,
            1 => 0,
            _ => 1,
        })
        .collect()
}

/// `sum_{sigma_in} chi((x^T M x) mod 3)`, one entry per `(sigma_mid, x)`
/// pair, `x` varying fastest. `M = (M_in(sigma_in) + M_mid(sigma_mid)) mod 3`.
pub fn calc_s_values(
    fm: &FacesMatrix,
    vertices_in: &[usize],
    vertices_mid: &[usize],
) -> Vec<Symbolic> {
    let n_faces = fm.n_faces();
    let masks = fm.masks_tensor();

    let mid_masks: Vec<_> = vertices_mid.iter().map(|&v| masks[v].clone()).collect();
    let in_masks: Vec<_> = vertices_in.iter().map(|&v| masks[v].clone()).collect();

    let total_mid: u64 = 1u64 << vertices_mid.len();
    let total_in: u64 = 1u64 << vertices_in.len();
    let total_x: u64 = 3u64.pow(n_faces as u32);

    let mut results = Vec::with_capacity((total_mid * total_x) as usize);

    for mid_idx in 0..total_mid {
        let sigma_mid = sigma_from_index(vertices_mid.len(), mid_idx);
        let m_mid = fill_matrix(&mid_masks, &sigma_mid, n_faces);

        for x_idx in 0..total_x {
            let x = trit_vector_from_index(n_faces, x_idx);

            let mut s = Symbolic::zero();
            for in_idx in 0..total_in {
                let sigma_in = sigma_from_index(vertices_in.len(), in_idx);
                let m_in = fill_matrix(&in_masks, &sigma_in, n_faces);

                let mut quad: i64 = 0;
                for i in 0..n_faces {
                    for j in 0..n_faces {
                        let mij = reduce_mod3(m_in[i][j] + m_mid[i][j]) as i64;
                        quad += x[i] as i64 * mij * x[j] as i64;
                    }
                }
                let chi_exponent = reduce_mod3(quad);
                s = s.add(&Symbolic::chi(chi_exponent));
            }
            results.push(s);
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faces_matrix::build_faces_matrix;
    use crate::graph::Face;

    fn k4_faces_matrix() -> FacesMatrix {
        let faces: Vec<Face> = vec![
            vec![0, 1, 2, 0],
            vec![0, 1, 3, 0],
            vec![1, 2, 3, 1],
            vec![0, 2, 3, 0],
        ];
        build_faces_matrix(&faces)
    }

    #[test]
    fn trit_vector_extremes() {
        assert_eq!(trit_vector_from_index(3, 0), vec![-1, -1, -1]);
        assert_eq!(trit_vector_from_index(3, 26), vec![1, 1, 1]);
    }

    #[test]
    fn empty_in_and_mid_gives_one_term_per_x() {
        let fm = k4_faces_matrix();
        let results = calc_s_values(&fm, &[], &[]);
        // With no "in" vertices, the inner sweep has exactly one term:
        // sigma_in is the empty tuple, M is the zero matrix, so
        // x^T M x = 0 and chi(0) = 1 for every x.
        assert_eq!(results.len(), 3usize.pow(fm.n_faces() as u32));
        for s in &results {
            assert_eq!(s.to_integer(), Some(1));
        }
    }

    #[test]
    fn result_count_matches_mid_times_x_space() {
        let fm = k4_faces_matrix();
        let vertices_mid = vec![0];
        let results = calc_s_values(&fm, &[1, 2], &vertices_mid);
        assert_eq!(
            results.len(),
            (1usize << vertices_mid.len()) * 3usize.pow(fm.n_faces() as u32)
        );
    }
}
