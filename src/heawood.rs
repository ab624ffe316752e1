// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Brute-force enumeration of the spin assignments consistent with the
//! Heawood-style `sum of spins = 0 (mod 3)` constraint on every face.

use crate::graph::Face;

fn sigma_from_index(v: usize, k: u64) -> Vec<i8> {
    (0..v)
        .map(|p| if (k >> (v - 1 - p)) & 1 == 1 { 1i8 } else { -1i8 })
        .collect()
}

/// For each `sigma in {-1,+1}^V` (V derived from `faces.len()` as
/// `2 * (n_faces - 2)`), keep it only if every face's spins sum to `0 mod 3`.
/// Faces are deduplicated by vertex before summing, matching
/// [`crate::faces_matrix::build_faces_matrix`]'s diagonal cells.
pub fn calc_heawood(faces: &[Face]) -> Vec<Vec<i8>> {
    let n_faces = faces.len();
    let n_vertices = 2 * n_faces.saturating_sub(2);

    let deduped: Vec<Vec<usize>> = faces
        .iter()
        .map(|face| {
            let mut v = face.clone();
            v.sort_unstable();
            v.dedup();
            v
        })
        .collect();

    let total: u64 = 1u64 << n_vertices;
    let mut good = Vec::new();
    for k in 0..total {
        let sigma = sigma_from_index(n_vertices, k);
        let consistent = deduped.iter().all(|face| {
            let s: i64 = face.iter().map(|&v| sigma[v] as i64).sum();
            s.rem_euclid(3) == 0
        });
        if consistent {
            good.push(sigma);
        }
    }
    good
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k4_heawood_matches_tait_0() {
        // K4's Faces Matrix has 4 faces, each a triangle on 3 of the 4 vertices.
        let faces: Vec<Face> = vec![
            vec![0, 1, 2],
            vec![0, 1, 3],
            vec![1, 2, 3],
            vec![0, 2, 3],
        ];
        let good = calc_heawood(&faces);
        // Every sigma is checked against all 4 faces, each excluding one vertex,
        // so this is a much stronger filter than a single face; just check it
        // runs over the full 2^4 space and returns a subset of it.
        assert!(good.len() <= 16);
        for sigma in &good {
            assert_eq!(sigma.len(), 4);
        }
    }

    #[test]
    fn two_faces_has_no_vertices() {
        let faces: Vec<Face> = vec![vec![0], vec![0]];
        let good = calc_heawood(&faces);
        // n_vertices = 2*(2-2) = 0, so the only sigma is the empty one.
        assert_eq!(good, vec![vec![]]);
    }
}
