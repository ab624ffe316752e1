// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counter-clockwise face tracing of a planar straight-line embedding.

use super::adjacency::AdjacencyMatrix;
use std::f64::consts::PI;

/// A face of a planar embedding: a cyclic vertex sequence with `face[0] ==
/// *face.last()`.
pub type Face = Vec<usize>;

/// Trace every face of the planar embedding `(adj, pos)`.
///
/// Works purely from the given coordinates, so it is usable standalone on
/// any valid straight-line embedding, not only ones produced by
/// [`super::layout::positions`]. `adj` is consumed by value: the tracer
/// destroys a working copy of it, as the reference algorithm does, rather
/// than mutating the caller's matrix.
pub fn find_faces(adj: &AdjacencyMatrix, pos: &[(f64, f64)]) -> Vec<Face> {
    let n = adj.len();
    assert_eq!(pos.len(), n, "one position per vertex");
    let mut w: Vec<Vec<u8>> = adj.as_rows().to_vec();
    let mut faces = Vec::new();

    for i in 0..n {
        for j in 0..n {
            if w[i][j] == 0 {
                continue;
            }
            let mut face = vec![i, j];
            while *face.last().unwrap() != face[0] {
                let len = face.len();
                let (u, v) = (face[len - 2], face[len - 1]);
                w[u][v] = 0;
                let next = ccw_neighbor(&w, pos, u, v);
                face.push(next);
            }
            let len = face.len();
            w[face[len - 2]][face[len - 1]] = 0;
            faces.push(face);
        }
    }
    faces
}

/// Among `v`'s remaining neighbors (excluding `u`), the one immediately
/// counter-clockwise of the incoming vector `v -> u`.
fn ccw_neighbor(w: &[Vec<u8>], pos: &[(f64, f64)], u: usize, v: usize) -> usize {
    let n = w.len();
    let mut candidates: Vec<usize> = (0..n).filter(|&k| k != u && w[v][k] == 1).collect();
    candidates.sort_by(|&a, &b| {
        let ra = rotation(pos[u], pos[v], pos[a]);
        let rb = rotation(pos[u], pos[v], pos[b]);
        ra.partial_cmp(&rb).expect("embedding coordinates are finite")
    });
    candidates[0]
}

/// Angle, in `[0, 2*pi)`, swept counter-clockwise from `pos0 -> pos1` to
/// `pos2 -> pos1`, i.e. how far `pos2` is turned CCW from `pos0` as seen
/// from the hinge `pos1`.
fn rotation(pos0: (f64, f64), pos1: (f64, f64), pos2: (f64, f64)) -> f64 {
    let main = (pos0.0 - pos1.0, pos0.1 - pos1.1);
    let next = (pos2.0 - pos1.0, pos2.1 - pos1.1);
    angle(main, next)
}

fn angle(v1: (f64, f64), v2: (f64, f64)) -> f64 {
    let sin = v1.0 * v2.1 - v1.1 * v2.0;
    let cos = v1.0 * v2.0 + v1.1 * v2.1;
    let a = sin.atan2(cos);
    if a < 0.0 {
        a + 2.0 * PI
    } else {
        a
    }
}
