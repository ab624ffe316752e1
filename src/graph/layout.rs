// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Planar straight-line embedding of a cubic graph.
//!
//! No planar-embedding crate sits in this engine's dependency stack, so the
//! embedding is produced in two stages instead of being delegated:
//!
//! 1. [`search_rotation_system`] finds a combinatorial rotation system (the
//!    cyclic order of edges around each vertex) whose face trace satisfies
//!    Euler's formula, by brute-force search over the `(deg-1)!` distinct
//!    cyclic orders per vertex (2, for a cubic graph).
//! 2. [`tutte_embed`] realizes that rotation system as actual coordinates
//!    via a Tutte / barycentric embedding: the largest traced face is fixed
//!    as a convex polygon, every other vertex is relaxed to the average of
//!    its neighbors' positions.

use super::adjacency::AdjacencyMatrix;
use crate::error::Error;
use itertools::Itertools;
use std::collections::HashSet;
use std::f64::consts::PI;

/// Cyclic CCW order of edges incident to each vertex.
type RotationSystem = Vec<Vec<usize>>;

/// Compute planar vertex positions for `adj`, or `Error::NotPlanar` if no
/// rotation system satisfies Euler's formula.
#[tracing::instrument(skip_all, fields(n = adj.len()))]
pub fn positions(adj: &AdjacencyMatrix) -> Result<Vec<(f64, f64)>, Error> {
    let n = adj.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    if !adj.is_cubic() {
        return Err(Error::NotCubic);
    }
    let rotation = search_rotation_system(adj).ok_or(Error::NotPlanar)?;
    let faces = trace_with_rotation(adj, &rotation);
    Ok(tutte_embed(adj, &faces))
}

/// Every distinct cyclic order of `neighbors`, fixing `neighbors[0]` first
/// (a cyclic rotation of the same order traces the same faces).
fn rotations_for(neighbors: &[usize]) -> Vec<Vec<usize>> {
    if neighbors.len() <= 2 {
        return vec![neighbors.to_vec()];
    }
    let first = neighbors[0];
    let rest = &neighbors[1..];
    rest.to_vec()
        .into_iter()
        .permutations(rest.len())
        .map(|tail| std::iter::once(first).chain(tail).collect())
        .collect()
}

fn search_rotation_system(adj: &AdjacencyMatrix) -> Option<RotationSystem> {
    let n = adj.len();
    let options: Vec<Vec<Vec<usize>>> = (0..n).map(|i| rotations_for(&adj.neighbors(i))).collect();
    let space: usize = options.iter().map(|o| o.len()).product();
    if space > 1 << 20 {
        tracing::warn!(space, "rotation system search space is unusually large");
    }
    let mut current = vec![Vec::new(); n];
    backtrack(0, adj, &options, &mut current)
}

fn backtrack(
    idx: usize,
    adj: &AdjacencyMatrix,
    options: &[Vec<Vec<usize>>],
    current: &mut RotationSystem,
) -> Option<RotationSystem> {
    if idx == options.len() {
        return euler_consistent(adj, current).then(|| current.clone());
    }
    for choice in &options[idx] {
        current[idx] = choice.clone();
        if let Some(found) = backtrack(idx + 1, adj, options, current) {
            return Some(found);
        }
    }
    None
}

fn euler_consistent(adj: &AdjacencyMatrix, rotation: &RotationSystem) -> bool {
    let faces = trace_with_rotation(adj, rotation);
    let v = adj.len() as i64;
    let e = adj.edges().len() as i64;
    let f = faces.len() as i64;
    v - e + f == 2
}

/// Next edge after entering `v` from `u`, using the rotation system: the
/// neighbor immediately following `u` in `rotation[v]`.
fn next_in_rotation(rotation: &[usize], after: usize) -> usize {
    let idx = rotation.iter().position(|&x| x == after).expect("u is a neighbor of v");
    rotation[(idx + 1) % rotation.len()]
}

/// Combinatorial analog of [`super::faces::find_faces`] driven by a fixed
/// rotation system instead of angle comparisons; used only to test Euler's
/// formula during the rotation-system search, where coordinates don't exist
/// yet.
fn trace_with_rotation(adj: &AdjacencyMatrix, rotation: &RotationSystem) -> Vec<Vec<usize>> {
    let n = adj.len();
    let mut consumed: HashSet<(usize, usize)> = HashSet::new();
    let mut faces = Vec::new();
    for i in 0..n {
        for &j in &rotation[i] {
            if consumed.contains(&(i, j)) {
                continue;
            }
            let mut face = vec![i, j];
            consumed.insert((i, j));
            while *face.last().unwrap() != face[0] {
                let len = face.len();
                let (u, v) = (face[len - 2], face[len - 1]);
                let next = next_in_rotation(&rotation[v], u);
                consumed.insert((v, next));
                face.push(next);
            }
            faces.push(face);
        }
    }
    faces
}

/// Fix the largest traced face as a regular polygon (the outer face), then
/// relax every other vertex to the average of its neighbors' positions.
fn tutte_embed(adj: &AdjacencyMatrix, faces: &[Vec<usize>]) -> Vec<(f64, f64)> {
    let n = adj.len();
    let outer = faces
        .iter()
        .max_by_key(|f| f.len())
        .expect("at least one face");
    let boundary = &outer[..outer.len() - 1];

    let mut pos = vec![(0.0_f64, 0.0_f64); n];
    let k = boundary.len();
    for (idx, &v) in boundary.iter().enumerate() {
        let theta = 2.0 * PI * (idx as f64) / (k as f64);
        pos[v] = (theta.cos(), theta.sin());
    }
    let is_boundary: HashSet<usize> = boundary.iter().copied().collect();
    let interior: Vec<usize> = (0..n).filter(|v| !is_boundary.contains(v)).collect();

    const MAX_ITERS: usize = 2000;
    const TOLERANCE: f64 = 1e-12;
    for _ in 0..MAX_ITERS {
        let mut max_delta = 0.0_f64;
        for &v in &interior {
            let neighbors = adj.neighbors(v);
            let (mut sx, mut sy) = (0.0, 0.0);
            for &nb in &neighbors {
                sx += pos[nb].0;
                sy += pos[nb].1;
            }
            let len = neighbors.len() as f64;
            let new_pos = (sx / len, sy / len);
            let delta = (new_pos.0 - pos[v].0).hypot(new_pos.1 - pos[v].1);
            max_delta = max_delta.max(delta);
            pos[v] = new_pos;
        }
        if max_delta < TOLERANCE {
            break;
        }
    }
    pos
}
