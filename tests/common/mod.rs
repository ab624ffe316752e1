// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Adjacency-matrix fixtures for the integration tests.

use tait0_engine::AdjacencyMatrix;

pub fn k4() -> AdjacencyMatrix {
    AdjacencyMatrix::new(vec![
        vec![0, 1, 1, 1],
        vec![1, 0, 1, 1],
        vec![1, 1, 0, 1],
        vec![1, 1, 1, 0],
    ])
}

/// Two triangles `{0,1,2}` and `{3,4,5}` joined by the matching `0-3, 1-4, 2-5`.
pub fn triangular_prism() -> AdjacencyMatrix {
    let edges = [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (0, 3), (1, 4), (2, 5)];
    from_edges(6, &edges)
}

/// Same two triangles, joined by the matching `0-4, 1-5, 2-3` instead —
/// isomorphic to [`triangular_prism`], just with the cross-matching permuted.
pub fn triangular_prism_swapped() -> AdjacencyMatrix {
    let edges = [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (0, 4), (1, 5), (2, 3)];
    from_edges(6, &edges)
}

/// Q3: vertices 0..7 as binary strings, edges flip exactly one bit.
pub fn cube() -> AdjacencyMatrix {
    let n = 8;
    let mut data = vec![vec![0u8; n]; n];
    for i in 0..n {
        for bit in 0..3 {
            let j = i ^ (1 << bit);
            data[i][j] = 1;
        }
    }
    AdjacencyMatrix::new(data)
}

/// Not cubic (every vertex has degree 4): rejected before planarity is even
/// checked.
pub fn k5() -> AdjacencyMatrix {
    let n = 5;
    let mut data = vec![vec![1u8; n]; n];
    for (i, row) in data.iter_mut().enumerate() {
        row[i] = 0;
    }
    AdjacencyMatrix::new(data)
}

/// `{0,1,2} x {3,4,5}`: cubic, but not planar (a Kuratowski graph).
pub fn k33() -> AdjacencyMatrix {
    let mut edges = Vec::new();
    for i in 0..3 {
        for j in 3..6 {
            edges.push((i, j));
        }
    }
    from_edges(6, &edges)
}

fn from_edges(n: usize, edges: &[(usize, usize)]) -> AdjacencyMatrix {
    let mut data = vec![vec![0u8; n]; n];
    for &(i, j) in edges {
        data[i][j] = 1;
        data[j][i] = 1;
    }
    AdjacencyMatrix::new(data)
}
