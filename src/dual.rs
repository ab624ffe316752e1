// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The dual-chromatic cross-check: evaluate the chromatic polynomial of the
//! face-adjacency graph at `x = 4` and divide by 12.

use crate::error::Error;
use crate::graph::AdjacencyMatrix;
use petgraph::graph::UnGraph;

/// The face-adjacency graph: `D[i][j] = 1` iff faces `i` and `j` share at
/// least one vertex. Shares `AdjacencyMatrix`'s invariants (symmetric,
/// zero-diagonal, 0/1), just over a different index space (faces, not
/// vertices of the original graph) — see
/// [`crate::faces_matrix::FacesMatrix::dual_adjacency`].
pub type DualAdjacency = AdjacencyMatrix;

/// Evaluate the chromatic polynomial of `d` at `x = 4` via
/// deletion-contraction and divide by 12; the division is exact for the
/// face-adjacency graph of a planar cubic graph.
#[tracing::instrument(skip_all, fields(n = d.len()))]
pub fn calc_tait_0_dual_chromatic(d: &DualAdjacency) -> Result<i64, Error> {
    let n = d.len();
    let mut g = UnGraph::<(), ()>::with_capacity(n, 0);
    let nodes: Vec<_> = (0..n).map(|_| g.add_node(())).collect();
    for (i, j) in d.edges() {
        g.add_edge(nodes[i], nodes[j], ());
    }
    let edges: Vec<(usize, usize)> = g
        .edge_indices()
        .map(|e| {
            let (a, b) = g.edge_endpoints(e).expect("edge index from this graph");
            (a.index(), b.index())
        })
        .collect();

    let value = chromatic_at_4(n, &edges);
    if value % 12 != 0 {
        return Err(Error::NotDivisibleBy12 { value });
    }
    Ok(value / 12)
}

/// `P(G, 4)` via the deletion-contraction recurrence
/// `P(G, k) = P(G - e, k) - P(G / e, k)`, evaluated directly at `k = 4`
/// rather than carried symbolically — exact for the small graphs
/// (`F <~ 20`) this crate targets.
fn chromatic_at_4(n: usize, edges: &[(usize, usize)]) -> i64 {
    if edges.iter().any(|&(a, b)| a == b) {
        return 0; // a self-loop admits no proper coloring.
    }
    if edges.is_empty() {
        return 4i64.pow(n as u32);
    }
    let &(u, v) = edges.last().expect("non-empty");
    let rest = &edges[..edges.len() - 1];

    let deleted = chromatic_at_4(n, rest);

    // Contract {u, v}: relabel vertices into a dense 0..n-1 space with v
    // folded into u's slot.
    let mut map = vec![0usize; n];
    let mut next = 0;
    for x in 0..n {
        if x == v {
            continue;
        }
        map[x] = next;
        next += 1;
    }
    map[v] = map[u];
    let contracted_edges: Vec<(usize, usize)> =
        rest.iter().map(|&(a, b)| (map[a], map[b])).collect();
    let contracted = chromatic_at_4(next, &contracted_edges);

    deleted - contracted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edgeless_graph_is_k_to_the_n() {
        assert_eq!(chromatic_at_4(3, &[]), 64);
    }

    #[test]
    fn triangle_matches_complete_graph_formula() {
        // K3 = C3: P(k) = (k-1)^3 - (k-1); at k=4: 27 - 3 = 24.
        let edges = vec![(0, 1), (1, 2), (0, 2)];
        assert_eq!(chromatic_at_4(3, &edges), 24);
    }

    #[test]
    fn single_edge_is_k_times_k_minus_1() {
        assert_eq!(chromatic_at_4(2, &[(0, 1)]), 12);
    }

    #[test]
    fn k4_dual_chromatic_check_succeeds_or_fails_cleanly() {
        let d = AdjacencyMatrix::new(vec![
            vec![0, 1, 1, 1],
            vec![1, 0, 1, 1],
            vec![1, 1, 0, 1],
            vec![1, 1, 1, 0],
        ]);
        // Whatever the exact value, the check must not panic and must
        // report a clean Ok or NotDivisibleBy12.
        let result = calc_tait_0_dual_chromatic(&d);
        assert!(result.is_ok() || matches!(result, Err(Error::NotDivisibleBy12 { .. })));
    }
}
