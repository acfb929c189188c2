//! The read-only (hyper)graph view consumed by every algorithm.
//!
//! All metrics in this crate run against [`HypergraphRef`], a uniform
//! read-view over simple graphs and hypergraphs, directed or undirected.
//! Vertices and edges are opaque caller-supplied identifiers; algorithms
//! compare them only by equality and hash and never mutate them.
//!
//! # The opposite relation
//!
//! The one structural operation the traversals need is `opposite(v, e)`:
//! the endpoints of `e` reached from `v` via `e`.
//!
//! | Edge kind | `opposite(v, e)` |
//! |-----------|------------------|
//! | ordinary edge | the single non-`v` endpoint |
//! | undirected hyperedge | all endpoints except `v` |
//! | directed hyperedge, `v` in source set | the destination set |
//! | directed hyperedge, `v` in destination set | the source set |
//! | directed hyperedge, `v` in both (loop) | both sets minus `v` |
//!
//! A directed hyperedge with singleton source and destination sets behaves
//! exactly like a directed arc.
//!
//! # Neighbor resolution
//!
//! [`resolve_neighbors`] expands a collection of edges incident to `v` into
//! deduplicated `(neighbor, edge)` pairs, suppressing self-loops. It is the
//! shared adjacency primitive of the shortest-path engines, Brandes, and the
//! connectivity algorithms; running time is amortized O(1) per emitted pair.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Read-only view over a (hyper)graph.
///
/// Implementations must be stable for the lifetime of any algorithm call:
/// iteration order is unspecified but may not change mid-run, and the
/// structure may not be mutated while a metric is executing.
///
/// Lookups with an unknown vertex or edge return empty collections, never
/// panic; algorithm layers detect "no such vertex" via emptiness.
pub trait HypergraphRef {
    /// Opaque vertex identifier.
    type Vertex: Clone + Eq + Hash + Debug;
    /// Opaque edge identifier.
    type Edge: Clone + Eq + Hash + Debug;

    /// All vertices in the graph.
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// All edges in the graph.
    fn edges(&self) -> Vec<Self::Edge>;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// Whether `v` is a vertex of this graph.
    fn contains_vertex(&self, v: &Self::Vertex) -> bool;

    /// Whether `e` is an edge of this graph.
    fn contains_edge(&self, e: &Self::Edge) -> bool;

    /// All endpoints of `e` (source and destination sets combined for
    /// directed edges).
    fn endpoints(&self, e: &Self::Edge) -> Vec<Self::Vertex>;

    /// The source set of `e`. For undirected edges this is conventionally
    /// the full endpoint set.
    fn source_set(&self, e: &Self::Edge) -> Vec<Self::Vertex>;

    /// The destination set of `e`. For undirected edges this is
    /// conventionally the full endpoint set.
    fn dest_set(&self, e: &Self::Edge) -> Vec<Self::Vertex>;

    /// Edges whose destination set contains `v`. Equal to
    /// [`incident_edges`](Self::incident_edges) on undirected graphs.
    fn in_edges(&self, v: &Self::Vertex) -> Vec<Self::Edge>;

    /// Edges whose source set contains `v`. Equal to
    /// [`incident_edges`](Self::incident_edges) on undirected graphs.
    fn out_edges(&self, v: &Self::Vertex) -> Vec<Self::Edge>;

    /// All edges incident to `v`.
    fn incident_edges(&self, v: &Self::Vertex) -> Vec<Self::Edge>;

    /// Whether edges of this graph are directed. One flag per graph.
    fn is_directed(&self) -> bool;

    /// The endpoints of `e` reached from `v` via `e`; see the module docs
    /// for the exact relation. Empty if `v` is not incident to `e`.
    fn opposite(&self, v: &Self::Vertex, e: &Self::Edge) -> Vec<Self::Vertex> {
        if !self.is_directed() {
            return self
                .endpoints(e)
                .into_iter()
                .filter(|w| w != v)
                .collect();
        }

        let source = self.source_set(e);
        let dest = self.dest_set(e);
        let in_source = source.contains(v);
        let in_dest = dest.contains(v);

        match (in_source, in_dest) {
            (true, true) => {
                // loop edge: both sides minus v, deduplicated
                let mut seen = HashSet::new();
                source
                    .into_iter()
                    .chain(dest)
                    .filter(|w| w != v && seen.insert(w.clone()))
                    .collect()
            }
            (true, false) => dest,
            (false, true) => source,
            (false, false) => Vec::new(),
        }
    }

    /// The undirected closure of adjacency: predecessors and successors of
    /// `v`, deduplicated. This is the neighbor relation weak connectivity
    /// traverses.
    fn neighbors(&self, v: &Self::Vertex) -> Vec<Self::Vertex> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for e in self.incident_edges(v) {
            for w in self.opposite(v, &e) {
                if w != *v && seen.insert(w.clone()) {
                    result.push(w);
                }
            }
        }
        result
    }
}

/// Expand `edges` incident to `vertex` into deduplicated
/// `(neighbor, edge)` pairs.
///
/// Self-loops are suppressed, and for hyperedges the same pair is emitted at
/// most once even if a neighbor appears several times in the edge's endpoint
/// sets. Ordering of the result is unspecified; callers must not rely on it.
pub fn resolve_neighbors<G: HypergraphRef>(
    graph: &G,
    vertex: &G::Vertex,
    edges: &[G::Edge],
) -> Vec<(G::Vertex, G::Edge)> {
    let mut seen: HashSet<(G::Vertex, G::Edge)> = HashSet::new();
    let mut pairs = Vec::new();
    for e in edges {
        for w in graph.opposite(vertex, e) {
            if w == *vertex {
                continue;
            }
            let pair = (w, e.clone());
            if seen.insert(pair.clone()) {
                pairs.push(pair);
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyper::SparseHypergraph;

    #[test]
    fn test_opposite_ordinary_edge() {
        let mut g = SparseHypergraph::undirected();
        g.add_edge("e1", ["a", "b"]).unwrap();

        assert_eq!(g.opposite(&"a", &"e1"), vec!["b"]);
        assert_eq!(g.opposite(&"b", &"e1"), vec!["a"]);
    }

    #[test]
    fn test_opposite_undirected_hyperedge() {
        let mut g = SparseHypergraph::undirected();
        g.add_edge("e1", ["a", "b", "c"]).unwrap();

        let mut opp = g.opposite(&"a", &"e1");
        opp.sort_unstable();
        assert_eq!(opp, vec!["b", "c"]);
    }

    #[test]
    fn test_opposite_directed_hyperedge() {
        let mut g = SparseHypergraph::directed();
        g.add_directed_edge("e1", ["a"], ["b", "c"]).unwrap();

        let mut from_source = g.opposite(&"a", &"e1");
        from_source.sort_unstable();
        assert_eq!(from_source, vec!["b", "c"]);

        assert_eq!(g.opposite(&"b", &"e1"), vec!["a"]);
    }

    #[test]
    fn test_opposite_not_incident() {
        let mut g = SparseHypergraph::directed();
        g.add_directed_edge("e1", ["a"], ["b"]).unwrap();

        assert!(g.opposite(&"z", &"e1").is_empty());
    }

    #[test]
    fn test_resolver_suppresses_self_loops() {
        let mut g = SparseHypergraph::directed();
        g.add_edge("loop", ["a"]).unwrap();
        g.add_directed_edge("e1", ["a"], ["b"]).unwrap();

        let out = g.out_edges(&"a");
        let pairs = resolve_neighbors(&g, &"a", &out);
        assert_eq!(pairs, vec![("b", "e1")]);
    }

    #[test]
    fn test_resolver_dedupes_hyperedge_fanout() {
        let mut g = SparseHypergraph::undirected();
        g.add_edge("e1", ["a", "b", "c"]).unwrap();
        g.add_edge("e2", ["a", "b"]).unwrap();

        let incident = g.incident_edges(&"a");
        let pairs = resolve_neighbors(&g, &"a", &incident);

        // b twice (via e1 and e2), c once: three distinct (w, e) pairs
        assert_eq!(pairs.len(), 3);
        let unique: std::collections::HashSet<_> = pairs.iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_neighbors_undirected_closure() {
        let mut g = SparseHypergraph::directed();
        g.add_directed_edge("e1", ["a"], ["b"]).unwrap();
        g.add_directed_edge("e2", ["c"], ["a"]).unwrap();

        let mut nbs = g.neighbors(&"a");
        nbs.sort_unstable();
        assert_eq!(nbs, vec!["b", "c"]);
    }
}
