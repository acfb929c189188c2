//! Connected components analysis.
//!
//! Provides both:
//! - **Weakly connected components (WCC)**: connected when edge direction
//!   is ignored; plain BFS over the undirected adjacency closure.
//! - **Strongly connected components (SCC)**: every vertex reachable from
//!   every other following edge direction; the path-based algorithm of
//!   Cheriyan-Mehlhorn/Gabow (2000), O(|V| + |E|).
//!
//! Both produce a partition of the vertex set: disjoint vertex sets whose
//! union is `V`. SCC is only defined for directed graphs and rejects
//! undirected input at the call boundary.
//!
//! # References
//!
//! - Gabow (2000). "Path-based depth-first search for strong and
//!   biconnected components"

use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{Error, Result};
use crate::graph::{resolve_neighbors, HypergraphRef};
use crate::hyper::SparseHypergraph;

/// Compute the weakly connected components of `graph`.
///
/// Edge direction is ignored; a directed graph is traversed over its
/// undirected closure. The result is a partition of the vertex set.
pub fn weak_connectivity<G>(graph: &G) -> Vec<HashSet<G::Vertex>>
where
    G: HypergraphRef,
{
    let mut components = Vec::new();
    let mut unvisited: HashSet<G::Vertex> = graph.vertices().into_iter().collect();

    for root in graph.vertices() {
        if !unvisited.remove(&root) {
            continue;
        }
        let mut cluster = HashSet::new();
        cluster.insert(root.clone());

        let mut queue = VecDeque::new();
        queue.push_back(root);
        while let Some(v) = queue.pop_front() {
            for w in graph.neighbors(&v) {
                if unvisited.remove(&w) {
                    cluster.insert(w.clone());
                    queue.push_back(w);
                }
            }
        }
        components.push(cluster);
    }

    components
}

/// Compute the strongly connected components of a directed graph.
///
/// Fails with [`Error::DirectednessMismatch`] on undirected input. The
/// result is a partition of the vertex set; a chain `a -> b -> c` yields
/// three singleton components, a cycle yields one.
pub fn strong_connectivity<G>(graph: &G) -> Result<Vec<HashSet<G::Vertex>>>
where
    G: HypergraphRef,
{
    if !graph.is_directed() {
        return Err(Error::DirectednessMismatch {
            operation: "strong connectivity",
        });
    }

    let mut state = GabowState {
        graph,
        // 1-based DFS numbering; 0 marks unvisited, and popped components
        // are renumbered past |V| so they never win a contraction compare
        numbers: graph.vertices().into_iter().map(|v| (v, 0)).collect(),
        path: Vec::new(),
        boundaries: Vec::new(),
        next_component: graph.vertex_count(),
        components: Vec::new(),
    };

    for v in graph.vertices() {
        if state.numbers[&v] == 0 {
            state.visit(v);
        }
    }

    Ok(state.components)
}

struct GabowState<'a, G: HypergraphRef> {
    graph: &'a G,
    numbers: HashMap<G::Vertex, usize>,
    path: Vec<G::Vertex>,
    boundaries: Vec<usize>,
    next_component: usize,
    components: Vec<HashSet<G::Vertex>>,
}

impl<G: HypergraphRef> GabowState<'_, G> {
    fn visit(&mut self, v: G::Vertex) {
        self.path.push(v.clone());
        let number = self.path.len();
        self.numbers.insert(v.clone(), number);
        self.boundaries.push(number);

        let out = self.graph.out_edges(&v);
        for (w, _) in resolve_neighbors(self.graph, &v, &out) {
            if self.numbers[&w] == 0 {
                self.visit(w);
            } else {
                // contract: pop boundaries above w's position
                while self
                    .boundaries
                    .last()
                    .is_some_and(|&top| self.numbers[&w] < top)
                {
                    self.boundaries.pop();
                }
            }
        }

        if self.boundaries.last() == Some(&number) {
            self.boundaries.pop();
            self.next_component += 1;
            let mut component = HashSet::new();
            while self.path.len() >= number {
                let r = self.path.pop().expect("path holds at least `number` items");
                self.numbers.insert(r.clone(), self.next_component);
                component.insert(r);
            }
            self.components.push(component);
        }
    }
}

/// Derive the induced subgraph of each component: the vertices of the set
/// plus every edge all of whose endpoints lie inside it.
pub fn connected_subgraphs<G>(
    graph: &G,
    components: &[HashSet<G::Vertex>],
) -> Result<Vec<SparseHypergraph<G::Vertex, G::Edge>>>
where
    G: HypergraphRef,
{
    let mut subgraphs = Vec::with_capacity(components.len());
    for component in components {
        let mut sub = if graph.is_directed() {
            SparseHypergraph::directed()
        } else {
            SparseHypergraph::undirected()
        };
        for v in component {
            sub.add_vertex(v.clone());
        }
        for e in graph.edges() {
            let endpoints = graph.endpoints(&e);
            if !endpoints.is_empty() && endpoints.iter().all(|v| component.contains(v)) {
                if graph.is_directed() {
                    sub.add_directed_edge(e.clone(), graph.source_set(&e), graph.dest_set(&e))?;
                } else {
                    sub.add_edge(e.clone(), endpoints)?;
                }
            }
        }
        subgraphs.push(sub);
    }
    Ok(subgraphs)
}

/// Statistics about a component partition.
#[derive(Debug, Clone)]
pub struct ComponentStats {
    /// Number of components.
    pub num_components: usize,
    /// Size of the largest component.
    pub max_component_size: usize,
    /// Size of the smallest component.
    pub min_component_size: usize,
    /// Average component size.
    pub avg_component_size: f64,
    /// Fraction of vertices in the largest component.
    pub largest_component_fraction: f64,
}

/// Compute statistics from a component partition.
///
/// Returns zeroed stats if `components` is empty.
pub fn component_stats<V>(components: &[HashSet<V>]) -> ComponentStats {
    if components.is_empty() {
        return ComponentStats {
            num_components: 0,
            max_component_size: 0,
            min_component_size: 0,
            avg_component_size: 0.0,
            largest_component_fraction: 0.0,
        };
    }

    let sizes: Vec<usize> = components.iter().map(HashSet::len).collect();
    let total: usize = sizes.iter().sum();
    let max_size = sizes.iter().copied().max().unwrap_or(0);
    let min_size = sizes.iter().copied().min().unwrap_or(0);

    ComponentStats {
        num_components: components.len(),
        max_component_size: max_size,
        min_component_size: min_size,
        avg_component_size: total as f64 / components.len() as f64,
        largest_component_fraction: if total > 0 {
            max_size as f64 / total as f64
        } else {
            0.0
        },
    }
}
