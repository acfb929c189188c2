//! Degree centrality: the simplest centrality measure.
//!
//! Counts (or weight-sums) the edges incident to a vertex. For directed
//! graphs three variants exist:
//!
//! | Mode | Measures | Interpretation |
//! |------|----------|----------------|
//! | `In` | incoming edges | prestige, being referenced |
//! | `Out` | outgoing edges | activity, referencing others |
//! | `Total` | all incident edges | overall connectivity |
//!
//! On undirected graphs the three coincide. A hyperedge contributes once
//! regardless of its arity. With `normalize` the count is divided by
//! `|V| − 1`; with an edge-weight function the count becomes a weight sum.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::graph::HypergraphRef;

/// Which edge collection a degree score counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CentralityMode {
    /// Incoming edges.
    In,
    /// Outgoing edges.
    Out,
    /// All incident edges.
    Total,
}

/// Degree centrality scorer with a per-instance score cache.
///
/// # Example
///
/// ```
/// use centrix::algo::centrality::{CentralityMode, DegreeCentrality};
/// use centrix::SparseHypergraph;
///
/// let mut g = SparseHypergraph::directed();
/// g.add_directed_edge("e1", ["a"], ["b", "c"]).unwrap();
///
/// let mut out_degree = DegreeCentrality::new(&g, CentralityMode::Out);
/// assert_eq!(out_degree.score(&"a"), Some(1.0));
/// assert_eq!(out_degree.score(&"b"), Some(0.0));
/// ```
pub struct DegreeCentrality<'a, G>
where
    G: HypergraphRef,
{
    graph: &'a G,
    mode: CentralityMode,
    normalize: bool,
    edge_weights: Option<Box<dyn Fn(&G::Edge) -> f64 + 'a>>,
    cache: HashMap<G::Vertex, f64>,
}

impl<'a, G> DegreeCentrality<'a, G>
where
    G: HypergraphRef,
{
    /// Unweighted, unnormalized degree in the given mode.
    pub fn new(graph: &'a G, mode: CentralityMode) -> Self {
        Self {
            graph,
            mode,
            normalize: false,
            edge_weights: None,
            cache: HashMap::new(),
        }
    }

    /// Divide every score by `|V| − 1`.
    #[must_use]
    pub fn normalized(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Sum `edge_weights(e)` over the counted edges instead of counting.
    #[must_use]
    pub fn with_edge_weights(mut self, edge_weights: impl Fn(&G::Edge) -> f64 + 'a) -> Self {
        self.edge_weights = Some(Box::new(edge_weights));
        self
    }

    /// The degree score of `v`, or `None` if it is not in the graph.
    pub fn score(&mut self, v: &G::Vertex) -> Option<f64> {
        if let Some(&cached) = self.cache.get(v) {
            return Some(cached);
        }
        if !self.graph.contains_vertex(v) {
            return None;
        }

        let edges = match self.mode {
            CentralityMode::In => self.graph.in_edges(v),
            CentralityMode::Out => self.graph.out_edges(v),
            CentralityMode::Total => self.graph.incident_edges(v),
        };

        let mut score = match &self.edge_weights {
            Some(weight) => edges.iter().map(|e| weight(e)).sum(),
            None => edges.len() as f64,
        };

        if self.normalize {
            score /= (self.graph.vertex_count() - 1) as f64;
        }

        self.cache.insert(v.clone(), score);
        Some(score)
    }
}
