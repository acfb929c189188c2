//! Betweenness centrality for vertices and edges.
//!
//! # Intuition
//!
//! Betweenness measures how often a vertex (or edge) lies on shortest paths
//! between other vertices. High betweenness = broker, bridge, gatekeeper.
//!
//! # Definition
//!
//! ```text
//! C_B(v) = Σ_{s≠v≠t} σ_st(v) / σ_st
//! ```
//!
//! Where:
//! - σ_st = number of shortest paths from s to t
//! - σ_st(v) = number of those paths passing through v
//!
//! σ(s, s) = 1, and σ_st(v) = 0 if v ∈ {s, t} or v lies on no shortest
//! s-t path. Edge scores are defined the same way with "passing through e".
//!
//! # Brandes' Algorithm (2001)
//!
//! Naive computation is O(V³). Brandes showed O(VE) is possible (O(VE +
//! V² log V) weighted):
//!
//! 1. Run the shortest-path engine from each source s, recording path
//!    counts σ and the `(edge, vertex)` predecessor DAG
//! 2. Pop the settled vertices in reverse order and accumulate dependencies
//!
//! ```text
//! δ_s(v) = Σ_{w: (e,v)∈P_s(w)} (σ_sv/σ_sw) × (1 + δ_s(w))
//! ```
//!
//! Each contribution is also credited to the predecessor edge `e`, which is
//! how a hyperedge linking k destinations accumulates through all k
//! predecessor pairs.
//!
//! # Normalization
//!
//! Undirected graphs count every pair twice, so raw scores are halved. With
//! [`BetweennessConfig::normalize`] vertex scores are further divided by
//! `(n−1)(n−2)` and edge scores by `n(n−1)`.
//!
//! # References
//!
//! - Brandes (2001). "A faster algorithm for betweenness centrality"
//! - Freeman (1977). "A set of measures of centrality based on betweenness"

use std::collections::HashMap;
use std::hash::Hash;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::algo::shortest_path::{single_source, validate_weights};
use crate::error::Result;
use crate::graph::HypergraphRef;

/// Configuration for betweenness centrality.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BetweennessConfig {
    /// Divide vertex scores by `(n−1)(n−2)` and edge scores by `n(n−1)`.
    /// When disabled, raw accumulated scores are returned.
    pub normalize: bool,
    /// Expand only this many uniformly sampled sources and scale the result
    /// by `n/k`, giving an O(k·E) approximation. `None` computes exactly.
    pub sample_sources: Option<usize>,
}

impl Default for BetweennessConfig {
    fn default() -> Self {
        Self {
            normalize: false,
            sample_sources: None,
        }
    }
}

/// Vertex and edge betweenness scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetweennessScores<V, E>
where
    V: Eq + Hash,
    E: Eq + Hash,
{
    vertex_scores: HashMap<V, f64>,
    edge_scores: HashMap<E, f64>,
}

impl<V, E> BetweennessScores<V, E>
where
    V: Eq + Hash,
    E: Eq + Hash,
{
    /// The score of a vertex, or `None` if it is not in the graph.
    pub fn vertex_score(&self, v: &V) -> Option<f64> {
        self.vertex_scores.get(v).copied()
    }

    /// The score of an edge, or `None` if it is not in the graph.
    pub fn edge_score(&self, e: &E) -> Option<f64> {
        self.edge_scores.get(e).copied()
    }

    /// All vertex scores.
    pub fn vertex_scores(&self) -> &HashMap<V, f64> {
        &self.vertex_scores
    }

    /// All edge scores.
    pub fn edge_scores(&self) -> &HashMap<E, f64> {
        &self.edge_scores
    }
}

/// Compute betweenness over all-pairs *unweighted* shortest paths.
///
/// # Example
///
/// ```
/// use centrix::algo::centrality::{betweenness_centrality, BetweennessConfig};
/// use centrix::SparseHypergraph;
///
/// // path: v1 - v2 - v3
/// let mut g = SparseHypergraph::undirected();
/// g.add_edge("e1", ["v1", "v2"]).unwrap();
/// g.add_edge("e2", ["v2", "v3"]).unwrap();
///
/// let scores = betweenness_centrality(&g, &BetweennessConfig::default());
/// assert_eq!(scores.vertex_score(&"v2"), Some(1.0));
/// assert_eq!(scores.vertex_score(&"v1"), Some(0.0));
/// ```
pub fn betweenness_centrality<G>(
    graph: &G,
    config: &BetweennessConfig,
) -> BetweennessScores<G::Vertex, G::Edge>
where
    G: HypergraphRef,
{
    brandes(graph, None::<&fn(&G::Edge) -> f64>, config)
}

/// Compute betweenness over all-pairs *weighted* shortest paths.
///
/// Fails with [`crate::Error::NegativeWeight`] if any edge weight is
/// negative; the pre-scan runs before any traversal starts.
pub fn weighted_betweenness_centrality<G, W>(
    graph: &G,
    edge_weights: W,
    config: &BetweennessConfig,
) -> Result<BetweennessScores<G::Vertex, G::Edge>>
where
    G: HypergraphRef,
    W: Fn(&G::Edge) -> f64,
{
    validate_weights(graph, &edge_weights)?;
    Ok(brandes(graph, Some(&edge_weights), config))
}

fn brandes<G, W>(
    graph: &G,
    edge_weights: Option<&W>,
    config: &BetweennessConfig,
) -> BetweennessScores<G::Vertex, G::Edge>
where
    G: HypergraphRef,
    W: Fn(&G::Edge) -> f64,
{
    let vertices = graph.vertices();
    let n = vertices.len();

    let mut vertex_scores: HashMap<G::Vertex, f64> =
        vertices.iter().cloned().map(|v| (v, 0.0)).collect();
    let mut edge_scores: HashMap<G::Edge, f64> =
        graph.edges().into_iter().map(|e| (e, 0.0)).collect();

    let sources: Vec<G::Vertex> = match config.sample_sources {
        Some(k) if k < n => {
            let mut rng = rand::thread_rng();
            vertices.choose_multiple(&mut rng, k).cloned().collect()
        }
        _ => vertices.clone(),
    };

    for s in &sources {
        let state = single_source(graph, s, edge_weights);

        // settle order is non-decreasing distance, so the reverse sweep
        // sees every w before any of its predecessors
        let mut delta: HashMap<G::Vertex, f64> = HashMap::new();
        for w in state.settled.iter().rev() {
            let w_delta = delta.get(w).copied().unwrap_or(0.0);
            let w_sigma = state.path_count.get(w).copied().unwrap_or(0.0);

            if let Some(preds) = state.predecessors.get(w) {
                for (e, v) in preds {
                    if w_sigma == 0.0 {
                        continue;
                    }
                    let v_sigma = state.path_count.get(v).copied().unwrap_or(0.0);
                    let contribution = (v_sigma / w_sigma) * (1.0 + w_delta);
                    if contribution == 0.0 {
                        continue;
                    }
                    *delta.entry(v.clone()).or_insert(0.0) += contribution;
                    *edge_scores.entry(e.clone()).or_insert(0.0) += contribution;
                }
            }

            if w != s {
                *vertex_scores.entry(w.clone()).or_insert(0.0) += w_delta;
            }
        }
    }

    if let Some(k) = config.sample_sources {
        if k > 0 && k < n {
            let scale = n as f64 / k as f64;
            for score in vertex_scores.values_mut() {
                *score *= scale;
            }
            for score in edge_scores.values_mut() {
                *score *= scale;
            }
        }
    }

    // undirected graphs consider each shortest path twice
    if !graph.is_directed() {
        for score in vertex_scores.values_mut() {
            *score /= 2.0;
        }
        for score in edge_scores.values_mut() {
            *score /= 2.0;
        }
    }

    if config.normalize {
        if n > 2 {
            let norm = ((n - 1) * (n - 2)) as f64;
            for score in vertex_scores.values_mut() {
                *score /= norm;
            }
        }
        if n > 1 {
            let norm = (n * (n - 1)) as f64;
            for score in edge_scores.values_mut() {
                *score /= norm;
            }
        }
    }

    BetweennessScores {
        vertex_scores,
        edge_scores,
    }
}
