//! Closeness centrality: proximity to every other vertex.
//!
//! The score of `v` is the inverse of its (optionally averaged) summed
//! distance to the rest of the graph. An instance wraps a [`Distance`]
//! oracle and memoizes per-vertex scores; the cache belongs to the instance
//! and is not thread-safe.
//!
//! Disconnected graphs make the classic formula ambiguous, so the behavior
//! is flag-driven: with `null_infinite_distances` any unreachable partner
//! makes the score *undefined* (`None`); without it, unreachable partners
//! are simply left out of the sum.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::algo::shortest_path::{DijkstraDistance, Distance, UnweightedDistance};
use crate::error::Result;
use crate::graph::HypergraphRef;

/// Configuration for closeness centrality.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClosenessConfig {
    /// Divide the distance sum by the number of included entries (the
    /// reachable count), yielding classical normalized closeness.
    pub averaging: bool,
    /// Treat a vertex with any unreachable partner as having an undefined
    /// score instead of summing over the reachable part.
    pub null_infinite_distances: bool,
    /// Exclude the vertex's zero distance to itself.
    pub ignore_self_distances: bool,
}

impl Default for ClosenessConfig {
    fn default() -> Self {
        Self {
            averaging: false,
            null_infinite_distances: true,
            ignore_self_distances: true,
        }
    }
}

/// Closeness centrality scorer with a per-instance score cache.
///
/// # Example
///
/// ```
/// use centrix::algo::centrality::{ClosenessCentrality, ClosenessConfig};
/// use centrix::SparseHypergraph;
///
/// // star centered on v1
/// let mut g = SparseHypergraph::undirected();
/// for (i, leaf) in ["v2", "v3", "v4", "v5", "v6"].into_iter().enumerate() {
///     g.add_edge(i as u32, ["v1", leaf]).unwrap();
/// }
///
/// let mut closeness = ClosenessCentrality::unweighted(&g, ClosenessConfig::default());
/// assert_eq!(closeness.score(&"v1"), Some(0.2)); // 1 / (5 × 1)
/// ```
pub struct ClosenessCentrality<'a, G, D>
where
    G: HypergraphRef,
{
    graph: &'a G,
    distance: D,
    config: ClosenessConfig,
    // None caches "undefined"
    cache: HashMap<G::Vertex, Option<f64>>,
}

impl<'a, G> ClosenessCentrality<'a, G, UnweightedDistance<'a, G>>
where
    G: HypergraphRef,
{
    /// Score over unweighted (hop-count) shortest paths.
    pub fn unweighted(graph: &'a G, config: ClosenessConfig) -> Self {
        Self::new(graph, UnweightedDistance::new(graph), config)
    }
}

impl<'a, G, W> ClosenessCentrality<'a, G, DijkstraDistance<'a, G, W>>
where
    G: HypergraphRef,
    W: Fn(&G::Edge) -> f64,
{
    /// Score over weighted shortest paths. Fails with
    /// [`crate::Error::NegativeWeight`] on any negative edge weight.
    pub fn weighted(graph: &'a G, edge_weights: W, config: ClosenessConfig) -> Result<Self> {
        Ok(Self::new(
            graph,
            DijkstraDistance::new(graph, edge_weights)?,
            config,
        ))
    }
}

impl<'a, G, D> ClosenessCentrality<'a, G, D>
where
    G: HypergraphRef,
    D: Distance<G::Vertex>,
{
    /// Score against an externally supplied distance oracle.
    pub fn new(graph: &'a G, distance: D, config: ClosenessConfig) -> Self {
        Self {
            graph,
            distance,
            config,
            cache: HashMap::new(),
        }
    }

    /// The closeness score of `v`.
    ///
    /// Returns `None` when `v` is not in the graph, or when the score is
    /// undefined under the configured flags. A zero distance sum yields
    /// `Some(f64::INFINITY)`.
    pub fn score(&mut self, v: &G::Vertex) -> Option<f64> {
        if let Some(cached) = self.cache.get(v) {
            return *cached;
        }
        if !self.graph.contains_vertex(v) {
            return None;
        }
        let score = self.compute(v);
        self.cache.insert(v.clone(), score);
        score
    }

    fn compute(&mut self, v: &G::Vertex) -> Option<f64> {
        let mut distances = self.distance.distance_map(v).clone();
        if self.config.ignore_self_distances {
            distances.remove(v);
        }

        if distances.is_empty() {
            return if self.config.null_infinite_distances {
                None
            } else {
                Some(0.0)
            };
        }

        let mut sum = 0.0;
        for w in self.graph.vertices() {
            if w == *v && self.config.ignore_self_distances {
                continue;
            }
            match distances.get(&w) {
                Some(d) => sum += d,
                None => {
                    if self.config.null_infinite_distances {
                        return None;
                    }
                }
            }
        }

        let mut value = sum;
        if self.config.averaging {
            value /= distances.len() as f64;
        }

        if value == 0.0 {
            Some(f64::INFINITY)
        } else {
            Some(1.0 / value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyper::SparseHypergraph;

    const SUM: ClosenessConfig = ClosenessConfig {
        averaging: false,
        null_infinite_distances: false,
        ignore_self_distances: true,
    };

    fn path_graph() -> SparseHypergraph<&'static str, u32> {
        let mut g = SparseHypergraph::undirected();
        g.add_edge(1, ["v1", "v2"]).unwrap();
        g.add_edge(2, ["v2", "v3"]).unwrap();
        g.add_edge(3, ["v3", "v4"]).unwrap();
        g.add_edge(4, ["v4", "v5"]).unwrap();
        g
    }

    #[test]
    fn test_closeness_path_graph() {
        let g = path_graph();
        let mut closeness = ClosenessCentrality::unweighted(&g, SUM);

        let expected = [
            ("v1", 1.0 / 10.0),
            ("v2", 1.0 / 7.0),
            ("v3", 1.0 / 6.0),
            ("v4", 1.0 / 7.0),
            ("v5", 1.0 / 10.0),
        ];
        for (v, want) in expected {
            let got = closeness.score(&v).unwrap();
            assert!((got - want).abs() < 1e-9, "{v}: got {got}, want {want}");
        }
    }

    #[test]
    fn test_closeness_hypergraph() {
        let mut g = SparseHypergraph::undirected();
        g.add_edge(1, ["v1", "v2", "v3", "v4"]).unwrap();
        g.add_edge(2, ["v4", "v5", "v6"]).unwrap();

        let mut closeness = ClosenessCentrality::unweighted(&g, SUM);
        assert!((closeness.score(&"v4").unwrap() - 0.2).abs() < 1e-9);
        for v in ["v1", "v2", "v3"] {
            assert!((closeness.score(&v).unwrap() - 1.0 / 7.0).abs() < 1e-9);
        }
        for v in ["v5", "v6"] {
            assert!((closeness.score(&v).unwrap() - 1.0 / 8.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_isolated_vertex_flag_behavior() {
        let mut g = SparseHypergraph::undirected();
        g.add_edge(1, ["a", "b"]).unwrap();
        g.add_vertex("island");

        let mut null_scores =
            ClosenessCentrality::unweighted(&g, ClosenessConfig::default());
        assert_eq!(null_scores.score(&"island"), None);
        // a can reach b, but not the island: undefined under the flag
        assert_eq!(null_scores.score(&"a"), None);

        let mut zero_scores = ClosenessCentrality::unweighted(&g, SUM);
        assert_eq!(zero_scores.score(&"island"), Some(0.0));
        assert_eq!(zero_scores.score(&"a"), Some(1.0));
    }

    #[test]
    fn test_averaging_divides_by_reachable() {
        let g = path_graph();
        let config = ClosenessConfig {
            averaging: true,
            ..SUM
        };
        let mut closeness = ClosenessCentrality::unweighted(&g, config);

        // v3 sums to 6 over 4 reachable vertices: 1 / (6/4)
        let got = closeness.score(&"v3").unwrap();
        assert!((got - 4.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_self_distance_included_when_not_ignored() {
        let mut g = SparseHypergraph::undirected();
        g.add_edge(1, ["a", "b"]).unwrap();

        let config = ClosenessConfig {
            averaging: false,
            null_infinite_distances: false,
            ignore_self_distances: false,
        };
        let mut closeness = ClosenessCentrality::unweighted(&g, config);
        // sum includes d(a,a) = 0, so the score is still 1/1
        assert_eq!(closeness.score(&"a"), Some(1.0));
    }

    #[test]
    fn test_weighted_closeness_scales_inverse() {
        let mut g = SparseHypergraph::undirected();
        g.add_edge(1, ["a", "b"]).unwrap();
        g.add_edge(2, ["b", "c"]).unwrap();

        let mut unit = ClosenessCentrality::weighted(&g, |_| 1.0, SUM).unwrap();
        let mut doubled = ClosenessCentrality::weighted(&g, |_| 2.0, SUM).unwrap();

        for v in ["a", "b", "c"] {
            let u = unit.score(&v).unwrap();
            let d = doubled.score(&v).unwrap();
            assert!((u - 2.0 * d).abs() < 1e-9, "{v}: {u} vs {d}");
        }
    }

    #[test]
    fn test_unknown_vertex_absent() {
        let g = path_graph();
        let mut closeness = ClosenessCentrality::unweighted(&g, SUM);
        assert_eq!(closeness.score(&"ghost"), None);
    }

    #[test]
    fn test_scores_are_memoized() {
        let g = path_graph();
        let mut closeness = ClosenessCentrality::unweighted(&g, SUM);
        let first = closeness.score(&"v1");
        let second = closeness.score(&"v1");
        assert_eq!(first, second);
    }
}
