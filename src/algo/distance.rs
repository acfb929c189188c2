//! Distance-related graph metrics.
//!
//! Eccentricity, diameter, radius, center, periphery, and pseudo-periphery,
//! layered over an injected [`Distance`] oracle (typically one of the
//! shortest-path oracles from this crate). Everything derives from the
//! eccentricity map, which is computed lazily exactly once per instance.
//!
//! | Metric | Definition |
//! |--------|------------|
//! | eccentricity(v) | `max_u d(v, u)` |
//! | diameter | `max_v ecc(v)` (0 on the empty graph) |
//! | radius | `min_v ecc(v)` (0 on the empty graph) |
//! | center | `{v : ecc(v) = radius}` |
//! | periphery | `{v : ecc(v) = diameter}` |
//! | pseudo-periphery | `{u : every v with d(u,v) = ecc(u) has ecc(v) = ecc(u)}` |
//!
//! On a disconnected graph any vertex with an unreachable partner has
//! infinite eccentricity, and diameter/radius are infinite accordingly.
//! Floating-point comparisons against radius and diameter use an absolute
//! tolerance, 1e-9 by default.

use std::collections::{HashMap, HashSet};

use crate::algo::shortest_path::{DijkstraDistance, Distance, UnweightedDistance};
use crate::error::{Error, Result};
use crate::graph::HypergraphRef;

/// Default absolute tolerance for distance comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Equality of distances under an absolute tolerance.
#[derive(Debug, Clone, Copy)]
struct ToleranceComparator {
    epsilon: f64,
}

impl ToleranceComparator {
    fn new(epsilon: f64) -> Result<Self> {
        if epsilon <= 0.0 {
            return Err(Error::InvalidTolerance(epsilon));
        }
        Ok(Self { epsilon })
    }

    /// The exact-equality arm also makes two infinities compare equal.
    fn eq(&self, a: f64, b: f64) -> bool {
        a == b || (a - b).abs() < self.epsilon
    }
}

struct EccentricityData<V> {
    map: HashMap<V, f64>,
    diameter: f64,
    radius: f64,
}

/// Distance metrics over a graph and a shortest-path oracle.
///
/// # Example
///
/// ```
/// use centrix::algo::distance::GraphDistance;
/// use centrix::SparseHypergraph;
///
/// // path: v1 - v2 - v3 - v4 - v5
/// let mut g = SparseHypergraph::undirected();
/// for (i, pair) in [["v1", "v2"], ["v2", "v3"], ["v3", "v4"], ["v4", "v5"]]
///     .into_iter()
///     .enumerate()
/// {
///     g.add_edge(i as u32, pair).unwrap();
/// }
///
/// let mut metrics = GraphDistance::unweighted(&g);
/// assert_eq!(metrics.diameter(), 4.0);
/// assert_eq!(metrics.radius(), 2.0);
/// assert!(metrics.center().contains(&"v3"));
/// ```
pub struct GraphDistance<'a, G, D>
where
    G: HypergraphRef,
{
    graph: &'a G,
    distance: D,
    comparator: ToleranceComparator,
    eccentricity: Option<EccentricityData<G::Vertex>>,
}

impl<'a, G, D> std::fmt::Debug for GraphDistance<'a, G, D>
where
    G: HypergraphRef,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphDistance").finish_non_exhaustive()
    }
}

impl<'a, G> GraphDistance<'a, G, UnweightedDistance<'a, G>>
where
    G: HypergraphRef,
{
    /// Metrics over unweighted (hop-count) shortest paths.
    pub fn unweighted(graph: &'a G) -> Self {
        Self::new(graph, UnweightedDistance::new(graph))
    }
}

impl<'a, G, W> GraphDistance<'a, G, DijkstraDistance<'a, G, W>>
where
    G: HypergraphRef,
    W: Fn(&G::Edge) -> f64,
{
    /// Metrics over weighted shortest paths. Fails with
    /// [`Error::NegativeWeight`] on any negative edge weight.
    pub fn weighted(graph: &'a G, edge_weights: W) -> Result<Self> {
        Ok(Self::new(graph, DijkstraDistance::new(graph, edge_weights)?))
    }
}

impl<'a, G, D> GraphDistance<'a, G, D>
where
    G: HypergraphRef,
    D: Distance<G::Vertex>,
{
    /// Metrics over an externally supplied distance oracle, with the
    /// default tolerance.
    pub fn new(graph: &'a G, distance: D) -> Self {
        Self {
            graph,
            distance,
            comparator: ToleranceComparator {
                epsilon: DEFAULT_TOLERANCE,
            },
            eccentricity: None,
        }
    }

    /// As [`new`](Self::new) with a custom comparison tolerance. Fails with
    /// [`Error::InvalidTolerance`] unless `epsilon > 0`.
    pub fn with_tolerance(graph: &'a G, distance: D, epsilon: f64) -> Result<Self> {
        Ok(Self {
            graph,
            distance,
            comparator: ToleranceComparator::new(epsilon)?,
            eccentricity: None,
        })
    }

    /// The eccentricity of `v`, or `None` if it is not in the graph.
    pub fn eccentricity(&mut self, v: &G::Vertex) -> Option<f64> {
        self.ensure_eccentricity();
        self.eccentricity
            .as_ref()
            .and_then(|data| data.map.get(v).copied())
    }

    /// The eccentricity of every vertex.
    pub fn eccentricity_map(&mut self) -> &HashMap<G::Vertex, f64> {
        self.ensure_eccentricity();
        &self
            .eccentricity
            .as_ref()
            .expect("eccentricity map was just computed")
            .map
    }

    /// The diameter: maximum eccentricity, 0 on the empty graph,
    /// `f64::INFINITY` when disconnected.
    pub fn diameter(&mut self) -> f64 {
        self.ensure_eccentricity();
        self.eccentricity
            .as_ref()
            .map_or(0.0, |data| data.diameter)
    }

    /// The radius: minimum eccentricity, 0 on the empty graph.
    pub fn radius(&mut self) -> f64 {
        self.ensure_eccentricity();
        self.eccentricity.as_ref().map_or(0.0, |data| data.radius)
    }

    /// Vertices whose eccentricity equals the radius.
    pub fn center(&mut self) -> HashSet<G::Vertex> {
        self.ensure_eccentricity();
        let Some(data) = self.eccentricity.as_ref() else {
            return HashSet::new();
        };
        data.map
            .iter()
            .filter(|(_, &ecc)| self.comparator.eq(ecc, data.radius))
            .map(|(v, _)| v.clone())
            .collect()
    }

    /// Vertices whose eccentricity equals the diameter.
    pub fn periphery(&mut self) -> HashSet<G::Vertex> {
        self.ensure_eccentricity();
        let Some(data) = self.eccentricity.as_ref() else {
            return HashSet::new();
        };
        data.map
            .iter()
            .filter(|(_, &ecc)| self.comparator.eq(ecc, data.diameter))
            .map(|(v, _)| v.clone())
            .collect()
    }

    /// Vertices `u` such that every `v` at distance `ecc(u)` from `u` has
    /// `ecc(v) = ecc(u)`: if `v` is as far from `u` as possible, then `u`
    /// is as far from `v` as possible.
    pub fn pseudo_periphery(&mut self) -> HashSet<G::Vertex> {
        self.ensure_eccentricity();
        let Some(data) = self.eccentricity.as_ref() else {
            return HashSet::new();
        };
        let ecc = data.map.clone();
        let comparator = self.comparator;

        let vertices = self.graph.vertices();
        let mut result = HashSet::new();
        for u in &vertices {
            let ecc_u = ecc[u];
            let mut pseudo = true;
            for v in &vertices {
                let d = self.distance.distance(u, v).unwrap_or(f64::INFINITY);
                if comparator.eq(d, ecc_u) && !comparator.eq(ecc[v], ecc_u) {
                    pseudo = false;
                    break;
                }
            }
            if pseudo {
                result.insert(u.clone());
            }
        }
        result
    }

    /// Lazily compute the eccentricity of each vertex.
    ///
    /// The directed sweep visits each unordered pair once and feeds the
    /// distance into both endpoints' maxima; this is valid when the
    /// injected oracle is symmetric. The undirected sweep takes one full
    /// pass per vertex.
    fn ensure_eccentricity(&mut self) {
        if self.eccentricity.is_some() {
            return;
        }

        let vertices = self.graph.vertices();
        let mut map: HashMap<G::Vertex, f64> = HashMap::with_capacity(vertices.len());

        if self.graph.is_directed() {
            let mut ecc = vec![0.0_f64; vertices.len()];
            for i in 0..vertices.len() {
                for j in (i + 1)..vertices.len() {
                    let d = self
                        .distance
                        .distance(&vertices[i], &vertices[j])
                        .unwrap_or(f64::INFINITY);
                    ecc[i] = ecc[i].max(d);
                    ecc[j] = ecc[j].max(d);
                }
            }
            for (v, e) in vertices.iter().cloned().zip(ecc) {
                map.insert(v, e);
            }
        } else {
            for u in &vertices {
                let mut ecc = 0.0_f64;
                for v in &vertices {
                    let d = self.distance.distance(u, v).unwrap_or(f64::INFINITY);
                    ecc = ecc.max(d);
                }
                map.insert(u.clone(), ecc);
            }
        }

        let mut diameter = 0.0_f64;
        let mut radius = f64::INFINITY;
        if map.is_empty() {
            radius = 0.0;
        } else {
            for &e in map.values() {
                diameter = diameter.max(e);
                radius = radius.min(e);
            }
        }

        self.eccentricity = Some(EccentricityData {
            map,
            diameter,
            radius,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyper::SparseHypergraph;

    fn path_graph() -> SparseHypergraph<&'static str, u32> {
        let mut g = SparseHypergraph::undirected();
        g.add_edge(1, ["v1", "v2"]).unwrap();
        g.add_edge(2, ["v2", "v3"]).unwrap();
        g.add_edge(3, ["v3", "v4"]).unwrap();
        g.add_edge(4, ["v4", "v5"]).unwrap();
        g
    }

    #[test]
    fn test_path_graph_metrics() {
        let g = path_graph();
        let mut metrics = GraphDistance::unweighted(&g);

        assert_eq!(metrics.diameter(), 4.0);
        assert_eq!(metrics.radius(), 2.0);
        assert_eq!(metrics.center(), HashSet::from(["v3"]));
        assert_eq!(metrics.periphery(), HashSet::from(["v1", "v5"]));
    }

    #[test]
    fn test_eccentricity_map() {
        let g = path_graph();
        let mut metrics = GraphDistance::unweighted(&g);

        let expected = [("v1", 4.0), ("v2", 3.0), ("v3", 2.0), ("v4", 3.0), ("v5", 4.0)];
        for (v, want) in expected {
            assert_eq!(metrics.eccentricity(&v), Some(want), "{v}");
        }
        assert_eq!(metrics.eccentricity(&"ghost"), None);
    }

    #[test]
    fn test_pseudo_periphery_on_path() {
        let g = path_graph();
        let mut metrics = GraphDistance::unweighted(&g);

        // endpoints see each other at eccentric distance and agree on it;
        // v2's farthest vertex v5 has a different eccentricity
        assert_eq!(metrics.pseudo_periphery(), HashSet::from(["v1", "v5"]));
    }

    #[test]
    fn test_empty_graph() {
        let g: SparseHypergraph<&str, u32> = SparseHypergraph::undirected();
        let mut metrics = GraphDistance::unweighted(&g);

        assert_eq!(metrics.diameter(), 0.0);
        assert_eq!(metrics.radius(), 0.0);
        assert!(metrics.center().is_empty());
        assert!(metrics.periphery().is_empty());
    }

    #[test]
    fn test_single_vertex() {
        let mut g: SparseHypergraph<&str, u32> = SparseHypergraph::undirected();
        g.add_vertex("only");
        let mut metrics = GraphDistance::unweighted(&g);

        assert_eq!(metrics.diameter(), 0.0);
        assert_eq!(metrics.radius(), 0.0);
        assert_eq!(metrics.eccentricity(&"only"), Some(0.0));
        assert_eq!(metrics.pseudo_periphery(), HashSet::from(["only"]));
    }

    #[test]
    fn test_disconnected_graph_is_infinite() {
        let mut g: SparseHypergraph<&str, u32> = SparseHypergraph::undirected();
        g.add_edge(1, ["a", "b"]).unwrap();
        g.add_vertex("island");

        let mut metrics = GraphDistance::unweighted(&g);
        assert_eq!(metrics.diameter(), f64::INFINITY);
        assert_eq!(metrics.radius(), f64::INFINITY);
        assert_eq!(metrics.eccentricity(&"a"), Some(f64::INFINITY));
        // all eccentricities are infinite, so everything is central and
        // peripheral at once
        assert_eq!(metrics.center().len(), 3);
        assert_eq!(metrics.periphery().len(), 3);
    }

    #[test]
    fn test_directed_symmetric_path() {
        // arcs in both directions keep the oracle symmetric, which the
        // pairwise directed sweep relies on
        let mut g: SparseHypergraph<u32, u32> = SparseHypergraph::directed();
        g.add_directed_edge(1, [1], [2]).unwrap();
        g.add_directed_edge(2, [2], [1]).unwrap();
        g.add_directed_edge(3, [2], [3]).unwrap();
        g.add_directed_edge(4, [3], [2]).unwrap();

        let mut metrics = GraphDistance::unweighted(&g);
        assert_eq!(metrics.diameter(), 2.0);
        assert_eq!(metrics.radius(), 1.0);
        assert_eq!(metrics.center(), HashSet::from([2]));
    }

    #[test]
    fn test_weighted_metrics() {
        let mut g: SparseHypergraph<&str, u32> = SparseHypergraph::undirected();
        g.add_edge(1, ["a", "b"]).unwrap();
        g.add_edge(2, ["b", "c"]).unwrap();

        let mut metrics = GraphDistance::weighted(&g, |e: &u32| *e as f64).unwrap();
        // a to c costs 1 + 2
        assert_eq!(metrics.diameter(), 3.0);
        assert_eq!(metrics.radius(), 2.0);
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        let g = path_graph();
        let oracle = UnweightedDistance::new(&g);
        let err = GraphDistance::with_tolerance(&g, oracle, 0.0).unwrap_err();
        assert!(matches!(err, Error::InvalidTolerance(_)));
    }

    #[test]
    fn test_metrics_idempotent() {
        let g = path_graph();
        let mut metrics = GraphDistance::unweighted(&g);
        assert_eq!(metrics.diameter(), metrics.diameter());
        assert_eq!(metrics.center(), metrics.center());
    }
}
