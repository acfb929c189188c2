//! Shortest-path engines and the distance oracle.
//!
//! One traversal state machine serves both the weighted and the unweighted
//! case: Dijkstra over a [`WeightedQueue`] with a non-negative edge-weight
//! function, or breadth-first search over a [`FifoQueue`] with unit weights.
//! Besides distances the engine records the shortest-path counts (sigma) and
//! the predecessor DAG that Brandes' betweenness accumulation consumes.
//!
//! [`DijkstraDistance`] and [`UnweightedDistance`] wrap the engine as a
//! [`Distance`] oracle: a map-like view keyed by source vertex, memoized per
//! source across calls. Missing entries denote unreachability. The caches
//! are per-instance and not thread-safe.

use std::collections::HashMap;

use crate::algo::queue::{FifoQueue, TraversalQueue, WeightedQueue};
use crate::error::{Error, Result};
use crate::graph::{resolve_neighbors, HypergraphRef};

/// Shortest-path distances from source vertices.
///
/// Implementations are lazy and memoizing, so lookups take `&mut self`.
pub trait Distance<V: Eq + std::hash::Hash> {
    /// Distances from `source` to every reachable vertex, including
    /// `source` itself at distance 0. Empty for an unknown source.
    fn distance_map(&mut self, source: &V) -> &HashMap<V, f64>;

    /// The distance from `source` to `target`, or `None` if unreachable.
    fn distance(&mut self, source: &V, target: &V) -> Option<f64> {
        self.distance_map(source).get(target).copied()
    }
}

/// Per-source traversal state produced by [`single_source`]. Owned by one
/// algorithm invocation and discarded afterward.
pub(crate) struct SourceState<V, E> {
    /// Shortest distance from the source; absent means unreachable.
    pub distance: HashMap<V, f64>,
    /// Number of shortest paths from the source (sigma). Kept as `f64`
    /// because counts grow exponentially on dense graphs.
    pub path_count: HashMap<V, f64>,
    /// `(edge, vertex)` pairs preceding each vertex on some shortest path.
    pub predecessors: HashMap<V, Vec<(E, V)>>,
    /// Vertices in the order they were settled, i.e. non-decreasing
    /// distance from the source. Popped in reverse for Brandes.
    pub settled: Vec<V>,
}

/// Run the single-source engine. `edge_weights` selects the machinery:
/// `Some` runs Dijkstra on a decrease-key heap, `None` runs unit-weight BFS
/// on a FIFO. Weights must already be validated non-negative.
pub(crate) fn single_source<G, W>(
    graph: &G,
    source: &G::Vertex,
    edge_weights: Option<&W>,
) -> SourceState<G::Vertex, G::Edge>
where
    G: HypergraphRef,
    W: Fn(&G::Edge) -> f64,
{
    let mut state = SourceState {
        distance: HashMap::new(),
        path_count: HashMap::new(),
        predecessors: HashMap::new(),
        settled: Vec::new(),
    };
    if !graph.contains_vertex(source) {
        return state;
    }

    let mut queue: Box<dyn TraversalQueue<G::Vertex>> = if edge_weights.is_some() {
        Box::new(WeightedQueue::new())
    } else {
        Box::new(FifoQueue::new())
    };

    state.distance.insert(source.clone(), 0.0);
    state.path_count.insert(source.clone(), 1.0);
    queue.insert(source.clone(), 0.0);

    while let Some(v) = queue.remove() {
        state.settled.push(v.clone());
        let v_dist = state.distance[&v];
        let v_sigma = state.path_count.get(&v).copied().unwrap_or(0.0);

        let out = graph.out_edges(&v);
        for (w, e) in resolve_neighbors(graph, &v, &out) {
            let step = edge_weights.map_or(1.0, |weight| weight(&e));
            let alt = v_dist + step;
            let known = state.distance.get(&w).copied();

            // strictly shorter: reset the vertex and reposition it
            if known.map_or(true, |d| alt < d) {
                state.distance.insert(w.clone(), alt);
                if known.is_none() {
                    queue.insert(w.clone(), alt);
                } else {
                    queue.update(&w, alt);
                }
                state.path_count.insert(w.clone(), 0.0);
                state.predecessors.insert(w.clone(), Vec::new());
            }

            // equally short (including the reset above): accumulate
            if state.distance[&w] == alt {
                *state.path_count.entry(w.clone()).or_insert(0.0) += v_sigma;
                state
                    .predecessors
                    .entry(w.clone())
                    .or_default()
                    .push((e, v.clone()));
            }
        }
    }

    state
}

/// Reject any negative edge weight before a traversal starts.
pub(crate) fn validate_weights<G, W>(graph: &G, edge_weights: &W) -> Result<()>
where
    G: HypergraphRef,
    W: Fn(&G::Edge) -> f64,
{
    for e in graph.edges() {
        let weight = edge_weights(&e);
        if weight < 0.0 {
            return Err(Error::NegativeWeight {
                edge: format!("{e:?}"),
                weight,
            });
        }
    }
    Ok(())
}

/// Dijkstra single-source distances over a non-negative edge-weight
/// function, memoized per source.
pub struct DijkstraDistance<'a, G, W>
where
    G: HypergraphRef,
{
    graph: &'a G,
    edge_weights: W,
    cache: HashMap<G::Vertex, HashMap<G::Vertex, f64>>,
}

impl<'a, G, W> std::fmt::Debug for DijkstraDistance<'a, G, W>
where
    G: HypergraphRef,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DijkstraDistance").finish_non_exhaustive()
    }
}

impl<'a, G, W> DijkstraDistance<'a, G, W>
where
    G: HypergraphRef,
    W: Fn(&G::Edge) -> f64,
{
    /// Create an oracle over `graph` with the given weights. Fails with
    /// [`Error::NegativeWeight`] if any edge weight is negative.
    pub fn new(graph: &'a G, edge_weights: W) -> Result<Self> {
        validate_weights(graph, &edge_weights)?;
        Ok(Self {
            graph,
            edge_weights,
            cache: HashMap::new(),
        })
    }
}

impl<G, W> Distance<G::Vertex> for DijkstraDistance<'_, G, W>
where
    G: HypergraphRef,
    W: Fn(&G::Edge) -> f64,
{
    fn distance_map(&mut self, source: &G::Vertex) -> &HashMap<G::Vertex, f64> {
        if !self.cache.contains_key(source) {
            let state = single_source(self.graph, source, Some(&self.edge_weights));
            self.cache.insert(source.clone(), state.distance);
        }
        &self.cache[source]
    }
}

/// Unit-weight BFS distances, memoized per source.
pub struct UnweightedDistance<'a, G>
where
    G: HypergraphRef,
{
    graph: &'a G,
    cache: HashMap<G::Vertex, HashMap<G::Vertex, f64>>,
}

impl<'a, G> UnweightedDistance<'a, G>
where
    G: HypergraphRef,
{
    /// Create an oracle over `graph` with every edge counting as one hop.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            cache: HashMap::new(),
        }
    }
}

impl<G> Distance<G::Vertex> for UnweightedDistance<'_, G>
where
    G: HypergraphRef,
{
    fn distance_map(&mut self, source: &G::Vertex) -> &HashMap<G::Vertex, f64> {
        if !self.cache.contains_key(source) {
            let state = single_source(self.graph, source, None::<&fn(&G::Edge) -> f64>);
            self.cache.insert(source.clone(), state.distance);
        }
        &self.cache[source]
    }
}
