// Allow minor clippy style warnings at crate level
// These are mostly style preferences, not bugs
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_const_for_fn)]

//! Centrality and connectivity metrics on (hyper)graphs.
//!
//! This crate provides the classic graph-analysis toolbox over a single
//! uniform read view, [`HypergraphRef`], that covers simple graphs and
//! directed or undirected hypergraphs alike:
//!
//! - [`algo::centrality`] - degree, closeness, and Brandes' vertex/edge
//!   betweenness, in unweighted and weighted (non-negative) forms
//! - [`algo::components`] - BFS weak connectivity and Gabow's path-based
//!   strongly connected components
//! - [`algo::distance`] - eccentricity, diameter, radius, center,
//!   periphery, pseudo-periphery over a pluggable distance oracle
//! - [`algo::shortest_path`] - the Dijkstra/BFS engines and memoizing
//!   [`Distance`](algo::shortest_path::Distance) oracles behind the above
//!
//! # Why a hypergraph view?
//!
//! A hyperedge connects any number of vertices; a directed hyperedge
//! partitions its endpoints into a source set and a destination set. The
//! traversal algorithms only ever ask one structural question, "which
//! vertices does this edge lead to from here?", so a single neighbor
//! resolution contract ([`resolve_neighbors`]) lets the same Brandes,
//! Gabow, and Dijkstra implementations serve ordinary graphs and
//! hypergraphs without separate code paths. An ordinary edge is simply the
//! two-endpoint special case, and a directed hyperedge with singleton
//! source and destination sets behaves exactly like an arc.
//!
//! # Example
//!
//! ```rust
//! use centrix::algo::centrality::{betweenness_centrality, BetweennessConfig};
//! use centrix::SparseHypergraph;
//!
//! // two hyperedges sharing the articulation vertex v4
//! let mut g = SparseHypergraph::undirected();
//! g.add_edge("e1", ["v1", "v2", "v3", "v4"]).unwrap();
//! g.add_edge("e2", ["v4", "v5", "v6"]).unwrap();
//!
//! let scores = betweenness_centrality(&g, &BetweennessConfig::default());
//! assert_eq!(scores.vertex_score(&"v4"), Some(6.0));
//! ```
//!
//! # Execution model
//!
//! Everything is single-threaded and synchronous: an algorithm call owns
//! its traversal state, blocks until done, and leaves nothing behind. The
//! graph must not be mutated while a call is running. Instances with
//! memoization caches (degree, closeness, the distance oracles) are not
//! thread-safe; bind each instance to one thread.

pub mod algo;
mod error;
mod graph;
mod hyper;

pub use error::{Error, Result};
pub use graph::{resolve_neighbors, HypergraphRef};
pub use hyper::SparseHypergraph;
