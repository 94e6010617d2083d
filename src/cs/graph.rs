//! Graph algorithms built around randomized contraction.
//!
//! - `union_find`: the vertex registry and its disjoint-set engine
//! - `undirected`: the immutable edge list and the graph that owns both
//! - `loader`: adjacency-list parsing
//! - `karger`: contraction trials and the repeated-trial driver

pub mod karger;
pub mod loader;
pub mod undirected;
pub mod union_find;

pub use karger::{
    estimate_min_cut, repetition_bound, repetitions, run_trial, Cut, KargerConfig,
    MinCutEstimator, MinCutReport,
};
pub use loader::{load_graph, GraphLoader, ParsePolicy};
pub use undirected::{Edge, Graph, GraphBuilder};
pub use union_find::{Vertex, VertexRegistry};
