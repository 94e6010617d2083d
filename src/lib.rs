pub mod cs;
pub mod error;

pub use cs::graph;
pub use cs::graph::{
    estimate_min_cut, load_graph, repetitions, run_trial, Cut, Edge, Graph, GraphBuilder,
    GraphLoader, KargerConfig, MinCutEstimator, MinCutReport, ParsePolicy, Vertex,
    VertexRegistry,
};
pub use error::{Error, Result};
