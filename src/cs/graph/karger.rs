//! Karger's randomized minimum cut.
//!
//! One trial contracts uniformly random edges until two super-vertices remain and counts
//! the edges running between them. A single trial finds a minimum cut with probability at
//! least `2 / (V * (V - 1))`, so the driver repeats it `ceil(V^2 * ln V)` times, which
//! misses the true minimum with probability at most about `1 / V`.
//!
//! # Examples
//!
//! ```rust
//! use karger_mincut::{Graph, KargerConfig, MinCutEstimator};
//!
//! let mut square = Graph::from_edges([(1, 2), (2, 3), (3, 4), (4, 1)]).unwrap();
//! let mut estimator = MinCutEstimator::with_seed(KargerConfig::default(), 7);
//! let report = estimator.estimate(&mut square);
//! assert_eq!(report.min_cut, 2);
//! ```

use std::cmp::Ordering;

use bitvec::vec::BitVec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;

use crate::cs::graph::undirected::{Edge, Graph};
use crate::cs::graph::union_find::VertexRegistry;
use crate::error::{Error, Result};

/// A two-way partition produced by one contraction trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cut {
    /// Number of edges with one endpoint on each side.
    pub size: usize,
    /// `side[i]` is set when registry index `i` ends up with vertex index 0.
    pub side: BitVec,
}

impl Cut {
    pub fn contains(&self, index: usize) -> bool {
        self.side[index]
    }

    /// Whether `edge` runs between the two sides.
    pub fn crosses(&self, edge: &Edge) -> bool {
        self.side[edge.source()] != self.side[edge.dest()]
    }
}

/// Settings for the repeated-trial driver.
#[derive(Debug, Clone, Default)]
pub struct KargerConfig {
    /// Fixed number of trials. `None` uses [`repetitions`] of the vertex count.
    pub trials: Option<usize>,
}

impl KargerConfig {
    pub fn with_trials(trials: usize) -> Self {
        Self {
            trials: Some(trials),
        }
    }
}

/// Outcome of a full driver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCutReport {
    /// Smallest cut observed, or 0 when the graph needs no contraction.
    pub min_cut: usize,
    /// Partition behind `min_cut`, absent when no trial ran.
    pub cut: Option<Cut>,
    /// Trials actually executed.
    pub trials: usize,
    /// How many of those trials produced `min_cut`.
    pub hits: usize,
}

impl MinCutReport {
    fn trivial() -> Self {
        Self {
            min_cut: 0,
            cut: None,
            trials: 0,
            hits: 0,
        }
    }

    fn observe(&mut self, cut: Cut) {
        self.trials += 1;
        let best = self.cut.as_ref().map(|best| best.size);
        match best.map(|size| cut.size.cmp(&size)) {
            Some(Ordering::Greater) => {}
            Some(Ordering::Equal) => self.hits += 1,
            Some(Ordering::Less) | None => {
                self.min_cut = cut.size;
                self.cut = Some(cut);
                self.hits = 1;
            }
        }
    }

    fn combine(self, other: Self) -> Self {
        let trials = self.trials + other.trials;
        let sizes = (
            self.cut.as_ref().map(|cut| cut.size),
            other.cut.as_ref().map(|cut| cut.size),
        );
        let mut kept = match sizes {
            (_, None) => self,
            (None, Some(_)) => other,
            (Some(left), Some(right)) => match left.cmp(&right) {
                Ordering::Less => self,
                Ordering::Greater => other,
                Ordering::Equal => Self {
                    hits: self.hits + other.hits,
                    ..self
                },
            },
        };
        kept.trials = trials;
        kept
    }
}

/// `V^2 * ln V`, the real-valued trial count behind [`repetitions`]. Zero below two vertices.
pub fn repetition_bound(vertices: usize) -> f64 {
    if vertices < 2 {
        return 0.0;
    }
    let v = vertices as f64;
    v * v * v.ln()
}

/// Number of trials needed for a `1 - 1/V` chance of seeing the minimum cut.
///
/// Graphs with fewer than two vertices need none.
pub fn repetitions(vertices: usize) -> usize {
    if vertices < 2 {
        return 0;
    }
    repetition_bound(vertices).ceil() as usize
}

/// Runs a single contraction trial.
///
/// The registry is reset first, so merges left over from an earlier trial or made through
/// [`Graph::registry_mut`] never leak into this one. Graphs with fewer than two vertices
/// give an empty cut without drawing. A graph with several connected components (this
/// covers any graph without edges) is rejected before anything is touched, since random
/// edges can never join its components. On success the registry is left contracted.
///
/// # Arguments
/// - `graph`: The graph to contract.
/// - `rng`: Source of the random edge picks.
///
/// # Returns
/// The two-way cut the contraction ended on, or [`Error::Disconnected`].
pub fn run_trial<R: Rng + ?Sized>(graph: &mut Graph, rng: &mut R) -> Result<Cut> {
    let vertices = graph.vertex_count();
    if vertices < 2 {
        return Ok(Cut {
            size: 0,
            side: BitVec::repeat(true, vertices),
        });
    }
    if !graph.is_connected() {
        return Err(Error::Disconnected {
            components: graph.components(),
        });
    }
    graph.reset();
    let (registry, edges) = graph.split_mut();
    Ok(contract(registry, edges, rng))
}

/// Contracts a connected graph with at least two vertices down to two components.
fn contract<R: Rng + ?Sized>(registry: &mut VertexRegistry, edges: &[Edge], rng: &mut R) -> Cut {
    debug_assert!(registry.is_reset());

    let mut remaining = registry.len();
    while remaining > 2 {
        let (source, dest) = edges[rng.gen_range(0..edges.len())].endpoints();
        let source_root = registry.find(source);
        let dest_root = registry.find(dest);
        if source_root == dest_root {
            continue;
        }
        registry.merge(source_root, dest_root);
        remaining -= 1;
    }

    let size = edges
        .iter()
        .filter(|edge| registry.find(edge.source()) != registry.find(edge.dest()))
        .count();
    let anchor = registry.find(0);
    let side = (0..registry.len())
        .map(|index| registry.find(index) == anchor)
        .collect();
    Cut { size, side }
}

/// Repeats contraction trials and keeps the smallest cut.
///
/// The generator is seeded once, at construction, and shared by every trial of every
/// run made through this estimator. Not `Clone`: a copy would replay the same draws.
#[derive(Debug)]
pub struct MinCutEstimator {
    config: KargerConfig,
    rng: ChaCha20Rng,
}

impl MinCutEstimator {
    /// Create an estimator seeded from system entropy
    pub fn new(config: KargerConfig) -> Self {
        Self {
            config,
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Create an estimator with a fixed seed, for reproducible runs
    pub fn with_seed(config: KargerConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &KargerConfig {
        &self.config
    }

    fn trials_for(&self, vertices: usize) -> usize {
        self.config
            .trials
            .unwrap_or_else(|| repetitions(vertices))
            .max(1)
    }

    /// Returns `true` when `graph` has an immediate answer of 0.
    fn short_circuits(graph: &Graph) -> bool {
        if graph.vertex_count() < 2 {
            log::debug!("{} vertices, nothing to cut", graph.vertex_count());
            return true;
        }
        if !graph.is_connected() {
            log::info!(
                "graph has {} connected components, min cut is 0",
                graph.components()
            );
            return true;
        }
        false
    }

    /// Runs the trials one after another on `graph`, resetting it after each.
    ///
    /// The graph's registry is reset on return.
    pub fn estimate(&mut self, graph: &mut Graph) -> MinCutReport {
        if Self::short_circuits(graph) {
            return MinCutReport::trivial();
        }
        let trials = self.trials_for(graph.vertex_count());
        graph.reset();

        let mut report = MinCutReport::trivial();
        let (registry, edges) = graph.split_mut();
        for trial in 0..trials {
            let cut = contract(registry, edges, &mut self.rng);
            log::trace!("trial {trial}: cut {}", cut.size);
            report.observe(cut);
            registry.reset();
        }

        log::info!(
            "min cut {} after {} trials ({} hits)",
            report.min_cut,
            report.trials,
            report.hits
        );
        report
    }

    /// Runs the trials on the rayon pool.
    ///
    /// Each worker contracts a private copy of the registry, so `graph` itself is never
    /// modified. Trial `i` draws from its own ChaCha stream `i` under a base seed taken
    /// from this estimator, which makes the result independent of scheduling.
    pub fn estimate_parallel(&mut self, graph: &Graph) -> MinCutReport {
        if Self::short_circuits(graph) {
            return MinCutReport::trivial();
        }
        let trials = self.trials_for(graph.vertex_count());
        let base_seed: u64 = self.rng.gen();
        let registry = graph.registry();
        let edges = graph.edges();

        let report = (0..trials)
            .into_par_iter()
            .map_init(
                || {
                    let mut scratch = registry.clone();
                    scratch.reset();
                    scratch
                },
                |scratch, trial| {
                    let mut rng = ChaCha20Rng::seed_from_u64(base_seed);
                    rng.set_stream(trial as u64);
                    let cut = contract(scratch, edges, &mut rng);
                    scratch.reset();

                    let mut report = MinCutReport::trivial();
                    report.observe(cut);
                    report
                },
            )
            .reduce(MinCutReport::trivial, MinCutReport::combine);

        log::info!(
            "min cut {} after {} parallel trials ({} hits)",
            report.min_cut,
            report.trials,
            report.hits
        );
        report
    }
}

/// Estimates the minimum cut of `graph` with an entropy-seeded estimator and the default
/// number of trials.
///
/// # Arguments
/// - `graph`: The graph to cut. Its registry is reset on return.
///
/// # Returns
/// The smallest cut seen over `ceil(V^2 * ln V)` trials, or 0 for graphs with fewer than
/// two vertices or more than one connected component.
pub fn estimate_min_cut(graph: &mut Graph) -> usize {
    MinCutEstimator::new(KargerConfig::default())
        .estimate(graph)
        .min_cut
}
