//! Parameter sweeps over classical random graph models.
//!
//! Each sweep generates one graph per parameter value and exports its edge
//! list as a plain text file, one `u v` pair per line. The three executables
//! in `src/bin` are thin wrappers that pick a [`ModelKind`] and hand over to
//! [`cli::main_for`].

// Random number generation external libraries.
// ChaCha8 is used so that a seeded sweep is reproducible on different
// machines.
extern crate rand;
extern crate rand_chacha;

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod sweep;
pub mod timing;
pub mod writer;

/// Node identifiers as written to edge-list files.
pub type Node = u32;

pub type UnweightedEdge = (Node, Node);

/// Undirected graph produced by a generator. Edge iteration order is the
/// order in which the generator inserted them.
pub type Network = petgraph::graph::UnGraph<(), (), Node>;

pub use rand::SeedableRng;

pub fn default_rng(seed: u64) -> rand_chacha::ChaCha8Rng {
    rand_chacha::ChaCha8Rng::seed_from_u64(seed)
}

pub use config::{ConfigOverrides, FixedOverrides, ModelConfig, SweepConfig};
pub use error::{ConfigError, EdgeListError, GenerationError, SweepError};
pub use generator::{GraphGenerator, RandomGraphGenerator};
pub use model::{GraphModel, ModelKind, Probability, SweepValue};
pub use pipeline::{run_sweep, SweepSummary, WrittenFile};
pub use reader::load_edge_list;
pub use report::ProgressReporter;
pub use sweep::{NodeCountRange, ProbabilityRange, SweepPlan};
pub use writer::EdgeListWriter;
