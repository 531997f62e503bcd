//! Error types shared across the sweep pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::{ModelKind, SweepValue};

/// Raised by a graph generator for parameters it cannot honour.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerationError {
    #[error("Barabási–Albert network must have m >= 1 and m < n, got m = {m}, n = {n}")]
    InvalidAttachment { m: usize, n: usize },
    #[error("ring lattice degree must not exceed the node count, got k = {k}, n = {n}")]
    LatticeDegreeTooLarge { k: usize, n: usize },
    #[error("probability must be a finite value in [0, 1], got {p}")]
    InvalidProbability { p: f64 },
    #[error("{n} nodes do not fit the node identifier type")]
    TooManyNodes { n: usize },
}

/// Invalid or unusable sweep configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{input}` is not a number")]
    InvalidNumber { input: String },
    #[error("probability {value} is not one of 0.0, 0.1, ..., 1.0")]
    OffGridProbability { value: f64 },
    #[error("invalid range `{input}`: expected {expected}")]
    RangeSyntax {
        input: String,
        expected: &'static str,
    },
    #[error("node count range {start}..={end} step {step} is empty or has a zero bound")]
    InvalidNodeRange {
        start: usize,
        end: usize,
        step: usize,
    },
    #[error("probability range starts at {start} but ends at {end}")]
    InvalidProbabilityRange { start: String, end: String },
    #[error("option `{option}` does not apply to the {model} model")]
    NotApplicable {
        option: &'static str,
        model: ModelKind,
    },
    #[error("failed to read config file `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures that abort a sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to generate graph for {value}: {source}")]
    Generation {
        value: SweepValue,
        #[source]
        source: GenerationError,
    },
    #[error("failed to create output directory `{path}`: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write edge list `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to report progress: {source}")]
    Report {
        #[source]
        source: io::Error,
    },
}

/// Raised while loading an edge-list file back into memory.
#[derive(Debug, Error)]
pub enum EdgeListError {
    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line} is not an `<u> <v>` edge: {content:?}")]
    Malformed { line: usize, content: String },
}
