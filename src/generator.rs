//! Random graph generators.
//!
//! The pipeline only sees the [`GraphGenerator`] trait. [`RandomGraphGenerator`]
//! implements it with the classic constructions, following the networkx
//! formulations so edge counts and parameter checks match what downstream
//! tooling expects:
//!
//! - **Barabási–Albert**: a star on `m + 1` nodes grows by preferential
//!   attachment until it has `n` nodes, giving `m * (n - m)` edges.
//! - **Erdős–Rényi**: each of the `n * (n - 1) / 2` pairs is kept independently
//!   with probability `p`.
//! - **Watts–Strogatz**: a ring lattice of degree `k` whose edges are rewired
//!   with probability `p`. Rewiring never changes the edge count.
//!
//! Edges are inserted into the resulting [`Network`] in generation order, which
//! is the order in which they are later written out.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::GenerationError;
use crate::model::GraphModel;
use crate::{Network, Node, SeedableRng};

/// Produces one graph per call.
pub trait GraphGenerator {
    /// # Errors
    /// Returns [`GenerationError`] when the model parameters are invalid.
    fn generate(&mut self, model: &GraphModel) -> Result<Network, GenerationError>;
}

/// Generator backed by a ChaCha8 stream shared across all graphs of a run.
pub struct RandomGraphGenerator<R = ChaCha8Rng> {
    rng: R,
}

impl RandomGraphGenerator<ChaCha8Rng> {
    /// Seeds from `seed` when given, otherwise from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RandomGraphGenerator::from_seed(seed),
            None => RandomGraphGenerator::from_rng(ChaCha8Rng::from_entropy()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        RandomGraphGenerator::from_rng(crate::default_rng(seed))
    }
}

impl<R: Rng> RandomGraphGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        RandomGraphGenerator { rng }
    }
}

impl<R: Rng> GraphGenerator for RandomGraphGenerator<R> {
    fn generate(&mut self, model: &GraphModel) -> Result<Network, GenerationError> {
        debug!(model = %model.kind(), ?model, "generating graph");
        match *model {
            GraphModel::BarabasiAlbert { n, m } => barabasi_albert(&mut self.rng, n, m),
            GraphModel::ErdosRenyi { n, p } => erdos_renyi(&mut self.rng, n, p),
            GraphModel::WattsStrogatz { n, k, p } => watts_strogatz(&mut self.rng, n, k, p),
        }
    }
}

/// Preferential attachment graph on `n` nodes, each new node bringing `m`
/// edges to distinct existing nodes.
///
/// # Errors
/// [`GenerationError::InvalidAttachment`] unless `1 <= m < n`.
pub fn barabasi_albert<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    m: usize,
) -> Result<Network, GenerationError> {
    if m < 1 || m >= n {
        return Err(GenerationError::InvalidAttachment { m, n });
    }
    check_node_count(n)?;

    let mut edges = Vec::with_capacity(m * (n - m));
    // Each node appears once per incident edge, so a uniform draw from this
    // list is a draw proportional to degree.
    let mut repeated = Vec::with_capacity(2 * m * (n - m));
    for leaf in 1..=m {
        edges.push((0, leaf));
        repeated.push(0);
    }
    repeated.extend(1..=m);

    let mut targets = Vec::with_capacity(m);
    for source in (m + 1)..n {
        targets.clear();
        while targets.len() < m {
            let candidate = repeated[rng.gen_range(0..repeated.len())];
            if !targets.contains(&candidate) {
                targets.push(candidate);
            }
        }
        for &target in &targets {
            edges.push((source, target));
        }
        repeated.extend_from_slice(&targets);
        repeated.extend(std::iter::repeat(source).take(m));
    }

    Ok(assemble(n, edges))
}

/// G(n, p) random graph. `p <= 0` yields no edges and `p >= 1` the complete
/// graph.
///
/// # Errors
/// [`GenerationError::InvalidProbability`] for a probability outside `[0, 1]`.
pub fn erdos_renyi<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    p: f64,
) -> Result<Network, GenerationError> {
    check_probability(p)?;
    check_node_count(n)?;

    if p >= 1.0 {
        return Ok(assemble(n, complete_edges(n)));
    }
    let mut edges = Vec::new();
    if p > 0.0 {
        for u in 0..n {
            for v in (u + 1)..n {
                if rng.gen::<f64>() < p {
                    edges.push((u, v));
                }
            }
        }
    }
    Ok(assemble(n, edges))
}

/// Small-world graph: ring lattice with `k / 2` neighbours on each side, then
/// every lattice edge `(u, v)` is replaced by `(u, w)` with probability `p`.
///
/// # Errors
/// [`GenerationError::LatticeDegreeTooLarge`] when `k > n`, and
/// [`GenerationError::InvalidProbability`] for a probability outside `[0, 1]`.
pub fn watts_strogatz<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    k: usize,
    p: f64,
) -> Result<Network, GenerationError> {
    if k > n {
        return Err(GenerationError::LatticeDegreeTooLarge { k, n });
    }
    check_probability(p)?;
    check_node_count(n)?;
    if k == n {
        return Ok(assemble(n, complete_edges(n)));
    }

    let half = k / 2;
    // Since k < n, offsets 1..=half never wrap onto an existing pair.
    let mut edges = Vec::with_capacity(n * half);
    for offset in 1..=half {
        for u in 0..n {
            edges.push((u, (u + offset) % n));
        }
    }
    let mut present: HashSet<(usize, usize)> =
        edges.iter().map(|&(u, v)| ordered(u, v)).collect();
    let mut degree = vec![2 * half; n];

    for edge in &mut edges {
        if rng.gen::<f64>() >= p {
            continue;
        }
        let (u, v) = *edge;
        let mut w = rng.gen_range(0..n);
        let mut saturated = false;
        while w == u || present.contains(&ordered(u, w)) {
            w = rng.gen_range(0..n);
            if degree[u] >= n - 1 {
                saturated = true;
                break;
            }
        }
        if saturated {
            continue;
        }
        present.remove(&ordered(u, v));
        present.insert(ordered(u, w));
        degree[v] -= 1;
        degree[w] += 1;
        *edge = (u, w);
    }

    Ok(assemble(n, edges))
}

fn complete_edges(n: usize) -> Vec<(usize, usize)> {
    (0..n)
        .flat_map(|u| ((u + 1)..n).map(move |v| (u, v)))
        .collect()
}

const fn ordered(u: usize, v: usize) -> (usize, usize) {
    if u < v {
        (u, v)
    } else {
        (v, u)
    }
}

fn check_probability(p: f64) -> Result<(), GenerationError> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(GenerationError::InvalidProbability { p })
    }
}

fn check_node_count(n: usize) -> Result<(), GenerationError> {
    // The maximum index value is reserved by petgraph as an end marker.
    if n >= Node::MAX as usize {
        return Err(GenerationError::TooManyNodes { n });
    }
    Ok(())
}

/// Builds a graph with nodes `0..n` and `edges` inserted in order.
fn assemble(n: usize, edges: Vec<(usize, usize)>) -> Network {
    let mut graph = Network::with_capacity(n, edges.len());
    for _ in 0..n {
        graph.add_node(());
    }
    for (u, v) in edges {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }
    graph
}
