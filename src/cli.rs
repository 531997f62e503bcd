//! Command-line front end shared by the per-model executables.
//!
//! Without arguments every executable reproduces its classic sweep. Flags and
//! an optional JSON config file may override the sweep range, the fixed
//! parameters, the output directory and the generator seed.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, instrument};

use crate::config::{ConfigOverrides, FixedOverrides, SweepConfig};
use crate::error::SweepError;
use crate::generator::RandomGraphGenerator;
use crate::logging;
use crate::model::ModelKind;
use crate::pipeline::{run_sweep, SweepSummary};
use crate::report::ProgressReporter;
use crate::sweep::{NodeCountRange, ProbabilityRange, SweepPlan};

/// Options accepted by every sweep executable.
#[derive(Debug, Parser, Clone, Default)]
#[command(about = "Generate random graphs across a parameter sweep and save their edge lists.")]
pub struct SweepArgs {
    /// JSON file with configuration overrides; flags take precedence.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory receiving the edge-list files.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Seed for the graph generator; omit for a fresh random run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Node counts to sweep (Barabási–Albert only).
    #[arg(long = "nodes", value_name = "START:END:STEP")]
    pub node_count_range: Option<NodeCountRange>,

    /// Probabilities to sweep on the 0.1 grid (Erdős–Rényi and Watts–Strogatz).
    #[arg(long = "probabilities", value_name = "START:END")]
    pub probability_range: Option<ProbabilityRange>,

    /// Fixed node count (Erdős–Rényi and Watts–Strogatz).
    #[arg(short = 'n', long = "node-count")]
    pub n: Option<usize>,

    /// Edges attached per new node (Barabási–Albert).
    #[arg(short = 'm', long = "attachment")]
    pub m: Option<usize>,

    /// Ring lattice degree (Watts–Strogatz).
    #[arg(short = 'k', long = "lattice-degree")]
    pub k: Option<usize>,
}

impl SweepArgs {
    /// The flag layer of the configuration.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            node_count_range: self.node_count_range,
            probability_range: self.probability_range,
            fixed_params: FixedOverrides {
                n: self.n,
                m: self.m,
                k: self.k,
            },
            output_dir: self.output_dir.clone(),
            seed: self.seed,
        }
    }
}

/// Resolves the configuration for `model` and runs the sweep, printing
/// progress to `out`.
///
/// # Errors
/// Returns [`SweepError`] for invalid configuration or any failure during the
/// sweep.
#[instrument(name = "cli.run", err, skip(args, out))]
pub fn run(model: ModelKind, args: &SweepArgs, out: impl Write) -> Result<SweepSummary, SweepError> {
    let config = SweepConfig::resolve(model, args.config.as_deref(), &args.overrides())?;
    let plan = SweepPlan::new(&config);
    let mut generator = RandomGraphGenerator::new(config.seed);
    let mut reporter = ProgressReporter::new(out);
    run_sweep(&plan, &mut generator, &mut reporter)
}

/// Entry point of the per-model executables.
pub fn main_for(model: ModelKind) -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    let args = SweepArgs::parse();
    let stdout = io::stdout();
    match run(model, &args, stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, model = %model, "sweep failed");
            ExitCode::FAILURE
        }
    }
}

fn report_logging_init_error(err: &logging::LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
