//! Sweep of Watts–Strogatz networks, written to `watts_strogatz_networks/`.

use std::process::ExitCode;

use network_sweep::{cli, ModelKind};

fn main() -> ExitCode {
    cli::main_for(ModelKind::WattsStrogatz)
}
