//! Sweep of Erdős–Rényi networks, written to `erdos_renyi_networks/`.

use std::process::ExitCode;

use network_sweep::{cli, ModelKind};

fn main() -> ExitCode {
    cli::main_for(ModelKind::ErdosRenyi)
}
