//! Sweep of Barabási–Albert networks, written to `barabasi_albert_networks/`.

use std::process::ExitCode;

use network_sweep::{cli, ModelKind};

fn main() -> ExitCode {
    cli::main_for(ModelKind::BarabasiAlbert)
}
