//! CLI entry point for growing self-avoiding walks

use clap::Parser;
use saw_lattice::io::cli::{Cli, WalkRunner};

fn main() -> saw_lattice::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    WalkRunner::new(cli).run().map(|_| ())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
