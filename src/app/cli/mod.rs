//! CLI Adapter.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, BuildOptions};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "cmbuild")]
#[command(version)]
#[command(
    about = "Configure and build a CMake project into its build directory",
    long_about = None
)]
struct Cli {
    /// Project source directory (defaults to the directory cmbuild was built from)
    #[arg(short = 'S', long, env = "CMBUILD_SOURCE_DIR", value_name = "DIR")]
    source_dir: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run_build(cli.source_dir) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run_build(source_dir: Option<PathBuf>) -> Result<(), AppError> {
    let outcome = api::build(BuildOptions { source_dir })?;
    println!("✅ Built {} in {}", outcome.root.display(), outcome.build_path.display());
    Ok(())
}

/// `RUST_LOG` wins when set; otherwise warnings only, or debug with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .init();
}
