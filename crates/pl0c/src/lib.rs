//! pl0c - driver crate for the PL/0 to Beck-VM bytecode compiler.
//!
//! Thin orchestration over `pl0-lex`/`pl0-sym`/`pl0-gen`/`pl0-par`: parse
//! CLI arguments, set up logging, run one compilation, map the result to an
//! exit code.

mod cli;
mod config;
mod error;
mod session;
mod xml;

pub use cli::Cli;
pub use config::Config;
pub use error::{CompileError, CompileResult};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Runs one compilation end to end. Installs a `tracing` subscriber on
/// first call; safe to call more than once (subsequent installs are
/// ignored), which keeps this usable from integration tests.
pub fn run(config: Config) -> CompileResult<()> {
    init_logging(config.verbose);
    session::compile(&config)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("PL0C_LOG").unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}
