use std::path::PathBuf;

use crate::cli::Cli;

/// Resolved compiler configuration, built once from [`Cli`].
#[derive(Debug, Clone)]
pub struct Config {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub ast_file: Option<PathBuf>,
    pub emit_ast: bool,
    pub verbose: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        let output_file = cli
            .output
            .unwrap_or_else(|| cli.input.with_extension("cl0"));
        let ast_file = cli.ast.then(|| cli.input.with_extension("xml"));

        Self {
            input_file: cli.input,
            output_file,
            ast_file,
            emit_ast: cli.ast,
            verbose: cli.verbose,
        }
    }
}
