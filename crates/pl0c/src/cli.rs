use std::path::PathBuf;

use clap::Parser;

/// pl0c - a PL/0 to Beck-VM bytecode compiler.
#[derive(Parser, Debug)]
#[command(name = "pl0c")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compiles PL/0 source into Beck-VM bytecode", long_about = None)]
pub struct Cli {
    /// PL/0 source file to compile.
    pub input: PathBuf,

    /// Write the bytecode here instead of `<stem>.cl0`.
    #[arg(short = 'o', long = "out")]
    pub output: Option<PathBuf>,

    /// Also dump the parse tree as `<stem>.xml`.
    #[arg(short = 'a', long = "ast")]
    pub ast: bool,

    /// Verbose logging (debug level instead of info).
    #[arg(short, long, env = "PL0C_VERBOSE")]
    pub verbose: bool,
}
