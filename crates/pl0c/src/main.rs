use clap::Parser;
use pl0c::{Cli, Config};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = pl0c::run(Config::from_cli(cli)) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
