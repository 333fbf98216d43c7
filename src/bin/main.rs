use std::{io::IsTerminal, process};
use clap::Parser;

#[macro_use]
extern crate log;

/// Parse command line arguments and run `genotype_cross::run()`
fn main() {
    // ----------------------------- Run CLI Parser
    let cli = parser::Cli::parse();

    // ----------------------------- Init logger.
    let verbosity = if cli.quiet {0} else {cli.verbose.saturating_add(1)};
    if let Err(e) = logger::Logger::init(verbosity) {
        eprintln!("Failed to initialize logger: {e}");
    }

    if !std::io::stdin().is_terminal() {
        info!("Standard input is not a terminal: genotypes will be read from the incoming stream.");
    }

    // ----------------------------- Serialize command line arguments
    if let Err(e) = cli.serialize() {
        error!("{:?}", e);
        process::exit(1);
    };

    // ----------------------------- Unpack Cli and cross genotypes.
    match genotype_cross::run(cli) {
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(e) => {
            error!("{:?}", e);
            process::exit(1);
        }
    }
}
