use std::io::{self, BufRead, Write};

use parser::{Cli, Commands, CrossArgs};
use genetics::{Cross, CrossError, CrossStats, Genotype, ordinal_suffix};
use console::{GenotypePrompt, Report};
use located_error::prelude::*;

#[macro_use]
extern crate log;

/// Exit status of a run whose genotypes could not be crossed with each other.
pub const INCOMPATIBLE_EXIT_CODE: i32 = -1;

/// How a run ended, when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Crossed(CrossStats),
    Incompatible,
}

impl Outcome {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Crossed(_)   => 0,
            Self::Incompatible => INCOMPATIBLE_EXIT_CODE,
        }
    }
}

/// Run genotype-cross on the process' stdin and stdout.
pub fn run(cli: Cli) -> Result<Outcome> {
    let stdin  = io::stdin();
    let stdout = io::stdout();
    run_with_io(cli, stdin.lock(), stdout.lock())
}

/// Unpack `cli` and run the appropriate subcommand, reading answers from `reader` and
/// writing prompts and results to `writer`.
pub fn run_with_io<R: BufRead, W: Write>(cli: Cli, reader: R, writer: W) -> Result<Outcome> {
    match cli.commands.unwrap_or_default() {
        Commands::Cross(args) => cross(&args, reader, writer),

        Commands::FromYaml{yaml} => {
            info!("Loading arguments from {}", yaml.display());
            let cli = Cli::deserialize(&yaml)?;
            if let Some(Commands::FromYaml{..}) = cli.commands {
                return Err(anyhow!("{} refers to another yaml configuration file.", yaml.display()))
                    .loc("While replaying a yaml configuration file")
            }
            run_with_io(cli, reader, writer)
        },
    }
}

fn cross<R: BufRead, W: Write>(args: &CrossArgs, reader: R, writer: W) -> Result<Outcome> {
    let mut prompt = GenotypePrompt::new(reader, writer);

    // ----------------------------- Gather both parent genotypes.
    let first  = obtain_genotype(&mut prompt, 1, args.first)?;
    let second = obtain_genotype(&mut prompt, 2, args.second)?;
    debug!("Parent genotypes: {first} x {second}");

    // ----------------------------- Cross and report.
    let outcome = match Cross::new(&first, &second) {
        Ok(cross) => {
            let report = Report::new(&cross);
            report.write_all(prompt.writer())
                .loc("While writing the crossing report")?;
            Outcome::Crossed(*report.stats())
        },
        Err(e @ CrossError::Incompatible{..}) => {
            warn!("{e}");
            Report::write_incompatible(prompt.writer())
                .loc("While writing the crossing report")?;
            Outcome::Incompatible
        },
    };
    prompt.writer().flush()?;

    if args.hold {
        prompt.hold().loc("While waiting for the user to exit")?;
    }
    Ok(outcome)
}

/// Use the genotype provided on the command line if any, or ask for it interactively.
fn obtain_genotype<R: BufRead, W: Write>(
    prompt : &mut GenotypePrompt<R, W>,
    index  : usize,
    given  : Option<Genotype>
) -> Result<Genotype> {
    match given {
        Some(genotype) => {
            writeln!(prompt.writer(), "{index}{} Genotype: {genotype}", ordinal_suffix(index))?;
            Ok(genotype)
        },
        None => prompt.ask_genotype(index)
            .with_loc(|| format!("While asking for the {index}{} genotype", ordinal_suffix(index))),
    }
}
