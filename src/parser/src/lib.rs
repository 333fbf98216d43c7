use std::{
    fs::File,
    path::{Path, PathBuf},
};

use located_error::prelude::*;

use clap::{Parser, Subcommand, Args};
use serde::{Serialize, Deserialize};
use log::debug;

use genetics::Genotype;

mod error;
pub use error::ParserError;

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(name="genotype-cross", author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// genotype-cross: enumerate the offspring genotypes of a monohybrid cross.
pub struct Cli {
    ///Set the verbosity level (-v -vv -vvv)
    ///
    /// Set the verbosity level of this program. Multiple levels allowed {n}
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    ///
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use The --quiet/-q to disable them. Log records are written to stderr.
    #[clap(short='v', long, parse(from_occurrences), global=true)]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emmited and redirected to the console, even when verbose mode is off.
    /// Use this argument to disable this. Only errors will be displayed.
    #[clap(short='q', long, global=true)]
    pub quiet: bool,

    /// Defaults to an interactive `cross` when no subcommand is provided.
    #[clap(subcommand)]
    pub commands: Option<Commands>,
}

impl Cli {
    /// Serialize command line arguments into yaml.
    ///
    /// # Behavior
    /// - The serialized arguments are always logged at debug level.
    /// - If the user provided `cross --save-config <FILE>`, arguments are also written to `<FILE>`,
    ///   which can later be replayed with the `from-yaml` subcommand.
    pub fn serialize(&self) -> Result<()> {
        let serialized = serde_yaml::to_string(&self)
            .map_err(ParserError::SerializeArgs)
            .loc("While serializing command line arguments")?;

        debug!("\n---- Command line args ----\n{}\n---", serialized);

        let Some(Commands::Cross(CrossArgs { save_config: Some(output_file), .. })) = &self.commands else {
            return Ok(())
        };

        std::fs::write(output_file, serialized)
            .map_err(|e| ParserError::WriteArgs(output_file.clone(), e))
            .loc("While saving command line arguments")
    }

    /// Deserialize a `.yaml` file into command line arguments.
    ///
    /// # Errors
    /// - if the provided `.yaml` file cannot be opened.
    /// - if `serde_yaml` fails to parse the provided file into `Self`.
    pub fn deserialize(yaml: &Path) -> Result<Self> {
        let file = File::open(yaml)
            .map_err(|e| ParserError::OpenArgs(yaml.to_path_buf(), e))
            .loc("While reading a yaml configuration file")?;
        serde_yaml::from_reader(file)
            .map_err(|e| ParserError::DeserializeArgs(yaml.to_path_buf(), e))
            .loc("While reading a yaml configuration file")
    }
}

#[derive(Subcommand, Debug, Serialize, Deserialize)]
pub enum Commands {
    /// Cross two genotypes and summarize the four possible offspring genotypes.
    ///
    /// Genotypes are written as two alleles of the same gene, where uppercase letters are
    /// dominant and lowercase letters are recessive. e.g. 'AA', 'Aa', 'aa'.
    Cross(CrossArgs),

    /// Run genotype-cross using a previously generated .yaml configuration file.
    ///
    /// See the --save-config argument of the 'cross' subcommand.
    FromYaml {
        yaml: PathBuf,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Cross(CrossArgs::default())
    }
}

#[derive(Args, Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossArgs {
    /// Genotype of the first parent.
    ///
    /// When missing, the genotype is asked for interactively.
    pub first: Option<Genotype>,

    /// Genotype of the second parent.
    ///
    /// When missing, the genotype is asked for interactively.
    pub second: Option<Genotype>,

    /// Wait for the user to press enter before exiting.
    ///
    /// Useful when the program runs within a terminal window that closes as soon as it exits.
    #[clap(long)]
    pub hold: bool,

    /// Save command line arguments into a yaml file, for later use with 'from-yaml'.
    #[clap(long, parse(from_os_str))]
    pub save_config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &str) -> Cli {
        Cli::try_parse_from(args.split_whitespace()).expect("valid arguments")
    }

    #[test]
    fn no_subcommand_is_interactive() {
        let cli = parse("genotype-cross");
        assert!(cli.commands.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn cross_with_genotypes() {
        let cli = parse("genotype-cross -vv cross Aa aA --hold");
        assert_eq!(cli.verbose, 2);
        let Some(Commands::Cross(args)) = cli.commands else { panic!("expected cross") };
        assert_eq!(args.first,  Some("Aa".parse::<Genotype>().unwrap()));
        assert_eq!(args.second, Some("aA".parse::<Genotype>().unwrap()));
        assert!(args.hold);
        assert_eq!(args.save_config, None);
    }

    #[test]
    fn cross_with_a_single_genotype() {
        let cli = parse("genotype-cross cross BB");
        let Some(Commands::Cross(args)) = cli.commands else { panic!("expected cross") };
        assert_eq!(args.first, Some("BB".parse::<Genotype>().unwrap()));
        assert_eq!(args.second, None);
    }

    #[test]
    fn reject_invalid_genotypes() {
        for args in ["genotype-cross cross AAA", "genotype-cross cross Ab", "genotype-cross cross Aa bc"] {
            assert!(Cli::try_parse_from(args.split_whitespace()).is_err(), "{args}");
        }
    }

    #[test]
    fn default_command() {
        assert!(matches!(Commands::default(), Commands::Cross(args) if args == CrossArgs::default()));
    }

    #[test]
    fn save_and_replay_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let yaml = dir.path().join("args.yaml");

        let args = format!("genotype-cross -q cross Aa aa --save-config {}", yaml.display());
        let cli = parse(&args);
        cli.serialize().expect("serialize");
        assert!(yaml.exists());

        let replayed = Cli::deserialize(&yaml).expect("deserialize");
        assert!(replayed.quiet);
        let Some(Commands::Cross(args)) = replayed.commands else { panic!("expected cross") };
        assert_eq!(args.first.map(|g| g.to_string()), Some("Aa".to_string()));
        assert_eq!(args.second.map(|g| g.to_string()), Some("aa".to_string()));
    }

    #[test]
    fn serialize_without_save_config_writes_nothing() {
        let cli = parse("genotype-cross cross Aa aa");
        assert!(cli.serialize().is_ok());
    }

    #[test]
    fn deserialize_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(Cli::deserialize(&dir.path().join("missing.yaml")).is_err());
    }

    #[test]
    fn deserialize_invalid_genotype() {
        let dir = tempfile::tempdir().expect("tempdir");
        let yaml = dir.path().join("args.yaml");
        std::fs::write(&yaml, "verbose: 0\nquiet: false\ncommands:\n  Cross:\n    first: Ab\n    second: ~\n    hold: false\n    save_config: ~\n")
            .expect("write yaml");
        assert!(Cli::deserialize(&yaml).is_err());
    }
}
