use clap::Parser;
use std::io::Cursor;

use genotype_cross::Outcome;

/// Builds a `genotype-cross` command line, and runs it against an in-memory console.
#[derive(Default)]
pub struct CrossRunnerBuilder {
    first      : Option<String>,
    second     : Option<String>,
    stdin      : String,
    hold       : bool,
    save_config: Option<String>,
    yaml       : Option<String>,
}

impl CrossRunnerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first(mut self, genotype: &str) -> Self {
        self.first = Some(genotype.to_string());
        self
    }

    pub fn second(mut self, genotype: &str) -> Self {
        self.second = Some(genotype.to_string());
        self
    }

    /// Text typed by the user.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = input.to_string();
        self
    }

    pub fn hold(mut self) -> Self {
        self.hold = true;
        self
    }

    pub fn save_config(mut self, path: &str) -> Self {
        self.save_config = Some(path.to_string());
        self
    }

    /// Replay a yaml configuration instead of running `cross`.
    pub fn from_yaml(mut self, path: &str) -> Self {
        self.yaml = Some(path.to_string());
        self
    }

    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["genotype-cross".to_string(), "-q".to_string()];
        if let Some(yaml) = &self.yaml {
            args.extend(["from-yaml".to_string(), yaml.clone()]);
            return args
        }

        args.push("cross".to_string());
        args.extend(self.first.iter().cloned());
        args.extend(self.second.iter().cloned());
        if self.hold {
            args.push("--hold".to_string());
        }
        if let Some(path) = &self.save_config {
            args.extend(["--save-config".to_string(), path.clone()]);
        }
        args
    }

    /// Run and return the outcome, along with everything written to stdout.
    pub fn run(self) -> (anyhow::Result<Outcome>, String) {
        let cli = parser::Cli::try_parse_from(self.args()).expect("Invalid test arguments");
        cli.serialize().expect("Failed to serialize arguments");

        let mut stdout = Vec::new();
        let outcome = genotype_cross::run_with_io(cli, Cursor::new(self.stdin.into_bytes()), &mut stdout);
        (outcome, String::from_utf8(stdout).expect("Non UTF-8 output"))
    }
}
