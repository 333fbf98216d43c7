use std::{collections::VecDeque, io::{BufRead, Write}};

use genetics::{Genotype, ordinal_suffix};
use log::{debug, trace};

mod error;
pub use error::ConsoleError;

/// Printed whenever a token is rejected, before prompting again.
pub const REENTER_MESSAGE: &str = "Invalid genotype formatting, re-enter.";

/// Result of pulling a single token out of the input stream.
enum Token {
    Word(String),
    /// The current line could not be decoded, and was discarded.
    Malformed,
}

/// Line-based prompt, asking the user for genotypes until a valid one is provided.
///
/// Input is consumed as whitespace-delimited tokens: several genotypes may thus be typed on
/// a single line, and will be consumed by successive prompts.
pub struct GenotypePrompt<R, W> {
    reader: R,
    writer: W,
    tokens: VecDeque<String>,
}

impl<R: BufRead, W: Write> GenotypePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer, tokens: VecDeque::new() }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Ask for the `index`-th genotype, and keep asking until the user provides a token of
    /// exactly two characters, forming a valid genotype.
    ///
    /// # Errors
    /// - `ConsoleError::EndOfInput` if the stream is exhausted before a valid genotype was read.
    /// - `ConsoleError::Io` if the underlying reader or writer fails.
    pub fn ask_genotype(&mut self, index: usize) -> Result<Genotype, ConsoleError> {
        loop {
            write!(self.writer, "{index}{} Genotype: ", ordinal_suffix(index))?;
            self.writer.flush()?;

            let token = match self.next_token()? {
                Token::Word(token) => token,
                Token::Malformed   => {
                    debug!("Discarded an undecodable line while reading the {index}{} genotype.", ordinal_suffix(index));
                    self.reject()?;
                    continue
                },
            };

            match token.parse::<Genotype>() {
                Ok(genotype) => {
                    trace!("Accepted {index}{} genotype: {genotype}", ordinal_suffix(index));
                    return Ok(genotype)
                },
                Err(e) => {
                    debug!("Rejected '{token}': {e}");
                    self.reject()?;
                }
            }
        }
    }

    /// Wait for the user to press enter before returning. Any token left on the current line
    /// is dropped. Reaching the end of the stream ends the wait.
    pub fn hold(&mut self) -> Result<(), ConsoleError> {
        self.tokens.clear();
        let mut line = Vec::new();
        self.reader.read_until(b'\n', &mut line)?;
        Ok(())
    }

    fn reject(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{REENTER_MESSAGE}")?;
        Ok(())
    }

    fn next_token(&mut self) -> Result<Token, ConsoleError> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(Token::Word(token))
            }

            let mut buf = Vec::new();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Err(ConsoleError::EndOfInput)
            }

            match String::from_utf8(buf) {
                Ok(line) => self.tokens.extend(line.split_whitespace().map(str::to_string)),
                Err(_)   => return Ok(Token::Malformed),
            }
        }
    }
}
