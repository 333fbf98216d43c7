use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Reached the end of the input stream before a valid genotype was provided.")]
    EndOfInput,

    #[error("Failed to read from or write to the console.")]
    Io(#[from] std::io::Error),
}
