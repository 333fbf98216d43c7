use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Failed to serialize command line arguments.")]
    SerializeArgs(#[source] serde_yaml::Error),

    #[error("Unable to deserialize arguments from {0:?}")]
    DeserializeArgs(PathBuf, #[source] serde_yaml::Error),

    #[error("Unable to write command line arguments into {0:?}")]
    WriteArgs(PathBuf, #[source] std::io::Error),

    #[error("Unable to open {0:?}")]
    OpenArgs(PathBuf, #[source] std::io::Error),
}
