mod prompt;
pub use prompt::{ConsoleError, GenotypePrompt, REENTER_MESSAGE};

mod report;
pub use report::{Report, INCOMPATIBLE_MESSAGE};
