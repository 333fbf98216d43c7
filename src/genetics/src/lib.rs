pub mod allele;
pub use allele::Allele;

pub mod genotype;
pub use genotype::{Genotype, GenotypeError};

pub mod cross;
pub use cross::{Cross, CrossError, CrossStats, POSSIBILITIES};

mod ordinal;
pub use ordinal::ordinal_suffix;
