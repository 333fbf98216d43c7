use thiserror::Error;

use crate::Genotype;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CrossError {
    #[error("Genotypes {first} and {second} cannot be crossed with each other.")]
    Incompatible { first: Genotype, second: Genotype },
}
