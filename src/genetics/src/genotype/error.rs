use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GenotypeError {
    #[error("A genotype must be written as exactly two alleles, got {0} character(s).")]
    WrongLength(usize),

    #[error("'{0}' and '{1}' are not alleles of the same gene.")]
    UnrelatedAlleles(char, char),
}
