use log::{debug, trace};

use crate::Genotype;

mod error;
pub use error::CrossError;

mod stats;
pub use stats::CrossStats;

/// Number of offspring genotypes produced by crossing two genotypes.
pub const POSSIBILITIES: usize = 4;

/// Outcome of a monohybrid cross between two parent genotypes.
///
/// Possibilities are stored in Cartesian-product order:
/// `(p1[0], p2[0])`, `(p1[0], p2[1])`, `(p1[1], p2[0])`, `(p1[1], p2[1])`.
/// This order is meaningful and preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cross {
    parents      : [Genotype; 2],
    raw          : [Genotype; POSSIBILITIES],
    possibilities: [Genotype; POSSIBILITIES],
}

impl Cross {
    /// Cross `first` with `second`.
    ///
    /// # Errors
    /// - `CrossError::Incompatible` if the two genotypes cannot be crossed with each other.
    ///   No possibility is computed in that case.
    pub fn new(first: &Genotype, second: &Genotype) -> Result<Self, CrossError> {
        if !first.can_be_crossed_with(second) {
            return Err(CrossError::Incompatible { first: *first, second: *second })
        }

        let raw = [
            Genotype::new(first[0], second[0]),
            Genotype::new(first[0], second[1]),
            Genotype::new(first[1], second[0]),
            Genotype::new(first[1], second[1]),
        ];

        let mut possibilities = raw;
        for (i, genotype) in possibilities.iter_mut().enumerate() {
            if genotype.normalize() {
                trace!("Possibility {} was falsely ordered. Normalized into {genotype}", i + 1);
            }
        }
        debug!("Crossed {first} with {second}: {possibilities:?}");

        Ok(Self { parents: [*first, *second], raw, possibilities })
    }

    #[must_use]
    pub fn parents(&self) -> &[Genotype; 2] {
        &self.parents
    }

    /// Normalized offspring genotypes, in Cartesian-product order.
    #[must_use]
    pub fn possibilities(&self) -> &[Genotype; POSSIBILITIES] {
        &self.possibilities
    }

    /// Offspring genotypes before normalization, in Cartesian-product order.
    #[must_use]
    pub fn raw_possibilities(&self) -> &[Genotype; POSSIBILITIES] {
        &self.raw
    }

    #[must_use]
    pub fn stats(&self) -> CrossStats {
        CrossStats::tally(&self.possibilities)
    }
}
