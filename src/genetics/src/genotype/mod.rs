use std::{
    fmt::{self, Display, Formatter},
    ops::Index,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::allele::Allele;

mod error;
pub use error::GenotypeError;

/// Number of alleles carried by a genotype.
pub const ALLELES_PER_GENOTYPE: usize = 2;

/// An ordered pair of alleles for a single gene.
///
/// Canonical ordering places the dominant (or equal) allele in slot 0. A genotype written as
/// recessive-then-dominant (e.g. `aA`) is "falsely ordered" and should be passed through
/// [`Genotype::normalize`] before it is classified or displayed.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Genotype {
    alleles: [Allele; ALLELES_PER_GENOTYPE],
}

impl Genotype {
    #[must_use]
    pub fn new(first: Allele, second: Allele) -> Self {
        Self { alleles: [first, second] }
    }

    #[must_use]
    pub fn from_chars(first: char, second: char) -> Self {
        Self::new(Allele::new(first), Allele::new(second))
    }

    #[must_use]
    pub fn alleles(&self) -> &[Allele; ALLELES_PER_GENOTYPE] {
        &self.alleles
    }

    /// Both alleles must belong to the same gene. e.g. `XX`, `Xx`, `xX`, `xx`
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.alleles[0].is_same_gene(&self.alleles[1])
    }

    /// `xX` check.
    #[must_use]
    pub fn is_falsely_ordered(&self) -> bool {
        self.alleles[0].is_recessive() && self.alleles[1].is_dominant()
    }

    /// Swap both alleles in place if this genotype is falsely ordered.
    /// Returns `true` if a swap occured. Calling this a second time is a no-op.
    pub fn normalize(&mut self) -> bool {
        if self.is_falsely_ordered() {
            self.alleles.swap(0, 1);
            return true
        }
        false
    }

    /// Return a normalized copy of this genotype.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Check whether two genotypes carry the same gene, slot by slot.
    ///
    /// Note that the comparison is positional: slot 0 is compared against slot 0, and slot 1
    /// against slot 1. For two valid genotypes this gives the same verdict as an unordered
    /// comparison, since both slots of a valid genotype carry the same gene.
    #[must_use]
    pub fn can_be_crossed_with(&self, other: &Self) -> bool {
        self.alleles.iter()
            .zip(other.alleles.iter())
            .all(|(ours, theirs)| ours.is_same_gene(theirs))
    }

    /// Both alleles share the same dominance (homozygous).
    #[must_use]
    pub fn is_pure(&self) -> bool {
        self.alleles[0].is_dominant() == self.alleles[1].is_dominant()
    }

    #[must_use]
    pub fn is_pure_dominant(&self) -> bool {
        self.alleles[0].is_dominant() && self.alleles[1].is_dominant()
    }

    #[must_use]
    pub fn is_heterogeneous_dominant(&self) -> bool {
        self.alleles[0].is_dominant() && !self.alleles[1].is_dominant()
    }

    /// The dominant character is expressed if the first slot carries a dominant allele.
    /// Only meaningful on a normalized genotype.
    #[must_use]
    pub fn has_dominant_character(&self) -> bool {
        self.alleles[0].is_dominant()
    }

    /// Both allele symbols, concatenated.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.alleles.iter().map(|allele| allele.symbol()).collect()
    }
}

impl Index<usize> for Genotype {
    type Output = Allele;

    fn index(&self, index: usize) -> &Self::Output {
        &self.alleles[index]
    }
}

impl FromStr for Genotype {
    type Err = GenotypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().collect();
        let &[first, second] = symbols.as_slice() else {
            return Err(GenotypeError::WrongLength(symbols.len()))
        };

        let genotype = Self::from_chars(first, second);
        match genotype.is_valid() {
            true  => Ok(genotype),
            false => Err(GenotypeError::UnrelatedAlleles(first, second)),
        }
    }
}

impl TryFrom<String> for Genotype {
    type Error = GenotypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Genotype> for String {
    fn from(genotype: Genotype) -> Self {
        genotype.to_display_string()
    }
}

impl Display for Genotype {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_display_string())
    }
}
