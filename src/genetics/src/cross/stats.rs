use crate::Genotype;
use super::POSSIBILITIES;

/// Aggregate counts over the normalized possibilities of a cross.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CrossStats {
    pub pure                  : usize,
    pub heterogeneous         : usize,
    pub dominant_character    : usize,
    pub pure_dominant         : usize,
    pub heterogeneous_dominant: usize,
}

impl CrossStats {
    /// Tally the given (already normalized) possibilities.
    ///
    /// `heterogeneous` is derived as `POSSIBILITIES - pure`, and is thus only meaningful
    /// when exactly `POSSIBILITIES` genotypes are provided.
    #[must_use]
    pub fn tally<'a>(possibilities: impl IntoIterator<Item = &'a Genotype>) -> Self {
        let mut stats = Self::default();
        for genotype in possibilities {
            if genotype.is_pure() {
                stats.pure += 1;
            }

            if genotype.is_pure_dominant() {
                stats.pure_dominant += 1;
            } else if genotype.is_heterogeneous_dominant() {
                stats.heterogeneous_dominant += 1;
            }

            if genotype.has_dominant_character() {
                stats.dominant_character += 1;
            }
        }
        stats.heterogeneous = POSSIBILITIES.saturating_sub(stats.pure);
        stats
    }

    /// Render a count as a fraction of all possibilities. e.g. `"3/4"`
    #[must_use]
    pub fn ratio(count: usize) -> String {
        format!("{count}/{POSSIBILITIES}")
    }
}
