use std::fmt::{self, Display, Formatter};

/// Code point gap between the uppercase and lowercase form of an ASCII letter.
pub const CASE_SHIFT: u32 = 'a' as u32 - 'A' as u32;

/// A single gene variant, written as one letter.
///
/// Dominance is never stored: an uppercase letter is dominant, a lowercase one is recessive.
/// No validation happens at this level; any `char` can be wrapped.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub struct Allele(char);

impl Allele {
    #[must_use]
    pub fn new(symbol: char) -> Self {
        Self(symbol)
    }

    #[must_use]
    pub fn symbol(&self) -> char {
        self.0
    }

    /// `true` if this allele's symbol is uppercase.
    #[must_use]
    pub fn is_dominant(&self) -> bool {
        self.0.is_uppercase()
    }

    /// `true` if this allele's symbol is lowercase.
    #[must_use]
    pub fn is_recessive(&self) -> bool {
        self.0.is_lowercase()
    }

    /// Two alleles belong to the same gene if their symbols are identical, or if they are the
    /// uppercase and lowercase form of the same letter (i.e. they lie exactly `CASE_SHIFT` apart).
    #[must_use]
    pub fn is_same_gene(&self, other: &Self) -> bool {
        if self.0 == other.0 {
            return true
        }
        self.0.is_ascii_alphabetic()
            && other.0.is_ascii_alphabetic()
            && (self.0 as u32).abs_diff(other.0 as u32) == CASE_SHIFT
    }
}

impl From<char> for Allele {
    fn from(symbol: char) -> Self {
        Self(symbol)
    }
}

impl From<Allele> for char {
    fn from(allele: Allele) -> Self {
        allele.0
    }
}

impl Display for Allele {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_shift_matches_ascii() {
        assert_eq!(CASE_SHIFT, 32);
    }

    #[test]
    fn dominance() {
        assert!(Allele::new('A').is_dominant());
        assert!(!Allele::new('A').is_recessive());
        assert!(Allele::new('a').is_recessive());
        assert!(!Allele::new('a').is_dominant());
    }

    #[test]
    fn non_letters_are_neither_dominant_nor_recessive() {
        for symbol in ['1', '*', ' '] {
            let allele = Allele::new(symbol);
            assert!(!allele.is_dominant());
            assert!(!allele.is_recessive());
        }
    }

    #[test]
    fn same_gene() {
        let upper = Allele::new('B');
        let lower = Allele::new('b');
        assert!(upper.is_same_gene(&upper));
        assert!(upper.is_same_gene(&lower));
        assert!(lower.is_same_gene(&upper));
        assert!(lower.is_same_gene(&lower));
    }

    #[test]
    fn different_genes() {
        assert!(!Allele::new('A').is_same_gene(&Allele::new('b')));
        assert!(!Allele::new('A').is_same_gene(&Allele::new('B')));
        // '!' lies exactly CASE_SHIFT below 'A', but is not a letter.
        assert!(!Allele::new('A').is_same_gene(&Allele::new('!')));
        assert!(!Allele::new('!').is_same_gene(&Allele::new('A')));
    }

    #[test]
    fn display() {
        assert_eq!(format!("'{:_<3}'", Allele::new('A')), "'A__'");
        assert_eq!(Allele::new('z').to_string(), "z");
    }

    #[test]
    fn char_conversions() {
        let allele = Allele::from('q');
        assert_eq!(allele.symbol(), 'q');
        assert_eq!(char::from(allele), 'q');
    }
}
