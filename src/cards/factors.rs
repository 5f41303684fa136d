/// A hand's tie-break factors, refining comparisons within one Ranking.
///
/// Factors are plain integers compared left to right; the derived Vec order
/// is exactly that lexicographic comparison. They are never composed into a
/// single fractional score, which would lose precision on long chains. Within
/// one category every hand produces the same number of factors (absent
/// entries are zero-filled), so the comparison never runs off one end early.
#[derive(Debug, Default, Clone, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Factors(Vec<u8>);

/// Vec<u8> isomorphism
impl From<Vec<u8>> for Factors {
    fn from(factors: Vec<u8>) -> Self {
        Self(factors)
    }
}
impl From<Factors> for Vec<u8> {
    fn from(f: Factors) -> Self {
        f.0
    }
}

impl std::fmt::Display for Factors {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for factor in self.0.iter() {
            write!(f, "{} ", factor)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicographic() {
        assert!(Factors::from(vec![14, 0]) > Factors::from(vec![13, 3]));
        assert!(Factors::from(vec![8, 5]) > Factors::from(vec![8, 4]));
        assert!(Factors::from(vec![]) < Factors::from(vec![2]));
    }
}
