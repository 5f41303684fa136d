use super::card::Card;
use super::evaluator::Evaluator;
use super::factors::Factors;
use super::ranking::Ranking;

/// A hand's full comparable value.
///
/// Category first, factors second; the derived field order makes the struct's
/// Ord exactly that two-stage comparison. Whenever two hands differ in
/// Ranking the higher category wins outright, factors never overrule it.
#[derive(Debug, Clone, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    ranking: Ranking,
    factors: Factors,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
}

impl From<&[Card]> for Strength {
    fn from(cards: &[Card]) -> Self {
        let evaluator = Evaluator::from(cards);
        let ranking = evaluator.ranking();
        let factors = evaluator.factors(ranking);
        Self { ranking, factors }
    }
}

/// Strict "left is stronger" comparison over raw card sets.
///
/// An empty set carries the weakest possible value: it loses to every
/// nonempty set and never beats another empty set, keeping the relation
/// irreflexive.
pub fn beats(cards: &[Card], rival: &[Card]) -> bool {
    Strength::from(cards) > Strength::from(rival)
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<14}{}", self.ranking, self.factors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Vec<Card> {
        s.split_whitespace().map(Card::from).collect()
    }
    fn wins(stronger: &str, weaker: &str) {
        assert!(beats(&hand(stronger), &hand(weaker)), "{} should beat {}", stronger, weaker);
        assert!(!beats(&hand(weaker), &hand(stronger)), "{} should not beat {}", weaker, stronger);
    }

    #[test]
    fn high_card_tiebreaks() {
        wins("Ad", "2d");
        wins("3d", "2d");
        wins("2s", "2d");
        wins("10s 2s 3d 4d As", "10s 2s 3d 4d Ad");
        wins("10s 2s 3d 4d As", "10s 2s 3d 4d 5d");
        wins("10s 2s 3d 4d Js", "10s 2s 3d 4d 5d");
    }

    #[test]
    fn more_cards_do_not_outrank() {
        wins("2s 4h", "2d");
    }

    #[test]
    fn pair_tiebreaks() {
        wins("4s 4d", "3s 3d");
        wins("4s 4d 3s", "4s 4d 2d");
        wins("4s 4d 6s", "4s 4d 5d");
        wins("4s 4d 3s", "4s 4d 3d");
        wins("As Ad 2s", "Ks Kd Qs");
    }

    #[test]
    fn two_pair_tiebreaks() {
        wins("5s 5d 2s 2d 8d", "5s 5d 2s 2d 7s");
        wins("5s 5d 2s 2d 8s", "5s 5d 2s 2d 8d");
        wins("5s 5d 2s 2d 7s", "3s 3d 2s 2d 7s");
        wins("5s 5d 3s 3d 7s", "5s 5d 2s 2d 7s");
        wins("As Ad 3s 3d 7s", "5s 5d 2s 2d 7s");
        wins("As Ad 2s 2d 8s", "As Ad 2s 2d 8d");
    }

    #[test]
    fn triple_tiebreaks() {
        wins("9d 9h 9s 2s 3d", "8d 8h 8s 2s 3d");
        wins("Ad Ah As 2s 3d", "9d 9h 9s 2s 3d");
    }

    #[test]
    fn full_house_tiebreaks() {
        wins("8d 8h 8s 5s 5d", "2d 2h 2s 5s 5d");
        wins("Ad Ah As 5s 5d", "8d 8h 8s 5s 5d");
    }

    #[test]
    fn straight_tiebreaks() {
        wins("5s 6d 7d 8d 9d", "5s Ad 2d 3d 4d");
        wins("As 10d Jd Qd Kd", "5s 6d 7d 8d 9d");
    }

    #[test]
    fn four_oak_tiebreaks() {
        wins("9c 9d 9h 9s 3d", "8c 8d 8h 8s 3d");
        wins("Ac Ad Ah As 3d", "9c 9d 9h 9s 3d");
    }

    #[test]
    fn flush_tiebreaks() {
        wins("3d 5d 7d 9d Jd", "3c 5c 7c 9c Jc");
        wins("3d 5d 7d 9d Jd", "2h 4h 6h 8h 10h");
        wins("3c 5c 7c 9c Jc", "2h 4h 6h 8h 10h");
    }

    #[test]
    fn straight_flush_tiebreaks() {
        wins("Ah 2h 3h 4h 5h", "Ad 2d 3d 4d 5d");
        wins("2c 3c 4c 5c 6c", "Ah 2h 3h 4h 5h");
        wins("Ah 10h Jh Qh Kh", "2c 3c 4c 5c 6c");
        wins("As 10s Js Qs Ks", "Ah 10h Jh Qh Kh");
    }

    #[test]
    fn category_ladder_is_strict() {
        let ladder = [
            "As 10s 4d 5d 6d",
            "10d 10s 4d 5d 6d",
            "2d 2s 3d 3h 4d",
            "8d 8s 8h 2s 3d",
            "2d 3s 4s 5s 6s",
            "2c 4c 6c 8c 10c",
            "8d 8s 7s 7h 7d",
            "6c 6s 6h 6d 5s",
            "Ah 2h 3h 4h 5h",
            "Ad 10d Jd Qd Kd",
        ];
        for pair in ladder.windows(2) {
            wins(pair[1], pair[0]);
        }
        for cards in ladder.iter() {
            assert!(beats(&hand(cards), &hand("")));
        }
    }

    #[test]
    fn empty_never_beats_empty() {
        assert!(!beats(&hand(""), &hand("")));
        assert!(!beats(&hand(""), &hand("2d")));
    }

    #[test]
    fn classification_decides_before_factors() {
        // the weakest pair still beats the strongest high card
        wins("2s 2d 3d 4d 5h", "As Kd Qd Jd 9h");
    }

    #[test]
    fn full_house_scores_by_triple() {
        let full = Strength::from(hand("8d 8c 8h 2s 2d").as_slice());
        assert_eq!(full.ranking(), Ranking::FullHouse);
        assert!(beats(&hand("8d 8c 8h 2s 2d"), &hand("2c 2h 2s 5s 5d")));
    }
}
