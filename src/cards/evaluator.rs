use super::card::Card;
use super::factors::Factors;
use super::ranking::Ranking;

/// Classifies a set of 1-5 cards and extracts its tie-break factors.
///
/// Categories are probed as an ordered rule chain, first hit wins, so no
/// category can be silently skipped. Results are independent of card order.
/// Kind counts are exact: a rank held four times is not "a pair", which is
/// why the two-pair probe can safely run before the four-of-a-kind probe.
/// Duplicate cards are a caller contract violation and are not checked.
pub struct Evaluator<'a>(&'a [Card]);

impl<'a> From<&'a [Card]> for Evaluator<'a> {
    fn from(cards: &'a [Card]) -> Self {
        Self(cards)
    }
}

impl Evaluator<'_> {
    pub fn ranking(&self) -> Ranking {
        if self.0.is_empty() {
            return Ranking::Illegal;
        }
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_two_pair())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_full_house())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or(Ranking::HighCard)
    }

    pub fn factors(&self, ranking: Ranking) -> Factors {
        Factors::from(match ranking {
            Ranking::Illegal => vec![],
            Ranking::HighCard => {
                let best = self.best_single().expect("a distinct top card");
                vec![best.rank().high(), u8::from(best.suit())]
            }
            Ranking::OnePair => {
                let pair = self.kind(2).expect("a pair");
                match self.best_single() {
                    Some(best) => vec![pair, best.rank().high(), u8::from(best.suit())],
                    None => vec![pair, 0, 0],
                }
            }
            Ranking::TwoPair => {
                let pairs = self.pairs();
                match self.best_single() {
                    Some(best) => vec![pairs[0], pairs[1], best.rank().high(), u8::from(best.suit())],
                    None => vec![pairs[0], pairs[1], 0, 0],
                }
            }
            Ranking::ThreeOAK | Ranking::FullHouse => vec![self.kind(3).expect("a triple")],
            Ranking::FourOAK => vec![self.kind(4).expect("a quad")],
            Ranking::Straight => vec![self.runner_up()],
            Ranking::Flush => {
                let best = self.best_single().expect("a distinct top card");
                vec![best.rank().high(), u8::from(self.0[0].suit())]
            }
            Ranking::StraightFlush => vec![self.runner_up(), u8::from(self.0[0].suit())],
        })
    }

    ///

    fn find_straight_flush(&self) -> Option<Ranking> {
        (self.is_flush() && self.is_straight()).then_some(Ranking::StraightFlush)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.is_flush().then_some(Ranking::Flush)
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.is_straight().then_some(Ranking::Straight)
    }
    fn find_two_pair(&self) -> Option<Ranking> {
        (self.pairs().len() == 2).then_some(Ranking::TwoPair)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.kind(4).map(|_| Ranking::FourOAK)
    }
    fn find_full_house(&self) -> Option<Ranking> {
        self.kind(3).and_then(|_| self.kind(2)).map(|_| Ranking::FullHouse)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.kind(3).map(|_| Ranking::ThreeOAK)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.kind(2).map(|_| Ranking::OnePair)
    }

    /// both run gates require exactly five cards
    fn is_flush(&self) -> bool {
        self.0.len() == 5 && self.0.iter().all(|c| c.suit() == self.0[0].suit())
    }
    fn is_straight(&self) -> bool {
        if self.0.len() != 5 {
            return false;
        }
        let mut ranks = self.descending();
        if Self::consecutive(&ranks) {
            return true;
        }
        // the Ace may also sit on top: remap 1 to 14 and retest
        if ranks[4] == 1 {
            ranks[4] = 14;
            ranks.sort_unstable_by(|a, b| b.cmp(a));
            return Self::consecutive(&ranks);
        }
        false
    }
    fn consecutive(descending: &[u8]) -> bool {
        descending.windows(2).all(|w| w[0] == w[1] + 1)
    }

    /// face numbers held exactly n times; the best one, Ace promoted
    fn kind(&self, n: u8) -> Option<u8> {
        let tally = self.tally();
        if tally[0] == n {
            return Some(14);
        }
        (2..=13).rev().find(|&r| tally[(r - 1) as usize] == n)
    }
    /// promoted pair ranks, best first
    fn pairs(&self) -> Vec<u8> {
        let tally = self.tally();
        let mut pairs = (1..=13u8)
            .filter(|&r| tally[(r - 1) as usize] == 2)
            .map(|r| if r == 1 { 14 } else { r })
            .collect::<Vec<u8>>();
        pairs.sort_unstable_by(|a, b| b.cmp(a));
        pairs
    }
    /// the best card whose face number is held exactly once, in table order
    fn best_single(&self) -> Option<Card> {
        let tally = self.tally();
        self.0
            .iter()
            .filter(|c| tally[c.rank().index()] == 1)
            .max()
            .copied()
    }
    /// raw face numbers, best first, Ace NOT promoted
    fn descending(&self) -> Vec<u8> {
        let mut ranks = self.0.iter().map(|c| c.rank().raw()).collect::<Vec<u8>>();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        ranks
    }
    /// second entry of the raw descending order
    fn runner_up(&self) -> u8 {
        self.descending().get(1).copied().unwrap_or(0)
    }
    fn tally(&self) -> [u8; 13] {
        let mut tally = [0u8; 13];
        for card in self.0.iter() {
            tally[card.rank().index()] += 1;
        }
        tally
    }
}
