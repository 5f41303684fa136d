use super::ledger::Ledger;
use super::seat::Seat;
use crate::cards::card::Card;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;
use rand::seq::SliceRandom;
use rand::Rng;

/// Remaining count at which the deck forks into per-seat ledgers.
const FORK_AT: usize = 12;

/// The single authoritative shuffled pile, drawn from the top until empty.
///
/// While more than `FORK_AT` cards remain, every count query answers from the
/// one shared ledger and both seats see identical numbers. The instant the
/// remaining count reaches `FORK_AT`, two identical child ledgers are forked;
/// from then on each draw is additionally deducted from exactly one child,
/// chosen by the parity of the remaining count, and count queries answer from
/// the asking seat's child. Neither child ever reveals a rival's concealed
/// card; the children merely diverge in which late draws they have witnessed.
#[derive(Debug, Clone)]
pub struct Deck {
    shared: Ledger,
    forks: Option<[Ledger; 2]>,
}

impl Deck {
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut cards = (0..52).map(Card::from).collect::<Vec<Card>>();
        cards.shuffle(rng);
        Self::from(cards)
    }

    /// take the top card, or nothing once exhausted
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.shared.pop()?;
        let remaining = self.shared.len();
        if remaining == FORK_AT {
            self.forks = Some([self.shared.clone(), self.shared.clone()]);
        } else if remaining < FORK_AT {
            if let Some(forks) = self.forks.as_mut() {
                forks[(remaining + 1) % 2].remove(card);
            }
        }
        Some(card)
    }

    pub fn remaining(&self) -> usize {
        self.shared.len()
    }

    pub fn suit_left(&self, suit: Suit, seat: Seat) -> u8 {
        self.ledger(seat).suit_left(suit)
    }
    pub fn rank_left(&self, rank: Rank, seat: Seat) -> u8 {
        self.ledger(seat).rank_left(rank)
    }
    pub fn cards_left(&self, seat: Seat) -> &[Card] {
        self.ledger(seat).cards()
    }

    /// shared before the fork, per-seat after
    fn ledger(&self, seat: Seat) -> &Ledger {
        match self.forks.as_ref() {
            Some(forks) => &forks[seat.index()],
            None => &self.shared,
        }
    }
}

/// an explicit pile, top card last; forks on the way down as usual
impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            shared: Ledger::from(cards),
            forks: None,
        }
    }
}
