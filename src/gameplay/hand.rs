use super::seat::Seat;
use crate::cards::card::Card;
use crate::cards::strength::Strength;

pub const HAND_SIZE: usize = 5;
pub const HANDS_PER_SEAT: usize = 5;

/// A seat-owned column of up to five cards.
///
/// Cards append in draw order and never move; the parallel rank list mirrors
/// them as raw face numbers kept sorted descending. The rival only ever sees
/// the first four positions, so a full hand's most recent card stays
/// concealed until showdown. Concealment is positional, not by rank.
#[derive(Debug, Clone)]
pub struct Hand {
    owner: Seat,
    cards: Vec<Card>,
    ranks: Vec<u8>,
}

impl Hand {
    pub fn new(owner: Seat) -> Self {
        Self {
            owner,
            cards: Vec::with_capacity(HAND_SIZE),
            ranks: Vec::with_capacity(HAND_SIZE),
        }
    }

    pub fn owner(&self) -> Seat {
        self.owner
    }
    pub fn size(&self) -> usize {
        self.cards.len()
    }
    pub fn is_full(&self) -> bool {
        self.cards.len() == HAND_SIZE
    }

    pub fn add(&mut self, card: Card) {
        assert!(self.cards.len() < HAND_SIZE);
        self.cards.push(card);
        self.ranks.push(card.rank().raw());
        self.ranks.sort_unstable_by(|a, b| b.cmp(a));
    }

    /// Swap out the most recently appended card, returning the displaced one.
    /// The slot keeps its position, so a rival's view of a full hand is
    /// unchanged by the exchange.
    pub fn replace_last(&mut self, card: Card) -> Card {
        let last = self.cards.len() - 1;
        let displaced = std::mem::replace(&mut self.cards[last], card);
        let gone = self
            .ranks
            .iter()
            .position(|&r| r == displaced.rank().raw())
            .expect("rank list mirrors cards");
        self.ranks.remove(gone);
        self.ranks.push(card.rank().raw());
        self.ranks.sort_unstable_by(|a, b| b.cmp(a));
        displaced
    }

    /// The owner sees everything; anyone else sees only the first four cards
    /// ever added, whatever their ranks.
    pub fn cards_seen_by(&self, viewer: Seat) -> &[Card] {
        if viewer == self.owner {
            &self.cards
        } else {
            &self.cards[..self.cards.len().min(HAND_SIZE - 1)]
        }
    }

    /// Raw face numbers of the visible cards, sorted descending.
    pub fn ranks_seen_by(&self, viewer: Seat) -> Vec<u8> {
        if viewer == self.owner || self.cards.len() < HAND_SIZE {
            self.ranks.clone()
        } else {
            let concealed = self.cards[HAND_SIZE - 1].rank().raw();
            let mut ranks = self.ranks.clone();
            let hidden = ranks
                .iter()
                .position(|&r| r == concealed)
                .expect("rank list mirrors cards");
            ranks.remove(hidden);
            ranks
        }
    }

    /// Full-knowledge value, for the owner's own reasoning and the showdown.
    pub fn strength(&self) -> Strength {
        Strength::from(self.cards.as_slice())
    }

    /// Value this hand would have with `card` appended.
    pub fn potential(&self, card: Card) -> Strength {
        let mut cards = self.cards.clone();
        cards.push(card);
        Strength::from(cards.as_slice())
    }
}

/// Placement may only target the hands tied for fewest cards, which keeps the
/// five columns growing level.
pub fn playable(hands: &[Hand; HANDS_PER_SEAT]) -> Vec<usize> {
    let fewest = hands.iter().map(Hand::size).min().expect("five hands");
    hands
        .iter()
        .enumerate()
        .filter(|(_, hand)| hand.size() == fewest)
        .map(|(i, _)| i)
        .collect()
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards.iter() {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}
