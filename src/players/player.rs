use crate::cards::card::Card;
use crate::gameplay::deck::Deck;
use crate::gameplay::hand::{Hand, HANDS_PER_SEAT};
use crate::gameplay::seat::Seat;

/// A seat's decision maker.
///
/// Implementations only consume the read surfaces: visible cards, the
/// perspective-aware deck counts, and the strength comparator. The driver
/// owns all mutation.
pub trait Player {
    /// Pick which of the five own columns receives the drawn card. Must
    /// return an index from `playable(mine)`.
    fn place(&mut self, draw: Card, mine: &[Hand; HANDS_PER_SEAT], theirs: &[Hand; HANDS_PER_SEAT], deck: &Deck, seat: Seat) -> usize;

    /// Pick which rival column has its most recent card swapped for the
    /// drawn one, or decline.
    fn exchange(&mut self, draw: Card, theirs: &[Hand; HANDS_PER_SEAT], mine: &[Hand; HANDS_PER_SEAT], deck: &Deck, seat: Seat) -> Option<usize>;
}
