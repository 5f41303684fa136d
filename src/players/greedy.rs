use super::player::Player;
use crate::cards::card::Card;
use crate::gameplay::deck::Deck;
use crate::gameplay::hand::{playable, Hand, HANDS_PER_SEAT};
use crate::gameplay::seat::Seat;
use rand::rngs::SmallRng;
use rand::Rng;

/// Takes the first legal column the drawn card strictly improves, falling
/// back to the first legal column. Looks one card deep and nowhere else.
pub struct Greedy(SmallRng);

impl From<SmallRng> for Greedy {
    fn from(rng: SmallRng) -> Self {
        Self(rng)
    }
}

impl Player for Greedy {
    fn place(&mut self, draw: Card, mine: &[Hand; HANDS_PER_SEAT], _: &[Hand; HANDS_PER_SEAT], _: &Deck, _: Seat) -> usize {
        let open = playable(mine);
        open.iter()
            .copied()
            .find(|&i| mine[i].potential(draw) > mine[i].strength())
            .unwrap_or(open[0])
    }

    fn exchange(&mut self, _: Card, _: &[Hand; HANDS_PER_SEAT], _: &[Hand; HANDS_PER_SEAT], _: &Deck, _: Seat) -> Option<usize> {
        Some(self.0.random_range(0..HANDS_PER_SEAT))
    }
}
