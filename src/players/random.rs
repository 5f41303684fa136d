use super::player::Player;
use crate::cards::card::Card;
use crate::gameplay::deck::Deck;
use crate::gameplay::hand::{playable, Hand, HANDS_PER_SEAT};
use crate::gameplay::seat::Seat;
use rand::rngs::SmallRng;
use rand::Rng;

/// Uniformly random over the legal choices. The baseline opponent.
pub struct Random(SmallRng);

impl From<SmallRng> for Random {
    fn from(rng: SmallRng) -> Self {
        Self(rng)
    }
}

impl Player for Random {
    fn place(&mut self, _: Card, mine: &[Hand; HANDS_PER_SEAT], _: &[Hand; HANDS_PER_SEAT], _: &Deck, _: Seat) -> usize {
        let open = playable(mine);
        open[self.0.random_range(0..open.len())]
    }

    fn exchange(&mut self, _: Card, _: &[Hand; HANDS_PER_SEAT], _: &[Hand; HANDS_PER_SEAT], _: &Deck, _: Seat) -> Option<usize> {
        Some(self.0.random_range(0..HANDS_PER_SEAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn placement_is_always_legal() {
        let ref mut player = Random::from(SmallRng::seed_from_u64(0));
        let mut hands: [Hand; HANDS_PER_SEAT] = std::array::from_fn(|_| Hand::new(Seat::One));
        hands[2].add(Card::from("2c"));
        let deck = Deck::from(vec![Card::from("9h")]);
        for _ in 0..32 {
            let choice = player.place(Card::from("5d"), &hands, &hands.clone(), &deck, Seat::One);
            assert!(playable(&hands).contains(&choice));
        }
    }
}
