use super::deck::Deck;
use super::hand::{playable, Hand, HANDS_PER_SEAT};
use super::outcome::Outcome;
use super::seat::Seat;
use crate::players::player::Player;
use rand::Rng;
use std::collections::BTreeMap;

/// Draws after the opening deal; fills every column to five cards and leaves
/// exactly two cards in the deck for the exchange phase.
const PLACEMENT_TURNS: usize = 40;

/// One full match between two seats over a single shuffled deck.
///
/// Opening deal seeds every column with one card, alternating seats. Forty
/// placement turns follow, strictly alternating; each mover draws, consults
/// its strategy, and appends to one of its own shortest columns. The last two
/// cards feed the exchange phase, where each seat in turn may swap its draw
/// into the most recent slot of one rival column, sight unseen. Columns then
/// pair index-wise for the showdown.
pub struct Game {
    deck: Deck,
    hands: [[Hand; HANDS_PER_SEAT]; 2],
}

impl Game {
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut deck = Deck::new(rng);
        let mut hands: [[Hand; HANDS_PER_SEAT]; 2] = [
            std::array::from_fn(|_| Hand::new(Seat::One)),
            std::array::from_fn(|_| Hand::new(Seat::Two)),
        ];
        for i in 0..HANDS_PER_SEAT {
            for seat in Seat::all() {
                if let Some(card) = deck.draw() {
                    hands[seat.index()][i].add(card);
                }
            }
        }
        Self { deck, hands }
    }

    pub fn play(mut self, one: &mut dyn Player, two: &mut dyn Player) -> Outcome {
        for turn in 0..PLACEMENT_TURNS {
            let seat = if turn % 2 == 0 { Seat::One } else { Seat::Two };
            let Some(card) = self.deck.draw() else { break };
            let mover = match seat {
                Seat::One => &mut *one,
                Seat::Two => &mut *two,
            };
            let (mine, theirs) = self.views(seat);
            let choice = mover.place(card, mine, theirs, &self.deck, seat);
            debug_assert!(playable(mine).contains(&choice));
            log::debug!("#{:<2} {} places {} into column {}", turn, seat, card, choice);
            self.hands[seat.index()][choice].add(card);
        }
        for seat in Seat::all() {
            let Some(card) = self.deck.draw() else { break };
            let mover = match seat {
                Seat::One => &mut *one,
                Seat::Two => &mut *two,
            };
            let (mine, theirs) = self.views(seat);
            match mover.exchange(card, theirs, mine, &self.deck, seat) {
                Some(target) => {
                    let displaced = self.hands[seat.rival().index()][target].replace_last(card);
                    log::debug!("{} swaps {} into rival column {}, displacing {}", seat, card, target, displaced);
                }
                None => log::debug!("{} declines to swap {}", seat, card),
            }
        }
        self.score()
    }

    fn views(&self, seat: Seat) -> (&[Hand; HANDS_PER_SEAT], &[Hand; HANDS_PER_SEAT]) {
        match seat {
            Seat::One => (&self.hands[0], &self.hands[1]),
            Seat::Two => (&self.hands[1], &self.hands[0]),
        }
    }

    /// Columns pair index-wise; the stronger hand takes the point and ties
    /// fall to the second seat.
    fn score(self) -> Outcome {
        let mut points = [0u8; 2];
        let mut rankings = BTreeMap::new();
        for (one, two) in self.hands[0].iter().zip(self.hands[1].iter()) {
            let winner = match one.strength() > two.strength() {
                true => {
                    points[0] += 1;
                    one
                }
                false => {
                    points[1] += 1;
                    two
                }
            };
            log::debug!("{} vs {} -> {}", one, two, winner.owner());
            *rankings.entry(winner.strength().ranking()).or_insert(0) += 1;
        }
        Outcome { points, rankings }
    }
}
