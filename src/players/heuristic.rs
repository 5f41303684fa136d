use super::player::Player;
use crate::cards::card::Card;
use crate::cards::strength::Strength;
use crate::gameplay::deck::Deck;
use crate::gameplay::hand::{playable, Hand, HAND_SIZE, HANDS_PER_SEAT};
use crate::gameplay::seat::Seat;

/// Weighs each legal column by how much the drawn card lifts its category,
/// how threatening the paired rival column already looks, and the odds of
/// still completing a flush with what the deck (from this seat's vantage)
/// could yet supply. Exchanges sabotage the rival column whose visible cards
/// run strongest.
pub struct Heuristic;

impl Heuristic {
    fn improvement(hand: &Hand, draw: Card) -> f32 {
        let before = u8::from(hand.strength().ranking()) as f32;
        let after = u8::from(hand.potential(draw).ranking()) as f32;
        after - before
    }

    /// the rival column is judged on its visible cards only
    fn threat(rival: &Hand, seat: Seat) -> f32 {
        u8::from(Strength::from(rival.cards_seen_by(seat)).ranking()) as f32
    }

    fn flush_odds(hand: &Hand, draw: Card, deck: &Deck, seat: Seat) -> f32 {
        let suited = hand
            .cards_seen_by(hand.owner())
            .iter()
            .all(|c| c.suit() == draw.suit());
        if !suited {
            return 0.0;
        }
        let needed = (HAND_SIZE - hand.size() - 1) as f32;
        if needed > deck.suit_left(draw.suit(), seat) as f32 {
            return 0.0;
        }
        needed / deck.remaining() as f32
    }
}

impl Player for Heuristic {
    fn place(&mut self, draw: Card, mine: &[Hand; HANDS_PER_SEAT], theirs: &[Hand; HANDS_PER_SEAT], deck: &Deck, seat: Seat) -> usize {
        let open = playable(mine);
        let mut best = open[0];
        let mut high = f32::NEG_INFINITY;
        for i in open {
            let score = Self::improvement(&mine[i], draw) - Self::threat(&theirs[i], seat)
                + Self::flush_odds(&mine[i], draw, deck, seat);
            if score > high {
                high = score;
                best = i;
            }
        }
        best
    }

    fn exchange(&mut self, _: Card, theirs: &[Hand; HANDS_PER_SEAT], _: &[Hand; HANDS_PER_SEAT], _: &Deck, seat: Seat) -> Option<usize> {
        theirs
            .iter()
            .enumerate()
            .max_by_key(|(_, hand)| Strength::from(hand.cards_seen_by(seat)))
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(owner: Seat, cards: &[&str]) -> Hand {
        let mut hand = Hand::new(owner);
        for card in cards {
            hand.add(Card::from(*card));
        }
        hand
    }

    #[test]
    fn chases_the_pair_over_the_dead_column() {
        let ref mut player = Heuristic;
        let mine = [
            column(Seat::One, &["2c"]),
            column(Seat::One, &["9s"]),
            column(Seat::One, &["5h"]),
            column(Seat::One, &["Jd"]),
            column(Seat::One, &["Kc"]),
        ];
        let theirs: [Hand; HANDS_PER_SEAT] = std::array::from_fn(|_| Hand::new(Seat::Two));
        let deck = Deck::from(vec![Card::from("3d")]);
        let choice = player.place(Card::from("9d"), &mine, &theirs, &deck, Seat::One);
        assert_eq!(choice, 1);
    }

    #[test]
    fn avoids_feeding_a_threatened_pairing() {
        let ref mut player = Heuristic;
        let mine = [
            column(Seat::One, &["9s"]),
            column(Seat::One, &["9c"]),
            column(Seat::One, &["5h"]),
            column(Seat::One, &["Jd"]),
            column(Seat::One, &["Kc"]),
        ];
        let theirs = [
            column(Seat::Two, &["Ah", "As"]),
            column(Seat::Two, &["2d"]),
            column(Seat::Two, &["3s"]),
            column(Seat::Two, &["4h"]),
            column(Seat::Two, &["6h"]),
        ];
        let deck = Deck::from(vec![Card::from("3d")]);
        // both nines pair equally well; the rival pair behind column 0 tips
        // the choice to column 1
        let choice = player.place(Card::from("9d"), &mine, &theirs, &deck, Seat::One);
        assert_eq!(choice, 1);
    }

    #[test]
    fn sabotages_the_strongest_visible_column() {
        let ref mut player = Heuristic;
        let mine: [Hand; HANDS_PER_SEAT] = std::array::from_fn(|_| Hand::new(Seat::One));
        let theirs = [
            column(Seat::Two, &["2c", "7d"]),
            column(Seat::Two, &["Qs", "Qd"]),
            column(Seat::Two, &["5h", "6h"]),
            column(Seat::Two, &["Jd", "4c"]),
            column(Seat::Two, &["Kc", "8s"]),
        ];
        let deck = Deck::from(vec![]);
        let target = player.exchange(Card::from("3d"), &theirs, &mine, &deck, Seat::One);
        assert_eq!(target, Some(1));
    }
}
