use super::player::Player;
use crate::cards::card::Card;
use crate::cards::strength::Strength;
use crate::gameplay::deck::Deck;
use crate::gameplay::hand::{playable, Hand, HANDS_PER_SEAT};
use crate::gameplay::seat::Seat;
use dialoguer::Select;

/// Interactive seat driven through terminal prompts.
pub struct Human;

fn render(cards: &[Card]) -> String {
    cards.iter().map(|c| c.to_string()).collect::<Vec<String>>().join(" ")
}

impl Player for Human {
    fn place(&mut self, draw: Card, mine: &[Hand; HANDS_PER_SEAT], theirs: &[Hand; HANDS_PER_SEAT], _: &Deck, seat: Seat) -> usize {
        let open = playable(mine);
        let choices = open
            .iter()
            .map(|&i| format!("column {}: {}({})", i, mine[i], mine[i].strength().ranking()))
            .collect::<Vec<String>>();
        for (i, hand) in theirs.iter().enumerate() {
            println!("rival column {}: {}", i, render(hand.cards_seen_by(seat)));
        }
        let selection = Select::new()
            .with_prompt(format!("\nYOU DREW {}", draw))
            .report(false)
            .items(choices.as_slice())
            .default(0)
            .interact()
            .unwrap();
        open[selection]
    }

    fn exchange(&mut self, draw: Card, theirs: &[Hand; HANDS_PER_SEAT], _: &[Hand; HANDS_PER_SEAT], _: &Deck, seat: Seat) -> Option<usize> {
        let mut choices = theirs
            .iter()
            .enumerate()
            .map(|(i, hand)| {
                let seen = hand.cards_seen_by(seat);
                format!("swap into rival column {}: {} ({})", i, render(seen), Strength::from(seen).ranking())
            })
            .collect::<Vec<String>>();
        choices.push("keep the card out of play".to_string());
        let selection = Select::new()
            .with_prompt(format!("\nYOU DREW {}", draw))
            .report(false)
            .items(choices.as_slice())
            .default(0)
            .interact()
            .unwrap();
        (selection < HANDS_PER_SEAT).then_some(selection)
    }
}
