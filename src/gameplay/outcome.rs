use super::seat::Seat;
use crate::cards::ranking::Ranking;
use std::collections::BTreeMap;

/// The showdown tally of one match: hand points per seat (five total, one
/// per column pairing) and the winning category of every pairing.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub points: [u8; 2],
    pub rankings: BTreeMap<Ranking, u32>,
}

impl Outcome {
    /// Five points split two ways, so there is always a winner.
    pub fn winner(&self) -> Seat {
        if self.points[0] > self.points[1] {
            Seat::One
        } else {
            Seat::Two
        }
    }
}

/// A running aggregate over many matches.
#[derive(Debug, Default)]
pub struct Series {
    pub games: u32,
    pub wins: [u32; 2],
    pub points: [u32; 2],
    pub rankings: BTreeMap<Ranking, u32>,
}

impl Series {
    pub fn absorb(&mut self, outcome: Outcome) {
        self.games += 1;
        self.wins[outcome.winner().index()] += 1;
        self.points[0] += outcome.points[0] as u32;
        self.points[1] += outcome.points[1] as u32;
        for (ranking, count) in outcome.rankings.iter() {
            *self.rankings.entry(*ranking).or_insert(0) += count;
        }
    }

    pub fn summarize(&self) {
        log::info!("┌───────────────┬───────────┬───────────┐");
        log::info!("│ {:<13} │ {:>9} │ {:>9} │", "", "player 1", "player 2");
        log::info!("├───────────────┼───────────┼───────────┤");
        log::info!("│ {:<13} │ {:>9} │ {:>9} │", "Games won", self.wins[0], self.wins[1]);
        log::info!("│ {:<13} │ {:>9} │ {:>9} │", "Hand points", self.points[0], self.points[1]);
        log::info!("├───────────────┴───────────┴───────────┤");
        for (ranking, count) in self.rankings.iter() {
            log::info!("│ {:<13} {:>23} wins │", format!("{}", ranking), count);
        }
        log::info!("└───────────────────────────────────────┘");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_accumulates() {
        let mut series = Series::default();
        let mut rankings = BTreeMap::new();
        rankings.insert(Ranking::OnePair, 3);
        rankings.insert(Ranking::Flush, 2);
        series.absorb(Outcome { points: [3, 2], rankings: rankings.clone() });
        series.absorb(Outcome { points: [1, 4], rankings });
        assert_eq!(series.games, 2);
        assert_eq!(series.wins, [1, 1]);
        assert_eq!(series.points, [4, 6]);
        assert_eq!(series.rankings.get(&Ranking::OnePair), Some(&6));
    }
}
