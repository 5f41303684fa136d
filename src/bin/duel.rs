//! Duel Binary
//!
//! Plays a series of matches between two configured strategies over seeded
//! decks and logs the aggregate.
//!
//! Options: --games, --seed, --one, --two

use clap::Parser;
use clap::ValueEnum;
use colored::Colorize;
use fivehands::gameplay::game::Game;
use fivehands::gameplay::outcome::Series;
use fivehands::players::greedy::Greedy;
use fivehands::players::heuristic::Heuristic;
use fivehands::players::human::Human;
use fivehands::players::player::Player;
use fivehands::players::random::Random;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Random,
    Greedy,
    Heuristic,
    Human,
}

impl Kind {
    fn player(self, seed: u64) -> Box<dyn Player> {
        match self {
            Kind::Random => Box::new(Random::from(SmallRng::seed_from_u64(seed))),
            Kind::Greedy => Box::new(Greedy::from(SmallRng::seed_from_u64(seed))),
            Kind::Heuristic => Box::new(Heuristic),
            Kind::Human => Box::new(Human),
        }
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// matches to play
    #[arg(long, default_value_t = 1000)]
    games: u32,
    /// master seed; every match derives its own
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// strategy in the first seat
    #[arg(long, value_enum, default_value = "heuristic")]
    one: Kind,
    /// strategy in the second seat
    #[arg(long, value_enum, default_value = "random")]
    two: Kind,
}

fn main() {
    fivehands::log();
    let args = Args::parse();
    let mut series = Series::default();
    for game in 0..args.games {
        let seed = args.seed.wrapping_add(game as u64);
        let mut one = args.one.player(seed.wrapping_mul(2));
        let mut two = args.two.player(seed.wrapping_mul(2).wrapping_add(1));
        let ref mut rng = SmallRng::seed_from_u64(seed);
        series.absorb(Game::new(rng).play(one.as_mut(), two.as_mut()));
    }
    series.summarize();
    match series.wins {
        [one, two] if one > two => println!("{} takes the series", "player 1".bold().green()),
        [one, two] if two > one => println!("{} takes the series", "player 2".bold().green()),
        _ => println!("{}", "dead even".bold().yellow()),
    }
}
