pub mod deck;
pub use deck::*;

pub mod game;
pub use game::*;

pub mod hand;
pub use hand::*;

pub mod ledger;
pub use ledger::*;

pub mod outcome;
pub use outcome::*;

pub mod seat;
pub use seat::*;
