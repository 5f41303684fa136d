/// A hand's category, ignoring fine-grained kickers.
///
/// The derived order is the full ladder; `Illegal` is the empty hand's
/// sentinel and sits below everything. Hands shorter than five cards can
/// never reach the length-gated categories (straights, flushes, two pair,
/// full houses) and degrade naturally down the ladder. An Ace-high straight
/// flush earns no distinct tier; it is a `StraightFlush` like any other.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Ranking {
    Illegal = 0,
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOAK = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOAK = 8,
    StraightFlush = 9,
}

impl Ranking {
    pub const fn all() -> [Self; 10] {
        [
            Ranking::Illegal,
            Ranking::HighCard,
            Ranking::OnePair,
            Ranking::TwoPair,
            Ranking::ThreeOAK,
            Ranking::Straight,
            Ranking::Flush,
            Ranking::FullHouse,
            Ranking::FourOAK,
            Ranking::StraightFlush,
        ]
    }
}

impl From<Ranking> for u8 {
    fn from(r: Ranking) -> u8 {
        r as u8
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::Illegal => write!(f, "Illegal"),
            Ranking::HighCard => write!(f, "HighCard"),
            Ranking::OnePair => write!(f, "OnePair"),
            Ranking::TwoPair => write!(f, "TwoPair"),
            Ranking::ThreeOAK => write!(f, "ThreeOfAKind"),
            Ranking::Straight => write!(f, "Straight"),
            Ranking::Flush => write!(f, "Flush"),
            Ranking::FullHouse => write!(f, "FullHouse"),
            Ranking::FourOAK => write!(f, "FourOfAKind"),
            Ranking::StraightFlush => write!(f, "StraightFlush"),
        }
    }
}
