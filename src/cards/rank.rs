/// A card's face number, stored as dealt: Aces are 1.
///
/// Two value spaces coexist and must not be conflated. `raw()` is the dealt
/// number, used for run detection where the Ace may sit below the Two.
/// `high()` promotes the Ace to 14, used for table comparisons and tie-break
/// factors where the Ace always sits above the King.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Self = Rank(1);
    pub const KING: Self = Rank(13);
    pub const COUNT: usize = 13;

    /// the dealt face number, Ace low
    pub fn raw(&self) -> u8 {
        self.0
    }
    /// the table value, Ace promoted above the King
    pub fn high(&self) -> u8 {
        match self.0 {
            1 => 14,
            n => n,
        }
    }
    /// position in the 13-slot tally tables
    pub fn index(&self) -> usize {
        (self.0 - 1) as usize
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (1..=13).map(Rank)
    }
}

/// u8 isomorphism on the dealt space 1..=13.
/// 14 is accepted as the promoted alias of the Ace, so counting queries
/// phrased against table values land on the right slot.
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            1..=13 => Rank(n),
            14 => Rank::ACE,
            _ => panic!("Invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r.0
    }
}

/// str isomorphism
impl From<&str> for Rank {
    fn from(s: &str) -> Self {
        match s {
            "A" => Rank(1),
            "J" => Rank(11),
            "Q" => Rank(12),
            "K" => Rank(13),
            n => Rank::from(n.parse::<u8>().unwrap_or_else(|_| panic!("Invalid rank str: {}", s))),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "A"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            n => write!(f, "{}", n),
        }
    }
}
