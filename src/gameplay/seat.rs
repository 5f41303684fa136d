/// One of the two sides of the table.
///
/// Ownership of hands, deck perspective queries, and turn alternation are all
/// phrased in terms of a Seat.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Seat {
    One = 0,
    Two = 1,
}

impl Seat {
    pub const fn all() -> [Self; 2] {
        [Seat::One, Seat::Two]
    }
    pub fn rival(&self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl From<u8> for Seat {
    fn from(n: u8) -> Seat {
        match n {
            0 => Seat::One,
            1 => Seat::Two,
            _ => panic!("Invalid seat"),
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Seat::One => write!(f, "player 1"),
            Seat::Two => write!(f, "player 2"),
        }
    }
}
