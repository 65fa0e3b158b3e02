//! Board accessing types: files, ranks, squares and movement deltas.

use super::colour::Colour;
use thiserror::Error;

/// Files of the board (a-h), indexed left to right from the white side.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}
impl File {
    /// A file from a given index.
    ///
    /// Fails if the index is more than 7.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(unsafe { std::mem::transmute::<u8, File>(index) })
        } else {
            None
        }
    }

    /// A file from its letter between 'a' and 'h'.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Self::from_index(c as u8 - b'a'),
            _ => None,
        }
    }
}
impl std::fmt::Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'a' + *self as u8) as char)
    }
}

/// Ranks of the board (1-8).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}
impl Rank {
    /// A rank from a given index.
    ///
    /// Fails if the index is more than 7.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(unsafe { std::mem::transmute::<u8, Rank>(index) })
        } else {
            None
        }
    }

    /// A rank from its digit between '1' and '8'.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Self::from_index(c as u8 - b'1'),
            _ => None,
        }
    }
}
impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", 1 + *self as u8)
    }
}

/// Square parsing errors.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Error)]
pub enum ParseSquareError {
    #[error("expected two characters, got {0}")]
    Length(usize),
    #[error("'{0}' is not a file between 'a' and 'h'")]
    InvalidFile(char),
    #[error("'{0}' is not a rank between '1' and '8'")]
    InvalidRank(char),
}

/// A cell of the 8x8 board, packed as `rank * 8 + file`.
///
/// The file doubles as the x coordinate and the rank as the y coordinate.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Square(u8);
impl Square {
    /// Instantiates a new square based on file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self((rank as u8) << 3 | file as u8)
    }

    /// Instantiates a new square from its index.
    ///
    /// Returns `None` if the index is more than 63.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Self(index))
        } else {
            None
        }
    }

    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Self {
        debug_assert!(index < 64);
        Self(index)
    }

    /// The square at the given (x, y) coordinates.
    ///
    /// Returns `None` when either coordinate falls outside the board. Absence
    /// is a normal outcome here, not an error: lookups stay total.
    #[inline]
    pub const fn at(x: u8, y: u8) -> Option<Self> {
        match (File::from_index(x), Rank::from_index(y)) {
            (Some(file), Some(rank)) => Some(Self::new(file, rank)),
            _ => None,
        }
    }

    /// Returns the file of the square.
    #[inline]
    pub const fn file(self) -> File {
        unsafe { std::mem::transmute(self.0 & 7) }
    }
    /// Returns the rank of the square.
    #[inline]
    pub const fn rank(self) -> Rank {
        unsafe { std::mem::transmute(self.0 >> 3) }
    }

    /// Index of the square in a 64 slot array.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Checks if this square is one of the 32 dark cells men stand on.
    #[inline]
    pub const fn is_dark(self) -> bool {
        ((self.0 & 7) + (self.0 >> 3)) % 2 == 1
    }

    /// Translates this square by a given delta.
    ///
    /// Returns `None` if the translation would go out of the board.
    #[inline]
    pub const fn translate(self, delta: Delta) -> Option<Self> {
        let file = (self.0 & 7) as usize;
        let rank = (self.0 >> 3) as usize;
        if match delta {
            Delta::NorthEast => file < 7 && rank < 7,
            Delta::NorthWest => file > 0 && rank < 7,
            Delta::SouthEast => file < 7 && rank > 0,
            Delta::SouthWest => file > 0 && rank > 0,

            Delta::JumpNorthEast => file < 6 && rank < 6,
            Delta::JumpNorthWest => file > 1 && rank < 6,
            Delta::JumpSouthEast => file < 6 && rank > 1,
            Delta::JumpSouthWest => file > 1 && rank > 1,
        } {
            Some(Self(self.0.wrapping_add_signed(delta as i8)))
        } else {
            None
        }
    }

    /// The cell jumped over when leaping from this square to `other`.
    ///
    /// Defined only when the two squares are exactly two diagonal cells
    /// apart; any other pair returns `None`.
    #[inline]
    pub const fn midpoint(self, other: Square) -> Option<Square> {
        let dx = (self.0 & 7).abs_diff(other.0 & 7);
        let dy = (self.0 >> 3).abs_diff(other.0 >> 3);
        if dx == 2 && dy == 2 {
            Some(Self((self.0 + other.0) / 2))
        } else {
            None
        }
    }

    /// An iterator over all squares, ordered from a1 to h8.
    pub fn squares_iter() -> impl Iterator<Item = Self> {
        (0..64).map(Self::from_index_unchecked)
    }
}
impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}
impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Ok(Self::new(
                File::from_char(file).ok_or(ParseSquareError::InvalidFile(file))?,
                Rank::from_char(rank).ok_or(ParseSquareError::InvalidRank(rank))?,
            )),
            _ => Err(ParseSquareError::Length(s.chars().count())),
        }
    }
}

/// Deltas represent directions in which men can move.
///
/// Steps span one diagonal cell, jumps span two.
#[repr(i8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Delta {
    NorthEast = 9,
    NorthWest = 7,
    SouthEast = -7,
    SouthWest = -9,

    JumpNorthEast = 18,
    JumpNorthWest = 14,
    JumpSouthEast = -14,
    JumpSouthWest = -18,
}
impl Delta {
    /// The two step directions a man of the given colour may take.
    ///
    /// White men start on ranks 1-3 and advance north, red men start on
    /// ranks 6-8 and advance south.
    pub const fn steps(colour: Colour) -> [Self; 2] {
        if colour.is_white() {
            [Self::NorthEast, Self::NorthWest]
        } else {
            [Self::SouthEast, Self::SouthWest]
        }
    }

    /// The two jump directions a man of the given colour may take, ordered
    /// consistently with [`Delta::steps`].
    pub const fn jumps(colour: Colour) -> [Self; 2] {
        if colour.is_white() {
            [Self::JumpNorthEast, Self::JumpNorthWest]
        } else {
            [Self::JumpSouthEast, Self::JumpSouthWest]
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Delta, ParseSquareError, Square};

    #[test]
    fn coordinates_round_trip() {
        let square = Square::at(3, 5).unwrap();
        assert_eq!(square.file() as u8, 3);
        assert_eq!(square.rank() as u8, 5);
        assert_eq!(square.to_string(), "d6");
        assert_eq!("d6".parse::<Square>().unwrap(), square);
    }

    #[test]
    fn out_of_range_coordinates_are_none() {
        assert_eq!(Square::at(8, 0), None);
        assert_eq!(Square::at(0, 8), None);
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "i4".parse::<Square>(),
            Err(ParseSquareError::InvalidFile('i'))
        );
        assert_eq!(
            "a9".parse::<Square>(),
            Err(ParseSquareError::InvalidRank('9'))
        );
        assert_eq!("a10".parse::<Square>(), Err(ParseSquareError::Length(3)));
    }

    #[test]
    fn translations_stay_on_the_board() {
        let corner = Square::at(0, 0).unwrap();
        assert_eq!(corner.translate(Delta::SouthWest), None);
        assert_eq!(corner.translate(Delta::JumpNorthWest), None);
        assert_eq!(
            corner.translate(Delta::NorthEast),
            Some(Square::at(1, 1).unwrap())
        );
        assert_eq!(
            corner.translate(Delta::JumpNorthEast),
            Some(Square::at(2, 2).unwrap())
        );
    }

    #[test]
    fn midpoint_only_for_jumps() {
        let origin = Square::at(3, 5).unwrap();
        assert_eq!(origin.midpoint(Square::at(4, 6).unwrap()), None);
        assert_eq!(
            origin.midpoint(Square::at(5, 7).unwrap()),
            Some(Square::at(4, 6).unwrap())
        );
        assert_eq!(origin.midpoint(Square::at(5, 6).unwrap()), None);
    }

    #[test]
    fn dark_cells_checker_pattern() {
        assert!(Square::at(1, 0).unwrap().is_dark());
        assert!(!Square::at(0, 0).unwrap().is_dark());
        assert_eq!(Square::squares_iter().filter(|sq| sq.is_dark()).count(), 32);
    }
}
