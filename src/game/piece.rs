//! Playing piece encoding.

use super::colour::Colour;

/// Number of men each side starts the game with.
pub const MEN_PER_SIDE: usize = 12;

/// A draughts man and the colour that owns it.
///
/// A piece does not know where it stands: positions are owned by the board
/// mapping, which enforces at most one piece per cell.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Piece {
    colour: Colour,
}
impl Piece {
    /// A new man of the given colour.
    #[inline]
    pub const fn new(colour: Colour) -> Self {
        Self { colour }
    }

    /// The colour owning this piece.
    #[inline]
    pub const fn colour(self) -> Colour {
        self.colour
    }
}
impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self.colour {
                Colour::Red => 'r',
                Colour::White => 'w',
            }
        )
    }
}
