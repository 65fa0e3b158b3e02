//! Main API to represent and interact with a draughts board.
//!
//! This includes looking up pieces, checking and making moves, resolving
//! captures and alternating the side to move.

use super::{
    action::Move,
    colour::Colour,
    piece::Piece,
    square::{Delta, Square},
};
use thiserror::Error;

/// Candidate moves for one side. A side fields at most 12 men with at most
/// two steps and two jumps each.
pub type MoveList = heapless::Vec<Move, 48>;

/// Reasons a move is rejected at the board boundary.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Error)]
pub enum MoveError {
    #[error("no piece stands on {0}")]
    OriginEmpty(Square),
    #[error("{0} is already occupied")]
    TargetOccupied(Square),
    #[error("{origin} to {target} is neither a diagonal step nor a jump")]
    NotDiagonal { origin: Square, target: Square },
    #[error("the jumped cell {0} is empty")]
    NothingToCapture(Square),
}

/// Represents a draughts board and defines an API to interact with it:
/// looking up pieces, checking and making moves, alternating the turn.
///
/// Each cell holds at most one piece by construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    pieces: [Option<Piece>; 64],
    side_to_move: Colour,
}
impl Default for Position {
    /// A board with no pieces, red to move.
    fn default() -> Self {
        Self {
            pieces: [None; 64],
            side_to_move: Colour::Red,
        }
    }
}
impl Position {
    /// A board with no pieces.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The initial position of draughts: white men on the dark cells of
    /// ranks 1-3, red men on the dark cells of ranks 6-8, red to move.
    pub fn initial() -> Self {
        let mut position = Self::empty();
        for square in Square::squares_iter().filter(|sq| sq.is_dark()) {
            let rank = square.rank() as u8;
            if rank < 3 {
                position.pieces[square.index()] = Some(Piece::new(Colour::White));
            } else if rank > 4 {
                position.pieces[square.index()] = Some(Piece::new(Colour::Red));
            }
        }
        position
    }

    /// A board holding an explicit set of pieces, for controlled scenarios.
    ///
    /// The supplied set is not validated; a square named twice keeps the
    /// last piece given for it.
    pub fn from_pieces<I>(side_to_move: Colour, pieces: I) -> Self
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut position = Self {
            pieces: [None; 64],
            side_to_move,
        };
        for (square, piece) in pieces {
            position.pieces[square.index()] = Some(piece);
        }
        position
    }

    /// Returns the piece sitting on a given square if any.
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.pieces[square.index()]
    }

    /// Returns the piece sitting on the cell at (x, y) if any.
    ///
    /// A pure lookup: out-of-range coordinates yield `None` like any other
    /// empty cell.
    #[inline]
    pub fn piece_at(&self, x: u8, y: u8) -> Option<Piece> {
        Square::at(x, y).and_then(|sq| self.piece_on(sq))
    }

    /// The colour whose turn it is to move.
    #[inline]
    pub fn side_to_move(&self) -> Colour {
        self.side_to_move
    }

    /// Flips the side to move. Called once per completed ply.
    #[inline]
    pub fn advance_turn(&mut self) {
        self.side_to_move.invert()
    }

    /// Number of live men of the given colour.
    pub fn piece_count(&self, colour: Colour) -> usize {
        self.pieces
            .iter()
            .flatten()
            .filter(|piece| piece.colour() == colour)
            .count()
    }

    /// Checks that a move can be applied to the current board, without
    /// mutating anything.
    ///
    /// Ownership and direction are not checked here: the caller picks whose
    /// man to move, and candidate generation is where the forward-only rule
    /// lives.
    /// # Errors
    /// Returns the reason the move is illegal.
    pub fn check(&self, mv: Move) -> Result<(), MoveError> {
        let origin = mv.origin();
        let target = mv.target();
        if Move::between(origin, target) != Some(mv) {
            return Err(MoveError::NotDiagonal { origin, target });
        }
        if self.piece_on(origin).is_none() {
            return Err(MoveError::OriginEmpty(origin));
        }
        if self.piece_on(target).is_some() {
            return Err(MoveError::TargetOccupied(target));
        }
        if let Some(over) = mv.captured_square() {
            if self.piece_on(over).is_none() {
                return Err(MoveError::NothingToCapture(over));
            }
        }
        Ok(())
    }

    /// Resolves the capture implied by moving a man from one cell to
    /// another.
    ///
    /// A transition spanning two diagonal cells on both axes is a jump: the
    /// man on the cell between the two endpoints is removed for good, and
    /// this returns `true`. A simple step removes nothing and returns
    /// `false`.
    pub fn remove_captured(&mut self, from: Square, to: Square) -> bool {
        match from.midpoint(to) {
            Some(over) => {
                if let Some(taken) = self.pieces[over.index()].take() {
                    log::debug!("{} man on {over} captured", taken.colour());
                }
                true
            }
            None => false,
        }
    }

    /// Makes a move on the board, modifying the position.
    ///
    /// Applies the capture for jumps, relocates the moving man and advances
    /// the turn.
    /// # Errors
    /// This function returns an error if the move is illegal; the board is
    /// left untouched in that case.
    pub fn make(&mut self, mv: Move) -> Result<(), MoveError> {
        self.check(mv)?;
        self.remove_captured(mv.origin(), mv.target());
        self.pieces[mv.target().index()] = self.pieces[mv.origin().index()].take();
        self.advance_turn();
        Ok(())
    }

    /// Generates the candidate moves for the side to move: forward steps
    /// onto empty cells and forward jumps over an opposing man onto an
    /// empty cell.
    pub fn moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let colour = self.side_to_move;
        for origin in Square::squares_iter() {
            let Some(piece) = self.piece_on(origin) else {
                continue;
            };
            if piece.colour() != colour {
                continue;
            }
            for delta in Delta::steps(colour) {
                let Some(target) = origin.translate(delta) else {
                    continue;
                };
                if self.piece_on(target).is_none() {
                    let _ = moves.push(Move::new_step(origin, target));
                }
            }
            for (step, jump) in Delta::steps(colour).into_iter().zip(Delta::jumps(colour)) {
                let Some(target) = origin.translate(jump) else {
                    continue;
                };
                let Some(over) = origin.translate(step) else {
                    continue;
                };
                if self.piece_on(target).is_none()
                    && self
                        .piece_on(over)
                        .is_some_and(|jumped| jumped.colour() != colour)
                {
                    let _ = moves.push(Move::new_jump(origin, target));
                }
            }
        }
        moves
    }
}
impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in (0..8u8).rev() {
            write!(f, "{} ", y + 1)?;
            for x in 0..8u8 {
                match self.piece_at(x, y) {
                    Some(piece) => write!(f, "{piece} ")?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")?;
        write!(f, "side to move: {}", self.side_to_move)
    }
}
