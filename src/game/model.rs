//! The game model: owns the board, the game name and the move source, and
//! drives turn-by-turn play.

use super::{
    action::Move,
    colour::Colour,
    piece::Piece,
    position::{MoveError, Position},
};
use crate::players::Player;

/// A running game of draughts.
///
/// Aggregates the board with an immutable game name and the [`Player`]
/// capability the model calls out to for its moves.
pub struct Game {
    name: String,
    player: Box<dyn Player>,
    position: Position,
}
impl Game {
    /// A new game with the standard starting layout, red to move.
    pub fn new(name: impl Into<String>, player: Box<dyn Player>) -> Self {
        Self::with_position(name, player, Position::initial())
    }

    /// A new game over an explicit board, for controlled scenarios.
    pub fn with_position(
        name: impl Into<String>,
        player: Box<dyn Player>,
        position: Position,
    ) -> Self {
        Self {
            name: name.into(),
            player,
            position,
        }
    }

    /// The name this game was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current board.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The colour whose turn it is to move.
    pub fn current_player(&self) -> Colour {
        self.position.side_to_move()
    }

    /// The piece sitting on the cell at (x, y) if any.
    pub fn piece_at(&self, x: u8, y: u8) -> Option<Piece> {
        self.position.piece_at(x, y)
    }

    /// Applies a move supplied out of band.
    /// # Errors
    /// This function returns an error if the move is illegal.
    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        self.position.make(mv)
    }

    /// Plays out one ply: offers the current candidate moves to the player
    /// and applies its choice.
    ///
    /// Returns the move played, or `None` when the player passes (notably
    /// because no candidate is left).
    /// # Errors
    /// This function returns an error if the player picks a move the board
    /// rejects.
    pub fn step(&mut self) -> Result<Option<Move>, MoveError> {
        let candidates = self.position.moves();
        let Some(mv) = self.player.choose_move(candidates.as_slice()) else {
            return Ok(None);
        };
        log::debug!("{} plays {mv}", self.current_player());
        self.position.make(mv)?;
        Ok(Some(mv))
    }
}

#[cfg(test)]
mod test {
    use super::Game;
    use crate::game::{action::Move, colour::Colour, piece::Piece, position::Position, square::Square};
    use crate::players::Player;

    /// Plays the first candidate offered, passes otherwise.
    struct FirstMove;
    impl Player for FirstMove {
        fn choose_move(&mut self, candidates: &[Move]) -> Option<Move> {
            candidates.first().copied()
        }
    }

    fn sq(x: u8, y: u8) -> Square {
        Square::at(x, y).unwrap()
    }

    #[test]
    fn game_name_is_kept() {
        let game = Game::new("Test", Box::new(FirstMove));
        assert_eq!(game.name(), "Test");
    }

    #[test]
    fn current_player_is_red_at_the_start() {
        let game = Game::new("Game", Box::new(FirstMove));
        assert_eq!(game.current_player(), Colour::Red);
    }

    #[test]
    fn step_applies_the_players_choice() {
        let position =
            Position::from_pieces(Colour::Red, [(sq(3, 5), Piece::new(Colour::Red))]);
        let mut game = Game::with_position("Test", Box::new(FirstMove), position);

        let played = game.step().unwrap();
        assert!(played.is_some());
        assert_eq!(game.piece_at(3, 5), None);
        assert_eq!(game.current_player(), Colour::White);
    }

    #[test]
    fn step_reports_a_pass_when_no_candidate_is_left() {
        let mut game = Game::with_position("Test", Box::new(FirstMove), Position::empty());
        assert_eq!(game.step().unwrap(), None);
        assert_eq!(game.current_player(), Colour::Red);
    }

    #[test]
    fn play_delegates_to_the_board() {
        let position =
            Position::from_pieces(Colour::Red, [(sq(3, 5), Piece::new(Colour::Red))]);
        let mut game = Game::with_position("Test", Box::new(FirstMove), position);

        game.play(Move::new_step(sq(3, 5), sq(4, 6))).unwrap();
        assert_eq!(game.piece_at(4, 6), Some(Piece::new(Colour::Red)));
    }
}
