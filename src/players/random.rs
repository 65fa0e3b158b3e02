//! Uniformly random computer player.

use super::Player;
use crate::game::action::Move;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

/// Plays a uniformly random candidate move each ply.
pub struct RandomPlayer {
    rng: SmallRng,
}
impl RandomPlayer {
    /// A randomly seeded player.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// A player with a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}
impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}
impl Player for RandomPlayer {
    fn choose_move(&mut self, candidates: &[Move]) -> Option<Move> {
        candidates.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod test {
    use super::RandomPlayer;
    use crate::game::position::Position;
    use crate::players::Player;

    #[test]
    fn picks_among_the_candidates() {
        let candidates = Position::initial().moves();
        let mut player = RandomPlayer::seeded(0xDA8);
        for _ in 0..32 {
            let mv = player.choose_move(candidates.as_slice()).unwrap();
            assert!(candidates.contains(&mv));
        }
    }

    #[test]
    fn passes_on_an_empty_candidate_set() {
        let mut player = RandomPlayer::seeded(0);
        assert_eq!(player.choose_move(&[]), None);
    }
}
