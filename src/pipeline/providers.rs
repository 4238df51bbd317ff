//! Baseline move providers

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use crate::{ports::MoveProvider, tictactoe::Board};

/// Uniform random baseline.
///
/// Picks uniformly among the empty cells; resigns only on a full board,
/// which the orchestrator never presents. Learns nothing.
pub struct RandomProvider {
    name: String,
    rng: StdRng,
}

impl RandomProvider {
    /// Create a new random provider
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl MoveProvider for RandomProvider {
    fn begin_game(&mut self) {}

    fn choose_move(&mut self, board: &Board) -> Option<usize> {
        board.empty_positions().choose(&mut self.rng).copied()
    }

    fn record_win(&mut self) {}

    fn record_draw(&mut self) {}

    fn record_loss(&mut self) {}

    fn name(&self) -> &str {
        &self.name
    }

    fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    #[test]
    fn random_provider_only_returns_empty_cells() {
        let mut provider = RandomProvider::new("Random", Some(42));
        let mut board = Board::new();
        board.make_move(0, Player::X);
        board.make_move(4, Player::O);

        for _ in 0..100 {
            let position = provider.choose_move(&board).unwrap();
            assert!(board.is_empty(position));
        }
    }

    #[test]
    fn random_provider_resigns_on_full_board() {
        let mut provider = RandomProvider::new("Random", Some(42));
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(provider.choose_move(&board), None);
    }
}
