//! Observer port - composable observation of games and training
//!
//! Observers collect data during games without coupling the orchestrator
//! or the training loop to specific output formats: progress bars, metrics
//! tracking, board rendering for interactive play.

use crate::{
    Result,
    orchestrator::GameReport,
    tictactoe::{Board, Player},
};

/// Observer trait for monitoring games and training runs.
///
/// All methods default to no-ops; implement only the events you need.
///
/// # Event Sequence
///
/// 1. `on_training_start(total_games)` - once, when run through a pipeline
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_move(...)` - after each move is applied
///    - `on_game_end(game_num, report)`
/// 3. `on_training_end()` - once, when run through a pipeline
pub trait Observer: Send {
    /// Called when a training run starts.
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a game starts.
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each move is applied to the board.
    ///
    /// # Parameters
    ///
    /// * `game_num` - Index of the current game
    /// * `step_num` - Move number within the game (0-based)
    /// * `board` - Board state after the move
    /// * `position` - Cell (0-8) that was filled
    /// * `player` - Marker that was placed
    /// * `weights_before` - The mover's weights for the pre-move state,
    ///   empty when the provider has no inspectable policy
    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _board: &Board,
        _position: usize,
        _player: Player,
        _weights_before: &[(usize, f64)],
    ) -> Result<()> {
        Ok(())
    }

    /// Called when a game reaches a terminal state.
    fn on_game_end(&mut self, _game_num: usize, _report: &GameReport) -> Result<()> {
        Ok(())
    }

    /// Called when a training run completes.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
