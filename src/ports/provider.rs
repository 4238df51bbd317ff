//! Move provider port - the turn-taking capability set
//!
//! Any player — the learning agent, a console-driven human, a scripted
//! baseline — plugs into the orchestrator through this trait. The
//! orchestrator never knows the concrete implementation.

use crate::tictactoe::Board;

/// A source of moves for one side of a game.
///
/// # Protocol
///
/// The orchestrator calls `begin_game` once before any move is chosen,
/// then alternates `choose_move` calls between the two providers, and
/// finishes by routing the terminal outcome to exactly one of
/// `record_win`, `record_draw`, or `record_loss` on each provider.
pub trait MoveProvider: Send {
    /// Called once at the start of each game, before any move.
    fn begin_game(&mut self);

    /// Choose a move for the given board.
    ///
    /// Returns the cell position in [0, 8], which must be empty, or `None`
    /// to resign. Resignation is a first-class terminal outcome, handled by
    /// the orchestrator like a loss for this provider.
    fn choose_move(&mut self, board: &Board) -> Option<usize>;

    /// Called when this provider won the game.
    fn record_win(&mut self);

    /// Called when the game ended in a draw.
    fn record_draw(&mut self);

    /// Called when this provider lost the game (including by resignation).
    fn record_loss(&mut self);

    /// Provider name, used in error messages and reporting.
    fn name(&self) -> &str;

    /// Seed the provider's randomness source, if it has one.
    ///
    /// Training pipelines call this when supplied with a deterministic
    /// seed. Stateless providers can ignore it.
    fn set_seed(&mut self, _seed: u64) {}

    /// Get move weights for a board, if the provider keeps an explicit
    /// policy.
    ///
    /// Used by observers to display selection statistics. Providers
    /// without an inspectable policy return `None`.
    fn move_weights(&self, _board: &Board) -> Option<Vec<(usize, f64)>> {
        None
    }
}
