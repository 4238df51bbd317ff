//! Game orchestrator: one full game between two move providers
//!
//! The orchestrator is pure coordination. It holds no learning state and
//! performs no randomness; it alternates turns, applies moves to the board,
//! and routes the terminal outcome to both providers' record callbacks.

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::{MoveProvider, Observer},
    tictactoe::{Board, Player},
};

/// Outcome of a completed game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// The winning marker, if any
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            GameOutcome::Draw => None,
        }
    }
}

/// Summary of a completed game
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameReport {
    pub outcome: GameOutcome,
    /// The marker that resigned, when the game ended by resignation
    pub resigned_by: Option<Player>,
    /// Number of moves applied to the board
    pub moves: usize,
    pub final_board: Board,
}

/// Run one full game between two providers.
///
/// The first provider plays X, the second O, with X moving first. Each turn
/// the active provider either returns a move, which is applied and checked
/// for a win then a draw, or resigns, which routes `record_loss` to the
/// resigner and `record_win` to the opponent. Exactly one of win, draw, or
/// resignation terminates every game.
///
/// Observers see each applied move and the final report; pass an empty
/// slice for silent games.
///
/// # Errors
///
/// Returns [`Error::IllegalProviderMove`] if a provider returns an occupied
/// or out-of-range cell. Providers are contracted to return legal moves;
/// input validation and retry belong inside the provider (see
/// [`Board::is_valid_move`]).
pub fn play_game(
    game_num: usize,
    first: &mut dyn MoveProvider,
    second: &mut dyn MoveProvider,
    observers: &mut [Box<dyn Observer>],
) -> Result<GameReport> {
    first.begin_game();
    second.begin_game();
    let mut board = Board::new();

    for observer in observers.iter_mut() {
        observer.on_game_start(game_num)?;
    }

    let mut active = Player::X;
    let mut step_num = 0usize;

    let report = loop {
        let (mover, other): (&mut dyn MoveProvider, &mut dyn MoveProvider) = match active {
            Player::X => (&mut *first, &mut *second),
            Player::O => (&mut *second, &mut *first),
        };

        let weights_before = mover.move_weights(&board).unwrap_or_default();

        let Some(position) = mover.choose_move(&board) else {
            mover.record_loss();
            other.record_win();
            break GameReport {
                outcome: GameOutcome::Win(active.opponent()),
                resigned_by: Some(active),
                moves: step_num,
                final_board: board,
            };
        };

        if position > 8 || !board.is_empty(position) {
            return Err(Error::IllegalProviderMove {
                provider: mover.name().to_string(),
                position,
            });
        }

        board.make_move(position, active);
        step_num += 1;

        for observer in observers.iter_mut() {
            observer.on_move(game_num, step_num - 1, &board, position, active, &weights_before)?;
        }

        if board.check_winner() {
            mover.record_win();
            other.record_loss();
            break GameReport {
                outcome: GameOutcome::Win(active),
                resigned_by: None,
                moves: step_num,
                final_board: board,
            };
        }

        if board.is_draw() {
            mover.record_draw();
            other.record_draw();
            break GameReport {
                outcome: GameOutcome::Draw,
                resigned_by: None,
                moves: step_num,
                final_board: board,
            };
        }

        active = active.opponent();
    };

    for observer in observers.iter_mut() {
        observer.on_game_end(game_num, &report)?;
    }

    Ok(report)
}
