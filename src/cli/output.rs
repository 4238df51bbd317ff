//! Output formatting for interactive play

use crate::{
    Result,
    menace::AgentStats,
    orchestrator::{GameOutcome, GameReport},
    ports::Observer,
    tictactoe::{Board, Player},
};

/// Render the board beside an index guide:
///
/// ```text
///  0 | 1 | 2     X | . | O
/// ---+---+---   ---+---+---
///  3 | 4 | 5     . | X | .
/// ---+---+---   ---+---+---
///  6 | 7 | 8     . | . | O
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..3 {
        let i = row * 3;
        out.push_str(&format!(
            " {} | {} | {}     {} | {} | {}\n",
            i,
            i + 1,
            i + 2,
            board.get(i).to_char(),
            board.get(i + 1).to_char(),
            board.get(i + 2).to_char(),
        ));
        if row < 2 {
            out.push_str("---+---+---   ---+---+---\n");
        }
    }
    out
}

/// Print an agent's learned-state count and W/D/L record
pub fn print_agent_stats(name: &str, stats: &AgentStats) {
    println!("{name}: learned {} board states", stats.learned_states);
    println!(
        "{name}: W/D/L: {}/{}/{}",
        stats.wins, stats.draws, stats.losses
    );
}

/// Observer that prints the board after every move, plus the mover's
/// selection weights when it has an inspectable policy
pub struct BoardRenderObserver;

impl BoardRenderObserver {
    pub fn new() -> Self {
        BoardRenderObserver
    }
}

impl Default for BoardRenderObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for BoardRenderObserver {
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        println!("\nStarting a new game!");
        println!("{}", render_board(&Board::new()));
        Ok(())
    }

    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        board: &Board,
        position: usize,
        player: Player,
        weights_before: &[(usize, f64)],
    ) -> Result<()> {
        if !weights_before.is_empty() {
            let formatted: Vec<String> = weights_before
                .iter()
                .map(|(pos, weight)| format!("{pos}:{weight}"))
                .collect();
            println!("Move weights: {}", formatted.join(" "));
        }
        println!("{player:?} plays {position}");
        println!("{}", render_board(board));
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, report: &GameReport) -> Result<()> {
        if let Some(resigner) = report.resigned_by {
            println!("{resigner:?} resigns.");
        }
        match report.outcome {
            GameOutcome::Win(winner) => println!("{winner:?} wins."),
            GameOutcome::Draw => println!("Draw."),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_board_shows_indices_and_marks() {
        let board = Board::from_string("X...O...O").unwrap();
        let rendered = render_board(&board);
        assert!(rendered.contains(" 0 | 1 | 2     X | . | ."));
        assert!(rendered.contains(" 3 | 4 | 5     . | O | ."));
        assert!(rendered.contains(" 6 | 7 | 8     . | . | O"));
    }
}
