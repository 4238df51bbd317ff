//! Winning-line tables and checks

use super::board::{Cell, Player};

/// The 8 standard winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Line-based terminal checks over raw cell arrays
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check whether any line holds three identical non-empty markers
    pub fn has_winner(cells: &[Cell; 9]) -> bool {
        WINNING_LINES.iter().any(|line| {
            let first = cells[line[0]];
            first != Cell::Empty && cells[line[1]] == first && cells[line[2]] == first
        })
    }

    /// Check whether a specific player holds a complete line
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let piece = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&pos| cells[pos] == piece))
    }
}
