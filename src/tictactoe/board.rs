//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player's marker in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A 3x3 board, mutated in place by exactly one move per turn.
///
/// The board performs no move validation and tracks no turn order. Callers
/// check legality with [`is_valid_move`] or [`is_empty`] before calling
/// [`make_move`]; all operations here are total.
///
/// This type implements `Copy` since it's only 9 bytes of cell markers.
///
/// [`is_valid_move`]: Board::is_valid_move
/// [`is_empty`]: Board::is_empty
/// [`make_move`]: Board::make_move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from a string of 9 cell characters.
    ///
    /// Newlines are filtered out; `.` and ` ` both read as empty. Intended
    /// for tests and analysis, not the game loop.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 9 cell characters remain after
    /// filtering, or if any character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| *c != '\n').collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Check whether raw input names a legal move.
    ///
    /// True iff the input parses as an integer in [0, 8] and that cell is
    /// currently empty. Non-integer or out-of-range input is invalid, not an
    /// error.
    pub fn is_valid_move(&self, input: &str) -> bool {
        match input.trim().parse::<usize>() {
            Ok(pos) => pos <= 8 && self.is_empty(pos),
            Err(_) => false,
        }
    }

    /// Write `player`'s marker into `pos`, unconditionally.
    ///
    /// The caller is responsible for prior validity checking; the cell stays
    /// filled for the rest of the game.
    pub fn make_move(&mut self, pos: usize, player: Player) {
        self.cells[pos] = player.to_cell();
    }

    /// Check whether any winning line is complete
    pub fn check_winner(&self) -> bool {
        LineAnalyzer::has_winner(&self.cells)
    }

    /// Check if a specific player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check whether every cell is filled.
    ///
    /// Meaningful as a draw test only once [`check_winner`] has returned
    /// false.
    ///
    /// [`check_winner`]: Board::check_winner
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Serialize the board as its 9-character memory key.
    ///
    /// Order-sensitive and not normalized for symmetry: rotations and
    /// reflections are distinct keys.
    pub fn state_key(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
