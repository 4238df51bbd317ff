//! Console-driven move provider

use std::io::{self, Write};

use crate::{ports::MoveProvider, tictactoe::Board};

/// A human player at the terminal.
///
/// Prompts for a cell number and retries until the input names a legal
/// move; invalid input is recoverable, not an error. End of input (EOF) is
/// treated as resignation.
pub struct ConsoleProvider;

impl ConsoleProvider {
    pub fn new() -> Self {
        ConsoleProvider
    }
}

impl Default for ConsoleProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveProvider for ConsoleProvider {
    fn begin_game(&mut self) {
        println!("Ready to play!");
    }

    fn choose_move(&mut self, board: &Board) -> Option<usize> {
        loop {
            print!("Enter your move (0-8): ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }

            let input = line.trim();
            if board.is_valid_move(input) {
                return input.parse().ok();
            }
            println!("Invalid move. Try again.");
        }
    }

    fn record_win(&mut self) {
        println!("Congratulations, you won!");
    }

    fn record_draw(&mut self) {
        println!("It's a draw.");
    }

    fn record_loss(&mut self) {
        println!("You lost. Better luck next time.");
    }

    fn name(&self) -> &str {
        "Console"
    }
}
