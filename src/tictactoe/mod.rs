//! Tic-Tac-Toe board state machine

pub mod board;
pub mod lines;

pub use board::{Board, Cell, Player};
pub use lines::WINNING_LINES;
