//! MENACE-style matchbox reinforcement learning for Tic-Tac-Toe.
//!
//! A learning agent keeps one weighted move pool ("matchbox") per board
//! state it has visited. Moves are drawn at random in proportion to their
//! weights, and the weights are reinforced after each game: wins add beads,
//! draws add fewer, losses remove one. A depleted matchbox means the agent
//! has learned the position is hopeless and resigns.
//!
//! The crate is organized around a small set of seams:
//!
//! - [`tictactoe`] - the board state machine
//! - [`menace`] - matchboxes and the learning agent
//! - [`ports`] - the [`MoveProvider`] and [`Observer`] traits
//! - [`orchestrator`] - plays a single game between two providers
//! - [`pipeline`] - the training loop and its observers
//! - [`cli`] - console play and command implementations

pub mod cli;
pub mod error;
pub mod menace;
pub mod orchestrator;
pub mod pipeline;
pub mod ports;
pub mod tictactoe;
pub mod utils;

pub use error::{Error, Result};
pub use menace::{AgentStats, LearningAgent, Matchbox, ReinforcementValues};
pub use orchestrator::{GameOutcome, GameReport, play_game};
pub use pipeline::{
    MetricsObserver, ProgressObserver, RandomProvider, TrainingConfig, TrainingPipeline,
    TrainingResult,
};
pub use ports::{MoveProvider, Observer};
pub use tictactoe::{Board, Cell, Player};
