//! Learning agent backed by a matchbox memory

use std::collections::HashMap;

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::matchbox::Matchbox;
use crate::{
    ports::MoveProvider,
    tictactoe::Board,
    utils::normalize_weighted_pairs,
};

/// Reinforcement applied per history entry after a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReinforcementValues {
    pub win: i16,
    pub draw: i16,
    pub loss: i16,
}

impl Default for ReinforcementValues {
    fn default() -> Self {
        // MENACE's original values
        ReinforcementValues {
            win: 3,
            draw: 1,
            loss: -1,
        }
    }
}

/// A matchbox learning agent.
///
/// Owns a mapping from serialized board state to a [`Matchbox`] of weighted
/// candidate moves. States are materialized lazily the first time they are
/// encountered and never re-initialized; memory persists for the lifetime
/// of the agent, across every game it plays.
///
/// Move selection draws from the matchbox in proportion to weight. There is
/// no epsilon schedule: the exploration rate is the weight distribution
/// itself, shaped by past outcomes.
pub struct LearningAgent {
    name: String,
    memory: HashMap<String, Matchbox>,
    /// (state key, move) pairs for the game in progress
    history: Vec<(String, usize)>,
    reinforcement: ReinforcementValues,
    wins: usize,
    draws: usize,
    losses: usize,
    rng: StdRng,
}

impl std::fmt::Debug for LearningAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LearningAgent")
            .field("name", &self.name)
            .field("learned_states", &self.memory.len())
            .field("reinforcement", &self.reinforcement)
            .finish()
    }
}

impl LearningAgent {
    /// Create a new agent with empty memory.
    ///
    /// A seed of `None` draws a fresh random seed; supply one for
    /// reproducible training.
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        LearningAgent {
            name: name.into(),
            memory: HashMap::new(),
            history: Vec::new(),
            reinforcement: ReinforcementValues::default(),
            wins: 0,
            draws: 0,
            losses: 0,
            rng: Self::rng_from(seed),
        }
    }

    fn rng_from(seed: Option<u64>) -> StdRng {
        match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        }
    }

    /// Set or reset the agent's RNG seed
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.rng = Self::rng_from(seed);
    }

    /// Get the current reinforcement values
    pub fn reinforcement(&self) -> ReinforcementValues {
        self.reinforcement
    }

    /// Set custom reinforcement values
    pub fn set_reinforcement(&mut self, values: ReinforcementValues) {
        self.reinforcement = values;
    }

    pub fn wins(&self) -> usize {
        self.wins
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn losses(&self) -> usize {
        self.losses
    }

    /// Number of distinct board states materialized in memory
    pub fn learned_states(&self) -> usize {
        self.memory.len()
    }

    /// Iterate over the serialized state keys in memory
    pub fn state_keys(&self) -> impl Iterator<Item = &String> {
        self.memory.keys()
    }

    /// Look up the matchbox for a state key, if materialized
    pub fn matchbox(&self, key: &str) -> Option<&Matchbox> {
        self.memory.get(key)
    }

    /// Get statistics about the agent
    pub fn stats(&self) -> AgentStats {
        AgentStats {
            learned_states: self.memory.len(),
            wins: self.wins,
            draws: self.draws,
            losses: self.losses,
        }
    }

    /// Get raw move weights for a board, without materializing it.
    ///
    /// Returns `None` for states the agent has never encountered.
    pub fn weights_for(&self, board: &Board) -> Option<Vec<(usize, f64)>> {
        let matchbox = self.memory.get(&board.state_key())?;
        Some(
            matchbox
                .weights()
                .into_iter()
                .map(|(pos, count)| (pos, count as f64))
                .collect(),
        )
    }

    /// Get the selection probability distribution for a board.
    ///
    /// Returns `None` for unknown states and for depleted matchboxes.
    pub fn move_distribution(&self, board: &Board) -> Option<Vec<(usize, f64)>> {
        normalize_weighted_pairs(self.weights_for(board)?)
    }

    fn apply_outcome(&mut self, delta: i16) {
        for (key, position) in &self.history {
            if let Some(matchbox) = self.memory.get_mut(key) {
                matchbox.reinforce(*position, delta);
            }
        }
    }
}

impl MoveProvider for LearningAgent {
    fn begin_game(&mut self) {
        self.history.clear();
    }

    /// Materialize the state's matchbox if new, then draw a move.
    ///
    /// A successful draw is appended to the per-game history. A depleted
    /// matchbox yields `None` (resignation) and leaves the history
    /// untouched.
    fn choose_move(&mut self, board: &Board) -> Option<usize> {
        let key = board.state_key();
        let matchbox = self
            .memory
            .entry(key.clone())
            .or_insert_with(|| Matchbox::seeded(&board.empty_positions()));

        match matchbox.sample(&mut self.rng) {
            Some(position) => {
                self.history.push((key, position));
                Some(position)
            }
            None => None,
        }
    }

    fn record_win(&mut self) {
        let delta = self.reinforcement.win;
        self.apply_outcome(delta);
        self.wins += 1;
    }

    fn record_draw(&mut self) {
        let delta = self.reinforcement.draw;
        self.apply_outcome(delta);
        self.draws += 1;
    }

    fn record_loss(&mut self) {
        let delta = self.reinforcement.loss;
        self.apply_outcome(delta);
        self.losses += 1;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_seed(&mut self, seed: u64) {
        self.reseed(Some(seed));
    }

    fn move_weights(&self, board: &Board) -> Option<Vec<(usize, f64)>> {
        self.weights_for(board)
    }
}

/// Statistics about a learning agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStats {
    pub learned_states: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}
