//! Training loop: many silent games through the orchestrator

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    orchestrator::{self, GameOutcome},
    ports::{MoveProvider, Observer},
    tictactoe::Player,
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of training games
    pub num_games: usize,

    /// Random seed; applied to the first provider directly and to the
    /// second as `seed + 1`
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_games: 1000,
            seed: None,
        }
    }
}

/// Result of a training run, tallied from the first provider's perspective
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
}

impl TrainingResult {
    /// Create a new training result
    pub fn new(total_games: usize, wins: usize, draws: usize, losses: usize) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Training pipeline: runs N silent games between two providers.
///
/// The first provider plays X in every game; outcomes are tallied from its
/// perspective. Each provider's memory (if any) accumulates across the
/// whole run — this is where self-play training happens.
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run training with the given providers
    pub fn run(
        &mut self,
        first: &mut dyn MoveProvider,
        second: &mut dyn MoveProvider,
    ) -> Result<TrainingResult> {
        if let Some(seed) = self.config.seed {
            first.set_seed(seed);
            second.set_seed(seed.wrapping_add(1));
        }

        for observer in &mut self.observers {
            observer.on_training_start(self.config.num_games)?;
        }

        let mut wins = 0;
        let mut draws = 0;
        let mut losses = 0;

        for game_num in 0..self.config.num_games {
            let report = orchestrator::play_game(game_num, first, second, &mut self.observers)?;

            match report.outcome {
                GameOutcome::Win(Player::X) => wins += 1,
                GameOutcome::Win(Player::O) => losses += 1,
                GameOutcome::Draw => draws += 1,
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(TrainingResult::new(self.config.num_games, wins, draws, losses))
    }
}
