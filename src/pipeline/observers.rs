//! Observers for training pipelines

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    orchestrator::{GameOutcome, GameReport},
    ports::Observer,
    tictactoe::Player,
};

/// Progress bar observer - shows training progress with a running W/D/L
/// tally from the first provider's (X's) perspective
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    wins: usize,
    draws: usize,
    losses: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            wins: 0,
            draws: 0,
            losses: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (W:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, report: &GameReport) -> Result<()> {
        match report.outcome {
            GameOutcome::Win(Player::X) => self.wins += 1,
            GameOutcome::Win(Player::O) => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64);
            pb.set_message(format!("{} D:{} L:{}", self.wins, self.draws, self.losses));
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("{} D:{} L:{}", self.wins, self.draws, self.losses));
        }
        Ok(())
    }
}

/// Metrics observer - tracks outcome rates and game lengths
pub struct MetricsObserver {
    wins: usize,
    draws: usize,
    losses: usize,
    resignations: usize,
    total_games: usize,
    move_counts: Vec<usize>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self {
            wins: 0,
            draws: 0,
            losses: 0,
            resignations: 0,
            total_games: 0,
            move_counts: Vec::new(),
        }
    }

    fn rate(&self, count: usize) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            count as f64 / self.total_games as f64
        }
    }

    /// Get current win rate (X's perspective)
    pub fn win_rate(&self) -> f64 {
        self.rate(self.wins)
    }

    /// Get current draw rate
    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    /// Get current loss rate
    pub fn loss_rate(&self) -> f64 {
        self.rate(self.losses)
    }

    /// Get average game length in moves
    pub fn avg_game_length(&self) -> f64 {
        if self.move_counts.is_empty() {
            0.0
        } else {
            self.move_counts.iter().sum::<usize>() as f64 / self.move_counts.len() as f64
        }
    }

    /// Get metrics summary
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            total_games: self.total_games,
            wins: self.wins,
            draws: self.draws,
            losses: self.losses,
            resignations: self.resignations,
            win_rate: self.win_rate(),
            draw_rate: self.draw_rate(),
            loss_rate: self.loss_rate(),
            avg_game_length: self.avg_game_length(),
        }
    }
}

/// Summary of training metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub resignations: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
    pub avg_game_length: f64,
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MetricsObserver {
    fn on_game_end(&mut self, _game_num: usize, report: &GameReport) -> Result<()> {
        self.total_games += 1;
        self.move_counts.push(report.moves);
        if report.resigned_by.is_some() {
            self.resignations += 1;
        }
        match report.outcome {
            GameOutcome::Win(Player::X) => self.wins += 1,
            GameOutcome::Win(Player::O) => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Board;

    fn report(outcome: GameOutcome, moves: usize) -> GameReport {
        GameReport {
            outcome,
            resigned_by: None,
            moves,
            final_board: Board::new(),
        }
    }

    #[test]
    fn test_metrics_observer() {
        let mut observer = MetricsObserver::new();

        assert_eq!(observer.win_rate(), 0.0);

        observer
            .on_game_end(1, &report(GameOutcome::Win(Player::X), 5))
            .unwrap();
        observer.on_game_end(2, &report(GameOutcome::Draw, 9)).unwrap();
        observer
            .on_game_end(3, &report(GameOutcome::Win(Player::X), 7))
            .unwrap();

        let summary = observer.summary();
        assert_eq!(summary.total_games, 3);
        assert_eq!(summary.wins, 2);
        assert_eq!(summary.draws, 1);
        assert_eq!(summary.losses, 0);
        assert!((summary.win_rate - 0.666).abs() < 0.01);
        assert!((summary.avg_game_length - 7.0).abs() < 1e-9);
    }

    #[test]
    fn metrics_observer_counts_resignations() {
        let mut observer = MetricsObserver::new();
        let resigned = GameReport {
            outcome: GameOutcome::Win(Player::O),
            resigned_by: Some(Player::X),
            moves: 0,
            final_board: Board::new(),
        };
        observer.on_game_end(0, &resigned).unwrap();

        let summary = observer.summary();
        assert_eq!(summary.resignations, 1);
        assert_eq!(summary.losses, 1);
    }
}
