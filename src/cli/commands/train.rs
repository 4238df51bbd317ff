//! Train command - silent self-play between two learning agents

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::print_agent_stats,
    menace::LearningAgent,
    pipeline::{ProgressObserver, TrainingConfig, TrainingPipeline},
};

#[derive(Parser, Debug)]
#[command(about = "Train two learning agents through silent self-play")]
pub struct TrainArgs {
    /// Number of self-play games
    #[arg(long, short = 'g', default_value_t = 1000)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the training result as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let mut first = LearningAgent::new("Player 1", args.seed);
    let mut second = LearningAgent::new("Player 2", args.seed.map(|s| s.wrapping_add(1)));

    println!("Training for {} games...", args.games);

    let config = TrainingConfig {
        num_games: args.games,
        seed: args.seed,
    };
    let mut pipeline =
        TrainingPipeline::new(config).with_observer(Box::new(ProgressObserver::new()));
    let result = pipeline.run(&mut first, &mut second)?;

    println!("\n=== Training Results (Player 1's perspective) ===");
    println!("Total games: {}", result.total_games);
    println!("Wins: {} ({:.1}%)", result.wins, result.win_rate * 100.0);
    println!("Draws: {} ({:.1}%)", result.draws, result.draw_rate * 100.0);
    println!(
        "Losses: {} ({:.1}%)",
        result.losses,
        result.loss_rate * 100.0
    );

    println!();
    print_agent_stats("Player 1", &first.stats());
    print_agent_stats("Player 2", &second.stats());

    if let Some(path) = &args.export {
        result.save(path)?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}
