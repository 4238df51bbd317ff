//! Play command - interactive game against a trained agent

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        console::ConsoleProvider,
        output::{BoardRenderObserver, print_agent_stats},
    },
    menace::LearningAgent,
    orchestrator,
    pipeline::{ProgressObserver, TrainingConfig, TrainingPipeline},
    ports::Observer,
};

#[derive(Parser, Debug)]
#[command(about = "Train an agent, then play against it at the console")]
pub struct PlayArgs {
    /// Number of self-play training games before the interactive game
    #[arg(long, default_value_t = 1000)]
    pub training_games: usize,

    /// Random seed for reproducible training
    #[arg(long)]
    pub seed: Option<u64>,

    /// Make the opening move yourself (play X instead of O)
    #[arg(long)]
    pub human_first: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut first = LearningAgent::new("Player 1", args.seed);
    let mut second = LearningAgent::new("Player 2", args.seed.map(|s| s.wrapping_add(1)));

    println!("Training for {} games...", args.training_games);

    let config = TrainingConfig {
        num_games: args.training_games,
        seed: args.seed,
    };
    let mut pipeline =
        TrainingPipeline::new(config).with_observer(Box::new(ProgressObserver::new()));
    pipeline.run(&mut first, &mut second)?;

    println!();
    print_agent_stats("Player 1", &first.stats());
    print_agent_stats("Player 2", &second.stats());

    let mut human = ConsoleProvider::new();
    let mut observers: Vec<Box<dyn Observer>> = vec![Box::new(BoardRenderObserver::new())];

    // Player 1 trained as X, Player 2 as O: pick the specialist for the
    // side the human is not taking.
    if args.human_first {
        orchestrator::play_game(0, &mut human, &mut second, &mut observers)?;
    } else {
        orchestrator::play_game(0, &mut first, &mut human, &mut observers)?;
    }

    Ok(())
}
