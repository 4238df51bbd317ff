use anyhow::Result;
use clap::{Parser, Subcommand};
use matchbox::cli::commands::{play, train};

#[derive(Parser)]
#[command(name = "matchbox")]
#[command(about = "MENACE-style matchbox learning for Tic-Tac-Toe")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train two agents through self-play
    Train(train::TrainArgs),
    /// Train an agent, then play against it
    Play(play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => train::execute(args),
        Commands::Play(args) => play::execute(args),
    }
}
