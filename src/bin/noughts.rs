//! noughts CLI - noughts and crosses against an exhaustive minimax engine
//!
//! - `play`: interactive games (player vs AI, player vs player, AI vs AI)
//! - `analyze`: minimax values of a position, or of every reachable position
//! - `evaluate`: engine against a random opponent over many games

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Noughts and crosses with a perfect opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively at the terminal
    Play(noughts::cli::commands::play::PlayArgs),

    /// Show minimax values for a position
    Analyze(noughts::cli::commands::analyze::AnalyzeArgs),

    /// Pit the engine against a random opponent
    Evaluate(noughts::cli::commands::evaluate::EvaluateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Analyze(args) => noughts::cli::commands::analyze::execute(args),
        Commands::Evaluate(args) => noughts::cli::commands::evaluate::execute(args),
    }
}
