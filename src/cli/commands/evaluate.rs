//! Evaluate command - Pit the engine against a random opponent

use std::{fs::File, path::PathBuf};

use anyhow::{Result, bail};
use clap::Parser;
use rand::random;
use serde::Serialize;

use super::{LogArgs, load_config};
use crate::{
    adapters::{EngineAgent, RandomAgent},
    app::SessionConfig,
    cli::output::{create_progress, print_section, print_stats_table},
    logging,
    search::SearchMode,
    session::play_match,
    tictactoe::{GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play the engine against a random opponent and tally results")]
pub struct EvaluateArgs {
    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// JSON config file; its seed and search mode apply unless overridden
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the cached searcher
    #[arg(long)]
    pub memoize: bool,

    /// Export the summary to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

impl EvaluateArgs {
    /// Resolve the effective configuration: file first, then flags
    pub fn session_config(&self) -> Result<SessionConfig> {
        let mut config = load_config(self.config.as_deref())?;
        if self.memoize {
            config = config.with_search(SearchMode::Memoized);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        let log = self.log.apply(config.log.clone());
        Ok(config.with_log(log))
    }
}

/// Results from the engine's point of view
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct EvaluationSummary {
    pub games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub seed: u64,
    pub search: String,
}

impl EvaluationSummary {
    /// Count one finished game from the engine's side
    pub fn record(&mut self, outcome: Option<GameOutcome>, engine: Player) {
        match outcome {
            Some(GameOutcome::Win(winner)) if winner == engine => self.wins += 1,
            Some(GameOutcome::Win(_)) => self.losses += 1,
            _ => self.draws += 1,
        }
    }
}

/// Seat and opener for game `index`: the engine swaps marks every game and
/// the opener swaps every two, so all four pairings come up evenly.
pub fn pairing(index: usize) -> (Player, Player) {
    let engine = if index % 2 == 0 { Player::X } else { Player::O };
    let first = if (index / 2) % 2 == 0 { Player::X } else { Player::O };
    (engine, first)
}

/// Play `games` games and tally them
pub fn run_evaluation(
    games: usize,
    seed: u64,
    mode: SearchMode,
    mut on_game: impl FnMut(),
) -> crate::Result<EvaluationSummary> {
    let mut engine = EngineAgent::with_mode("AI".to_string(), mode);
    let mut random = RandomAgent::with_seed("Random".to_string(), seed);
    let mut summary = EvaluationSummary {
        games,
        seed,
        search: format!("{mode:?}").to_lowercase(),
        ..Default::default()
    };

    for index in 0..games {
        let (engine_mark, first) = pairing(index);
        let game = match engine_mark {
            Player::X => play_match(first, &mut engine, &mut random)?,
            Player::O => play_match(first, &mut random, &mut engine)?,
        };

        if game.outcome() == Some(GameOutcome::Win(engine_mark.opponent())) {
            log::warn!("engine lost as {engine_mark}: {:?}", game.moves());
        }
        summary.record(game.outcome(), engine_mark);
        on_game();
    }

    if games > 0 {
        summary.win_rate = summary.wins as f64 / games as f64;
        summary.draw_rate = summary.draws as f64 / games as f64;
    }
    Ok(summary)
}

/// Execute evaluate command
pub fn execute(args: EvaluateArgs) -> Result<()> {
    let config = args.session_config()?;
    logging::init(&config.log)?;

    let seed = config.seed.unwrap_or_else(random);
    let mode = config.search;

    let progress = create_progress(args.games as u64, "games")?;
    progress.set_message(format!("{mode:?} engine vs random"));
    let summary = run_evaluation(args.games, seed, mode, || progress.inc(1))?;
    progress.finish_with_message("done");

    log::info!(
        "evaluation: {} wins, {} draws, {} losses over {} games (seed {seed})",
        summary.wins,
        summary.draws,
        summary.losses,
        summary.games
    );

    print_section("Engine vs random");
    print_stats_table(&[
        ("Games", summary.games.to_string()),
        ("Wins", summary.wins.to_string()),
        ("Draws", summary.draws.to_string()),
        ("Losses", summary.losses.to_string()),
        ("Win rate", format!("{:.1}%", summary.win_rate * 100.0)),
        ("Seed", summary.seed.to_string()),
    ]);

    if let Some(path) = &args.export {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &summary)?;
        println!("\nSummary exported to: {}", path.display());
    }

    if summary.losses > 0 {
        bail!("engine lost {} of {} games", summary.losses, summary.games);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairings_cycle() {
        assert_eq!(pairing(0), (Player::X, Player::X));
        assert_eq!(pairing(1), (Player::O, Player::X));
        assert_eq!(pairing(2), (Player::X, Player::O));
        assert_eq!(pairing(3), (Player::O, Player::O));
        assert_eq!(pairing(4), pairing(0));
    }

    #[test]
    fn test_record_tallies_from_engine_side() {
        let mut summary = EvaluationSummary::default();
        summary.record(Some(GameOutcome::Win(Player::O)), Player::O);
        summary.record(Some(GameOutcome::Win(Player::X)), Player::O);
        summary.record(Some(GameOutcome::Draw), Player::X);
        summary.record(Some(GameOutcome::Draw), Player::O);
        assert_eq!((summary.wins, summary.losses, summary.draws), (1, 1, 2));
    }

    #[test]
    fn test_flags_override_config() {
        let args = EvaluateArgs::parse_from(["evaluate", "--seed", "5", "--memoize"]);
        let config = args.session_config().unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.search, SearchMode::Memoized);

        let args = EvaluateArgs::parse_from(["evaluate"]);
        assert_eq!(args.session_config().unwrap(), SessionConfig::default());
    }

    #[test]
    fn test_engine_never_loses() {
        let mut played = 0;
        let summary = run_evaluation(24, 11, SearchMode::Memoized, || played += 1).unwrap();
        assert_eq!(played, 24);
        assert_eq!(summary.losses, 0);
        assert_eq!(summary.wins + summary.draws, 24);
        assert_eq!(summary.search, "memoized");
    }
}
