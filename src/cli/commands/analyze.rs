//! Analyze command - Minimax values of a position
//!
//! Prints the value of every legal move and the move the engine picks, or
//! exports the engine's choice for every reachable position.

use std::{collections::BTreeMap, fs::File, path::PathBuf};

use anyhow::{Result, bail};
use clap::Parser;
use serde::Serialize;

use super::{LogArgs, parse_player_token};
use crate::{
    app::LogConfig,
    cli::output::{create_progress, describe_score, format_number, print_kv, print_section},
    logging,
    search::{Exhaustive, Memoized, Score, Search, SearchResult},
    tictactoe::{Board, LineAnalyzer, Player, reachable_positions},
};

#[derive(Parser, Debug)]
#[command(about = "Show minimax values for a position")]
pub struct AnalyzeArgs {
    /// Board as nine characters, row-major (e.g. "XX.OO....")
    #[arg(long, short = 's', default_value = ".........")]
    pub state: String,

    /// Side to move (`x` or `o`); inferred from the mark counts when omitted
    #[arg(long)]
    pub mover: Option<String>,

    /// Side whose score is maximized; defaults to the mover
    #[arg(long)]
    pub maximizer: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Solve every reachable position instead of a single one
    #[arg(long, requires = "export")]
    pub all: bool,

    /// File receiving the full policy (with --all)
    #[arg(long)]
    pub export: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Serialize)]
pub struct MoveValue {
    pub position: usize,
    pub score: Score,
}

#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub board: String,
    pub mover: Player,
    pub maximizer: Player,
    pub winner: Option<Player>,
    pub terminal: bool,
    /// Squares that finish a line for the mover right away
    pub immediate_wins: Vec<usize>,
    /// Squares where the opponent threatens to finish a line
    pub threats: Vec<usize>,
    pub moves: Vec<MoveValue>,
    pub result: SearchResult,
    pub nodes: u64,
}

/// Solve one position
pub fn analyze_position(board: &Board, mover: Player, maximizer: Player) -> AnalysisReport {
    let mut search = Exhaustive::new();
    let (result, children) = search.search_with_moves(board, mover, maximizer);
    let moves = children
        .into_iter()
        .map(|(position, score)| MoveValue { position, score })
        .collect();

    let terminal = board.is_terminal();
    let (immediate_wins, threats) = if terminal {
        (Vec::new(), Vec::new())
    } else {
        (
            LineAnalyzer::winning_moves(&board.cells, mover),
            LineAnalyzer::winning_moves(&board.cells, mover.opponent()),
        )
    };

    AnalysisReport {
        board: board.encode(),
        mover,
        maximizer,
        winner: board.winner(),
        terminal,
        immediate_wins,
        threats,
        moves,
        result,
        nodes: search.stats().nodes,
    }
}

#[derive(Debug, Serialize)]
struct PolicyEntry {
    mover: Player,
    best_move: usize,
    score: Score,
}

#[derive(Debug, Serialize)]
struct PolicyExport {
    description: &'static str,
    total_positions: usize,
    policy: BTreeMap<String, PolicyEntry>,
}

/// Execute analyze command
pub fn execute(args: AnalyzeArgs) -> Result<()> {
    logging::init(&args.log.apply(LogConfig::default()))?;

    if args.all {
        let Some(path) = &args.export else {
            bail!("--all needs --export <FILE>");
        };
        return export_policy(path);
    }

    let board = Board::from_string(&args.state)?;
    let mover = match &args.mover {
        Some(token) => parse_player_token(token, "--mover")?,
        None => board.infer_mover(),
    };
    let maximizer = match &args.maximizer {
        Some(token) => parse_player_token(token, "--maximizer")?,
        None => mover,
    };

    let report = analyze_position(&board, mover, maximizer);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&board, &report);
    }
    Ok(())
}

fn print_report(board: &Board, report: &AnalysisReport) {
    print_section("Position");
    println!("{board}");
    println!();
    print_kv("Mover", &report.mover.to_string());
    print_kv("Maximizer", &report.maximizer.to_string());

    if report.terminal {
        let status = match report.winner {
            Some(winner) => format!("{winner} has won"),
            None => "drawn".to_string(),
        };
        print_kv("Status", &format!("terminal, {status}"));
        return;
    }

    if !report.immediate_wins.is_empty() {
        print_kv("Immediate wins", &format_positions(&report.immediate_wins));
    }
    if !report.threats.is_empty() {
        print_kv("Threats to block", &format_positions(&report.threats));
    }

    print_section("Move values");
    for mv in &report.moves {
        println!(
            "  position {} (row {}, col {}): {:+} {}",
            mv.position + 1,
            mv.position / 3,
            mv.position % 3,
            mv.score,
            describe_score(mv.score)
        );
    }

    print_section("Engine choice");
    if let Some(best) = report.result.best_move {
        print_kv("Position", &(best + 1).to_string());
    }
    print_kv(
        "Value",
        &format!("{:+} ({})", report.result.score, describe_score(report.result.score)),
    );
    print_kv("Nodes searched", &format_number(report.nodes));
}

fn format_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(|p| (p + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Write the engine's choice for every reachable non-terminal position
fn export_policy(path: &PathBuf) -> Result<()> {
    let positions: Vec<_> = [Player::X, Player::O]
        .into_iter()
        .flat_map(reachable_positions)
        .filter(|position| !position.board.is_terminal())
        .collect();

    let progress = create_progress(positions.len() as u64, "positions")?;
    let mut search = Memoized::new();
    let mut policy = BTreeMap::new();

    for position in &positions {
        let result = search.search(&position.board, position.to_move, position.to_move);
        if let Some(best_move) = result.best_move {
            policy.insert(
                format!("{}_{}", position.board.encode(), position.to_move),
                PolicyEntry {
                    mover: position.to_move,
                    best_move,
                    score: result.score,
                },
            );
        }
        progress.inc(1);
    }
    progress.finish_with_message("done");

    let export = PolicyExport {
        description: "Minimax move for the side to move, lowest index among equals",
        total_positions: policy.len(),
        policy,
    };
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;

    log::info!("exported {} positions", export.total_positions);
    println!(
        "Exported {} positions to {}",
        export.total_positions,
        path.display()
    );
    Ok(())
}
