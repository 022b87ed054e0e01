//! Self-play demo: both sides follow the analyzer's recommendation.

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mandragora::rules::{execute_move, total_score};
use mandragora::{Analyzer, AnalyzerConfig, Board, BoardPattern, MoveAnalysis, Side};

/// Hard stop for the demo loop; a finished game is far shorter.
const MAX_TURNS: usize = 1000;

#[derive(Parser, Debug)]
#[command(name = "mandragora", about = "Mandragora Mania self-play demo")]
struct Args {
    /// Starting pattern id (pattern-a through pattern-e)
    #[arg(long, default_value = "pattern-a")]
    pattern: String,

    /// Look-ahead depth in plies
    #[arg(long, default_value_t = 3)]
    depth: u8,

    /// Discount factor on deeper plies
    #[arg(long, default_value_t = 0.8)]
    discount: f64,

    /// Emit the full game as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct TurnRecord {
    turn: usize,
    side: Side,
    analysis: MoveAnalysis,
    points_scored: u32,
}

#[derive(Debug, Serialize)]
struct GameRecord {
    pattern: String,
    turns: Vec<TurnRecord>,
    player_score: u32,
    opponent_score: u32,
    winner: Option<Side>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let Some(pattern) = BoardPattern::by_id(&args.pattern) else {
        let known: Vec<String> = BoardPattern::standard()
            .into_iter()
            .map(|p| p.id)
            .collect();
        eprintln!(
            "unknown pattern {:?}; available: {}",
            args.pattern,
            known.join(", ")
        );
        return ExitCode::FAILURE;
    };

    let analyzer = Analyzer::with_config(AnalyzerConfig {
        max_depth: args.depth,
        discount: args.discount,
    });
    let mut board = Board::from_pattern(&pattern, Side::Player);
    let mut to_act = Side::Player;
    let mut turns = Vec::new();

    for turn in 1..=MAX_TURNS {
        let Some(best) = analyzer.best_move(&board, to_act) else {
            info!(?to_act, turn, "side is stuck, game over");
            break;
        };
        let outcome = match execute_move(best.area_id, &board, to_act) {
            Ok(outcome) => outcome,
            Err(err) => {
                eprintln!("recommended move failed: {err}");
                return ExitCode::FAILURE;
            }
        };

        if !args.json {
            println!(
                "turn {turn}: {:?} plays area {} [{:.1}] {}",
                to_act,
                best.area_id,
                best.total_value,
                best.explanation()
            );
        }
        let extra_turn = outcome.extra_turn;
        let points_scored = total_score(&outcome.scored, board.is_first(to_act));
        turns.push(TurnRecord {
            turn,
            side: to_act,
            analysis: best,
            points_scored,
        });

        board = outcome.board;
        if !extra_turn {
            to_act = to_act.opponent();
        }
    }

    let record = GameRecord {
        pattern: pattern.id,
        turns,
        player_score: board.final_score(Side::Player),
        opponent_score: board.final_score(Side::Opponent),
        winner: board.winner(),
    };

    if args.json {
        match serde_json::to_string_pretty(&record) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("failed to serialize game record: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!(
            "final score: player {} - opponent {}",
            record.player_score, record.opponent_score
        );
        match record.winner {
            Some(side) => println!("winner: {side:?}"),
            None => println!("tie"),
        }
    }
    ExitCode::SUCCESS
}
