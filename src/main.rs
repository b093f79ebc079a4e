//! Tile puzzle scoring CLI
//!
//! Plays a sequence of placements and reports what each one scored.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use tilematch::{GameState, Grid, Move, ScoringRules};

#[derive(Parser, Debug)]
#[command(name = "tilematch", version, about = "Score tile placements on a 6x6 grid")]
struct Args {
    /// Moves as `row,col,color` separated by spaces, e.g. "0,0,purple 0,1,purple"
    #[arg(long, conflicts_with = "script")]
    moves: Option<String>,

    /// JSON file holding an array of { "row", "col", "color" } moves
    #[arg(long)]
    script: Option<PathBuf>,

    /// JSON file overriding min_run, line_points and diagonal_points
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Starting grid as `/`-separated rows, `.` for empty, e.g. "pp..../......"
    #[arg(long)]
    grid: Option<String>,

    /// Stop at the first rejected move instead of skipping it
    #[arg(long)]
    strict: bool,
}

fn load_rules(path: Option<&PathBuf>) -> Result<ScoringRules> {
    let Some(path) = path else {
        return Ok(ScoringRules::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading rules file {}", path.display()))?;
    ScoringRules::from_json(&text).with_context(|| format!("loading rules from {}", path.display()))
}

fn load_moves(args: &Args) -> Result<Vec<Move>> {
    if let Some(path) = &args.script {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?;
        return serde_json::from_str(&text)
            .with_context(|| format!("parsing script {}", path.display()));
    }

    match &args.moves {
        Some(text) => text
            .split_whitespace()
            .map(|m| m.parse::<Move>().with_context(|| format!("parsing move '{m}'")))
            .collect(),
        None => bail!("no moves given; pass --moves or --script"),
    }
}

fn load_grid(text: Option<&str>) -> Result<Grid> {
    let Some(text) = text else {
        return Ok(Grid::new());
    };
    let rows: Vec<&str> = text.split('/').collect();
    Grid::from_rows(&rows).context("parsing --grid")
}

/// Play every move, printing each result; stops early once the grid is full
fn play_all(game: &mut GameState, moves: Vec<Move>, strict: bool) -> Result<()> {
    for (i, mv) in moves.into_iter().enumerate() {
        match game.play(mv) {
            Ok(points) => {
                println!(
                    "#{:<2} {} at ({}, {}): +{} (total {})",
                    i + 1,
                    mv.color,
                    mv.row,
                    mv.col,
                    points,
                    game.score
                );
                if let Some(detail) = &game.last_breakdown {
                    for axis in detail.scoring_axes() {
                        println!(
                            "      {} run of {}: +{}",
                            axis.axis.name(),
                            axis.run,
                            axis.points
                        );
                    }
                }
            }
            Err(e) if strict => {
                return Err(e).with_context(|| format!("move #{} rejected", i + 1));
            }
            Err(e) => println!("#{:<2} skipped: {e}", i + 1),
        }
        if game.is_over() {
            println!("grid full");
            break;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rules = load_rules(args.rules.as_ref())?;
    let moves = load_moves(&args)?;
    let mut game = GameState::with_grid(rules, load_grid(args.grid.as_deref())?);

    log::info!("playing {} moves with {:?}", moves.len(), rules);
    play_all(&mut game, moves, args.strict)?;

    println!("\n{}", game.grid);
    println!("score: {}  best: {}", game.score, game.best_score);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilematch::{Color, MoveError, Pos};

    fn args(flags: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("tilematch").chain(flags.iter().copied())).unwrap()
    }

    #[test]
    fn test_load_grid_splits_rows() {
        assert!(load_grid(Some("pp..../..p.../....../......")).is_err());

        let grid = load_grid(Some("pp..../..p.../....../....../....../b....r")).unwrap();
        assert_eq!(grid.get(Pos::new(0, 1)), Some(Color::Purple));
        assert_eq!(grid.get(Pos::new(1, 2)), Some(Color::Purple));
        assert_eq!(grid.get(Pos::new(5, 5)), Some(Color::Red));
        assert_eq!(grid.tile_count(), 5);

        assert_eq!(load_grid(None).unwrap(), Grid::new());
    }

    #[test]
    fn test_load_moves_from_flag() {
        let moves = load_moves(&args(&["--moves", "0,0,purple 0,1,purple"])).unwrap();
        assert_eq!(
            moves,
            vec![Move::new(0, 0, Color::Purple), Move::new(0, 1, Color::Purple)]
        );

        let err = load_moves(&args(&["--moves", "0,0,teal"])).unwrap_err();
        assert!(err.to_string().contains("0,0,teal"));
    }

    #[test]
    fn test_load_moves_requires_input() {
        let err = load_moves(&args(&[])).unwrap_err();
        assert!(err.to_string().contains("no moves given"));
    }

    #[test]
    fn test_load_rules_defaults_without_file() {
        assert_eq!(load_rules(None).unwrap(), ScoringRules::default());

        let missing = PathBuf::from("does/not/exist.json");
        assert!(load_rules(Some(&missing)).is_err());
    }

    #[test]
    fn test_strict_stops_at_rejected_move() {
        let moves = vec![
            Move::new(0, 0, Color::Red),
            Move::new(0, 0, Color::Blue),
            Move::new(0, 1, Color::Red),
        ];

        let mut game = GameState::default();
        let err = play_all(&mut game, moves.clone(), true).unwrap_err();
        assert_eq!(
            err.downcast_ref::<MoveError>(),
            Some(&MoveError::Occupied(Pos::new(0, 0)))
        );
        assert_eq!(game.grid.tile_count(), 1);

        let mut game = GameState::default();
        play_all(&mut game, moves, false).unwrap();
        assert_eq!(game.grid.tile_count(), 2);
    }
}
