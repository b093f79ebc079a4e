//! Error types for placements and text input

use std::fmt;

use crate::grid::{Pos, GRID_SIZE};

/// Reasons a placement is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The target cell already holds a tile
    Occupied(Pos),
    /// Coordinates fall outside the grid
    OutOfBounds { row: i32, col: i32 },
    /// Every cell is filled
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Occupied(pos) => write!(f, "cell {pos} is already occupied"),
            MoveError::OutOfBounds { row, col } => {
                write!(f, "({row}, {col}) is outside the grid")
            }
            MoveError::GameOver => f.write_str("game is over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Errors from parsing colors, moves and text grids
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownColor(String),
    UnknownLetter(char),
    RowCount(usize),
    RowWidth { row: usize, width: usize },
    /// Move text not of the form `row,col,color`
    BadMove(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownColor(s) => write!(f, "unknown color '{s}'"),
            ParseError::UnknownLetter(c) => write!(f, "unknown cell letter '{c}'"),
            ParseError::RowCount(n) => write!(f, "expected {GRID_SIZE} rows, got {n}"),
            ParseError::RowWidth { row, width } => {
                write!(f, "row {row} has {width} cells, expected {GRID_SIZE}")
            }
            ParseError::BadMove(s) => write!(f, "malformed move '{s}', expected row,col,color"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors from loading [`ScoringRules`](crate::rules::ScoringRules)
#[derive(Debug)]
pub enum RulesError {
    Json(serde_json::Error),
    MinRun(usize),
    /// Per-tile points large enough to overflow a game's score
    Points(u32),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::Json(e) => write!(f, "invalid rules JSON: {e}"),
            RulesError::MinRun(n) => {
                write!(f, "min_run must be between 2 and {GRID_SIZE}, got {n}")
            }
            RulesError::Points(n) => write!(
                f,
                "per-tile points must be at most {}, got {n}",
                crate::rules::ScoringRules::MAX_POINTS
            ),
        }
    }
}

impl std::error::Error for RulesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RulesError::Json(e) => Some(e),
            RulesError::MinRun(_) | RulesError::Points(_) => None,
        }
    }
}
