//! Game session: running score, best score and move history

use std::str::FromStr;

use serde::Deserialize;

use crate::error::{MoveError, ParseError};
use crate::grid::{Color, Grid, Pos};
use crate::rules::ScoringRules;
use crate::scoring::{self, ScoreBreakdown};

/// A tile placement request.
///
/// Coordinates are signed so out-of-range input can be reported rather than
/// truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Move {
    pub row: i32,
    pub col: i32,
    pub color: Color,
}

impl Move {
    pub fn new(row: i32, col: i32, color: Color) -> Self {
        Self { row, col, color }
    }

    pub fn pos(&self) -> Result<Pos, MoveError> {
        Pos::try_new(self.row, self.col).ok_or(MoveError::OutOfBounds {
            row: self.row,
            col: self.col,
        })
    }
}

/// Parses `row,col,color`, e.g. `0,2,purple`.
impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseError::BadMove(s.to_string());
        let mut parts = s.split(',');
        let (Some(row), Some(col), Some(color), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(bad());
        };
        let row = row.trim().parse().map_err(|_| bad())?;
        let col = col.trim().parse().map_err(|_| bad())?;
        Ok(Move::new(row, col, color.parse()?))
    }
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    pub score: u32,
    pub best_score: u32,
    pub last_move: Option<Pos>,
    pub last_breakdown: Option<ScoreBreakdown>,
    pub move_history: Vec<(Pos, Color)>,
    rules: ScoringRules,
    /// Grid the session started from; restored on reset and undo
    start: Grid,
}

impl GameState {
    pub fn new(rules: ScoringRules) -> Self {
        Self::with_grid(rules, Grid::new())
    }

    /// Start a session from a pre-filled grid
    pub fn with_grid(rules: ScoringRules, grid: Grid) -> Self {
        Self {
            grid,
            score: 0,
            best_score: 0,
            last_move: None,
            last_breakdown: None,
            move_history: Vec::new(),
            rules,
            start: grid,
        }
    }

    /// No empty cell is left
    #[inline]
    pub fn is_over(&self) -> bool {
        self.grid.is_full()
    }

    /// Back to the starting grid (empty unless built with [`Self::with_grid`])
    pub fn reset(&mut self) {
        log::info!("reset with score {} (best {})", self.score, self.best_score);
        self.grid = self.start;
        self.score = 0;
        self.last_move = None;
        self.last_breakdown = None;
        self.move_history.clear();
    }

    /// Play a [`Move`], validating its coordinates first
    pub fn play(&mut self, mv: Move) -> Result<u32, MoveError> {
        let pos = mv.pos().inspect_err(|e| log::warn!("rejected {mv:?}: {e}"))?;
        self.try_place(pos, mv.color)
    }

    /// Attempt to place a tile; returns the points it earned
    pub fn try_place(&mut self, pos: Pos, color: Color) -> Result<u32, MoveError> {
        if self.is_over() {
            log::warn!("rejected {color} at {pos}: game is over");
            return Err(MoveError::GameOver);
        }

        let grid = self
            .grid
            .with_tile(pos, color)
            .inspect_err(|e| log::warn!("rejected {color} at {pos}: {e}"))?;
        Ok(self.apply(grid, pos, color))
    }

    fn apply(&mut self, grid: Grid, pos: Pos, color: Color) -> u32 {
        let detail = scoring::breakdown(&self.rules, &grid, pos);
        let points = detail.total();

        self.grid = grid;
        self.score = self.score.saturating_add(points);
        self.best_score = self.best_score.max(self.score);
        self.last_move = Some(pos);
        self.last_breakdown = Some(detail);
        self.move_history.push((pos, color));

        log::debug!(
            "{color} at {pos}: +{points} (total {}, best {})",
            self.score,
            self.best_score
        );
        if self.is_over() {
            log::info!("grid full, final score {}", self.score);
        }
        points
    }

    /// Undo last move by replaying the rest of the history
    pub fn undo(&mut self) -> Option<(Pos, Color)> {
        let undone = self.move_history.pop()?;
        let moves = std::mem::take(&mut self.move_history);

        self.grid = self.start;
        self.score = 0;
        self.last_move = None;
        self.last_breakdown = None;

        for (pos, color) in moves {
            // Replayed moves were legal when first played
            if let Ok(grid) = self.grid.with_tile(pos, color) {
                self.apply(grid, pos, color);
            }
        }

        log::debug!("undid {} at {}", undone.1, undone.0);
        Some(undone)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(ScoringRules::default())
    }
}
