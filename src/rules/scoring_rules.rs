//! Point values and run threshold

use serde::Deserialize;

use super::Axis;
use crate::error::RulesError;
use crate::grid::{GRID_SIZE, TOTAL_CELLS};

/// Tunable scoring parameters.
///
/// Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Shortest run that scores
    pub min_run: usize,
    /// Points per tile for horizontal and vertical runs
    pub line_points: u32,
    /// Points per tile for diagonal runs
    pub diagonal_points: u32,
}

impl ScoringRules {
    pub const DEFAULT_MIN_RUN: usize = 3;
    pub const DEFAULT_LINE_POINTS: u32 = 5;
    pub const DEFAULT_DIAGONAL_POINTS: u32 = 10;
    /// Largest per-tile value for which a full game's score fits in `u32`:
    /// every cell placed, each scoring a full-length run on all four axes.
    pub const MAX_POINTS: u32 = u32::MAX / (TOTAL_CELLS * 4 * GRID_SIZE) as u32;

    pub fn new(min_run: usize, line_points: u32, diagonal_points: u32) -> Self {
        Self {
            min_run,
            line_points,
            diagonal_points,
        }
    }

    /// Parse rules from a JSON document
    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        let rules: ScoringRules = serde_json::from_str(json).map_err(RulesError::Json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// A run threshold outside `2..=GRID_SIZE` would score single tiles or never score.
    /// Per-tile points are capped at [`Self::MAX_POINTS`].
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.min_run < 2 || self.min_run > GRID_SIZE {
            return Err(RulesError::MinRun(self.min_run));
        }
        let points = self.line_points.max(self.diagonal_points);
        if points > Self::MAX_POINTS {
            return Err(RulesError::Points(points));
        }
        Ok(())
    }

    #[inline]
    pub fn per_tile(&self, axis: Axis) -> u32 {
        if axis.is_diagonal() {
            self.diagonal_points
        } else {
            self.line_points
        }
    }

    /// Points for a run of `run_len` tiles along `axis`
    #[inline]
    pub fn points_for(&self, axis: Axis, run_len: usize) -> u32 {
        if run_len < self.min_run {
            return 0;
        }
        (run_len as u32).saturating_mul(self.per_tile(axis))
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MIN_RUN,
            Self::DEFAULT_LINE_POINTS,
            Self::DEFAULT_DIAGONAL_POINTS,
        )
    }
}
