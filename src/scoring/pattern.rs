//! Run detection and placement scoring
//!
//! For each of the four axes the run through the placed tile is measured in
//! both directions. Axes score independently: a tile that completes a
//! horizontal and a vertical run at once earns both.

use crate::grid::{Grid, Pos};
use crate::rules::{Axis, ScoringRules};

/// Length of the same-color run through `pos` along `axis`.
///
/// Includes `pos` itself and stops at the grid edge. An empty cell has no run.
pub fn run_length(grid: &Grid, pos: Pos, axis: Axis) -> usize {
    let Some(color) = grid.get(pos) else {
        return 0;
    };
    let (dr, dc) = axis.delta();
    let mut count = 1;

    for sign in [1, -1] {
        let mut r = pos.row as i32 + dr * sign;
        let mut c = pos.col as i32 + dc * sign;
        while Pos::is_valid(r, c) && grid.get(Pos::new(r as u8, c as u8)) == Some(color) {
            count += 1;
            r += dr * sign;
            c += dc * sign;
        }
    }
    count
}

/// Points earned by the tile at `pos` under the default rules.
#[inline]
pub fn score_placement(grid: &Grid, pos: Pos) -> u32 {
    score_placement_with(&ScoringRules::default(), grid, pos)
}

pub fn score_placement_with(rules: &ScoringRules, grid: &Grid, pos: Pos) -> u32 {
    Axis::ALL
        .iter()
        .map(|&axis| rules.points_for(axis, run_length(grid, pos, axis)))
        .fold(0, u32::saturating_add)
}

/// Run length and points on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisScore {
    pub axis: Axis,
    pub run: usize,
    pub points: u32,
}

/// Per-axis scoring detail for one placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub pos: Pos,
    pub axes: [AxisScore; 4],
}

impl ScoreBreakdown {
    #[inline]
    pub fn total(&self) -> u32 {
        self.axes.iter().map(|a| a.points).fold(0, u32::saturating_add)
    }

    /// Axes whose run reached the threshold
    pub fn scoring_axes(&self) -> impl Iterator<Item = &AxisScore> {
        self.axes.iter().filter(|a| a.points > 0)
    }
}

pub fn breakdown(rules: &ScoringRules, grid: &Grid, pos: Pos) -> ScoreBreakdown {
    let axes = Axis::ALL.map(|axis| {
        let run = run_length(grid, pos, axis);
        AxisScore {
            axis,
            run,
            points: rules.points_for(axis, run),
        }
    });
    ScoreBreakdown { pos, axes }
}
