//! Placement scoring
//!
//! Scores a just-placed tile by the same-color runs passing through it.

pub mod pattern;

pub use pattern::{
    breakdown, run_length, score_placement, score_placement_with, AxisScore, ScoreBreakdown,
};
