//! Scoring rules for the tile puzzle
//!
//! - Four scan axes through a placed tile
//! - Run threshold and per-tile point values

pub mod axis;
pub mod scoring_rules;

// Re-exports for convenient access
pub use axis::Axis;
pub use scoring_rules::ScoringRules;
