//! Tile-placement puzzle scoring engine
//!
//! Players place colored tiles one at a time on a 6x6 grid. Each placement
//! earns points for the same-color runs passing through the new tile:
//! - Horizontal and vertical runs of 3+ score 5 points per tile
//! - Diagonal runs of 3+ score 10 points per tile
//! - Every axis scores independently, so one tile can score several runs
//!
//! # Architecture
//!
//! - [`grid`]: Copy-on-write grid, positions and colors
//! - [`rules`]: Scan axes and tunable point values
//! - [`scoring`]: Run detection and the pure placement scorer
//! - [`game`]: Session state with running and best score
//! - [`error`]: Move and parse errors
//!
//! # Quick Start
//!
//! ```
//! use tilematch::{score_placement, Color, Grid, Pos};
//!
//! let grid = Grid::new()
//!     .with_tile(Pos::new(0, 0), Color::Purple).unwrap()
//!     .with_tile(Pos::new(0, 1), Color::Purple).unwrap()
//!     .with_tile(Pos::new(0, 2), Color::Purple).unwrap();
//!
//! assert_eq!(score_placement(&grid, Pos::new(0, 2)), 15);
//! ```

pub mod error;
pub mod game;
pub mod grid;
pub mod rules;
pub mod scoring;

// Re-export commonly used types for convenience
pub use error::{MoveError, ParseError, RulesError};
pub use game::{GameState, Move};
pub use grid::{Color, Grid, Pos, GRID_SIZE};
pub use rules::{Axis, ScoringRules};
pub use scoring::{breakdown, run_length, score_placement, score_placement_with, ScoreBreakdown};
