//! Copy-on-write tile grid

use std::fmt;

use super::{Color, Pos, GRID_SIZE, TOTAL_CELLS};
use crate::error::{MoveError, ParseError};

/// Character used for an empty cell in the text format
pub const EMPTY_CELL: char = '.';

/// Fixed-size grid of tiles, stored row-major.
///
/// `Grid` is `Copy`: placing a tile produces a new grid and leaves the
/// original snapshot intact, so scoring always runs against an immutable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Color>; TOTAL_CELLS],
}

impl Grid {
    pub const fn new() -> Self {
        Self {
            cells: [None; TOTAL_CELLS],
        }
    }

    /// Get tile at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Color> {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cells[pos.to_index()].is_none()
    }

    /// Return a copy of this grid with `color` placed at `pos`.
    ///
    /// Only empty cells accept a tile.
    pub fn with_tile(&self, pos: Pos, color: Color) -> Result<Grid, MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        let mut next = *self;
        next.cells[pos.to_index()] = Some(color);
        Ok(next)
    }

    /// Total tiles on the grid
    #[inline]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(idx, _)| Pos::from_index(idx))
    }

    pub fn tiles(&self) -> impl Iterator<Item = (Pos, Color)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, c)| c.map(|color| (Pos::from_index(idx), color)))
    }

    /// Build a grid from text rows, one letter per cell.
    ///
    /// `.` marks an empty cell; colors use [`Color::letter`].
    pub fn from_rows(rows: &[&str]) -> Result<Grid, ParseError> {
        if rows.len() != GRID_SIZE {
            return Err(ParseError::RowCount(rows.len()));
        }

        let mut grid = Grid::new();
        for (r, line) in rows.iter().enumerate() {
            let line = line.trim();
            let width = line.chars().count();
            if width != GRID_SIZE {
                return Err(ParseError::RowWidth { row: r, width });
            }
            for (c, ch) in line.chars().enumerate() {
                if ch == EMPTY_CELL {
                    continue;
                }
                let color = Color::from_letter(ch).ok_or(ParseError::UnknownLetter(ch))?;
                grid.cells[Pos::new(r as u8, c as u8).to_index()] = Some(color);
            }
        }
        Ok(grid)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(GRID_SIZE) {
            let line: String = row
                .iter()
                .map(|c| c.map_or(EMPTY_CELL, Color::letter))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
