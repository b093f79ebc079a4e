//! Scan axes for run detection

/// One of the four scan directions through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDownRight,
        Axis::DiagonalDownLeft,
    ];

    /// Step vector `(d_row, d_col)` in the forward direction.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDownRight => (1, 1),
            Axis::DiagonalDownLeft => (1, -1),
        }
    }

    #[inline]
    pub fn is_diagonal(self) -> bool {
        matches!(self, Axis::DiagonalDownRight | Axis::DiagonalDownLeft)
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
            Axis::DiagonalDownRight => "diagonal-down-right",
            Axis::DiagonalDownLeft => "diagonal-down-left",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_axes() {
        assert!(!Axis::Horizontal.is_diagonal());
        assert!(!Axis::Vertical.is_diagonal());
        assert!(Axis::DiagonalDownRight.is_diagonal());
        assert!(Axis::DiagonalDownLeft.is_diagonal());
    }

    #[test]
    fn test_deltas_are_distinct_unit_steps() {
        for (i, a) in Axis::ALL.iter().enumerate() {
            let (dr, dc) = a.delta();
            assert!(dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0));
            for b in &Axis::ALL[i + 1..] {
                let (br, bc) = b.delta();
                // No axis is the reverse of another
                assert_ne!((dr, dc), (br, bc));
                assert_ne!((dr, dc), (-br, -bc));
            }
        }
    }
}
