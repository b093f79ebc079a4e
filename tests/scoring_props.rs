//! Property tests for the placement scorer and session invariants.
//!
//! Grids are generated cell by cell with a bias toward empty cells so that
//! both short and long runs show up.

use proptest::prelude::*;
use tilematch::{
    breakdown, run_length, score_placement, Axis, Color, GameState, Grid, Move, Pos,
    ScoringRules, GRID_SIZE,
};

fn color() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

fn cell() -> impl Strategy<Value = Option<Color>> {
    prop_oneof![
        2 => Just(None),
        3 => color().prop_map(Some),
    ]
}

fn grid() -> impl Strategy<Value = Grid> {
    prop::collection::vec(cell(), GRID_SIZE * GRID_SIZE).prop_map(|cells| {
        let mut grid = Grid::new();
        for (idx, c) in cells.into_iter().enumerate() {
            if let Some(color) = c {
                grid = grid
                    .with_tile(Pos::from_index(idx), color)
                    .expect("generated cells are distinct");
            }
        }
        grid
    })
}

fn pos() -> impl Strategy<Value = Pos> {
    (0..GRID_SIZE as u8, 0..GRID_SIZE as u8).prop_map(|(r, c)| Pos::new(r, c))
}

fn neighbours(pos: Pos) -> impl Iterator<Item = Pos> {
    (-1i32..=1)
        .flat_map(|dr| (-1i32..=1).map(move |dc| (dr, dc)))
        .filter(|&d| d != (0, 0))
        .filter_map(move |(dr, dc)| Pos::try_new(pos.row as i32 + dr, pos.col as i32 + dc))
}

proptest! {
    #[test]
    fn run_length_is_bounded(g in grid(), p in pos()) {
        for axis in Axis::ALL {
            let run = run_length(&g, p, axis);
            if g.is_empty(p) {
                prop_assert_eq!(run, 0);
            } else {
                prop_assert!((1..=GRID_SIZE).contains(&run));
            }
        }
    }

    #[test]
    fn score_equals_breakdown_total(g in grid(), p in pos()) {
        let detail = breakdown(&ScoringRules::default(), &g, p);
        prop_assert_eq!(detail.total(), score_placement(&g, p));
        prop_assert_eq!(detail.total() % 5, 0);
        for axis in detail.axes {
            prop_assert_eq!(axis.points == 0, axis.run < 3);
        }
    }

    #[test]
    fn with_tile_is_copy_on_write(g in grid(), p in pos(), c in color()) {
        let before = g;
        match g.with_tile(p, c) {
            Ok(next) => {
                prop_assert!(before.is_empty(p));
                prop_assert_eq!(next.get(p), Some(c));
                prop_assert_eq!(next.tile_count(), before.tile_count() + 1);
            }
            Err(_) => prop_assert!(!before.is_empty(p)),
        }
        prop_assert_eq!(g, before);
    }

    #[test]
    fn isolated_placement_scores_zero(g in grid(), p in pos(), c in color()) {
        let clear = neighbours(p).all(|n| g.get(n) != Some(c));
        prop_assume!(clear && g.is_empty(p));
        let next = g.with_tile(p, c).unwrap();
        prop_assert_eq!(score_placement(&next, p), 0);
    }

    #[test]
    fn session_score_is_monotone(
        moves in prop::collection::vec((0i32..7, 0i32..7, color()), 1..80),
    ) {
        let mut game = GameState::default();
        let mut last = 0;
        for (row, col, color) in moves {
            let tiles = game.grid.tile_count();
            match game.play(Move::new(row, col, color)) {
                Ok(points) => {
                    prop_assert_eq!(game.score, last + points);
                    prop_assert_eq!(game.grid.tile_count(), tiles + 1);
                }
                Err(_) => prop_assert_eq!(game.grid.tile_count(), tiles),
            }
            prop_assert!(game.score >= last);
            prop_assert!(game.best_score >= game.score);
            last = game.score;
        }
    }
}
