//! Property tests for the transition engine and grid accessors.

use life::{Grid, GridError, next};
use proptest::collection::vec;
use proptest::prelude::*;

fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1usize..12, 1usize..12)
        .prop_flat_map(|(h, w)| vec(vec(any::<bool>(), w), h))
        .prop_map(|rows| Grid::from_rows(rows).unwrap())
}

/// A grid together with an in-range coordinate.
fn grid_and_cell() -> impl Strategy<Value = (Grid, usize, usize)> {
    grid_strategy().prop_flat_map(|g| {
        let (h, w) = g.dimensions();
        (Just(g), 0..h, 0..w)
    })
}

proptest! {
    /// next(G) is a pure function of G
    #[test]
    fn prop_next_is_deterministic(grid in grid_strategy()) {
        prop_assert_eq!(next(&grid), next(&grid));
    }

    /// next(G) has G's dimensions
    #[test]
    fn prop_next_preserves_dimensions(grid in grid_strategy()) {
        prop_assert_eq!(next(&grid).dimensions(), grid.dimensions());
    }

    /// An all-dead grid stays dead
    #[test]
    fn prop_empty_grid_is_stable(h in 1usize..40, w in 1usize..40) {
        let empty = Grid::empty(h, w).unwrap();
        prop_assert_eq!(next(&empty), empty);
    }

    /// toggle(toggle(G, r, c), r, c) = G
    #[test]
    fn prop_toggle_round_trip((grid, r, c) in grid_and_cell()) {
        let twice = grid.toggled(r, c).unwrap().toggled(r, c).unwrap();
        prop_assert_eq!(twice, grid);
    }

    /// Rows at or past the height are rejected
    #[test]
    fn prop_toggle_past_height_fails(grid in grid_strategy(), extra in 0usize..5) {
        let mut copy = grid.clone();
        let row = grid.height() + extra;
        let is_out_of_bounds = matches!(copy.toggle(row, 0), Err(GridError::OutOfBounds { .. }));
        prop_assert!(is_out_of_bounds);
        prop_assert_eq!(copy, grid);
    }

    /// Every cell of next(G) follows the canonical rule
    #[test]
    fn prop_next_follows_rule(grid in grid_strategy()) {
        let following = next(&grid);
        for (row, col, alive) in grid.iter_cells() {
            let n = life::engine::live_neighbors(&grid, row, col).unwrap();
            let expected = (alive && (n == 2 || n == 3)) || (!alive && n == 3);
            prop_assert_eq!(following.get(row, col).unwrap(), expected);
        }
    }
}

#[test]
fn toggle_rejects_negative_and_height_rows() {
    let grid = Grid::empty(5, 5).unwrap();
    assert!(matches!(
        grid.position(-1, 0),
        Err(GridError::OutOfBounds { row: -1, col: 0, .. })
    ));
    assert!(matches!(
        grid.toggled(5, 0),
        Err(GridError::OutOfBounds { row: 5, col: 0, .. })
    ));
}
