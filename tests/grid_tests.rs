//! Grid tests

use blockfall::core::{ActivePiece, Grid, SimpleRng};
use blockfall::types::{PieceType, DEFAULT_COLUMNS, DEFAULT_ROWS};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(DEFAULT_COLUMNS, DEFAULT_ROWS);
    assert_eq!(grid.columns(), 10);
    assert_eq!(grid.rows(), 20);

    for y in 0..DEFAULT_ROWS as i16 {
        for x in 0..DEFAULT_COLUMNS as i16 {
            assert_eq!(grid.get(x, y), Some(0), "cell ({}, {}) should be empty", x, y);
        }
    }
}

#[test]
fn test_grid_new_is_zeroed_for_any_size() {
    for columns in 1..=16u16 {
        for rows in 1..=24u16 {
            let grid = Grid::new(columns, rows);
            assert_eq!(grid.cells().len(), columns as usize * rows as usize);
            assert!(grid.cells().iter().all(|&v| v == 0));
            assert!(grid.is_empty());
        }
    }
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new(10, 20);
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(10, 0), None);
    assert_eq!(grid.get(0, 20), None);
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new(10, 20);

    assert!(grid.set(5, 10, 6));
    assert_eq!(grid.get(5, 10), Some(6));
    assert!(grid.is_occupied(5, 10));

    assert!(grid.set(5, 10, 0));
    assert_eq!(grid.get(5, 10), Some(0));
    assert!(!grid.is_occupied(5, 10));

    assert!(!grid.set(-1, 0, 1));
    assert!(!grid.set(0, 20, 1));
}

#[test]
fn test_grid_clear_empties_every_cell() {
    let mut grid = Grid::new(10, 20);
    for x in 0..10 {
        grid.set(x, 19, 3);
    }
    assert!(!grid.is_empty());
    grid.clear();
    assert!(grid.is_empty());
    assert_eq!(grid.columns(), 10);
    assert_eq!(grid.rows(), 20);
}

#[test]
fn test_merge_overwrites_only_covered_cells() {
    let mut rng = SimpleRng::new(2024);

    for _ in 0..300 {
        let mut grid = Grid::new(10, 20);
        for y in 0..20 {
            for x in 0..10 {
                if rng.next_range(3) == 0 {
                    grid.set(x, y, (rng.next_range(7) + 1) as u8);
                }
            }
        }

        let kind = PieceType::ALL[rng.next_range(7) as usize];
        let mut piece = ActivePiece::new(
            kind,
            rng.next_range(8) as i16 - 1,
            rng.next_range(18) as i16,
        );
        for _ in 0..rng.next_range(4) {
            piece.matrix.rotate_cw();
        }

        let before = grid.clone();
        grid.merge(&piece);

        let covered = piece.cells();
        for y in 0..20i16 {
            for x in 0..10i16 {
                match covered.iter().find(|&&(cx, cy, _)| cx == x && cy == y) {
                    Some(&(_, _, v)) => assert_eq!(grid.get(x, y), Some(v)),
                    None => assert_eq!(grid.get(x, y), before.get(x, y)),
                }
            }
        }
    }
}

#[test]
fn test_merge_places_exact_piece_values() {
    let mut grid = Grid::new(10, 20);
    let piece = ActivePiece::new(PieceType::T, 2, 10);
    grid.merge(&piece);

    // T template: [[0,6,0],[6,6,6],[0,0,0]]
    let filled: Vec<(i16, i16)> = (0..20i16)
        .flat_map(|y| (0..10i16).map(move |x| (x, y)))
        .filter(|&(x, y)| grid.is_occupied(x, y))
        .collect();
    assert_eq!(filled, vec![(3, 10), (2, 11), (3, 11), (4, 11)]);
    assert!(filled.iter().all(|&(x, y)| grid.get(x, y) == Some(6)));
}
