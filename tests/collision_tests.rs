//! Collision checker tests

use blockfall::core::{collides, ActivePiece, Grid, SimpleRng};
use blockfall::types::PieceType;

/// Straightforward per-cell check to compare against.
fn reference_collides(grid: &Grid, piece: &ActivePiece) -> bool {
    let size = piece.matrix.size();
    for my in 0..size {
        for mx in 0..size {
            if piece.matrix.get(mx, my) == Some(0) {
                continue;
            }
            let gx = piece.x as i32 + mx as i32;
            let gy = piece.y as i32 + my as i32;
            if gx < 0 || gy < 0 || gx >= grid.columns() as i32 || gy >= grid.rows() as i32 {
                return true;
            }
            if grid.get(gx as i16, gy as i16) != Some(0) {
                return true;
            }
        }
    }
    false
}

#[test]
fn test_empty_grid_spawn_never_collides() {
    let grid = Grid::new(10, 20);
    for kind in PieceType::ALL {
        assert!(!collides(&grid, &ActivePiece::spawn(kind, 10)));
    }
}

#[test]
fn test_empty_matrix_rows_may_hang_off_the_grid() {
    let grid = Grid::new(10, 20);
    // I's filled row is its second; rows 2..4 are empty and may sit below the floor.
    let piece = ActivePiece::new(PieceType::I, 0, 18);
    assert!(!collides(&grid, &piece));
    let piece = ActivePiece::new(PieceType::I, 0, 19);
    assert!(collides(&grid, &piece));
}

#[test]
fn test_collides_matches_reference_on_random_boards() {
    let mut rng = SimpleRng::new(0xC0FFEE);

    for round in 0..2000 {
        let columns = 4 + rng.next_range(9) as u16;
        let rows = 2 + rng.next_range(20) as u16;
        let mut grid = Grid::new(columns, rows);
        let density = 1 + rng.next_range(4);
        for y in 0..rows as i16 {
            for x in 0..columns as i16 {
                if rng.next_range(8) < density {
                    grid.set(x, y, (rng.next_range(7) + 1) as u8);
                }
            }
        }

        let kind = PieceType::ALL[rng.next_range(7) as usize];
        let x = rng.next_range(columns as u32 + 8) as i16 - 4;
        let y = rng.next_range(rows as u32 + 8) as i16 - 4;
        let mut piece = ActivePiece::new(kind, x, y);
        for _ in 0..rng.next_range(4) {
            piece.matrix.rotate_cw();
        }

        assert_eq!(
            collides(&grid, &piece),
            reference_collides(&grid, &piece),
            "round {}: {:?} at ({}, {}) on {}x{}",
            round,
            kind,
            x,
            y,
            columns,
            rows
        );
    }
}
