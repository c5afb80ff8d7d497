//! Collision checks between the active piece and the grid.

use crate::grid::Grid;
use crate::pieces::ActivePiece;

/// True when any filled cell of `piece` lies outside the grid or on a settled
/// block.
///
/// Out of bounds covers columns left of 0 and at or past `columns`, rows at or
/// below `rows`, and rows above 0. Empty matrix cells are never checked, so a
/// piece may hang its blank border over a wall.
pub fn collides(grid: &Grid, piece: &ActivePiece) -> bool {
    piece
        .cells()
        .iter()
        .any(|&(x, y, _)| grid.is_out_of_bounds(x, y) || grid.is_occupied(x, y))
}
