/// Predefined seed patterns, stamped onto fresh grids.

use crate::game::{Cell, Grid, GridError};

/// Canonical glider, relative (row, col) positions within a 3x3 box:
/// ```text
/// . . A
/// A . A
/// . A A
/// ```
/// Travels down-right by one cell every 4 generations.
const GLIDER: &[(usize, usize)] = &[(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)];
const GLIDER_ROWS: usize = 3;
const GLIDER_COLS: usize = 3;

/// Gosper glider gun within a 9x36 box. Emits a glider every 30
/// generations.
const GOSPER_GUN: &[(usize, usize)] = &[
    // Left block
    (4, 0),
    (4, 1),
    (5, 0),
    (5, 1),
    // Left ship
    (4, 10),
    (5, 10),
    (6, 10),
    (3, 11),
    (7, 11),
    (2, 12),
    (8, 12),
    (2, 13),
    (8, 13),
    (5, 14),
    (3, 15),
    (7, 15),
    (4, 16),
    (5, 16),
    (6, 16),
    (5, 17),
    // Right ship
    (2, 20),
    (3, 20),
    (4, 20),
    (2, 21),
    (3, 21),
    (4, 21),
    (1, 22),
    (5, 22),
    (0, 24),
    (1, 24),
    (5, 24),
    (6, 24),
    // Right block
    (2, 34),
    (3, 34),
    (2, 35),
    (3, 35),
];
const GOSPER_GUN_ROWS: usize = 9;
const GOSPER_GUN_COLS: usize = 36;

/// All-dead grid with a single glider stamped at (row, col).
pub fn glider_grid(dimension: usize, row: usize, col: usize) -> Result<Grid, GridError> {
    let mut grid = Grid::new(dimension)?;
    stamp(&mut grid, GLIDER, GLIDER_ROWS, GLIDER_COLS, row, col)?;
    Ok(grid)
}

/// All-dead grid with a Gosper glider gun stamped at (row, col).
pub fn gosper_gun_grid(dimension: usize, row: usize, col: usize) -> Result<Grid, GridError> {
    let mut grid = Grid::new(dimension)?;
    stamp(
        &mut grid,
        GOSPER_GUN,
        GOSPER_GUN_ROWS,
        GOSPER_GUN_COLS,
        row,
        col,
    )?;
    Ok(grid)
}

/// Write a pattern's live cells at the given offset. Bounds are checked
/// before anything is written: a pattern never wraps or truncates.
fn stamp(
    grid: &mut Grid,
    cells: &[(usize, usize)],
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
) -> Result<(), GridError> {
    let dimension = grid.dimension();
    if row + rows > dimension || col + cols > dimension {
        return Err(GridError::PatternOutOfBounds {
            row,
            col,
            rows,
            cols,
            dimension,
        });
    }

    for &(dr, dc) in cells {
        grid.set(row + dr, col + dc, Cell::Alive);
    }
    Ok(())
}
