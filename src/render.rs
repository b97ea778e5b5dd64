/// Display boundary: maps the two-valued cell state onto grayscale
/// pixels. Nothing in the core depends on these values.

use crate::game::{Cell, Grid};

pub const ALIVE_LUMA: u8 = 255;
pub const DEAD_LUMA: u8 = 0;

/// Grayscale value for a cell.
pub fn cell_luma(cell: Cell) -> u8 {
    if cell.is_alive() {
        ALIVE_LUMA
    } else {
        DEAD_LUMA
    }
}

/// Rasterize the grid into a grayscale frame, one byte per pixel, each
/// cell drawn as a scale x scale block. The frame is square with side
/// `dimension * scale`.
pub fn rasterize(grid: &Grid, scale: usize) -> Vec<u8> {
    let n = grid.dimension();
    let side = n * scale;
    let mut pixels = vec![DEAD_LUMA; side * side];

    for row in 0..n {
        for col in 0..n {
            let luma = cell_luma(grid.get(row, col));
            if luma == DEAD_LUMA {
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    pixels[(row * scale + dy) * side + col * scale + dx] = luma;
                }
            }
        }
    }

    pixels
}
