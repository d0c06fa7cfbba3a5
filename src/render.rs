//! Presentation adapter: cell grids to 32-bit ARGB pixel buffers and back.
//!
//! Live cells are opaque black (`0xFF000000`), dead cells opaque white
//! (`0xFFFFFFFF`). The simulation never stores pixels; hosts convert at the
//! boundary after each step.

use rayon::prelude::*;

use crate::automaton::cell::Cell;
use crate::automaton::grid::Grid;
use crate::error::{LifeError, Result};

/// Write one pixel per cell into `pixels`, row-major. Extra pixels are untouched.
pub fn write_argb<const W: usize, const H: usize>(
    grid: &Grid<W, H>,
    pixels: &mut [u32],
) -> Result<()> {
    if pixels.len() < W * H {
        return Err(LifeError::PixelBuffer {
            expected: W * H,
            actual: pixels.len(),
        });
    }

    pixels[..W * H]
        .par_chunks_mut(W)
        .zip(grid.as_bytes().par_chunks(W))
        .for_each(|(row, cells)| {
            for (pixel, &cell) in row.iter_mut().zip(cells) {
                *pixel = Cell::from_byte(cell).argb();
            }
        });
    Ok(())
}

/// Render the grid into a new pixel buffer.
pub fn to_argb<const W: usize, const H: usize>(grid: &Grid<W, H>) -> Result<Vec<u32>> {
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(W * H)
        .map_err(|_| LifeError::Allocation {
            what: "pixel buffer",
            cells: W * H,
        })?;
    pixels.resize(W * H, 0);
    write_argb(grid, &mut pixels)?;
    Ok(pixels)
}

/// Decode a pixel buffer written by [`write_argb`] back into a grid.
pub fn grid_from_argb<const W: usize, const H: usize>(pixels: &[u32]) -> Result<Grid<W, H>> {
    if pixels.len() < W * H {
        return Err(LifeError::PixelBuffer {
            expected: W * H,
            actual: pixels.len(),
        });
    }

    let mut grid = Grid::new()?;
    for (i, &pixel) in pixels[..W * H].iter().enumerate() {
        grid.set_at(i, Cell::from_argb(pixel));
    }
    Ok(grid)
}
