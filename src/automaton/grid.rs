//! Fixed-size grid storage and cell access helpers.

use std::fmt;

use super::cell::Cell;
use crate::error::{LifeError, Result};

/// Reference display width in cells.
pub const SCREEN_WIDTH: usize = 640;

/// Reference display height in cells.
pub const SCREEN_HEIGHT: usize = 480;

/// The grid size the C ABI and the runner use.
pub type ScreenGrid = Grid<SCREEN_WIDTH, SCREEN_HEIGHT>;

/// Reserve a zeroed byte buffer, reporting allocation failure instead of aborting.
pub(crate) fn alloc_zeroed(len: usize, what: &'static str) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| LifeError::Allocation { what, cells: len })?;
    buf.resize(len, 0);
    Ok(buf)
}

/// A W×H grid of cells, row-major, one byte per cell (0 = dead, 1 = alive).
///
/// Dimensions are part of the type, so a grid of the wrong size cannot be
/// handed to an engine built for another size.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<const W: usize, const H: usize> {
    cells: Vec<u8>,
}

impl<const W: usize, const H: usize> Grid<W, H> {
    /// Number of cells in the grid.
    pub const LEN: usize = W * H;

    const NON_EMPTY: () = assert!(W > 0 && H > 0, "grid dimensions must be non-zero");

    /// Allocate an all-dead grid.
    pub fn new() -> Result<Self> {
        let () = Self::NON_EMPTY;
        Ok(Self {
            cells: alloc_zeroed(Self::LEN, "grid")?,
        })
    }

    /// Build a grid from seed bytes: bit 0 of byte `i` is the liveness of cell `i`.
    /// Bytes past `W * H` are ignored.
    pub fn from_seed_bytes(bytes: &[u8]) -> Result<Self> {
        let mut grid = Self::new()?;
        grid.load_seed_bytes(bytes)?;
        Ok(grid)
    }

    /// Build a grid with exactly the listed `(x, y)` cells alive.
    /// Out-of-bounds coordinates are ignored.
    pub fn with_live_cells(live: &[(usize, usize)]) -> Result<Self> {
        let mut grid = Self::new()?;
        for &(x, y) in live {
            grid.set(x, y, Cell::Live);
        }
        Ok(grid)
    }

    /// Overwrite every cell from seed bytes.
    pub fn load_seed_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() < Self::LEN {
            return Err(LifeError::SeedLength {
                expected: Self::LEN,
                actual: bytes.len(),
            });
        }
        for (cell, &byte) in self.cells.iter_mut().zip(bytes) {
            *cell = byte & 1;
        }
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> usize {
        W
    }

    #[inline]
    pub fn height(&self) -> usize {
        H
    }

    #[inline]
    pub fn len(&self) -> usize {
        Self::LEN
    }

    /// Always false: zero-sized grids are rejected at compile time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Linear index of `(x, y)`.
    #[inline]
    pub fn index_of(x: usize, y: usize) -> usize {
        y * W + x
    }

    /// `(x, y)` of linear index `i`.
    #[inline]
    pub fn coords_of(i: usize) -> (usize, usize) {
        (i % W, i / W)
    }

    /// Check if signed coordinates fall inside the grid.
    #[inline]
    pub fn in_bounds(x: isize, y: isize) -> bool {
        x >= 0 && (x as usize) < W && y >= 0 && (y as usize) < H
    }

    /// Cell at `(x, y)`. Out-of-bounds reads are dead.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x < W && y < H {
            Cell::from_byte(self.cells[Self::index_of(x, y)])
        } else {
            Cell::Dead
        }
    }

    /// Set the cell at `(x, y)`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < W && y < H {
            self.cells[Self::index_of(x, y)] = cell.as_byte();
        }
    }

    /// Cell at linear index `i`. Out-of-range reads are dead.
    #[inline]
    pub fn get_at(&self, i: usize) -> Cell {
        self.cells.get(i).copied().map_or(Cell::Dead, Cell::from_byte)
    }

    #[inline]
    pub fn set_at(&mut self, i: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(i) {
            *slot = cell.as_byte();
        }
    }

    /// Raw cell bytes in row-major order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    /// Raw mutable cell bytes. Only 0 and 1 may be written.
    #[inline]
    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// One row of cell bytes. Rows past the bottom edge are empty.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        if y < H {
            &self.cells[y * W..(y + 1) * W]
        } else {
            &[]
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().map(|&c| c as usize).sum()
    }

    /// Coordinates of every live cell, in row-major order.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != 0)
            .map(|(i, _)| Self::coords_of(i))
            .collect()
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

impl<const W: usize, const H: usize> fmt::Debug for Grid<W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Grid");
        out.field("width", &W)
            .field("height", &H)
            .field("population", &self.population());
        // Small grids are worth drawing in assertion failures
        if Self::LEN <= 32 * 32 {
            let rows: Vec<String> = (0..H)
                .map(|y| {
                    self.row(y)
                        .iter()
                        .map(|&c| if c != 0 { '#' } else { '.' })
                        .collect()
                })
                .collect();
            out.field("rows", &rows);
        }
        out.finish()
    }
}
