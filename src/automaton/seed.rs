//! Initial-state seeding from an entropy source.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::grid::Grid;
use crate::error::Result;

/// Deterministic generator for a fixed seed, OS entropy otherwise.
pub fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Fill `grid` with one random byte per cell, keeping bit 0 as the liveness.
pub fn fill_random<const W: usize, const H: usize, R: RngCore>(grid: &mut Grid<W, H>, rng: &mut R) {
    let cells = grid.bytes_mut();
    rng.fill_bytes(cells);
    for cell in cells.iter_mut() {
        *cell &= 1;
    }
}

/// Allocate and randomly seed a grid.
pub fn random_grid<const W: usize, const H: usize>(seed: Option<u64>) -> Result<Grid<W, H>> {
    let mut grid = Grid::new()?;
    fill_random(&mut grid, &mut rng_from(seed));
    Ok(grid)
}
