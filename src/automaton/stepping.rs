//! Generation stepping with B3/S23 rules.
//!
//! Every step has two phases. Counting reads the current generation and never
//! writes it. Committing derives each cell's next state from its finalized
//! count. The direct strategy writes the next generation into a back buffer
//! and swaps it in; the separable strategies overwrite the current grid in
//! place, which is only sound because the count buffer is complete first.

use std::mem;

use rand::RngCore;
use tracing::{debug, info, trace};

use super::grid::Grid;
use super::lanes;
use super::neighbors::{count_at, NeighborCounts, Strategy};
use super::rule::next_byte;
use super::seed;
use crate::error::Result;

/// Owns the committed grid plus the scratch buffers a step needs.
///
/// Not `Clone`: one engine is one simulation.
pub struct Engine<const W: usize, const H: usize> {
    current: Grid<W, H>,
    back: Grid<W, H>,
    counts: NeighborCounts<W, H>,
    strategy: Strategy,
    generation: u64,
}

impl<const W: usize, const H: usize> Engine<W, H> {
    /// Allocate an engine over an all-dead grid.
    pub fn new(strategy: Strategy) -> Result<Self> {
        Self::with_grid(Grid::new()?, strategy)
    }

    /// Allocate an engine whose generation 0 is `grid`.
    pub fn with_grid(grid: Grid<W, H>, strategy: Strategy) -> Result<Self> {
        let engine = Self {
            current: grid,
            back: Grid::new()?,
            counts: NeighborCounts::new()?,
            strategy,
            generation: 0,
        };
        info!(width = W, height = H, %strategy, "engine created");
        Ok(engine)
    }

    /// The committed generation.
    #[inline]
    pub fn grid(&self) -> &Grid<W, H> {
        &self.current
    }

    /// Mutable access to the committed generation between steps.
    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid<W, H> {
        &mut self.current
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        if strategy != self.strategy {
            debug!(from = %self.strategy, to = %strategy, "strategy switched");
            self.strategy = strategy;
        }
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// Replace the grid from seed bytes and restart the generation counter.
    pub fn seed_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.current.load_seed_bytes(bytes)?;
        self.generation = 0;
        debug!(population = self.current.population(), "seeded from bytes");
        Ok(())
    }

    /// Replace the grid with random cells and restart the generation counter.
    pub fn seed_random<R: RngCore>(&mut self, rng: &mut R) {
        seed::fill_random(&mut self.current, rng);
        self.generation = 0;
        debug!(population = self.current.population(), "seeded from rng");
    }

    /// Advance one generation and return the newly committed grid.
    pub fn step(&mut self) -> &Grid<W, H> {
        trace!(generation = self.generation, strategy = %self.strategy, "counting");
        match self.strategy {
            Strategy::Direct => {
                step_direct(&self.current, &mut self.back);
                mem::swap(&mut self.current, &mut self.back);
            }
            Strategy::Separable => {
                self.strategy.count_neighbors(&self.current, &mut self.counts);
                commit_scalar(self.current.bytes_mut(), self.counts.as_slice());
            }
            Strategy::Vectorized => {
                self.strategy.count_neighbors(&self.current, &mut self.counts);
                lanes::commit(self.current.bytes_mut(), self.counts.as_slice());
            }
        }
        self.generation += 1;
        trace!(generation = self.generation, "committed");
        &self.current
    }

    /// Advance `n` generations.
    pub fn step_n(&mut self, n: u64) -> &Grid<W, H> {
        for _ in 0..n {
            self.step();
        }
        &self.current
    }
}

/// Compute the generation after `grid` into a freshly allocated grid.
/// The input is left untouched.
pub fn step<const W: usize, const H: usize>(grid: &Grid<W, H>) -> Result<Grid<W, H>> {
    let mut next = Grid::new()?;
    step_direct(grid, &mut next);
    Ok(next)
}

/// Direct-scan step from `prev` into `next`. Every cell of `next` is written.
pub fn step_direct<const W: usize, const H: usize>(prev: &Grid<W, H>, next: &mut Grid<W, H>) {
    let cells = prev.as_bytes();
    let out = next.bytes_mut();
    for y in 0..H {
        for x in 0..W {
            let i = Grid::<W, H>::index_of(x, y);
            out[i] = next_byte(cells[i], count_at(prev, x, y));
        }
    }
}

/// Scalar commit of finalized counts onto the cells they were counted from.
pub fn commit_scalar(cells: &mut [u8], counts: &[u8]) {
    for (cell, &count) in cells.iter_mut().zip(counts) {
        *cell = next_byte(*cell, count);
    }
}
