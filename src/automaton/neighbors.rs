//! Neighbor counting.
//!
//! Two strategies produce identical counts:
//! - Direct scan: every cell inspects its up-to-8 neighbors. Read-only over
//!   the grid and the reference the separable passes are checked against.
//! - Separable accumulation: eight directional streaming passes, each adding
//!   a whole source row span onto the shifted target row span of the count
//!   buffer. The vectorized flavour runs the same passes through [`lanes`].
//!
//! Edges are truncated: out-of-range neighbors contribute nothing, so corner
//! cells see 3 neighbors and edge cells 5.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use super::grid::{alloc_zeroed, Grid};
use super::lanes;
use crate::error::{LifeError, Result};

/// How a step counts neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Per-cell scan of the 3×3 neighborhood, double-buffered commit.
    Direct,
    /// Eight scalar directional passes into a count buffer, in-place commit.
    Separable,
    /// The separable passes and commit, batched [`lanes::LANES`] cells at a time.
    #[default]
    Vectorized,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Direct, Strategy::Separable, Strategy::Vectorized];

    /// Decode the C ABI tag: 0 = direct, 1 = separable, 2 = vectorized.
    pub fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Strategy::Direct),
            1 => Some(Strategy::Separable),
            2 => Some(Strategy::Vectorized),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Strategy::Direct => 0,
            Strategy::Separable => 1,
            Strategy::Vectorized => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Direct => "direct",
            Strategy::Separable => "separable",
            Strategy::Vectorized => "vectorized",
        }
    }

    /// Fill `counts` with the neighbor count of every cell in `grid`.
    pub fn count_neighbors<const W: usize, const H: usize>(
        self,
        grid: &Grid<W, H>,
        counts: &mut NeighborCounts<W, H>,
    ) {
        match self {
            Strategy::Direct => count_direct(grid, counts),
            Strategy::Separable => count_separable(grid, counts),
            Strategy::Vectorized => count_vectorized(grid, counts),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "direct" | "naive" => Ok(Strategy::Direct),
            "separable" | "scalar" => Ok(Strategy::Separable),
            "vectorized" | "simd" => Ok(Strategy::Vectorized),
            _ => Err(LifeError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Per-cell live-neighbor counts for one generation. Transient scratch space.
pub struct NeighborCounts<const W: usize, const H: usize> {
    counts: Vec<u8>,
}

impl<const W: usize, const H: usize> NeighborCounts<W, H> {
    pub fn new() -> Result<Self> {
        Ok(Self {
            counts: alloc_zeroed(W * H, "neighbor counts")?,
        })
    }

    /// Count for `(x, y)`. Out-of-bounds reads are 0.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x < W && y < H {
            self.counts[Grid::<W, H>::index_of(x, y)]
        } else {
            0
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.counts
    }

    /// Zero every count. Must happen before any accumulation pass.
    pub fn reset(&mut self) {
        self.counts.fill(0);
    }
}

/// Count live neighbors of a single cell by scanning its 3×3 neighborhood.
pub fn count_at<const W: usize, const H: usize>(grid: &Grid<W, H>, x: usize, y: usize) -> u8 {
    let cells = grid.as_bytes();
    let mut count = 0;

    for dy in -1isize..=1 {
        for dx in -1isize..=1 {
            // Skip the center cell
            if dx == 0 && dy == 0 {
                continue;
            }

            let nx = x as isize + dx;
            let ny = y as isize + dy;

            if Grid::<W, H>::in_bounds(nx, ny) {
                count += cells[Grid::<W, H>::index_of(nx as usize, ny as usize)];
            }
        }
    }

    count
}

/// Strategy A: direct scan of every cell's neighborhood.
pub fn count_direct<const W: usize, const H: usize>(
    grid: &Grid<W, H>,
    counts: &mut NeighborCounts<W, H>,
) {
    for y in 0..H {
        for x in 0..W {
            counts.counts[Grid::<W, H>::index_of(x, y)] = count_at(grid, x, y);
        }
    }
}

/// Strategy B: eight scalar directional passes.
pub fn count_separable<const W: usize, const H: usize>(
    grid: &Grid<W, H>,
    counts: &mut NeighborCounts<W, H>,
) {
    counts.reset();
    for direction in Direction::ALL {
        accumulate::<W, H>(grid.as_bytes(), &mut counts.counts, direction, add_scalar);
    }
}

/// Strategy B batched through lane words.
pub fn count_vectorized<const W: usize, const H: usize>(
    grid: &Grid<W, H>,
    counts: &mut NeighborCounts<W, H>,
) {
    counts.reset();
    for direction in Direction::ALL {
        accumulate::<W, H>(grid.as_bytes(), &mut counts.counts, direction, lanes::add_assign);
    }
}

/// Where a contributing neighbor sits relative to the cell being counted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Left,
    Right,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Left,
        Direction::Right,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// `(dx, dy)` from a target cell to the source cell it reads. y grows downwards.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::Up => (0, -1),
            Direction::UpRight => (1, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::DownLeft => (-1, 1),
            Direction::Down => (0, 1),
            Direction::DownRight => (1, 1),
        }
    }
}

/// Source coordinates along one axis that have a target one step of `-d` away.
#[inline]
fn source_span(dim: usize, d: isize) -> Range<usize> {
    let start = if d > 0 { 1 } else { 0 };
    let end = if d < 0 { dim - 1 } else { dim };
    start..end.max(start)
}

fn add_scalar(dst: &mut [u8], src: &[u8]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d += s;
    }
}

/// One directional pass: every live source cell adds 1 to the count of the
/// cell it is a neighbor of. The grid edge that would need wraparound is skipped.
fn accumulate<const W: usize, const H: usize>(
    cells: &[u8],
    counts: &mut [u8],
    direction: Direction,
    add: fn(&mut [u8], &[u8]),
) {
    let (dx, dy) = direction.offset();
    let xs = source_span(W, dx);
    let ys = source_span(H, dy);
    if xs.is_empty() {
        return;
    }

    let target_x = (xs.start as isize - dx) as usize;
    let span = xs.len();
    for sy in ys {
        let ty = (sy as isize - dy) as usize;
        let src = sy * W + xs.start;
        let dst = ty * W + target_x;
        add(&mut counts[dst..dst + span], &cells[src..src + span]);
    }
}
