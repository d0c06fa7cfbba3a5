//! Core automaton logic: grid storage, neighbor counting and stepping.
//!
//! The FFI layer in `ffi/` and the presentation adapter in `render` call
//! into these modules.

pub mod cell;
pub mod grid;
pub mod lanes;
pub mod neighbors;
pub mod rule;
pub mod seed;
pub mod stepping;

pub use cell::{Cell, DEAD_ARGB, LIVE_ARGB};
pub use grid::{Grid, ScreenGrid, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use neighbors::{count_at, Direction, NeighborCounts, Strategy};
pub use rule::next_state;
pub use stepping::{step, Engine};
