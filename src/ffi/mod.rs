//! C FFI layer for native presentation hosts.
//!
//! This module exports C ABI functions over a fixed 640×480 simulation.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` and `render` modules. These
//! functions are thin wrappers that handle null checks, pointer safety, and
//! C-to-Rust conversions. A host owns exactly the handles it created; there
//! is no global instance.

pub mod grid;
pub mod lifecycle;
pub mod render;

use crate::automaton::{Engine, SCREEN_HEIGHT, SCREEN_WIDTH};

/// The simulation behind every opaque handle.
pub type Simulation = Engine<SCREEN_WIDTH, SCREEN_HEIGHT>;

pub use grid::{
    gol_get_cell, gol_population, gol_seed_bytes, gol_seed_random, gol_set_cell,
    gol_set_strategy, gol_step,
};
pub use lifecycle::{gol_create, gol_destroy, gol_get_generation};
pub use render::gol_render_argb;
