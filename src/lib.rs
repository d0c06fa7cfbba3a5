//! Life Engine - Conway's Game of Life over a fixed-size grid
//!
//! The core advances a W×H grid one generation at a time under B3/S23 rules
//! with truncated edges. Neighbor counts come from either a direct per-cell
//! scan or eight separable directional passes, optionally lane-batched; all
//! strategies produce byte-identical generations.
//!
//! A C ABI in `ffi` exposes a 640×480 simulation to native presentation hosts.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod render;

#[cfg(test)]
mod tests;

pub use automaton::{step, Cell, Engine, Grid, ScreenGrid, Strategy};
pub use config::EngineConfig;
pub use error::{LifeError, Result};
