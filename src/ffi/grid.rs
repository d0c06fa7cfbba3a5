//! Seeding, cell access, and stepping.

use super::Simulation;
use crate::automaton::seed::rng_from;
use crate::automaton::{Cell, Strategy};

/// Seeds the grid from `len` bytes: bit 0 of byte i is the liveness of cell i.
/// Resets the generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
/// - `in_buf` must point to at least `len` readable bytes, or be null
///
/// # Returns
/// 0 on success, 1 on failure (null pointer or fewer than 640×480 bytes).
#[no_mangle]
pub unsafe extern "C" fn gol_seed_bytes(ptr: *mut Simulation, in_buf: *const u8, len: u64) -> i32 {
    if ptr.is_null() || in_buf.is_null() {
        return 1;
    }

    let sim = &mut *ptr;
    let bytes = std::slice::from_raw_parts(in_buf, len as usize);
    match sim.seed_bytes(bytes) {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Seeds the grid with random cells. `seed == 0` draws from OS entropy,
/// any other value gives a reproducible grid. Resets the generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
#[no_mangle]
pub unsafe extern "C" fn gol_seed_random(ptr: *mut Simulation, seed: u64) {
    if ptr.is_null() {
        return;
    }

    let sim = &mut *ptr;
    let seed = if seed == 0 { None } else { Some(seed) };
    sim.seed_random(&mut rng_from(seed));
}

/// Sets a cell to alive (non-zero) or dead (0).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// Out-of-bounds coordinates are silently ignored.
#[no_mangle]
pub unsafe extern "C" fn gol_set_cell(ptr: *mut Simulation, x: i32, y: i32, alive: u8) {
    if ptr.is_null() || x < 0 || y < 0 {
        return;
    }

    let sim = &mut *ptr;
    sim.grid_mut()
        .set(x as usize, y as usize, Cell::from_byte(alive));
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn gol_get_cell(ptr: *const Simulation, x: i32, y: i32) -> u8 {
    if ptr.is_null() || x < 0 || y < 0 {
        return 0;
    }

    let sim = &*ptr;
    sim.grid().get(x as usize, y as usize).as_byte()
}

/// Advances the simulation by one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// Uses B3/S23 rules with truncated edges (no wraparound).
#[no_mangle]
pub unsafe extern "C" fn gol_step(ptr: *mut Simulation) {
    if ptr.is_null() {
        return;
    }

    let sim = &mut *ptr;
    sim.step();
}

/// Switches the neighbor counting strategy for subsequent steps.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// 0 on success, 1 on failure (null pointer or unknown strategy tag).
#[no_mangle]
pub unsafe extern "C" fn gol_set_strategy(ptr: *mut Simulation, strategy: u8) -> i32 {
    if ptr.is_null() {
        return 1;
    }

    match Strategy::from_u8(strategy) {
        Some(strategy) => {
            (*ptr).set_strategy(strategy);
            0
        }
        None => 1,
    }
}

/// Counts live cells in the committed generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// The live cell count, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_population(ptr: *const Simulation) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).population() as u64
}
