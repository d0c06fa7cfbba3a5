//! Simulation creation, destruction, and generation queries.

use tracing::warn;

use super::Simulation;
use crate::automaton::Strategy;

/// Creates a new all-dead simulation and returns an opaque pointer.
///
/// `strategy`: 0 = direct, 1 = separable, 2 = vectorized.
///
/// # Returns
/// A pointer to a new Simulation, or null on an unknown strategy or
/// allocation failure.
///
/// # Safety
/// The returned pointer must eventually be freed with `gol_destroy()`.
#[no_mangle]
pub extern "C" fn gol_create(strategy: u8) -> *mut Simulation {
    let Some(strategy) = Strategy::from_u8(strategy) else {
        warn!(tag = strategy, "unknown strategy tag");
        return std::ptr::null_mut();
    };

    match Simulation::new(strategy) {
        Ok(sim) => Box::into_raw(Box::new(sim)),
        Err(err) => {
            warn!(%err, "simulation setup failed");
            std::ptr::null_mut()
        }
    }
}

/// Destroys a simulation and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `gol_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn gol_destroy(ptr: *mut Simulation) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the number of generations stepped since creation or the last seed.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_get_generation(ptr: *const Simulation) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_create_and_destroy() {
        unsafe {
            for tag in 0..3 {
                let sim = gol_create(tag);
                assert!(!sim.is_null());

                // Should not crash
                gol_destroy(sim);
            }
        }
    }

    #[test]
    fn test_unknown_strategy_is_null() {
        assert!(gol_create(3).is_null());
        assert!(gol_create(u8::MAX).is_null());
    }

    #[test]
    fn test_initial_generation() {
        unsafe {
            let sim = gol_create(2);
            assert_eq!(gol_get_generation(sim), 0);
            gol_destroy(sim);
        }
    }

    #[test]
    fn test_destroy_null() {
        unsafe {
            // Should not crash
            gol_destroy(ptr::null_mut());
        }
    }

    #[test]
    fn test_get_generation_null() {
        unsafe {
            assert_eq!(gol_get_generation(ptr::null()), 0);
        }
    }
}
