//! Pixel export for presentation hosts.

use super::Simulation;
use crate::automaton::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::render;

/// Writes the committed generation as 640×480 row-major ARGB pixels
/// (live = `0xFF000000`, dead = `0xFFFFFFFF`).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
/// - `out_buf` must point to at least `len` writable `u32` values, or be null
///
/// # Returns
/// Number of pixels written, or 0 on error (null pointer or `len` too small).
#[no_mangle]
pub unsafe extern "C" fn gol_render_argb(
    ptr: *const Simulation,
    out_buf: *mut u32,
    len: u64,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let pixels = std::slice::from_raw_parts_mut(out_buf, len as usize);
    match render::write_argb((*ptr).grid(), pixels) {
        Ok(()) => (SCREEN_WIDTH * SCREEN_HEIGHT) as u64,
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{DEAD_ARGB, LIVE_ARGB};
    use crate::ffi::{gol_create, gol_destroy, gol_set_cell};
    use std::ptr;

    #[test]
    fn test_render_blank_and_one_cell() {
        unsafe {
            let sim = gol_create(2);
            gol_set_cell(sim, 1, 0, 1);

            let mut pixels = vec![0u32; SCREEN_WIDTH * SCREEN_HEIGHT];
            let written = gol_render_argb(sim, pixels.as_mut_ptr(), pixels.len() as u64);
            assert_eq!(written, 307_200);
            assert_eq!(pixels[0], DEAD_ARGB);
            assert_eq!(pixels[1], LIVE_ARGB);
            assert!(pixels[2..].iter().all(|&p| p == DEAD_ARGB));

            gol_destroy(sim);
        }
    }

    #[test]
    fn test_render_rejects_short_buffer() {
        unsafe {
            let sim = gol_create(2);
            let mut pixels = vec![0u32; 100];
            assert_eq!(gol_render_argb(sim, pixels.as_mut_ptr(), 100), 0);
            assert!(pixels.iter().all(|&p| p == 0));
            gol_destroy(sim);
        }
    }

    #[test]
    fn test_render_null_checks() {
        unsafe {
            let sim = gol_create(2);
            let mut pixels = vec![0u32; 4];
            assert_eq!(gol_render_argb(ptr::null(), pixels.as_mut_ptr(), 4), 0);
            assert_eq!(gol_render_argb(sim, ptr::null_mut(), 4), 0);
            gol_destroy(sim);
        }
    }
}
