//! Cell state and its presentation colour.

/// ARGB colour a host should draw for a live cell (opaque black).
pub const LIVE_ARGB: u32 = 0xFF00_0000;

/// ARGB colour a host should draw for a dead cell (opaque white).
pub const DEAD_ARGB: u32 = 0xFFFF_FFFF;

/// A single cell. Stored in grids as one byte: 0 = dead, 1 = alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Live = 1,
}

impl Cell {
    /// Decode a stored byte. Any non-zero value counts as alive.
    #[inline]
    pub fn from_byte(byte: u8) -> Self {
        if byte == 0 {
            Cell::Dead
        } else {
            Cell::Live
        }
    }

    /// Decode a seed byte: only bit 0 decides liveness.
    #[inline]
    pub fn from_seed_bit(byte: u8) -> Self {
        Cell::from_byte(byte & 1)
    }

    #[inline]
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn is_live(self) -> bool {
        self == Cell::Live
    }

    /// Pure mapping to the 32-bit ARGB colour used by presentation hosts.
    #[inline]
    pub fn argb(self) -> u32 {
        match self {
            Cell::Live => LIVE_ARGB,
            Cell::Dead => DEAD_ARGB,
        }
    }

    /// Inverse of [`Cell::argb`]. Anything other than the live colour is dead.
    #[inline]
    pub fn from_argb(pixel: u32) -> Self {
        if pixel == LIVE_ARGB {
            Cell::Live
        } else {
            Cell::Dead
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Live
        } else {
            Cell::Dead
        }
    }
}
