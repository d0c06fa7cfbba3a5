//! Lane-batched byte arithmetic for the vectorized separable pass.
//!
//! Cells and neighbor counts are both stored one per byte, and neither ever
//! exceeds 8, so eight of them can be packed into a `u64` and added or
//! compared in a single word operation without carries crossing byte lanes.
//! Any tail shorter than a full lane word falls through to a scalar loop
//! computing exactly the same thing.

use super::rule::next_byte;

/// Cells processed per lane word.
pub const LANES: usize = 8;

const ONES: u64 = 0x0101_0101_0101_0101;
const LOW7: u64 = 0x7F7F_7F7F_7F7F_7F7F;
const HIGH: u64 = 0x8080_8080_8080_8080;

#[inline(always)]
fn load(bytes: &[u8]) -> u64 {
    let mut word = [0u8; LANES];
    word.copy_from_slice(bytes);
    u64::from_ne_bytes(word)
}

#[inline(always)]
fn store(bytes: &mut [u8], value: u64) {
    bytes.copy_from_slice(&value.to_ne_bytes());
}

/// 0x01 in every byte lane of `x` that is zero, 0x00 elsewhere.
#[inline(always)]
fn zero_lanes(x: u64) -> u64 {
    // Bit 7 of each lane ends up set iff that lane is non-zero
    let nonzero = ((x & LOW7).wrapping_add(LOW7) | x) & HIGH;
    (!nonzero & HIGH) >> 7
}

/// `dst[i] += src[i]` for every lane. Both slices must be the same length.
pub fn add_assign(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len());

    let mut dst_words = dst.chunks_exact_mut(LANES);
    let mut src_words = src.chunks_exact(LANES);
    for (d, s) in (&mut dst_words).zip(&mut src_words) {
        store(d, load(d).wrapping_add(load(s)));
    }

    for (d, &s) in dst_words
        .into_remainder()
        .iter_mut()
        .zip(src_words.remainder())
    {
        *d += s;
    }
}

/// Apply the transition rule to every cell in place from its finalized count.
pub fn commit(cells: &mut [u8], counts: &[u8]) {
    debug_assert_eq!(cells.len(), counts.len());

    let mut cell_words = cells.chunks_exact_mut(LANES);
    let mut count_words = counts.chunks_exact(LANES);
    for (c, n) in (&mut cell_words).zip(&mut count_words) {
        let n = load(n);
        let is_three = zero_lanes(n ^ (ONES * 3));
        let is_two = zero_lanes(n ^ (ONES * 2));
        store(c, is_three | (load(c) & is_two));
    }

    for (c, &n) in cell_words
        .into_remainder()
        .iter_mut()
        .zip(count_words.remainder())
    {
        *c = next_byte(*c, n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_lanes() {
        let x = u64::from_ne_bytes([0, 1, 2, 0, 0x80, 0xFF, 0, 3]);
        let z = zero_lanes(x).to_ne_bytes();
        assert_eq!(z, [1, 0, 0, 1, 0, 0, 1, 0]);
    }

    #[test]
    fn test_add_assign_matches_scalar_with_tail() {
        // 19 bytes: two full lane words plus a 3-byte tail
        let src: Vec<u8> = (0..19).map(|i| (i % 3 == 0) as u8).collect();
        let mut dst: Vec<u8> = (0..19).map(|i| (i % 8) as u8 / 2).collect();
        let mut expected = dst.clone();
        for (d, s) in expected.iter_mut().zip(&src) {
            *d += *s;
        }

        add_assign(&mut dst, &src);
        assert_eq!(dst, expected);
    }

    #[test]
    fn test_commit_matches_rule_for_every_count() {
        // Every (cell, count) pair for counts 0..=15, laid out to cross lane boundaries
        let mut cells = Vec::new();
        let mut counts = Vec::new();
        for count in 0..16u8 {
            for cell in [0u8, 1] {
                cells.push(cell);
                counts.push(count);
            }
        }
        cells.push(1);
        counts.push(2);

        let expected: Vec<u8> = cells
            .iter()
            .zip(&counts)
            .map(|(&c, &n)| next_byte(c, n))
            .collect();

        commit(&mut cells, &counts);
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_commit_large_counts_are_dead() {
        let mut cells = vec![1u8; LANES];
        let counts = [0x83, 0x82, 0xFF, 0x10, 0x12, 0x13, 9, 3];
        commit(&mut cells, &counts);
        assert_eq!(cells, [0, 0, 0, 0, 0, 0, 0, 1]);
    }
}
