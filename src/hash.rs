//! Small deterministic hashing for procedural variation.
//!
//! [`SmallXxHash`] is a trimmed-down xxHash32: it eats a short sequence of
//! small integers and finalizes into one well-mixed 32-bit word. The engine
//! uses it to give every part a reproducible pseudo-random identity (colour
//! selection, shape variation) that is stable across frames, runs and
//! platforms. All arithmetic is explicit wrapping `u32` math, so the output
//! is bit-identical everywhere.

use rayon::prelude::*;

const PRIME_B: u32 = 0b10000101111010111100101001110111;
const PRIME_C: u32 = 0b11000010101100101010111000111101;
const PRIME_D: u32 = 0b00100111110101001110101100101111;
const PRIME_E: u32 = 0b00010110010101100110011110110001;

/// Incremental 32-bit avalanche hash over small integer sequences.
///
/// The state is a single accumulator; [`eat`](Self::eat) folds one value in
/// and returns a new state, [`value`](Self::value) finalizes. Both are pure:
/// hashing the same seed and sequence twice yields the identical word.
///
/// ```
/// use frac_ngin::hash::SmallXxHash;
///
/// let a = SmallXxHash::seed(42).eat(3).eat(7).value();
/// let b = SmallXxHash::seed(42).eat(3).eat(7).value();
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SmallXxHash {
    accumulator: u32,
}

impl SmallXxHash {
    /// Start a new hash from an integer seed.
    pub fn seed(seed: i32) -> Self {
        Self {
            accumulator: (seed as u32).wrapping_add(PRIME_E),
        }
    }

    /// Fold one value into the hash, returning the new state.
    pub fn eat(self, data: i32) -> Self {
        let mixed = self
            .accumulator
            .wrapping_add((data as u32).wrapping_mul(PRIME_C));
        Self {
            accumulator: mixed.rotate_left(17).wrapping_mul(PRIME_D),
        }
    }

    /// Finalize into a well-mixed 32-bit word via the xxHash avalanche.
    pub fn value(self) -> u32 {
        let mut avalanche = self.accumulator;
        avalanche ^= avalanche >> 15;
        avalanche = avalanche.wrapping_mul(PRIME_B);
        avalanche ^= avalanche >> 13;
        avalanche = avalanche.wrapping_mul(PRIME_C);
        avalanche ^= avalanche >> 16;
        avalanche
    }
}

impl From<SmallXxHash> for u32 {
    fn from(hash: SmallXxHash) -> u32 {
        hash.value()
    }
}

/// Fill a `resolution * resolution` grid with one hash per cell,
/// `seed(seed).eat(u).eat(v)`, distributed across the rayon pool.
///
/// The result is a flat row-major `Vec<u32>` laid out for direct upload by a
/// render collaborator (e.g. as a storage buffer behind an instanced draw).
pub fn hash_grid(seed: i32, resolution: usize) -> Vec<u32> {
    (0..resolution * resolution)
        .into_par_iter()
        .map(|i| {
            let u = (i % resolution) as i32;
            let v = (i / resolution) as i32;
            SmallXxHash::seed(seed).eat(u).eat(v).value()
        })
        .collect()
}
