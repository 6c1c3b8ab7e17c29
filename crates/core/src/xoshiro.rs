//! Deterministic pseudo-random stream behind matrix generation
//!
//! xoshiro256++ seeded directly from the 32-byte seed digest. The
//! update sequence below is consensus-critical: any deviation in the
//! rotate/shift/xor order produces a non-interoperable proof of work.
//!
//! The stream is an explicit value threaded through the generation
//! loop by mutable reference. One instance persists across every
//! matrix-regeneration attempt within a hash evaluation; it is never
//! re-seeded mid-evaluation, so each retry depends on all prior draws.

use crate::params::SEED_SIZE;

/// xoshiro256++ state: four 64-bit words
#[derive(Clone, Debug)]
pub struct XoShiRo256PlusPlus {
    s0: u64,
    s1: u64,
    s2: u64,
    s3: u64,
}

impl XoShiRo256PlusPlus {
    /// Seed the stream from a seed digest, little-endian, 8 bytes per word.
    pub fn from_seed(seed: &[u8; SEED_SIZE]) -> Self {
        Self {
            s0: u64::from_le_bytes(seed[0..8].try_into().unwrap()),
            s1: u64::from_le_bytes(seed[8..16].try_into().unwrap()),
            s2: u64::from_le_bytes(seed[16..24].try_into().unwrap()),
            s3: u64::from_le_bytes(seed[24..32].try_into().unwrap()),
        }
    }

    /// Draw the next 64-bit word and advance the state.
    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        let res = self
            .s0
            .wrapping_add(self.s3)
            .rotate_left(23)
            .wrapping_add(self.s0);
        let t = self.s1 << 17;

        self.s2 ^= self.s0;
        self.s3 ^= self.s1;
        self.s1 ^= self.s2;
        self.s0 ^= self.s3;

        self.s2 ^= t;
        self.s3 = self.s3.rotate_left(45);
        res
    }
}
