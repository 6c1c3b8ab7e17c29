//! Rev2 hardening stages: lookup table, memory-hard pass, delay function
//!
//! These run between seed derivation and matrix mixing in the Rev2
//! pipeline. The lookup table is the only state in the whole algorithm
//! that outlives a hash evaluation: an owned, read-only value built
//! once at startup and passed by reference, safe for unsynchronized
//! concurrent reads.

use blake2::{Blake2b512, Digest as _};
use num_bigint::BigUint;
use sha2::Sha256;

use crate::params::{
    LOOKUP_TABLE_SIZE, MEMORY_HARD_PASSES, MEMORY_HARD_WORDS, SEED_SIZE, TRADEOFF_LOOKUPS,
    VDF_MODULUS_HEX, VDF_SQUARINGS,
};

/// Shared time-memory-tradeoff table (2^20 u64 words)
pub struct LookupTable {
    table: Vec<u64>,
}

impl LookupTable {
    /// Build the table deterministically: entry `i` is the big-endian
    /// first 8 bytes of SHA-256 over a zeroed 32-byte buffer whose
    /// leading 4 bytes hold `i` big-endian.
    pub fn generate() -> Self {
        let mut table = vec![0u64; LOOKUP_TABLE_SIZE];
        let mut seed = [0u8; SEED_SIZE];
        for (i, slot) in table.iter_mut().enumerate() {
            seed[..4].copy_from_slice(&(i as u32).to_be_bytes());
            let digest = Sha256::digest(seed);
            *slot = u64::from_be_bytes(digest[..8].try_into().unwrap());
        }
        Self { table }
    }

    /// Chase 1000 data-dependent lookups through the table, rotating
    /// the accumulator left by one bit between lookups.
    pub fn time_memory_tradeoff(&self, input: u64) -> u64 {
        let mut result = input;
        for _ in 0..TRADEOFF_LOOKUPS {
            let index = (result % LOOKUP_TABLE_SIZE as u64) as usize;
            result ^= self.table[index];
            result = result.rotate_left(1);
        }
        result
    }
}

/// Memory-hard expansion of the seed digest.
///
/// A 1024-word scratch buffer is filled from the first 8 seed bytes
/// (little-endian), then rewritten in place twice: each word becomes
/// the leading 8 bytes of BLAKE2b-512 over two data-dependently
/// addressed words. The first 8 words serialize into the 64-byte
/// result.
pub fn memory_hard(input: &[u8; SEED_SIZE]) -> [u8; 64] {
    let init = u64::from_le_bytes(input[..8].try_into().unwrap());
    let mut memory = vec![init; MEMORY_HARD_WORDS];

    for _ in 0..MEMORY_HARD_PASSES {
        for j in 0..MEMORY_HARD_WORDS {
            let index1 = (memory[j] % MEMORY_HARD_WORDS as u64) as usize;
            let index2 = ((memory[j] >> 32) % MEMORY_HARD_WORDS as u64) as usize;

            let mut hasher = Blake2b512::new();
            hasher.update(memory[index1].to_le_bytes());
            hasher.update(memory[index2].to_le_bytes());
            let digest = hasher.finalize();

            memory[j] = u64::from_le_bytes(digest[..8].try_into().unwrap());
        }
    }

    let mut result = [0u8; 64];
    for (word, chunk) in memory.iter().take(8).zip(result.chunks_exact_mut(8)) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    result
}

/// Verifiable-delay function: 1000 sequential squarings over the
/// secp256k1 field, finalized with SHA-256 of the residue's minimal
/// big-endian bytes (empty for a zero residue).
pub fn verifiable_delay(input: &[u8]) -> [u8; SEED_SIZE] {
    let modulus = BigUint::parse_bytes(VDF_MODULUS_HEX, 16).unwrap();
    let mut x = BigUint::from_bytes_be(input);
    for _ in 0..VDF_SQUARINGS {
        x = &x * &x % &modulus;
    }
    // A zero residue encodes to no bytes at all, not a single zero byte.
    let bytes = if x.bits() == 0 { Vec::new() } else { x.to_bytes_be() };
    Sha256::digest(&bytes).into()
}
