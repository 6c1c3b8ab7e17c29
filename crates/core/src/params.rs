//! Hoohash Algorithm Parameters
//!
//! Every constant here is consensus-critical: changing any of them
//! produces digests that no other network participant will reproduce.

/// Side length of the nibble matrix
pub const MATRIX_DIM: usize = 64;

/// 4-bit nibbles extracted from each drawn 64-bit word
pub const NIBBLES_PER_WORD: usize = 16;

/// Pivot tolerance for the floating-point rank computation
pub const RANK_EPSILON: f64 = 1e-9;

/// Seed digest size (output of the outer hash over the preimage)
pub const SEED_SIZE: usize = 32;

/// Final digest size
pub const DIGEST_SIZE: usize = 32;

/// Entries in the shared Rev2 lookup table (8 MB of u64 words)
pub const LOOKUP_TABLE_SIZE: usize = 1 << 20;

/// Data-dependent table lookups per time-memory-tradeoff pass
pub const TRADEOFF_LOOKUPS: usize = 1000;

/// u64 words in the memory-hard scratch buffer
pub const MEMORY_HARD_WORDS: usize = 1 << 10;

/// Full rewrite passes over the memory-hard scratch buffer
pub const MEMORY_HARD_PASSES: usize = 2;

/// Sequential modular squarings in the verifiable-delay function
pub const VDF_SQUARINGS: usize = 1000;

/// VDF field modulus: the secp256k1 prime, big-endian hex
pub const VDF_MODULUS_HEX: &[u8] =
    b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F";
