//! Hoohash pipeline orchestration
//!
//! Both revisions wrap the matrix stage in exactly two passes through
//! the outer hash: one to derive the seed digest from the preimage,
//! one to finalize the mixed intermediate into the returned digest.
//! No state survives between invocations; each call is self-contained
//! and reentrant, so evaluations for different nonces are
//! embarrassingly parallel.

use blake3::Hasher as Blake3;

use crate::matrix::Matrix;
use crate::memhard::{LookupTable, memory_hard, verifiable_delay};
use crate::params::DIGEST_SIZE;
use crate::xoshiro::XoShiRo256PlusPlus;

/// One pass through the outer hash primitive (BLAKE3-256).
fn outer_hash(data: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut hasher = Blake3::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the Hoohash digest of a preimage.
///
/// Delegates to [`hash_rev1`]. Deployments must confirm which revision
/// the live network enforces before relying on this default.
pub fn hash(preimage: &[u8]) -> [u8; DIGEST_SIZE] {
    hash_rev1(preimage)
}

/// Rev1: the pure matrix/hash construction.
///
/// `digest = B3(mix(generate(B3(preimage)), B3(preimage)))`
pub fn hash_rev1(preimage: &[u8]) -> [u8; DIGEST_SIZE] {
    let seed = outer_hash(preimage);
    let mut generator = XoShiRo256PlusPlus::from_seed(&seed);
    let matrix = Matrix::generate(&mut generator);
    let mixed = matrix.mix(&seed);
    outer_hash(&mixed)
}

/// Rev2: memory-hard and delay stages ahead of the matrix mixing.
///
/// The memory-hard result (64 B), VDF digest (32 B) and low tradeoff
/// byte are concatenated, and the first 32 bytes of that buffer stand
/// in for the seed on the mixer side. Only the memory-hard prefix
/// reaches the digest; the remaining stages contribute wall-clock cost
/// alone. The truncation is consensus-visible and must not be repaired.
///
/// The caller owns the lookup table; it must be fully built before any
/// concurrent Rev2 evaluation borrows it.
pub fn hash_rev2(preimage: &[u8], table: &LookupTable) -> [u8; DIGEST_SIZE] {
    let seed = outer_hash(preimage);

    let hard = memory_hard(&seed);
    let tradeoff = table.time_memory_tradeoff(u64::from_be_bytes(hard[..8].try_into().unwrap()));
    let delay = verifiable_delay(&hard);

    let mut combined = Vec::with_capacity(hard.len() + delay.len() + 1);
    combined.extend_from_slice(&hard);
    combined.extend_from_slice(&delay);
    combined.push(tradeoff as u8);
    let mix_seed: [u8; DIGEST_SIZE] = combined[..DIGEST_SIZE].try_into().unwrap();

    let mut generator = XoShiRo256PlusPlus::from_seed(&seed);
    let matrix = Matrix::generate(&mut generator);
    let mixed = matrix.mix(&mix_seed);
    outer_hash(&mixed)
}

/// Check whether a digest meets a difficulty given as leading zero
/// bits. Target *encoding* semantics live with the caller; this is the
/// plain bit-count convenience used by the bench loop and tests.
#[inline(always)]
pub fn meets_difficulty(digest: &[u8; DIGEST_SIZE], difficulty: u32) -> bool {
    let mut zero_bits = 0u32;
    for byte in digest.iter() {
        if *byte == 0 {
            zero_bits += 8;
        } else {
            zero_bits += byte.leading_zeros();
            break;
        }
    }
    zero_bits >= difficulty
}
