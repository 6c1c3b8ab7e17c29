//! # Hoohash Core Algorithm
//!
//! The proof-of-work hash transform of the Hoohash family: a
//! deterministic map from an arbitrary byte preimage (serialized block
//! header plus nonce) to a 32-byte digest, evaluated at high rates by
//! miners and once per candidate block by validators.
//!
//! ## Pipeline
//!
//! ```text
//! preimage ──B3──> seed ──xoshiro256++──> 64×64 nibble matrix
//!                   │                        │ (regenerate until the
//!                   │                        │  perturbed copy has rank 64)
//!                   └────── nibble vector ───┤
//!                                            ▼
//!                              nonlinear matrix-vector mix
//!                                            │
//!                               intermediate ──B3──> digest
//! ```
//!
//! Two revisions share this machinery: Rev1 is the pure matrix/hash
//! construction above; Rev2 inserts a memory-hard function, a
//! time-memory-tradeoff walk over a shared lookup table and a
//! verifiable-delay function between seed derivation and mixing.
//!
//! Every arithmetic step is consensus-critical and must reproduce
//! bit-for-bit across implementations, including the floating-point
//! rank test and nonlinear transforms. The exact operation sequence is
//! specified; cross-platform rounding of the transcendental functions
//! follows the platform libm, a constraint inherited from the
//! reference design.
//!
//! ## Example
//!
//! ```rust
//! use hoohash_core::{hash, meets_difficulty};
//!
//! let digest = hash(b"serialized header and nonce");
//! if meets_difficulty(&digest, 16) {
//!     println!("found a block candidate");
//! }
//! ```

mod hoohash;
mod matrix;
mod memhard;
mod nonlinear;
mod params;
mod xoshiro;

pub use hoohash::{hash, hash_rev1, hash_rev2, meets_difficulty};
pub use matrix::{FloatMatrix, Matrix, compute_rank};
pub use memhard::{LookupTable, memory_hard, verifiable_delay};
pub use nonlinear::{Tier, complex_non_linear};
pub use params::*;
pub use xoshiro::XoShiRo256PlusPlus;

#[cfg(test)]
mod tests;
