//! Hoohash Library Facade
//!
//! Re-exports the core proof-of-work transform for embedders. Miners
//! call [`hash`] (or [`hash_rev1`] / [`hash_rev2`] explicitly) on
//! serialized header bytes with an embedded nonce and compare the
//! digest against their difficulty target; validators recompute the
//! same digest once per candidate block.
//!
//! # Example
//!
//! ```rust
//! use hoohash::{hash, meets_difficulty};
//!
//! let digest = hash(b"header bytes with nonce");
//! if meets_difficulty(&digest, 16) {
//!     println!("candidate meets 16 leading zero bits");
//! }
//! ```

// Re-export the core algorithm
pub use hoohash_core as algorithm;

// Convenience re-exports
pub use algorithm::{LookupTable, hash, hash_rev1, hash_rev2, meets_difficulty};
