//! Tests for the Hoohash algorithm
//!
//! Recorded constants were derived with an independent implementation
//! of the same equations; the xoshiro words follow directly from the
//! update sequence and are the primary cross-implementation
//! interoperability check.

use crate::{
    LookupTable, MATRIX_DIM, Matrix, Tier, XoShiRo256PlusPlus, complex_non_linear, compute_rank,
    hash, hash_rev1, hash_rev2, meets_difficulty, memory_hard, verifiable_delay,
};

fn seed_of(preimage: &[u8]) -> [u8; 32] {
    *blake3::hash(preimage).as_bytes()
}

#[test]
fn test_xoshiro_reference_stream() {
    // Seed of all 0x01 bytes; first four draws recorded as hex.
    let mut generator = XoShiRo256PlusPlus::from_seed(&[0x01; 32]);
    let words: [u64; 4] = core::array::from_fn(|_| generator.next_u64());
    assert_eq!(
        words,
        [
            0x0202020202020202,
            0x8181818181818181,
            0x1010101010101010,
            0x5555555454553333,
        ]
    );
}

#[test]
fn test_hash_deterministic() {
    let input = b"test input data";
    let result = hash(input);
    assert_eq!(result.len(), 32);
    assert_eq!(result, hash(input));
}

#[test]
fn test_different_inputs_produce_different_digests() {
    assert_ne!(hash(b"input 1"), hash(b"input 2"));
}

#[test]
fn test_empty_input() {
    let result = hash(b"");
    assert_eq!(result, hash(b""));
}

#[test]
fn test_avalanche_effect() {
    // Changing one preimage bit should flip ~50% of digest bits.
    let input1 = b"test input";
    let mut input2 = input1.to_vec();
    input2[0] ^= 1;

    let digest1 = hash(input1);
    let digest2 = hash(&input2);

    let mut diff_bits = 0;
    for i in 0..32 {
        diff_bits += (digest1[i] ^ digest2[i]).count_ones();
    }

    // Expect roughly 128 of 256 bits; allow 35%-65%.
    assert!(
        (90..=166).contains(&diff_bits),
        "avalanche effect: {} bits differ (expected ~128)",
        diff_bits
    );
}

#[test]
fn test_generated_matrix_is_full_rank_with_nibble_entries() {
    for tag in 0u8..4 {
        let mut preimage = b"matrix-seed-".to_vec();
        preimage.push(tag);
        let seed = seed_of(&preimage);
        let mut generator = XoShiRo256PlusPlus::from_seed(&seed);
        let matrix = Matrix::generate(&mut generator);

        for row in matrix.entries() {
            for entry in row {
                assert!(*entry <= 15, "matrix entry {} outside nibble range", entry);
            }
        }
        assert_eq!(compute_rank(&mut matrix.perturbed()), MATRIX_DIM);
    }
}

#[test]
fn test_rank_of_zero_matrix() {
    let mut zero = [[0.0f64; MATRIX_DIM]; MATRIX_DIM];
    assert_eq!(compute_rank(&mut zero), 0);
}

#[test]
fn test_rank_of_scaled_identity() {
    let mut b = [[0.0f64; MATRIX_DIM]; MATRIX_DIM];
    for (i, row) in b.iter_mut().enumerate() {
        row[i] = 16.0;
    }
    assert_eq!(compute_rank(&mut b), MATRIX_DIM);
}

#[test]
fn test_nonlinear_singularity_guard() {
    use std::f64::consts::{FRAC_PI_2, PI};

    assert_eq!(Tier::Intermediate.apply(FRAC_PI_2), 0.0);
    assert_eq!(Tier::Intermediate.apply(3.0 * PI / 2.0), 0.0);

    // The dispatcher stays finite at the singularity points too.
    assert!(complex_non_linear(FRAC_PI_2).is_finite());
    assert!(complex_non_linear(3.0 * PI / 2.0).is_finite());
}

#[test]
fn test_nonlinear_finite_over_nibble_domain() {
    // All internal call sites pass values in [0, 16); sweep that domain
    // on an exact binary grid plus the integer nibbles themselves.
    for step in 0..256 {
        let x = step as f64 * 0.0625;
        let y = complex_non_linear(x);
        assert!(y.is_finite(), "ComplexNonLinear({}) = {}", x, y);
    }
    for nibble in 0u16..16 {
        assert!(complex_non_linear(f64::from(nibble)).is_finite());
    }
}

#[test]
fn test_tier_selection() {
    assert_eq!(Tier::for_value(0.0), Tier::Medium);
    assert_eq!(Tier::for_value(0.999), Tier::Medium);
    assert_eq!(Tier::for_value(1.0), Tier::Intermediate);
    assert_eq!(Tier::for_value(9.999), Tier::Intermediate);
    assert_eq!(Tier::for_value(10.0), Tier::High);
    assert_eq!(Tier::for_value(15.0), Tier::High);
}

#[test]
fn test_rev1_reference_vector() {
    // End-to-end scenario: preimage "test-data" through the full Rev1
    // pipeline, checked against the recorded reference digest.
    let preimage = b"test-data";
    let seed = seed_of(preimage);
    assert_eq!(
        hex::encode(seed),
        "7088679e50cc86a597963e71b1771824ad6c37983b5eb80e6fe88e0264c65e55"
    );

    // The intermediate mixed bytes, before the second outer-hash pass.
    let mut generator = XoShiRo256PlusPlus::from_seed(&seed);
    let matrix = Matrix::generate(&mut generator);
    assert_eq!(
        hex::encode(matrix.mix(&seed)),
        "725a5410db38c3b16387e9e9e33b2c68859ada8616b9ac6edcc97a3cb8407476"
    );

    assert_eq!(
        hex::encode(hash_rev1(preimage)),
        "f78597e2be22c49ca529ba66c19c0a98b4a77a14df3df4df1bbba69332358728"
    );

    // Second preimage for coverage of a different seed stream.
    assert_eq!(
        hex::encode(hash_rev1(b"BenchmarkMatrix_HeavyHash")),
        "252f32724729cc10b3295e1f355d261730ae1ffb45290d77405c7d8262dc10e7"
    );
}

#[test]
fn test_memory_hard_reference_vector() {
    let seed = seed_of(b"test-data");
    let hard = memory_hard(&seed);
    // The scratch dynamics converge for this seed; the 8-byte pattern
    // repeating across the result is expected, not a serialization bug.
    assert_eq!(hex::encode(&hard[..8]), "8060a620677e103b");
    assert_eq!(
        hex::encode(hard),
        "8060a620677e103b8060a620677e103b8060a620677e103b8060a620677e103b\
         8060a620677e103b8060a620677e103b8060a620677e103b8060a620677e103b"
    );
}

#[test]
fn test_verifiable_delay_reference_vector() {
    let seed = seed_of(b"test-data");
    let hard = memory_hard(&seed);
    assert_eq!(
        hex::encode(verifiable_delay(&hard)),
        "0d2e0c6e4a2bc51270e318db02ec9c8c95a21fa9147bbb5129ae005441f8f973"
    );
}

#[test]
fn test_lookup_table_and_rev2_reference_vectors() {
    // Table construction is the expensive part; every table-dependent
    // assertion shares one instance.
    let table = LookupTable::generate();

    let seed = seed_of(b"test-data");
    let hard = memory_hard(&seed);
    let input = u64::from_be_bytes(hard[..8].try_into().unwrap());
    assert_eq!(table.time_memory_tradeoff(input), 0x3bc5c1c95fdbf3b0);

    assert_eq!(
        hex::encode(hash_rev2(b"test-data", &table)),
        "5b83cd77880d2360eb89e9fc9ee6127495c27f231cc0a069df3fe9fcb965f926"
    );

    // Rev2 must be deterministic and distinct from Rev1.
    assert_eq!(
        hash_rev2(b"test-data", &table),
        hash_rev2(b"test-data", &table)
    );
    assert_ne!(hash_rev2(b"test-data", &table), hash_rev1(b"test-data"));
}

#[test]
fn test_difficulty_check() {
    let mut digest = [0xFFu8; 32];
    digest[0] = 0x00;
    assert!(meets_difficulty(&digest, 8));
    assert!(!meets_difficulty(&digest, 9));

    digest[1] = 0x00;
    assert!(meets_difficulty(&digest, 16));
    assert!(!meets_difficulty(&digest, 17));

    digest = [0xFFu8; 32];
    digest[0] = 0x0F;
    assert!(meets_difficulty(&digest, 4));
    assert!(!meets_difficulty(&digest, 5));

    assert!(meets_difficulty(&[0u8; 32], 256));
}
