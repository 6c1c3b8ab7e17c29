//! Full-rank nibble matrix: generation, rank testing, vector mixing
//!
//! The matrix is a 64×64 grid of 4-bit values drawn from the seed
//! stream. A candidate grid is only accepted once its perturbed
//! floating-point copy has rank 64; rejected grids are refilled from
//! the same still-advancing stream. Generation and rank testing only
//! ever touch a 64×64 block, and the matrix is stored at exactly that
//! dimension.

use crate::nonlinear::complex_non_linear;
use crate::params::{MATRIX_DIM, NIBBLES_PER_WORD, RANK_EPSILON, SEED_SIZE};
use crate::xoshiro::XoShiRo256PlusPlus;

/// Double-precision working copy used for rank computation
pub type FloatMatrix = [[f64; MATRIX_DIM]; MATRIX_DIM];

/// 64×64 grid of nibble values, full rank under perturbation
#[derive(Clone)]
pub struct Matrix([[u16; MATRIX_DIM]; MATRIX_DIM]);

impl Matrix {
    /// Generate the next full-rank matrix from the seed stream.
    ///
    /// Rejection sampling: fill the whole grid with sixteen nibbles per
    /// drawn word, test the perturbed copy for full rank, refill on
    /// failure. The loop has no iteration bound: termination is
    /// probabilistic (rejection is already rare for one candidate), and
    /// capping it would change the matrix actually produced. Callers
    /// needing a wall-clock bound must time out externally and move on
    /// to a different preimage.
    pub fn generate(generator: &mut XoShiRo256PlusPlus) -> Self {
        let mut grid = [[0u16; MATRIX_DIM]; MATRIX_DIM];
        loop {
            for row in grid.iter_mut() {
                for chunk in row.chunks_mut(NIBBLES_PER_WORD) {
                    let word = generator.next_u64();
                    for (n, entry) in chunk.iter_mut().enumerate() {
                        *entry = ((word >> (4 * n)) & 0x0F) as u16;
                    }
                }
            }
            let candidate = Matrix(grid);
            if compute_rank(&mut candidate.perturbed()) == MATRIX_DIM {
                return candidate;
            }
        }
    }

    /// Entry grid, every value in `[0, 15]`.
    pub fn entries(&self) -> &[[u16; MATRIX_DIM]; MATRIX_DIM] {
        &self.0
    }

    /// Build the perturbed floating-point copy used for rank testing:
    /// `B[i][j] = A[i][j] + ComplexNonLinear(A[i][j])`.
    pub fn perturbed(&self) -> Box<FloatMatrix> {
        let mut b = Box::new([[0.0f64; MATRIX_DIM]; MATRIX_DIM]);
        for (src, dst) in self.0.iter().zip(b.iter_mut()) {
            for (entry, slot) in src.iter().zip(dst.iter_mut()) {
                let value = f64::from(*entry);
                *slot = value + complex_non_linear(value);
            }
        }
        b
    }

    /// Mix the matrix with a 32-byte seed digest into the intermediate
    /// buffer fed to the second outer-hash pass.
    ///
    /// The mixing vector holds the seed's nibbles (high nibble of byte
    /// k at index 2k). Each output row is the double-precision dot
    /// product of a matrix row with the nonlinearly transformed vector;
    /// adjacent row products fold to one byte via `fmod(·, 16)` and XOR
    /// against the corresponding seed byte.
    pub fn mix(&self, seed: &[u8; SEED_SIZE]) -> [u8; SEED_SIZE] {
        let mut vector = [0.0f64; MATRIX_DIM];
        for (i, byte) in seed.iter().enumerate() {
            vector[2 * i] = f64::from(byte >> 4);
            vector[2 * i + 1] = f64::from(byte & 0x0F);
        }

        // The transform of each vector entry is a pure function, so it
        // is hoisted out of the row loop without affecting the sums.
        let mut transformed = [0.0f64; MATRIX_DIM];
        for (value, slot) in vector.iter().zip(transformed.iter_mut()) {
            *slot = complex_non_linear(*value);
        }

        let mut product = [0.0f64; MATRIX_DIM];
        for (row, slot) in self.0.iter().zip(product.iter_mut()) {
            let mut sum = 0.0f64;
            for (entry, value) in row.iter().zip(transformed.iter()) {
                sum += f64::from(*entry) * value;
            }
            *slot = sum;
        }

        let mut result = [0u8; SEED_SIZE];
        for (i, out) in result.iter_mut().enumerate() {
            let high = (product[2 * i] % 16.0) as u8;
            let low = (product[2 * i + 1] % 16.0) as u8;
            *out = seed[i] ^ ((high << 4) | low);
        }
        result
    }
}

/// Count the pivots of a floating-point matrix, destroying it.
///
/// Column-major pivot search with forward-only elimination: for each
/// pivot column, the first unselected row with `|B[j][i]| > ε` is
/// normalized strictly right of the pivot, then subtracted from every
/// other row carrying weight in that column. Columns at or before the
/// pivot index are never re-zeroed in other rows; the asymmetry is
/// part of the consensus behavior and must stay.
pub fn compute_rank(b: &mut FloatMatrix) -> usize {
    let mut rank = 0;
    let mut row_selected = [false; MATRIX_DIM];
    for i in 0..MATRIX_DIM {
        let pivot = (0..MATRIX_DIM).find(|&j| !row_selected[j] && b[j][i].abs() > RANK_EPSILON);
        let Some(j) = pivot else {
            continue;
        };
        rank += 1;
        row_selected[j] = true;
        let lead = b[j][i];
        for p in i + 1..MATRIX_DIM {
            b[j][p] /= lead;
        }
        for k in 0..MATRIX_DIM {
            if k == j || b[k][i].abs() <= RANK_EPSILON {
                continue;
            }
            let factor = b[k][i];
            for p in i + 1..MATRIX_DIM {
                let pivot_value = b[j][p];
                b[k][p] -= pivot_value * factor;
            }
        }
    }
    rank
}
