//! Binary linear codes and the (2,2)-Generalized Bicycle code of a triplet.

use crate::arith::gcd;
use crate::enumerate::Triplet;
use serde::{Deserialize, Serialize};

/// Dense matrix over GF(2), row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<u8>>,
}

impl BinaryMatrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        BinaryMatrix {
            rows,
            cols,
            data: vec![vec![0; cols]; rows],
        }
    }

    /// Builds from rows; every entry is reduced mod 2.
    pub fn from_rows(data: Vec<Vec<u8>>) -> Self {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        let data = data
            .into_iter()
            .map(|row| {
                debug_assert_eq!(row.len(), cols, "ragged rows");
                row.into_iter().map(|x| x & 1).collect()
            })
            .collect();
        BinaryMatrix { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, r: usize, c: usize) -> u8 {
        self.data[r][c]
    }

    pub fn set(&mut self, r: usize, c: usize, value: u8) {
        self.data[r][c] = value & 1;
    }

    pub fn flip(&mut self, r: usize, c: usize) {
        self.data[r][c] ^= 1;
    }

    pub fn row(&self, r: usize) -> &[u8] {
        &self.data[r]
    }

    /// Rank over GF(2) by Gaussian elimination.
    pub fn rank(&self) -> usize {
        let mut m = self.data.clone();
        let mut rank = 0;
        for c in 0..self.cols {
            let Some(pivot) = (rank..self.rows).find(|&r| m[r][c] == 1) else {
                continue;
            };
            m.swap(rank, pivot);
            let pivot_row = m[rank].clone();
            for (r, row) in m.iter_mut().enumerate() {
                if r != rank && row[c] == 1 {
                    for k in c..self.cols {
                        row[k] ^= pivot_row[k];
                    }
                }
            }
            rank += 1;
            if rank == self.rows {
                break;
            }
        }
        rank
    }
}

/// Binary linear code spanned by the rows of a generator matrix.
#[derive(Debug, Clone)]
pub struct LinearCode {
    generator: BinaryMatrix,
    dimension: usize,
}

impl LinearCode {
    pub fn from_generator(generator: BinaryMatrix) -> Self {
        let dimension = generator.rank();
        LinearCode {
            generator,
            dimension,
        }
    }

    pub fn length(&self) -> usize {
        self.generator.cols()
    }

    /// Rank of the generator; rows need not be independent.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn generator(&self) -> &BinaryMatrix {
        &self.generator
    }
}

/// GB code with `A = 1 + X^a`, `B = 1 + X^b` circulant over Z/nZ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GbCode {
    pub n: usize,
    pub a: usize,
    pub b: usize,
}

impl From<Triplet> for GbCode {
    fn from(t: Triplet) -> Self {
        GbCode { n: t.n, a: t.a, b: t.b }
    }
}

impl GbCode {
    pub fn physical_qubits(&self) -> usize {
        2 * self.n
    }

    /// `k = 2 deg gcd(1+x^a, 1+x^b, 1+x^n) = 2 gcd(a, b, n)`.
    pub fn logical_qubits(&self) -> usize {
        2 * gcd(gcd(self.a, self.b), self.n)
    }

    /// Circulant of `1 + X^shift`; entries cancel when `shift ≡ 0`.
    pub fn circulant(n: usize, shift: usize) -> BinaryMatrix {
        let mut m = BinaryMatrix::zeros(n, n);
        for i in 0..n {
            m.flip(i, i);
            m.flip(i, (i + shift) % n);
        }
        m
    }

    /// `H_X = [A | B]`.
    pub fn check_matrix(&self) -> BinaryMatrix {
        let a = Self::circulant(self.n, self.a);
        let b = Self::circulant(self.n, self.b);
        let rows = (0..self.n)
            .map(|r| a.row(r).iter().chain(b.row(r)).copied().collect())
            .collect();
        BinaryMatrix::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_over_gf2() {
        let m = BinaryMatrix::from_rows(vec![vec![1, 1, 0], vec![0, 1, 1], vec![1, 0, 1]]);
        // third row is the sum of the first two
        assert_eq!(m.rank(), 2);
        assert_eq!(BinaryMatrix::zeros(3, 4).rank(), 0);
        let id = BinaryMatrix::from_rows(vec![vec![1, 0], vec![0, 3]]);
        assert_eq!(id.rank(), 2);
    }

    #[test]
    fn repetition_code() {
        let generator = BinaryMatrix::from_rows(vec![vec![1; 5], vec![1; 5]]);
        let code = LinearCode::from_generator(generator.clone());
        assert_eq!(code.length(), 5);
        assert_eq!(code.dimension(), 1);
        // dependent rows are kept as given
        assert_eq!(code.generator(), &generator);
        assert_eq!(code.generator().rows(), 2);
    }

    #[test]
    fn zero_shift_circulant_vanishes() {
        assert_eq!(GbCode::circulant(4, 0), BinaryMatrix::zeros(4, 4));
        assert_eq!(GbCode::circulant(4, 1).rank(), 3);
    }

    #[test]
    fn logical_qubits_match_check_matrix_rank() {
        for n in 3..20 {
            for a in 1..n {
                for b in a + 1..n {
                    let code = GbCode { n, a, b };
                    let rank = code.check_matrix().rank();
                    assert_eq!(code.logical_qubits(), 2 * (n - rank), "n={n} a={a} b={b}");
                }
            }
        }
    }

    #[test]
    fn known_parameters() {
        let code = GbCode { n: 12, a: 4, b: 8 };
        assert_eq!(code.physical_qubits(), 24);
        assert_eq!(code.logical_qubits(), 8);
        assert_eq!(GbCode::from(Triplet { n: 7, a: 1, b: 3 }).logical_qubits(), 2);
    }
}
