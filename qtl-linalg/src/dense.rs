#![allow(clippy::needless_range_loop)]
//! Dense matrix operations backed by faer.
//!
//! Wraps faer's column-major `Mat<f64>` with the handful of operations
//! residualization needs: row/column means, centering, column selection,
//! and matrix products. Data matrices are laid out features x samples,
//! covariate matrices samples x covariates.

use faer::Mat;
use serde::{Deserialize, Serialize};

use crate::decomposition::LinalgError;

/// Axis along which a reduction runs, numbered as in array libraries.
///
/// `Down` (axis 0) runs down each column, so every column is reduced
/// independently. `Across` (axis 1) runs across each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Down,
    Across,
}

impl Axis {
    /// Map a numeric axis (0 or 1) to an `Axis`.
    pub fn from_index(axis: usize) -> Option<Self> {
        match axis {
            0 => Some(Axis::Down),
            1 => Some(Axis::Across),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Axis::Down => 0,
            Axis::Across => 1,
        }
    }
}

/// A dense matrix wrapper around faer's `Mat<f64>`.
#[derive(Debug, Clone)]
pub struct DenseMatrix {
    inner: Mat<f64>,
}

impl DenseMatrix {
    /// Create a new dense matrix filled with zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            inner: Mat::zeros(nrows, ncols),
        }
    }

    /// Create a dense matrix from a flat vec (column-major order).
    pub fn from_col_major(nrows: usize, ncols: usize, data: &[f64]) -> Result<Self, LinalgError> {
        if data.len() != nrows * ncols {
            return Err(LinalgError::DimensionMismatch {
                expected: nrows * ncols,
                got: data.len(),
            });
        }
        let inner = Mat::from_fn(nrows, ncols, |i, j| data[j * nrows + i]);
        Ok(Self { inner })
    }

    /// Create a dense matrix from a flat slice (row-major order).
    pub fn from_row_major(nrows: usize, ncols: usize, data: &[f64]) -> Result<Self, LinalgError> {
        if data.len() != nrows * ncols {
            return Err(LinalgError::DimensionMismatch {
                expected: nrows * ncols,
                got: data.len(),
            });
        }
        let inner = Mat::from_fn(nrows, ncols, |i, j| data[i * ncols + j]);
        Ok(Self { inner })
    }

    /// Create a dense matrix from a list of equally long rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, LinalgError> {
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        for (i, r) in rows.iter().enumerate() {
            let got = r.as_ref().len();
            if got != ncols {
                return Err(LinalgError::RaggedRows {
                    row: i,
                    expected: ncols,
                    got,
                });
            }
        }
        let inner = Mat::from_fn(rows.len(), ncols, |i, j| rows[i].as_ref()[j]);
        Ok(Self { inner })
    }

    /// Create a single-row matrix from a slice.
    pub fn row_vector(data: &[f64]) -> Self {
        Self {
            inner: Mat::from_fn(1, data.len(), |_, j| data[j]),
        }
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.inner.nrows()
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.inner.ncols()
    }

    /// Get element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.inner.read(row, col)
    }

    /// Get a reference to the underlying faer matrix.
    pub fn as_faer(&self) -> &Mat<f64> {
        &self.inner
    }

    /// Create from a faer matrix.
    pub fn from_faer(mat: Mat<f64>) -> Self {
        Self { inner: mat }
    }

    /// Matrix-matrix product: self * other.
    ///
    /// An empty inner dimension yields a zero matrix of the outer shape.
    pub fn mat_mul(&self, other: &DenseMatrix) -> Result<DenseMatrix, LinalgError> {
        if self.ncols() != other.nrows() {
            return Err(LinalgError::DimensionMismatch {
                expected: self.ncols(),
                got: other.nrows(),
            });
        }
        if self.ncols() == 0 {
            return Ok(DenseMatrix::zeros(self.nrows(), other.ncols()));
        }
        let inner = &self.inner * &other.inner;
        Ok(DenseMatrix { inner })
    }

    /// Transpose.
    pub fn transpose(&self) -> DenseMatrix {
        let inner = self.inner.transpose().to_owned();
        DenseMatrix { inner }
    }

    /// Extract column as a Vec<f64>.
    pub fn col(&self, j: usize) -> Vec<f64> {
        (0..self.nrows()).map(|i| self.inner.read(i, j)).collect()
    }

    /// Extract row as a Vec<f64>.
    pub fn row(&self, i: usize) -> Vec<f64> {
        (0..self.ncols()).map(|j| self.inner.read(i, j)).collect()
    }

    /// Keep only the listed columns, in the order given.
    pub fn select_cols(&self, cols: &[usize]) -> DenseMatrix {
        let inner = Mat::from_fn(self.nrows(), cols.len(), |i, j| self.inner.read(i, cols[j]));
        DenseMatrix { inner }
    }

    /// Element-wise subtraction: self - other.
    pub fn sub(&self, other: &DenseMatrix) -> Result<DenseMatrix, LinalgError> {
        if self.nrows() != other.nrows() {
            return Err(LinalgError::DimensionMismatch {
                expected: self.nrows(),
                got: other.nrows(),
            });
        }
        if self.ncols() != other.ncols() {
            return Err(LinalgError::DimensionMismatch {
                expected: self.ncols(),
                got: other.ncols(),
            });
        }
        let inner = Mat::from_fn(self.nrows(), self.ncols(), |i, j| {
            self.inner.read(i, j) - other.inner.read(i, j)
        });
        Ok(DenseMatrix { inner })
    }

    /// Diagonal entries of the matrix (length min(nrows, ncols)).
    pub fn diag(&self) -> Vec<f64> {
        let n = self.nrows().min(self.ncols());
        (0..n).map(|i| self.inner.read(i, i)).collect()
    }

    /// Mean of each column (axis 0) or each row (axis 1).
    ///
    /// An empty axis produces NaN means.
    pub fn mean_axis(&self, axis: Axis) -> Vec<f64> {
        let (outer, inner) = match axis {
            Axis::Down => (self.ncols(), self.nrows()),
            Axis::Across => (self.nrows(), self.ncols()),
        };
        let mut means = vec![0.0; outer];
        for o in 0..outer {
            let mut sum = 0.0;
            for k in 0..inner {
                sum += match axis {
                    Axis::Down => self.inner.read(k, o),
                    Axis::Across => self.inner.read(o, k),
                };
            }
            means[o] = sum / inner as f64;
        }
        means
    }

    /// Subtract the mean along `axis`: per column for `Down`, per row for `Across`.
    pub fn center(&self, axis: Axis) -> DenseMatrix {
        let means = self.mean_axis(axis);
        let inner = Mat::from_fn(self.nrows(), self.ncols(), |i, j| {
            let m = match axis {
                Axis::Down => means[j],
                Axis::Across => means[i],
            };
            self.inner.read(i, j) - m
        });
        DenseMatrix { inner }
    }

    /// L2 norm of each column (axis 0) or each row (axis 1).
    pub fn norm_axis(&self, axis: Axis) -> Vec<f64> {
        let mut sums = match axis {
            Axis::Down => vec![0.0; self.ncols()],
            Axis::Across => vec![0.0; self.nrows()],
        };
        for j in 0..self.ncols() {
            for i in 0..self.nrows() {
                let v = self.inner.read(i, j);
                match axis {
                    Axis::Down => sums[j] += v * v,
                    Axis::Across => sums[i] += v * v,
                }
            }
        }
        sums.into_iter().map(f64::sqrt).collect()
    }

    /// Divide each column (axis 0) or row (axis 1) by the matching divisor.
    ///
    /// Zero divisors are not guarded; the affected entries become non-finite.
    pub fn div_axis(&self, axis: Axis, divisors: &[f64]) -> Result<DenseMatrix, LinalgError> {
        let expected = match axis {
            Axis::Down => self.ncols(),
            Axis::Across => self.nrows(),
        };
        if divisors.len() != expected {
            return Err(LinalgError::DimensionMismatch {
                expected,
                got: divisors.len(),
            });
        }
        let inner = Mat::from_fn(self.nrows(), self.ncols(), |i, j| {
            let d = match axis {
                Axis::Down => divisors[j],
                Axis::Across => divisors[i],
            };
            self.inner.read(i, j) / d
        });
        Ok(DenseMatrix { inner })
    }

    /// Largest absolute entry, 0 for an empty matrix.
    pub fn max_abs(&self) -> f64 {
        let mut m = 0.0_f64;
        for j in 0..self.ncols() {
            for i in 0..self.nrows() {
                m = m.max(self.inner.read(i, j).abs());
            }
        }
        m
    }
}

impl PartialEq for DenseMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.nrows() == other.nrows()
            && self.ncols() == other.ncols()
            && (0..self.ncols())
                .all(|j| (0..self.nrows()).all(|i| self.get(i, j) == other.get(i, j)))
    }
}

impl std::fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                if j > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{:.6}", self.inner.read(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row_major_and_col_major_agree() {
        let a = DenseMatrix::from_row_major(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b = DenseMatrix::from_col_major(2, 3, &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.get(1, 0), 4.0);
    }

    #[test]
    fn test_wrong_buffer_length() {
        let err = DenseMatrix::from_row_major(2, 2, &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            LinalgError::DimensionMismatch { expected: 4, got: 3 }
        ));
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(
            err,
            LinalgError::RaggedRows { row: 1, expected: 2, got: 1 }
        ));
    }

    #[test]
    fn test_mat_mul() {
        let a = DenseMatrix::from_row_major(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b = DenseMatrix::from_row_major(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
        let c = a.mat_mul(&b).unwrap();
        assert_eq!(c.nrows(), 2);
        assert_eq!(c.ncols(), 2);
        assert!((c.get(0, 0) - 58.0).abs() < 1e-10);
        assert!((c.get(0, 1) - 64.0).abs() < 1e-10);
        assert!((c.get(1, 0) - 139.0).abs() < 1e-10);
        assert!((c.get(1, 1) - 154.0).abs() < 1e-10);
    }

    #[test]
    fn test_mat_mul_empty_inner() {
        let a = DenseMatrix::zeros(2, 0);
        let b = DenseMatrix::zeros(0, 3);
        let c = a.mat_mul(&b).unwrap();
        assert_eq!((c.nrows(), c.ncols()), (2, 3));
        assert_eq!(c.max_abs(), 0.0);
    }

    #[test]
    fn test_mat_mul_mismatch() {
        let a = DenseMatrix::zeros(2, 3);
        assert!(a.mat_mul(&DenseMatrix::zeros(2, 2)).is_err());
    }

    #[test]
    fn test_transpose() {
        let a = DenseMatrix::from_row_major(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let at = a.transpose();
        assert_eq!(at.nrows(), 3);
        assert_eq!(at.ncols(), 2);
        assert_eq!(at.get(1, 0), 2.0);
        assert_eq!(at.get(0, 1), 4.0);
    }

    #[test]
    fn test_mean_and_center() {
        let a = DenseMatrix::from_row_major(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 9.0]).unwrap();
        assert_eq!(a.mean_axis(Axis::Down), vec![2.5, 3.5, 6.0]);
        assert_eq!(a.mean_axis(Axis::Across), vec![2.0, 6.0]);

        let rows = a.center(Axis::Across);
        assert_eq!(rows.row(0), vec![-1.0, 0.0, 1.0]);
        assert_eq!(rows.row(1), vec![-2.0, -1.0, 3.0]);

        let cols = a.center(Axis::Down);
        assert_eq!(cols.col(2), vec![-3.0, 3.0]);
    }

    #[test]
    fn test_norm_and_div() {
        let a = DenseMatrix::from_row_major(2, 2, &[3.0, 0.0, 4.0, 2.0]).unwrap();
        assert_eq!(a.norm_axis(Axis::Down), vec![5.0, 2.0]);
        let scaled = a.div_axis(Axis::Down, &[5.0, 2.0]).unwrap();
        assert_eq!(scaled.col(0), vec![0.6, 0.8]);
        assert_eq!(scaled.col(1), vec![0.0, 1.0]);
        assert!(a.div_axis(Axis::Across, &[1.0]).is_err());
    }

    #[test]
    fn test_select_cols() {
        let a = DenseMatrix::from_row_major(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let s = a.select_cols(&[2, 0]);
        assert_eq!(s.row(0), vec![3.0, 1.0]);
        assert_eq!(s.row(1), vec![6.0, 4.0]);
    }

    #[test]
    fn test_axis_index() {
        assert_eq!(Axis::from_index(0), Some(Axis::Down));
        assert_eq!(Axis::from_index(1), Some(Axis::Across));
        assert_eq!(Axis::from_index(2), None);
        assert_eq!(Axis::Across.index(), 1);
    }
}
