#![allow(clippy::needless_range_loop)]
//! Matrix decompositions.
//!
//! Wraps faer's Householder QR to produce the reduced factors used for
//! covariate orthogonalization: for an m x n input, Q is m x min(m, n)
//! with orthonormal columns and R is min(m, n) x n upper triangular.

use crate::dense::DenseMatrix;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Row {row} has {got} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Result of a reduced QR decomposition: A = Q * R.
pub struct QrDecomp {
    pub q: DenseMatrix,
    pub r: DenseMatrix,
}

impl QrDecomp {
    /// Compute the reduced QR decomposition of an m x n matrix.
    ///
    /// Wide inputs (m < n) are allowed. A matrix with no rows or no
    /// columns yields empty factors without calling into faer.
    pub fn new(a: &DenseMatrix) -> Self {
        let m = a.nrows();
        let n = a.ncols();
        let size = m.min(n);
        if size == 0 {
            return QrDecomp {
                q: DenseMatrix::zeros(m, 0),
                r: DenseMatrix::zeros(0, n),
            };
        }

        let qr = a.as_faer().qr();
        QrDecomp {
            q: DenseMatrix::from_faer(qr.compute_thin_q()),
            r: DenseMatrix::from_faer(qr.compute_thin_r()),
        }
    }

    /// Diagonal of R, one entry per column of Q.
    pub fn r_diag(&self) -> Vec<f64> {
        self.r.diag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orthonormal(q: &DenseMatrix) {
        let qtq = q.transpose().mat_mul(q).unwrap();
        for i in 0..q.ncols() {
            for j in 0..q.ncols() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (qtq.get(i, j) - expected).abs() < 1e-10,
                    "Q'Q[{},{}] = {}, expected {}",
                    i,
                    j,
                    qtq.get(i, j),
                    expected
                );
            }
        }
    }

    #[test]
    fn test_qr() {
        let a = DenseMatrix::from_row_major(3, 2, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0]).unwrap();
        let qr = QrDecomp::new(&a);
        assert_eq!((qr.q.nrows(), qr.q.ncols()), (3, 2));
        assert_eq!((qr.r.nrows(), qr.r.ncols()), (2, 2));
        assert_orthonormal(&qr.q);

        // Q*R should equal A
        let qr_prod = qr.q.mat_mul(&qr.r).unwrap();
        for i in 0..3 {
            for j in 0..2 {
                assert!(
                    (qr_prod.get(i, j) - a.get(i, j)).abs() < 1e-10,
                    "QR[{},{}] = {}, A[{},{}] = {}",
                    i,
                    j,
                    qr_prod.get(i, j),
                    i,
                    j,
                    a.get(i, j)
                );
            }
        }
        assert!(qr.r.get(1, 0).abs() < 1e-14);
    }

    #[test]
    fn test_qr_wide() {
        let a = DenseMatrix::from_row_major(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 7.0]).unwrap();
        let qr = QrDecomp::new(&a);
        assert_eq!((qr.q.nrows(), qr.q.ncols()), (2, 2));
        assert_eq!((qr.r.nrows(), qr.r.ncols()), (2, 3));
        assert_eq!(qr.r_diag().len(), 2);
        assert_orthonormal(&qr.q);
    }

    #[test]
    fn test_qr_dependent_column_has_small_diagonal() {
        // Third column is the sum of the first two
        let a = DenseMatrix::from_row_major(
            4,
            3,
            &[1.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, -1.0, 1.0],
        )
        .unwrap();
        let d = QrDecomp::new(&a).r_diag();
        assert!(d[0].abs() > 1e-3);
        assert!(d[1].abs() > 1e-3);
        assert!(d[2].abs() < 1e-12, "diag = {:?}", d);
    }

    #[test]
    fn test_qr_empty() {
        let qr = QrDecomp::new(&DenseMatrix::zeros(5, 0));
        assert_eq!((qr.q.nrows(), qr.q.ncols()), (5, 0));
        assert!(qr.r_diag().is_empty());
    }
}
