//! Orthonormal basis for the centered covariate column space.
//!
//! Covariates are column-centered and orthogonalized with a reduced QR
//! decomposition. A column is considered colinear when its R diagonal
//! falls below `f64::EPSILON * k`, where k is the number of covariates.
//! The threshold scales with k, not with the sample count or the matrix
//! norm; this reproduces the established QTL mapping behavior and is kept
//! for result compatibility.

use qtl_linalg::{Axis, DenseMatrix, QrDecomp};
use tracing::debug;

use super::notice::{Notice, NoticeSink};
use crate::error::{QtlError, Result};

/// Orthonormal basis Q (n x k') of the centered covariates.
#[derive(Debug, Clone)]
pub struct CovariateBasis {
    q: DenseMatrix,
    n_covariates: usize,
    dof: i64,
}

impl CovariateBasis {
    /// Build the basis for an n x k covariate matrix.
    ///
    /// With `fail_on_colinear`, any colinear column is an error. Otherwise
    /// colinear columns are dropped from Q (remaining order preserved) and
    /// the drop is reported to `sink`.
    pub fn build(
        covariates: &DenseMatrix,
        fail_on_colinear: bool,
        sink: &dyn NoticeSink,
    ) -> Result<Self> {
        let n = covariates.nrows();
        let k = covariates.ncols();

        let centered = covariates.center(Axis::Down);
        let qr = QrDecomp::new(&centered);

        let threshold = f64::EPSILON * k as f64;
        let diag = qr.r_diag();
        let keep: Vec<usize> = diag
            .iter()
            .enumerate()
            .filter(|(_, d)| d.abs() >= threshold)
            .map(|(j, _)| j)
            .collect();
        let n_colinear = diag.len() - keep.len();

        let q = if n_colinear > 0 {
            if fail_on_colinear {
                return Err(QtlError::ColinearCovariates { count: n_colinear });
            }
            sink.emit(&Notice::ColinearCovariatesDropped {
                dropped: n_colinear,
                retained: keep.len(),
            });
            qr.q.select_cols(&keep)
        } else {
            qr.q
        };

        // Degrees of freedom use the original covariate count, even after drops.
        let dof = n as i64 - 2 - k as i64;

        debug!(
            n_samples = n,
            n_covariates = k,
            rank = q.ncols(),
            dof,
            "built covariate basis"
        );

        Ok(Self {
            q,
            n_covariates: k,
            dof,
        })
    }

    /// The orthonormal basis, n x k'.
    pub fn q(&self) -> &DenseMatrix {
        &self.q
    }

    /// `n - 2 - k` with k the number of covariates supplied.
    pub fn dof(&self) -> i64 {
        self.dof
    }

    pub fn n_samples(&self) -> usize {
        self.q.nrows()
    }

    /// Number of covariate columns supplied, before any drop.
    pub fn n_covariates(&self) -> usize {
        self.n_covariates
    }

    /// Number of basis columns retained.
    pub fn rank(&self) -> usize {
        self.q.ncols()
    }

    /// Covariate columns without a basis column, either dropped as
    /// colinear or in excess of the sample count.
    pub fn n_dropped(&self) -> usize {
        self.n_covariates - self.rank()
    }
}
