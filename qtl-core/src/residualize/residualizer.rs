//! Row-wise projection of data onto the orthogonal complement of the
//! covariate space.
//!
//! For a data matrix M (features x samples) and basis Q:
//!   M0   = M - rowmean(M)
//!   proj = (M0 * Q) * Q'
//! and the residual is either `M0 - proj` (centered) or `M - proj`, which
//! keeps each row's original mean.

use qtl_linalg::{Axis, DenseMatrix};
use tracing::debug;

use super::basis::CovariateBasis;
use super::notice::{NoticeSink, TracingSink};
use super::ResidualizeOptions;
use crate::data::Data;
use crate::error::{QtlError, Result};

/// Residualizes data rows against a fixed set of covariates.
///
/// The basis is built once and is read-only afterwards, so one
/// `Residualizer` can serve many `transform` calls, including from
/// several threads at once.
#[derive(Debug, Clone)]
pub struct Residualizer {
    basis: CovariateBasis,
}

impl Residualizer {
    /// Build from an n x k covariate matrix, logging dropped columns via tracing.
    pub fn new(covariates: &DenseMatrix, fail_on_colinear: bool) -> Result<Self> {
        Self::with_sink(covariates, fail_on_colinear, &TracingSink)
    }

    pub fn with_sink(
        covariates: &DenseMatrix,
        fail_on_colinear: bool,
        sink: &dyn NoticeSink,
    ) -> Result<Self> {
        let basis = CovariateBasis::build(covariates, fail_on_colinear, sink)?;
        Ok(Self { basis })
    }

    pub fn from_options(covariates: &DenseMatrix, options: &ResidualizeOptions) -> Result<Self> {
        Self::new(covariates, options.fail_on_colinear)
    }

    pub fn basis(&self) -> &CovariateBasis {
        &self.basis
    }

    pub fn dof(&self) -> i64 {
        self.basis.dof()
    }

    /// Residualize each row of `data` with respect to the covariates.
    ///
    /// The output has the same variant and labels as the input.
    pub fn transform(&self, data: &Data, center: bool) -> Result<Data> {
        let m = data.to_canonical();
        let residual = self.transform_matrix(&m, center)?;
        data.from_canonical(residual)
    }

    /// Residualize a single length-n vector.
    pub fn transform_vector(&self, values: &[f64], center: bool) -> Result<Vec<f64>> {
        let m = DenseMatrix::row_vector(values);
        Ok(self.transform_matrix(&m, center)?.row(0))
    }

    /// Residualize the rows of a features x samples matrix.
    pub fn transform_matrix(&self, m: &DenseMatrix, center: bool) -> Result<DenseMatrix> {
        let n = self.basis.n_samples();
        if m.ncols() != n {
            return Err(QtlError::ShapeMismatch {
                expected: n,
                got: m.ncols(),
            });
        }
        debug!(
            n_features = m.nrows(),
            n_samples = n,
            center,
            "residualizing"
        );

        let q = self.basis.q();
        let m0 = m.center(Axis::Across);
        let proj = m0.mat_mul(q)?.mat_mul(&q.transpose())?;

        let residual = if center {
            m0.sub(&proj)?
        } else {
            m.sub(&proj)?
        };
        Ok(residual)
    }
}
