//! Covariate residualization.
//!
//! Removes the linear effect of covariates (batch, genotype PCs, and the
//! like) from each row of a data matrix. Build a `Residualizer` once per
//! covariate matrix and call `transform` per data matrix; `residualize`
//! does both for one-off use.

pub mod basis;
pub mod notice;
pub mod residualizer;

use qtl_linalg::DenseMatrix;
use serde::{Deserialize, Serialize};

use crate::data::Data;
use crate::error::Result;

pub use basis::CovariateBasis;
pub use notice::{CollectingSink, Notice, NoticeSink, SilentSink, TracingSink};
pub use residualizer::Residualizer;

/// Options for residualization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResidualizeOptions {
    /// Return mean-centered residuals instead of keeping each row's mean.
    pub center: bool,
    /// Fail on colinear covariates instead of dropping them.
    pub fail_on_colinear: bool,
}

/// Residualize `data` against `covariates` in one call.
pub fn residualize(
    data: &Data,
    covariates: &DenseMatrix,
    center: bool,
    fail_on_colinear: bool,
) -> Result<Data> {
    let r = Residualizer::new(covariates, fail_on_colinear)?;
    r.transform(data, center)
}

pub fn residualize_with(
    data: &Data,
    covariates: &DenseMatrix,
    options: &ResidualizeOptions,
) -> Result<Data> {
    residualize(data, covariates, options.center, options.fail_on_colinear)
}
