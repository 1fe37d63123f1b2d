//! Benjamini-Hochberg adjusted p-values.
//!
//! Step-up procedure matching R's `p.adjust(p, method = "BH")`:
//!   adj_(i) = min(1, min_{j >= i} n / j * p_(j))
//! where p_(j) is the j-th smallest p-value. Output keeps input order.
//!
//! Reference: Benjamini & Hochberg (1995)

use crate::data::LabeledVector;
use crate::error::Result;

/// BH-adjust `pvalues`, returning adjusted values in input order.
pub fn padjust_bh(pvalues: &[f64]) -> Vec<f64> {
    let n = pvalues.len();
    if n == 0 {
        return Vec::new();
    }

    // Indices of p-values from largest to smallest
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| pvalues[b].total_cmp(&pvalues[a]));

    let mut adjusted = vec![0.0; n];
    let mut running_min = f64::INFINITY;
    for (pos, &idx) in order.iter().enumerate() {
        let rank = n - pos;
        let scaled = n as f64 / rank as f64 * pvalues[idx];
        running_min = running_min.min(scaled);
        adjusted[idx] = running_min.min(1.0);
    }
    adjusted
}

/// BH-adjust a labeled vector of p-values, keeping its name and index.
pub fn padjust_bh_labeled(pvalues: &LabeledVector) -> Result<LabeledVector> {
    pvalues.with_values(padjust_bh(pvalues.values()))
}
