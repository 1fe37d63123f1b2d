//! Multiple-testing correction of p-values.

pub mod bh;

pub use bh::{padjust_bh, padjust_bh_labeled};
