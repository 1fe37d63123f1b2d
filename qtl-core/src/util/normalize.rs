//! Centering and L2 normalization.
//!
//! Constant input has a zero norm after centering; the division is left
//! unguarded and produces NaN, matching the usual array semantics.

use qtl_linalg::{Axis, DenseMatrix};

use crate::data::Data;
use crate::error::{QtlError, Result};

/// Subtract the mean, then divide by the L2 norm of the centered values.
pub fn center_normalize_slice(x: &[f64]) -> Vec<f64> {
    let mean = x.iter().sum::<f64>() / x.len() as f64;
    let centered: Vec<f64> = x.iter().map(|v| v - mean).collect();
    let norm = centered.iter().map(|v| v * v).sum::<f64>().sqrt();
    centered.into_iter().map(|v| v / norm).collect()
}

/// Center and normalize each column (`Axis::Down`) or row (`Axis::Across`).
pub fn center_normalize_matrix(x: &DenseMatrix, axis: Axis) -> Result<DenseMatrix> {
    let centered = x.center(axis);
    let norms = centered.norm_axis(axis);
    Ok(centered.div_axis(axis, &norms)?)
}

/// Center and normalize `x` along `axis`.
///
/// Matrices accept axis 0 (per column) or 1 (per row); vectors only axis 0.
pub fn center_normalize(x: &Data, axis: usize) -> Result<Data> {
    let invalid = QtlError::InvalidAxis {
        axis,
        ndim: x.ndim(),
    };
    let out = match x {
        Data::Vector(_) | Data::LabeledVector(_) if axis != 0 => return Err(invalid),
        Data::Vector(v) => DenseMatrix::row_vector(&center_normalize_slice(v)),
        Data::LabeledVector(v) => DenseMatrix::row_vector(&center_normalize_slice(v.values())),
        Data::Matrix(m) => {
            center_normalize_matrix(m, Axis::from_index(axis).ok_or(invalid)?)?
        }
        Data::LabeledMatrix(m) => {
            center_normalize_matrix(m.values(), Axis::from_index(axis).ok_or(invalid)?)?
        }
    };
    x.from_canonical(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LabeledVector;

    #[test]
    fn test_center_normalize_vector() {
        let out = center_normalize(&Data::from(vec![1.0, 2.0, 3.0]), 0).unwrap();
        let v = out.as_vector().unwrap();
        let h = 0.5_f64.sqrt();
        assert!((v[0] + h).abs() < 1e-12);
        assert!(v[1].abs() < 1e-12);
        assert!((v[2] - h).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_axes() {
        let m = DenseMatrix::from_row_major(2, 3, &[1.0, 2.0, 3.0, 3.0, 6.0, 9.0]).unwrap();

        let rows = center_normalize_matrix(&m, Axis::Across).unwrap();
        for i in 0..2 {
            let r = rows.row(i);
            let mean: f64 = r.iter().sum::<f64>() / 3.0;
            let norm: f64 = r.iter().map(|v| v * v).sum::<f64>().sqrt();
            assert!(mean.abs() < 1e-12);
            assert!((norm - 1.0).abs() < 1e-12);
        }

        let cols = center_normalize_matrix(&m, Axis::Down).unwrap();
        for j in 0..3 {
            let c = cols.col(j);
            assert!((c[0] + 0.5_f64.sqrt()).abs() < 1e-12);
            assert!((c[1] - 0.5_f64.sqrt()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_constant_input_is_nan() {
        let v = center_normalize_slice(&[4.0, 4.0, 4.0]);
        assert!(v.iter().all(|x| x.is_nan()));
    }

    #[test]
    fn test_invalid_axis() {
        let v = Data::from(vec![1.0, 2.0]);
        assert_eq!(
            center_normalize(&v, 1).unwrap_err(),
            QtlError::InvalidAxis { axis: 1, ndim: 1 }
        );
        let m = Data::from(DenseMatrix::zeros(2, 2));
        assert_eq!(
            center_normalize(&m, 2).unwrap_err(),
            QtlError::InvalidAxis { axis: 2, ndim: 2 }
        );
    }

    #[test]
    fn test_labeled_vector_keeps_name() {
        let v = LabeledVector::new(
            Some("pc1".into()),
            vec!["a".into(), "b".into(), "c".into()],
            vec![1.0, 2.0, 3.0],
        )
        .unwrap();
        match center_normalize(&Data::from(v), 0).unwrap() {
            Data::LabeledVector(out) => {
                assert_eq!(out.name(), Some("pc1"));
                assert_eq!(out.len(), 3);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
