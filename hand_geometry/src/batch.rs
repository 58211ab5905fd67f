//! Element-wise distance evaluation over paired point arrays.
//!
//! Each output slot depends only on its own pair, so the parallel variant
//! yields exactly the same values as the sequential one.

use rayon::prelude::*;

use crate::geometry::{distance, GeometryError, Point3};

fn check_pairs(a: &[Point3], b: &[Point3]) -> Result<(), GeometryError> {
    if a.len() != b.len() {
        log::warn!("rejecting batch: {} points vs {} points", a.len(), b.len());
        return Err(GeometryError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Computes `distance(a[i], b[i])` for every index.
pub fn batch_distances(a: &[Point3], b: &[Point3]) -> Result<Vec<f64>, GeometryError> {
    check_pairs(a, b)?;
    log::debug!("evaluating {} distances", a.len());
    Ok(a.iter().zip(b).map(|(p, q)| distance(*p, *q)).collect())
}

/// Writes `distance(a[i], b[i])` into `out[i]` without allocating.
///
/// All three slices must have the same length; nothing is written otherwise.
pub fn batch_distances_into(
    a: &[Point3],
    b: &[Point3],
    out: &mut [f64],
) -> Result<(), GeometryError> {
    check_pairs(a, b)?;
    if out.len() != a.len() {
        return Err(GeometryError::OutputMismatch {
            pairs: a.len(),
            output: out.len(),
        });
    }
    for ((slot, p), q) in out.iter_mut().zip(a).zip(b) {
        *slot = distance(*p, *q);
    }
    Ok(())
}

/// Parallel form of [`batch_distances`] backed by rayon.
pub fn par_batch_distances(a: &[Point3], b: &[Point3]) -> Result<Vec<f64>, GeometryError> {
    check_pairs(a, b)?;
    log::debug!("evaluating {} distances in parallel", a.len());
    Ok(a.par_iter()
        .zip(b.par_iter())
        .map(|(p, q)| distance(*p, *q))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs() -> (Vec<Point3>, Vec<Point3>) {
        (
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)],
            vec![Point3::new(3.0, 4.0, 0.0), Point3::new(1.0, 1.0, 1.0)],
        )
    }

    #[test]
    fn two_pairs() {
        let (a, b) = pairs();
        assert_eq!(batch_distances(&a, &b).unwrap(), vec![5.0, 0.0]);
    }

    #[test]
    fn into_caller_buffer() {
        let (a, b) = pairs();
        let mut out = [f64::NAN; 2];
        batch_distances_into(&a, &b, &mut out).unwrap();
        assert_eq!(out, [5.0, 0.0]);
    }

    #[test]
    fn short_output_buffer_untouched() {
        let (a, b) = pairs();
        let mut out = [-1.0];
        let err = batch_distances_into(&a, &b, &mut out).unwrap_err();
        assert_eq!(err, GeometryError::OutputMismatch { pairs: 2, output: 1 });
        assert_eq!(out, [-1.0]);
    }

    #[test]
    fn mismatch_rejected() {
        let (a, _) = pairs();
        let b = vec![Point3::new(0.0, 0.0, 0.0)];
        assert_eq!(
            batch_distances(&a, &b),
            Err(GeometryError::LengthMismatch { left: 2, right: 1 })
        );
        assert!(par_batch_distances(&a, &b).is_err());
    }

    #[test]
    fn empty_input() {
        assert!(batch_distances(&[], &[]).unwrap().is_empty());
        assert!(par_batch_distances(&[], &[]).unwrap().is_empty());
    }
}
