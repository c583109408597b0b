//! Record construction from raw x/y sample arrays
//!
//! The builder fills a complete header before installing it; a failed pair
//! never leaves a partially built record behind.

use crate::error::{Result, SeisError, SeriesDefect};
use crate::record::Record;
use seisrec_core::{DataVector, Filetype, PREFERRED_VERSION};

/// Tolerance for deciding that sampling is even
///
/// A record stays evenly sampled unless the observed first step differs
/// from the nominal interval by more than this.
pub const EVEN_TOLERANCE: f64 = 10.0 * f64::EPSILON;

/// Build one record per consecutive (x, y) pair of sample arrays
///
/// An odd number of arrays cannot pair up and is rejected. Each pair must
/// hold equally long, non-empty sample sequences. Output records carry the
/// native byte order, the preferred header version, and an empty `name`
/// that the caller must assign before serialization.
pub fn build_records(series: &[Vec<f64>]) -> Result<Vec<Record>> {
    if series.len() % 2 != 0 {
        return Err(SeisError::MismatchedInput);
    }
    series
        .chunks_exact(2)
        .enumerate()
        .map(|(pair, xy)| build_one(&xy[0], &xy[1], pair))
        .collect()
}

/// Build a single record from one x/y pair
pub fn build_pair(x: &[f64], y: &[f64]) -> Result<Record> {
    build_one(x, y, 0)
}

fn build_one(x: &[f64], y: &[f64], pair: usize) -> Result<Record> {
    if x.is_empty() || y.is_empty() {
        return Err(SeisError::InvalidSeries {
            pair,
            reason: SeriesDefect::EmptySeries,
        });
    }
    if x.len() != y.len() {
        return Err(SeisError::InvalidSeries {
            pair,
            reason: SeriesDefect::LengthMismatch {
                x: x.len(),
                y: y.len(),
            },
        });
    }

    let npts = x.len();
    let mut rec = Record::new(Filetype::GeneralXy, PREFERRED_VERSION)?;

    // A one-sample series has no interval; delta is 0 by convention.
    let delta = if npts > 1 {
        (x[npts - 1] - x[0]) / (npts - 1) as f64
    } else {
        0.0
    };

    let (min, max, mean) = stats(y);
    rec.set_field("delta", delta)?;
    rec.set_field("b", x[0])?;
    rec.set_field("e", x[npts - 1])?;
    rec.set_field("npts", npts as f64)?;
    rec.set_field("depmin", min)?;
    rec.set_field("depmax", max)?;
    rec.set_field("depmen", mean)?;
    rec.set_logical("leven", true)?;
    rec.set_logical("lovrok", true)?;

    rec.dep = vec![DataVector::F64(y.to_vec())];
    rec.hasdata = true;

    // Uneven sampling is a normal code path, not an error: keep the full
    // independent axis and note the observed first step.
    if npts > 1 {
        let step = x[1] - x[0];
        if (delta - step).abs() > EVEN_TOLERANCE {
            rec.set_logical("leven", false)?;
            rec.set_field("odelta", step)?;
            rec.ind = Some(DataVector::F64(x.to_vec()));
        }
    }

    Ok(rec)
}

fn stats(y: &[f64]) -> (f64, f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &v in y {
        min = min.min(v);
        max = max.max(v);
        sum += v;
    }
    (min, max, sum / y.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_build_even_series() {
        let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let y = vec![0.0, 1.0, 4.0, 9.0, 16.0];
        let rec = build_pair(&x, &y).unwrap();

        assert_eq!(rec.npts(), 5);
        assert_eq!(rec.b(), Some(0.0));
        assert_eq!(rec.e(), Some(4.0));
        assert_eq!(rec.delta(), Some(1.0));
        assert_eq!(rec.field("depmin").unwrap(), Some(0.0));
        assert_eq!(rec.field("depmax").unwrap(), Some(16.0));
        assert_eq!(rec.field("depmen").unwrap(), Some(6.0));
        assert_eq!(rec.logical("leven").unwrap(), Some(true));
        assert_eq!(rec.filetype, Filetype::GeneralXy);
        assert_eq!(rec.version, PREFERRED_VERSION);
        assert!(rec.ind.is_none());
        assert!(rec.hasdata);
        assert!(rec.name.is_empty());
    }

    #[test]
    fn test_build_uneven_series() {
        let x = vec![0.0, 1.0, 2.0, 3.0, 10.0];
        let y = vec![0.0, 1.0, 4.0, 9.0, 100.0];
        let rec = build_pair(&x, &y).unwrap();

        assert_eq!(rec.logical("leven").unwrap(), Some(false));
        assert_eq!(rec.field("odelta").unwrap(), Some(1.0));
        let ind = rec.ind.as_ref().unwrap();
        assert_eq!(ind.to_f64_vec(), x);
        // b and e still span the full axis
        assert_eq!(rec.b(), Some(0.0));
        assert_eq!(rec.e(), Some(10.0));
    }

    #[test]
    fn test_single_sample_delta_zero() {
        let rec = build_pair(&[5.0], &[42.0]).unwrap();
        assert_eq!(rec.npts(), 1);
        assert_eq!(rec.delta(), Some(0.0));
        assert_eq!(rec.b(), Some(5.0));
        assert_eq!(rec.e(), Some(5.0));
        assert_eq!(rec.logical("leven").unwrap(), Some(true));
    }

    #[test]
    fn test_odd_input_rejected() {
        let err = build_records(&[vec![0.0, 1.0]]).unwrap_err();
        assert_eq!(err, SeisError::MismatchedInput);
    }

    #[test]
    fn test_length_mismatch_names_pair() {
        let err = build_records(&[
            vec![0.0, 1.0],
            vec![1.0, 2.0],
            vec![0.0, 1.0, 2.0],
            vec![1.0, 2.0],
        ])
        .unwrap_err();
        assert_eq!(
            err,
            SeisError::InvalidSeries {
                pair: 1,
                reason: SeriesDefect::LengthMismatch { x: 3, y: 2 },
            }
        );
    }

    #[test]
    fn test_empty_series_rejected() {
        let err = build_pair(&[], &[]).unwrap_err();
        assert_eq!(
            err,
            SeisError::InvalidSeries {
                pair: 0,
                reason: SeriesDefect::EmptySeries,
            }
        );
    }

    #[test]
    fn test_multiple_pairs() {
        let records = build_records(&[
            vec![0.0, 1.0, 2.0],
            vec![5.0, 6.0, 7.0],
            vec![0.0, 0.5, 1.0],
            vec![1.0, -1.0, 1.0],
        ])
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].npts(), 3);
        assert_eq!(records[1].delta(), Some(0.5));
    }

    #[test]
    fn test_randomized_even_series() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let n = rng.gen_range(2..200);
            let b = rng.gen_range(-1.0e3..1.0e3);
            let delta = rng.gen_range(1.0e-3..10.0);
            let x: Vec<f64> = (0..n).map(|i| b + i as f64 * delta).collect();
            let y: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();

            let rec = build_pair(&x, &y).unwrap();
            assert_eq!(rec.npts(), n);
            assert_eq!(rec.b(), Some(x[0]));
            assert_eq!(rec.e(), Some(x[n - 1]));
            let min = y.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = y.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            assert_eq!(rec.field("depmin").unwrap(), Some(min));
            assert_eq!(rec.field("depmax").unwrap(), Some(max));
        }
    }
}
