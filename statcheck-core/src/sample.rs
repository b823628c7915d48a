//! Raw samples and their summary statistics.

use serde::{Deserialize, Serialize};

use crate::error::EvalError;

/// A validated sample: an immutable, ordered sequence of finite reals with
/// at least two observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Ingest raw values, validating that the sample is large enough for a
    /// defined sample standard deviation and contains only finite numbers.
    pub fn new(values: Vec<f64>) -> Result<Self, EvalError> {
        if values.len() < 2 {
            return Err(EvalError::InvalidSample { n: values.len() });
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(EvalError::InvalidSpec(
                "sample contains non-finite values".to_string(),
            ));
        }
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Reduce the sample to its summary statistics: count, arithmetic mean,
    /// and Bessel-corrected (n-1 denominator) standard deviation.
    pub fn summarize(&self) -> SampleSummary {
        let n = self.values.len();
        let mean = self.values.iter().sum::<f64>() / n as f64;
        let variance = self
            .values
            .iter()
            .map(|x| (x - mean).powi(2))
            .sum::<f64>()
            / (n - 1) as f64;

        SampleSummary {
            n,
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

/// Summary statistics of a sample. May be derived from a [`Sample`] or
/// supplied directly by a caller that only has the triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    /// Number of observations.
    pub n: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample (Bessel-corrected) standard deviation.
    pub std_dev: f64,
}

impl SampleSummary {
    /// Build a summary from caller-supplied statistics, applying the same
    /// validation a raw sample would receive.
    pub fn new(n: usize, mean: f64, std_dev: f64) -> Result<Self, EvalError> {
        if n < 2 {
            return Err(EvalError::InvalidSample { n });
        }
        if !mean.is_finite() || !std_dev.is_finite() {
            return Err(EvalError::InvalidSpec(
                "summary statistics must be finite".to_string(),
            ));
        }
        if std_dev < 0.0 {
            return Err(EvalError::InvalidSpec(format!(
                "standard deviation must be non-negative, got {std_dev}"
            )));
        }
        Ok(Self { n, mean, std_dev })
    }

    /// Sample variance (std_dev squared).
    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_basic() {
        let sample = Sample::new(vec![2.0, 4.0, 6.0, 8.0]).unwrap();
        let summary = sample.summarize();

        assert_eq!(summary.n, 4);
        assert!((summary.mean - 5.0).abs() < 1e-12);
        // variance = (9 + 1 + 1 + 9) / 3 = 20/3
        assert!((summary.std_dev - (20.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_summarize_identical_values_zero_stddev() {
        let sample = Sample::new(vec![5.0, 5.0, 5.0]).unwrap();
        let summary = sample.summarize();

        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn test_sample_too_small() {
        assert_eq!(
            Sample::new(vec![1.0]),
            Err(EvalError::InvalidSample { n: 1 })
        );
        assert_eq!(Sample::new(vec![]), Err(EvalError::InvalidSample { n: 0 }));
    }

    #[test]
    fn test_sample_rejects_non_finite() {
        let result = Sample::new(vec![1.0, f64::NAN]);
        assert!(matches!(result, Err(EvalError::InvalidSpec(_))));

        let result = Sample::new(vec![1.0, f64::INFINITY]);
        assert!(matches!(result, Err(EvalError::InvalidSpec(_))));
    }

    #[test]
    fn test_direct_summary_validation() {
        assert!(SampleSummary::new(10, 5.0, 1.2).is_ok());
        assert_eq!(
            SampleSummary::new(1, 5.0, 1.2),
            Err(EvalError::InvalidSample { n: 1 })
        );
        assert!(matches!(
            SampleSummary::new(10, 5.0, -1.0),
            Err(EvalError::InvalidSpec(_))
        ));
        assert!(matches!(
            SampleSummary::new(10, f64::NAN, 1.0),
            Err(EvalError::InvalidSpec(_))
        ));
    }

    #[test]
    fn test_summary_matches_raw_sample() {
        let sample = Sample::new(vec![10.0, 12.0, 9.0, 11.0, 10.0, 13.0, 8.0, 12.0]).unwrap();
        let summary = sample.summarize();

        assert_eq!(summary.n, 8);
        assert!((summary.mean - 10.625).abs() < 1e-12);
        assert!((summary.std_dev - 1.685018016012207).abs() < 1e-12);
    }
}
