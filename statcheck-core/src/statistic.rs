//! Test-statistic computation from summary statistics.

use serde::{Deserialize, Serialize};

use crate::error::EvalError;
use crate::family::TestFamily;
use crate::hypothesis::TestSpec;

/// A computed test statistic. Degrees of freedom are present for the T
/// family and absent for Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    /// The standardized test statistic (z or t value).
    pub value: f64,
    /// Degrees of freedom of the Student-t reference distribution, when
    /// applicable. Fractional for the Welch two-sample test.
    pub df: Option<f64>,
}

/// Compute the test statistic and (for the T family) its degrees of freedom.
///
/// One-sample: stat = (x̄ − μ₀) / (s/√n). Both families use the sample
/// standard deviation in the standard error; for Z it stands in for the
/// population standard deviation.
///
/// Two-sample (independent, unequal variances): stat = (x̄₁ − x̄₂ − Δ₀) / se
/// with se = √(s₁²/n₁ + s₂²/n₂), and the Welch–Satterthwaite degrees of
/// freedom when the family is T.
pub fn compute_statistic(spec: &TestSpec, family: TestFamily) -> Result<Statistic, EvalError> {
    match spec {
        TestSpec::OneSample { summary, mu0, .. } => {
            let se = summary.std_dev / (summary.n as f64).sqrt();
            if se == 0.0 {
                return Err(EvalError::DegenerateVariance);
            }
            let value = (summary.mean - mu0) / se;
            let df = match family {
                TestFamily::T => Some((summary.n - 1) as f64),
                TestFamily::Z => None,
            };
            Ok(Statistic { value, df })
        }
        TestSpec::TwoSample {
            first,
            second,
            delta0,
            ..
        } => {
            let v1 = first.variance() / first.n as f64;
            let v2 = second.variance() / second.n as f64;
            let se = (v1 + v2).sqrt();
            if se == 0.0 {
                return Err(EvalError::DegenerateVariance);
            }
            let value = (first.mean - second.mean - delta0) / se;
            let df = match family {
                TestFamily::T => Some(welch_satterthwaite_df(v1, first.n, v2, second.n)),
                TestFamily::Z => None,
            };
            Ok(Statistic { value, df })
        }
    }
}

/// Welch–Satterthwaite degrees of freedom.
///
/// df = (s1²/n1 + s2²/n2)² / ((s1²/n1)²/(n1-1) + (s2²/n2)²/(n2-1))
///
/// Arguments are the per-sample variance-over-n terms. The caller has
/// already ruled out the all-zero case (se > 0), so the denominator is
/// strictly positive.
fn welch_satterthwaite_df(v1: f64, n1: usize, v2: f64, n2: usize) -> f64 {
    let numerator = (v1 + v2).powi(2);
    let denominator = v1.powi(2) / (n1 - 1) as f64 + v2.powi(2) / (n2 - 1) as f64;
    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypothesis::Alternative;
    use crate::sample::SampleSummary;

    #[test]
    fn test_one_sample_statistic() {
        // n=8, mean=10.625, s=1.685018016012207 (from [10,12,9,11,10,13,8,12])
        let summary = SampleSummary::new(8, 10.625, 1.685018016012207).unwrap();
        let spec =
            TestSpec::one_sample(summary, 10.0, 0.05, Alternative::TwoSided).unwrap();

        let stat = compute_statistic(&spec, TestFamily::T).unwrap();
        assert!((stat.value - 1.0491086363278161).abs() < 1e-9);
        assert_eq!(stat.df, Some(7.0));
    }

    #[test]
    fn test_one_sample_z_has_no_df() {
        let summary = SampleSummary::new(45, 10.625, 1.685).unwrap();
        let spec =
            TestSpec::one_sample(summary, 10.0, 0.05, Alternative::TwoSided).unwrap();

        let stat = compute_statistic(&spec, TestFamily::Z).unwrap();
        assert_eq!(stat.df, None);
    }

    #[test]
    fn test_two_sample_statistic_and_welch_df() {
        // a=[12,15,14,10,9,11], b=[8,7,9,6,10,7]
        let first = SampleSummary::new(6, 11.833333333333334, 5.366666666666666f64.sqrt()).unwrap();
        let second = SampleSummary::new(6, 7.833333333333333, 2.166666666666667f64.sqrt()).unwrap();
        let spec =
            TestSpec::two_sample(first, second, 0.0, 0.05, Alternative::TwoSided).unwrap();

        let stat = compute_statistic(&spec, TestFamily::T).unwrap();
        assert!((stat.value - 3.569784703852378).abs() < 1e-9);
        assert!((stat.df.unwrap() - 8.471438996881842).abs() < 1e-9);
    }

    #[test]
    fn test_two_sample_z_same_statistic_no_df() {
        let first = SampleSummary::new(45, 5.0, 1.2).unwrap();
        let second = SampleSummary::new(50, 5.4, 1.5).unwrap();
        let spec = TestSpec::two_sample(first, second, 0.0, 0.05, Alternative::Less).unwrap();

        let stat = compute_statistic(&spec, TestFamily::Z).unwrap();
        assert!((stat.value - (-1.4414999403128956)).abs() < 1e-9);
        assert_eq!(stat.df, None);
    }

    #[test]
    fn test_welch_df_bounds_for_unequal_variances() {
        // For unequal variances, df lies in (min(n1,n2)-1, n1+n2-2].
        let first = SampleSummary::new(10, 0.0, 2.0).unwrap();
        let second = SampleSummary::new(12, 1.0, 3.0).unwrap();
        let spec =
            TestSpec::two_sample(first, second, 0.0, 0.05, Alternative::TwoSided).unwrap();

        let stat = compute_statistic(&spec, TestFamily::T).unwrap();
        let df = stat.df.unwrap();
        assert!((df - 19.190545987541217).abs() < 1e-9);
        assert!(df > 9.0); // min(10,12) - 1
        assert!(df <= 20.0); // 10 + 12 - 2
    }

    #[test]
    fn test_degenerate_variance_one_sample() {
        let summary = SampleSummary::new(5, 3.0, 0.0).unwrap();
        let spec = TestSpec::one_sample(summary, 3.0, 0.05, Alternative::TwoSided).unwrap();

        assert_eq!(
            compute_statistic(&spec, TestFamily::T),
            Err(EvalError::DegenerateVariance)
        );
    }

    #[test]
    fn test_degenerate_variance_two_sample() {
        let first = SampleSummary::new(5, 3.0, 0.0).unwrap();
        let second = SampleSummary::new(5, 4.0, 0.0).unwrap();
        let spec =
            TestSpec::two_sample(first, second, 0.0, 0.05, Alternative::TwoSided).unwrap();

        assert_eq!(
            compute_statistic(&spec, TestFamily::T),
            Err(EvalError::DegenerateVariance)
        );
    }
}
