//! The accept/reject decision: rejection region, p-value, and conclusion.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

use crate::error::EvalError;
use crate::family::TestFamily;
use crate::hypothesis::Alternative;

/// Boundary (or boundaries) of the rejection region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CriticalValues {
    /// Two-tailed region: reject outside [lower, upper]. Symmetric, since
    /// both reference distributions are symmetric about zero.
    TwoSided { lower: f64, upper: f64 },
    /// One-tailed region with a single boundary.
    OneSided { bound: f64 },
}

/// Outcome of the decision step for one statistic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Rejection-region boundary or boundaries.
    pub critical: CriticalValues,
    /// Probability, under H₀, of a statistic at least as extreme as observed.
    pub p_value: f64,
    /// Whether H₀ is rejected at the given significance level.
    pub reject_null: bool,
}

/// The reference distribution of a test statistic. Both variants are
/// stateless; cdf and quantile calls are reentrant.
enum RefDist {
    Normal(Normal),
    StudentsT(StudentsT),
}

impl RefDist {
    fn new(family: TestFamily, df: Option<f64>) -> Result<Self, EvalError> {
        match family {
            TestFamily::Z => Normal::new(0.0, 1.0)
                .map(RefDist::Normal)
                .map_err(|e| EvalError::InvalidSpec(e.to_string())),
            TestFamily::T => {
                let df = df.ok_or_else(|| {
                    EvalError::InvalidSpec(
                        "a t statistic requires degrees of freedom".to_string(),
                    )
                })?;
                StudentsT::new(0.0, 1.0, df)
                    .map(RefDist::StudentsT)
                    .map_err(|_| {
                        EvalError::InvalidSpec(format!(
                            "degrees of freedom must be positive, got {df}"
                        ))
                    })
            }
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        match self {
            RefDist::Normal(d) => d.cdf(x),
            RefDist::StudentsT(d) => d.cdf(x),
        }
    }

    fn quantile(&self, p: f64) -> f64 {
        match self {
            RefDist::Normal(d) => d.inverse_cdf(p),
            RefDist::StudentsT(d) => d.inverse_cdf(p),
        }
    }
}

/// Decide whether to reject H₀.
///
/// A single-shot decision table keyed by the alternative form:
///
/// - TwoSided: critical ±q(1−α/2), p = 2·(1 − CDF(|stat|)), reject when
///   |stat| > q(1−α/2).
/// - Less: critical q(α), p = CDF(stat), reject when stat < q(α).
/// - Greater: critical q(1−α), p = 1 − CDF(stat), reject when stat > q(1−α).
///
/// The critical-value comparison and the p-vs-α comparison are equivalent
/// for these continuous reference distributions.
pub fn decide(
    statistic: f64,
    family: TestFamily,
    df: Option<f64>,
    alpha: f64,
    alternative: Alternative,
) -> Result<Decision, EvalError> {
    // NaN fails both comparisons, so this also rejects a NaN alpha.
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(EvalError::InvalidAlpha(alpha));
    }

    let dist = RefDist::new(family, df)?;

    let (critical, p_value, reject_null) = match alternative {
        Alternative::TwoSided => {
            let upper = dist.quantile(1.0 - alpha / 2.0);
            let p = 2.0 * (1.0 - dist.cdf(statistic.abs()));
            (
                CriticalValues::TwoSided {
                    lower: -upper,
                    upper,
                },
                p,
                statistic.abs() > upper,
            )
        }
        Alternative::Less => {
            let bound = dist.quantile(alpha);
            (
                CriticalValues::OneSided { bound },
                dist.cdf(statistic),
                statistic < bound,
            )
        }
        Alternative::Greater => {
            let bound = dist.quantile(1.0 - alpha);
            (
                CriticalValues::OneSided { bound },
                1.0 - dist.cdf(statistic),
                statistic > bound,
            )
        }
    };

    Ok(Decision {
        critical,
        p_value: p_value.clamp(0.0, 1.0),
        reject_null,
    })
}
