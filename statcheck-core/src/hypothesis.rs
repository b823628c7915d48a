//! Test specifications: what is being tested, against what, and how.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EvalError;
use crate::sample::SampleSummary;

/// The form of the alternative hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alternative {
    /// H₁: parameter ≠ hypothesized value.
    TwoSided,
    /// H₁: parameter < hypothesized value (left-tailed).
    Less,
    /// H₁: parameter > hypothesized value (right-tailed).
    Greater,
}

impl Alternative {
    /// The comparison symbol used in the alternative-hypothesis statement.
    pub fn symbol(&self) -> &'static str {
        match self {
            Alternative::TwoSided => "≠",
            Alternative::Less => "<",
            Alternative::Greater => ">",
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Alternative::TwoSided => "two-sided",
            Alternative::Less => "less",
            Alternative::Greater => "greater",
        };
        f.write_str(s)
    }
}

impl FromStr for Alternative {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "two-sided" => Ok(Alternative::TwoSided),
            "less" => Ok(Alternative::Less),
            "greater" => Ok(Alternative::Greater),
            other => Err(format!(
                "unknown alternative '{other}' (expected two-sided, less, or greater)"
            )),
        }
    }
}

/// Which kind of mean test is being run. Used at the untyped boundary when
/// assembling a [`TestSpec`] from loose parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestKind {
    OneSample,
    TwoSample,
}

/// A complete, immutable specification of one hypothesis test. The variant
/// carries exactly the number of sample summaries its kind requires, so a
/// well-typed spec cannot have the wrong sample count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TestSpec {
    /// Test of a single mean against μ₀.
    OneSample {
        summary: SampleSummary,
        mu0: f64,
        alpha: f64,
        alternative: Alternative,
    },
    /// Test of the difference of two independent means against Δ₀ = μ₁ − μ₂.
    TwoSample {
        first: SampleSummary,
        second: SampleSummary,
        delta0: f64,
        alpha: f64,
        alternative: Alternative,
    },
}

impl TestSpec {
    /// Build a one-sample spec. The hypothesized mean must be finite; alpha
    /// is re-validated by the decision step.
    pub fn one_sample(
        summary: SampleSummary,
        mu0: f64,
        alpha: f64,
        alternative: Alternative,
    ) -> Result<Self, EvalError> {
        if !mu0.is_finite() {
            return Err(EvalError::InvalidSpec(
                "hypothesized mean must be finite".to_string(),
            ));
        }
        Ok(TestSpec::OneSample {
            summary,
            mu0,
            alpha,
            alternative,
        })
    }

    /// Build a two-sample (independent, Welch) spec.
    pub fn two_sample(
        first: SampleSummary,
        second: SampleSummary,
        delta0: f64,
        alpha: f64,
        alternative: Alternative,
    ) -> Result<Self, EvalError> {
        if !delta0.is_finite() {
            return Err(EvalError::InvalidSpec(
                "hypothesized difference must be finite".to_string(),
            ));
        }
        Ok(TestSpec::TwoSample {
            first,
            second,
            delta0,
            alpha,
            alternative,
        })
    }

    /// Assemble a spec from loose parts, as received from an untyped caller.
    /// The summary count must match the kind.
    pub fn from_summaries(
        kind: TestKind,
        summaries: Vec<SampleSummary>,
        hypothesized_value: f64,
        alpha: f64,
        alternative: Alternative,
    ) -> Result<Self, EvalError> {
        match (kind, summaries.as_slice()) {
            (TestKind::OneSample, [summary]) => {
                Self::one_sample(*summary, hypothesized_value, alpha, alternative)
            }
            (TestKind::TwoSample, [first, second]) => {
                Self::two_sample(*first, *second, hypothesized_value, alpha, alternative)
            }
            (kind, rest) => Err(EvalError::InvalidSpec(format!(
                "{} sample(s) supplied for a {:?} test",
                rest.len(),
                kind
            ))),
        }
    }

    pub fn alpha(&self) -> f64 {
        match self {
            TestSpec::OneSample { alpha, .. } | TestSpec::TwoSample { alpha, .. } => *alpha,
        }
    }

    pub fn alternative(&self) -> Alternative {
        match self {
            TestSpec::OneSample { alternative, .. }
            | TestSpec::TwoSample { alternative, .. } => *alternative,
        }
    }

    /// μ₀ for a one-sample test, Δ₀ for a two-sample test.
    pub fn hypothesized_value(&self) -> f64 {
        match self {
            TestSpec::OneSample { mu0, .. } => *mu0,
            TestSpec::TwoSample { delta0, .. } => *delta0,
        }
    }
}
