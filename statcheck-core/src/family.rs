//! Z-vs-T family selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hypothesis::TestSpec;

/// Samples strictly larger than this use the standard normal reference
/// distribution; smaller samples use Student-t.
const LARGE_SAMPLE_THRESHOLD: usize = 40;

/// The reference-distribution family of a test statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestFamily {
    /// Standard normal reference distribution.
    Z,
    /// Student-t reference distribution, parameterized by degrees of freedom.
    T,
}

impl TestFamily {
    /// Lowercase statistic symbol ("z" or "t") for report text.
    pub fn symbol(&self) -> &'static str {
        match self {
            TestFamily::Z => "z",
            TestFamily::T => "t",
        }
    }
}

impl fmt::Display for TestFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestFamily::Z => f.write_str("Z"),
            TestFamily::T => f.write_str("T"),
        }
    }
}

/// Select the statistic family from the sample size(s).
///
/// One-sample: Z when n > 40. Two-sample: Z only when both sizes exceed 40.
/// Total over all valid specs; the caller never chooses the family.
pub fn select_family(spec: &TestSpec) -> TestFamily {
    match spec {
        TestSpec::OneSample { summary, .. } => {
            if summary.n > LARGE_SAMPLE_THRESHOLD {
                TestFamily::Z
            } else {
                TestFamily::T
            }
        }
        TestSpec::TwoSample { first, second, .. } => {
            if first.n > LARGE_SAMPLE_THRESHOLD && second.n > LARGE_SAMPLE_THRESHOLD {
                TestFamily::Z
            } else {
                TestFamily::T
            }
        }
    }
}
