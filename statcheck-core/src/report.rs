//! Packaging of a completed evaluation into a single result object.

use serde::{Deserialize, Serialize};

use crate::decision::{CriticalValues, Decision};
use crate::family::TestFamily;
use crate::hypothesis::{Alternative, TestSpec};
use crate::statistic::Statistic;

/// Human-readable hypothesis statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypotheses {
    /// The null hypothesis, e.g. "H₀: μ = 10".
    pub null: String,
    /// The alternative hypothesis, e.g. "Hₐ: μ ≠ 10".
    pub alternative: String,
}

/// The complete result of one hypothesis-test evaluation. Immutable; every
/// numeric field is carried through unchanged from the upstream steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// Which reference-distribution family was selected.
    pub family: TestFamily,
    /// The test statistic (z or t value).
    pub statistic: f64,
    /// Degrees of freedom; present for T, absent for Z.
    pub degrees_of_freedom: Option<f64>,
    /// Rejection-region boundary or boundaries.
    pub critical_values: CriticalValues,
    /// The p-value, in [0, 1].
    pub p_value: f64,
    /// Whether H₀ is rejected.
    pub reject_null: bool,
    /// The significance level the decision was made at.
    pub alpha: f64,
    /// H₀ and Hₐ statements.
    pub hypotheses: Hypotheses,
    /// Description of the rejection region, e.g.
    /// "Reject H₀ if t < -2.3646 or t > 2.3646".
    pub rejection_region: String,
}

/// Package the spec, selected family, statistic, and decision into a
/// [`TestResult`]. Pure aggregation and formatting; no numeric value is
/// recomputed or altered.
pub fn assemble(
    spec: &TestSpec,
    family: TestFamily,
    statistic: &Statistic,
    decision: &Decision,
) -> TestResult {
    TestResult {
        family,
        statistic: statistic.value,
        degrees_of_freedom: statistic.df,
        critical_values: decision.critical,
        p_value: decision.p_value,
        reject_null: decision.reject_null,
        alpha: spec.alpha(),
        hypotheses: hypotheses_text(spec),
        rejection_region: rejection_region_text(&decision.critical, family, spec.alternative()),
    }
}

fn hypotheses_text(spec: &TestSpec) -> Hypotheses {
    let symbol = spec.alternative().symbol();
    match spec {
        TestSpec::OneSample { mu0, .. } => Hypotheses {
            null: format!("H₀: μ = {mu0}"),
            alternative: format!("Hₐ: μ {symbol} {mu0}"),
        },
        TestSpec::TwoSample { delta0, .. } => Hypotheses {
            null: format!("H₀: μ₁ − μ₂ = {delta0}"),
            alternative: format!("Hₐ: μ₁ − μ₂ {symbol} {delta0}"),
        },
    }
}

fn rejection_region_text(
    critical: &CriticalValues,
    family: TestFamily,
    alternative: Alternative,
) -> String {
    let s = family.symbol();
    // The tail comes from the alternative form; the bound's sign does not
    // identify it (q(1-α) is negative for α > 0.5).
    match (alternative, critical) {
        (_, CriticalValues::TwoSided { lower, upper }) => {
            format!("Reject H₀ if {s} < {lower:.4} or {s} > {upper:.4}")
        }
        (Alternative::Less, CriticalValues::OneSided { bound }) => {
            format!("Reject H₀ if {s} < {bound:.4}")
        }
        (_, CriticalValues::OneSided { bound }) => {
            format!("Reject H₀ if {s} > {bound:.4}")
        }
    }
}
