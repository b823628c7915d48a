//! The single evaluation pipeline exposed to callers.

use crate::decision::decide;
use crate::error::EvalError;
use crate::family::select_family;
use crate::hypothesis::TestSpec;
use crate::report::{assemble, TestResult};
use crate::statistic::compute_statistic;

/// Evaluate one hypothesis test: select the statistic family, compute the
/// statistic and degrees of freedom, decide, and package the result.
///
/// Pure and request-scoped; no state persists between calls, so independent
/// evaluations may run concurrently without coordination.
pub fn evaluate(spec: &TestSpec) -> Result<TestResult, EvalError> {
    let family = select_family(spec);
    let statistic = compute_statistic(spec, family)?;
    let decision = decide(
        statistic.value,
        family,
        statistic.df,
        spec.alpha(),
        spec.alternative(),
    )?;
    Ok(assemble(spec, family, &statistic, &decision))
}
