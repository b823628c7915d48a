use thiserror::Error;

/// Errors raised while evaluating a hypothesis test.
///
/// All errors are raised synchronously at the point of detection and abort
/// the evaluation; no partial result is produced.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    /// The sample is too small for a defined sample standard deviation.
    #[error("sample must contain at least 2 observations, got {n}")]
    InvalidSample { n: usize },

    /// The significance level is outside the open interval (0, 1).
    #[error("significance level must be strictly between 0 and 1, got {0}")]
    InvalidAlpha(f64),

    /// The standard error of the statistic is zero, so the statistic is
    /// undefined (all observations identical).
    #[error("standard error is zero; the test statistic is undefined")]
    DegenerateVariance,

    /// The specification itself is malformed (wrong number of samples for
    /// the test kind, or non-finite input reaching the engine).
    #[error("invalid test specification: {0}")]
    InvalidSpec(String),
}
