//! statcheck-core: decision engine for Z/T hypothesis tests on means.
//!
//! One-sample tests against a hypothesized mean and two-sample independent
//! (Welch) tests against a hypothesized difference. The engine selects the
//! statistic family from the sample sizes, computes the statistic and
//! degrees of freedom, derives the rejection region and p-value for the
//! chosen alternative, and packages everything into a single immutable
//! [`TestResult`].
//!
//! Every evaluation is a pure function of its inputs; there is no shared
//! state, caching, or I/O.

pub mod decision;
pub mod engine;
pub mod error;
pub mod family;
pub mod hypothesis;
pub mod report;
pub mod sample;
pub mod statistic;

// Re-export main types for convenience
pub use decision::{decide, CriticalValues, Decision};
pub use engine::evaluate;
pub use error::EvalError;
pub use family::{select_family, TestFamily};
pub use hypothesis::{Alternative, TestKind, TestSpec};
pub use report::{assemble, Hypotheses, TestResult};
pub use sample::{Sample, SampleSummary};
pub use statistic::{compute_statistic, Statistic};
