//! statcheck: hypothesis tests for means (auto Z/T) from the command line.
//!
//! This crate is the presentation layer around the `statcheck-core` decision
//! engine: it parses sample input, loads configuration, builds a test
//! specification, and renders the evaluated result.

pub mod cli;
pub mod config;
pub mod input;
pub mod report;

// Re-export core types for convenience
pub use statcheck_core::{
    evaluate, Alternative, CriticalValues, EvalError, Sample, SampleSummary, TestFamily,
    TestResult, TestSpec,
};

// Re-export main types from this crate
pub use cli::Cli;
pub use config::Config;
pub use input::{parse_sample, parse_summary, InputError};
pub use report::{ReportError, TerminalReporter};
