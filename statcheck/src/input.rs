//! Parsing of free-text sample input and summary triples.

use statcheck_core::{EvalError, Sample, SampleSummary};
use thiserror::Error;

/// Errors raised while translating command-line input into samples.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("sample input is empty")]
    Empty,

    #[error("could not parse '{0}' as a number")]
    BadNumber(String),

    #[error("summary must be 'n,mean,stddev', got '{0}'")]
    BadSummary(String),

    #[error(transparent)]
    Invalid(#[from] EvalError),
}

/// Parse a sample from free text. Values may be separated by commas,
/// spaces, or newlines, in any combination.
pub fn parse_sample(text: &str) -> Result<Sample, InputError> {
    let tokens: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(InputError::Empty);
    }

    let values = tokens
        .iter()
        .map(|t| {
            t.parse::<f64>()
                .map_err(|_| InputError::BadNumber(t.to_string()))
        })
        .collect::<Result<Vec<f64>, InputError>>()?;

    Ok(Sample::new(values)?)
}

/// Parse a pre-computed summary from an `n,mean,stddev` triple.
pub fn parse_summary(text: &str) -> Result<SampleSummary, InputError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let [n, mean, std_dev] = parts.as_slice() else {
        return Err(InputError::BadSummary(text.to_string()));
    };

    let n = n
        .parse::<usize>()
        .map_err(|_| InputError::BadNumber(n.to_string()))?;
    let mean = mean
        .parse::<f64>()
        .map_err(|_| InputError::BadNumber(mean.to_string()))?;
    let std_dev = std_dev
        .parse::<f64>()
        .map_err(|_| InputError::BadNumber(std_dev.to_string()))?;

    Ok(SampleSummary::new(n, mean, std_dev)?)
}
