//! Command-line interface for statcheck.

use crate::config::Config;
use clap::Parser;
use statcheck_core::Alternative;

#[derive(Debug, Parser)]
#[command(name = "statcheck")]
#[command(about = "Hypothesis tests for means (auto Z/T)")]
#[command(version)]
pub struct Cli {
    /// First sample values, separated by commas and/or whitespace (or use --summary)
    #[arg(short, long, required_unless_present = "summary")]
    pub sample: Option<String>,

    /// First sample as a pre-computed 'n,mean,stddev' triple
    #[arg(long, conflicts_with = "sample")]
    pub summary: Option<String>,

    /// Second sample values; supplying one switches to the two-sample test
    #[arg(long, conflicts_with = "summary2")]
    pub sample2: Option<String>,

    /// Second sample as a pre-computed 'n,mean,stddev' triple
    #[arg(long)]
    pub summary2: Option<String>,

    /// Hypothesized mean μ₀ (one-sample) or difference Δ₀ = μ₁ − μ₂ (two-sample)
    #[arg(long, default_value_t = 0.0)]
    pub value: f64,

    /// Significance level α, strictly between 0 and 1
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Alternative hypothesis: two-sided, less, or greater
    #[arg(long)]
    pub alternative: Option<Alternative>,

    /// Emit the result as JSON instead of the terminal report
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to config file
    #[arg(long, default_value = crate::config::DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether a second sample was supplied, selecting the two-sample test.
    pub fn is_two_sample(&self) -> bool {
        self.sample2.is_some() || self.summary2.is_some()
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// CLI arguments take precedence over config file values. Only
    /// explicitly-passed options override.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(alpha) = self.alpha {
            config.test.alpha = alpha;
        }

        if let Some(alternative) = self.alternative {
            config.test.alternative = alternative;
        }

        if self.no_color {
            config.output.colors = false;
        }
    }
}
