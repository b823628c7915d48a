//! Terminal rendering of a test result.

use std::io::{self, Write};

use colored::Colorize;
use statcheck_core::{Alternative, SampleSummary, TestResult, TestSpec};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Renders an evaluated test to the terminal: sample summaries, hypotheses,
/// rejection region, statistic, p-value, and the conclusion.
#[derive(Debug, Clone, Default)]
pub struct TerminalReporter {
    /// Whether to use colors in output (defaults to true).
    use_colors: bool,
}

impl TerminalReporter {
    /// Create a new terminal reporter with default settings.
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Create a terminal reporter with color output disabled.
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// Write the full report to stdout.
    pub fn report(&self, spec: &TestSpec, result: &TestResult) -> Result<(), ReportError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.render(spec, result, &mut handle)?;
        Ok(())
    }

    /// Write the full report to the given writer.
    pub fn render(
        &self,
        spec: &TestSpec,
        result: &TestResult,
        writer: &mut impl Write,
    ) -> io::Result<()> {
        writeln!(writer)?;
        match spec {
            TestSpec::OneSample { summary, .. } => {
                writeln!(writer, "One-sample test of the mean ({}-test)", result.family)?;
                writeln!(writer)?;
                self.write_summary(writer, "Sample", summary)?;
            }
            TestSpec::TwoSample { first, second, .. } => {
                writeln!(
                    writer,
                    "Two-sample test of independent means ({}-test)",
                    result.family
                )?;
                writeln!(writer)?;
                self.write_summary(writer, "Sample 1", first)?;
                self.write_summary(writer, "Sample 2", second)?;
            }
        }

        writeln!(writer)?;
        writeln!(writer, "Hypotheses")?;
        writeln!(writer, "  {}", result.hypotheses.null)?;
        writeln!(writer, "  {}", result.hypotheses.alternative)?;

        writeln!(writer)?;
        writeln!(writer, "Rejection region")?;
        writeln!(writer, "  {}", result.rejection_region)?;

        writeln!(writer)?;
        writeln!(writer, "Test statistic and p-value")?;
        match result.degrees_of_freedom {
            Some(df) => writeln!(
                writer,
                "  {} = {:.4}  (df = {:.2})",
                result.family.symbol(),
                result.statistic,
                df
            )?,
            None => writeln!(
                writer,
                "  {} = {:.4}",
                result.family.symbol(),
                result.statistic
            )?,
        }
        writeln!(writer, "  p-value = {:.6}", result.p_value)?;

        writeln!(writer)?;
        writeln!(writer, "Conclusion")?;
        writeln!(
            writer,
            "  {} (α = {})",
            self.format_conclusion(result),
            result.alpha
        )?;
        writeln!(writer, "  {}", evidence_sentence(spec, result))?;

        Ok(())
    }

    fn write_summary(
        &self,
        writer: &mut impl Write,
        label: &str,
        summary: &SampleSummary,
    ) -> io::Result<()> {
        writeln!(
            writer,
            "  {}: n = {}, x̄ = {:.4}, s = {:.4}",
            label, summary.n, summary.mean, summary.std_dev
        )
    }

    /// Format the conclusion label with appropriate coloring.
    fn format_conclusion(&self, result: &TestResult) -> String {
        if result.reject_null {
            let text = "Reject H₀";
            if self.use_colors {
                text.green().bold().to_string()
            } else {
                text.to_string()
            }
        } else {
            let text = "Fail to reject H₀";
            if self.use_colors {
                text.yellow().to_string()
            } else {
                text.to_string()
            }
        }
    }
}

/// The plain-language evidence sentence, phrased for the test kind and
/// alternative form.
fn evidence_sentence(spec: &TestSpec, result: &TestResult) -> String {
    let strength = if result.reject_null {
        "strong"
    } else {
        "insufficient"
    };

    let claim = match (spec, spec.alternative()) {
        (TestSpec::OneSample { .. }, Alternative::TwoSided) => {
            "the true mean differs from μ₀".to_string()
        }
        (TestSpec::OneSample { .. }, Alternative::Greater) => {
            "the true mean is greater than μ₀".to_string()
        }
        (TestSpec::OneSample { .. }, Alternative::Less) => {
            "the true mean is less than μ₀".to_string()
        }
        (TestSpec::TwoSample { .. }, Alternative::TwoSided) => {
            "the two true means are different".to_string()
        }
        (TestSpec::TwoSample { .. }, Alternative::Greater) => {
            "μ₁ − μ₂ is greater than Δ₀".to_string()
        }
        (TestSpec::TwoSample { .. }, Alternative::Less) => {
            "μ₁ − μ₂ is less than Δ₀".to_string()
        }
    };

    format!("There is {strength} statistical evidence that {claim}.")
}
