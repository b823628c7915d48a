use anyhow::{bail, Context, Result};
use clap::Parser;
use statcheck::config::DEFAULT_CONFIG_FILE;
use statcheck::{
    evaluate, parse_sample, parse_summary, Cli, Config, SampleSummary, TerminalReporter, TestSpec,
};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config and apply CLI overrides
    let mut config = load_config(&cli.config)?;
    cli.apply_to_config(&mut config);

    if cli.verbose {
        eprintln!("Configuration: {:?}", config);
    }

    // Translate input into sample summaries
    let first = first_summary(&cli)?;
    let second = second_summary(&cli)?;

    // Build the test specification
    let alpha = config.test.alpha;
    let alternative = config.test.alternative;
    let spec = match second {
        Some(second) => TestSpec::two_sample(first, second, cli.value, alpha, alternative)
            .context("Invalid two-sample test specification")?,
        None => TestSpec::one_sample(first, cli.value, alpha, alternative)
            .context("Invalid one-sample test specification")?,
    };

    // Evaluate and present
    let result = evaluate(&spec).context("Failed to evaluate the test")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let reporter = if config.output.colors {
            TerminalReporter::new()
        } else {
            TerminalReporter::without_colors()
        };
        reporter.report(&spec, &result)?;
    }

    Ok(())
}

/// Load the config from an explicitly-passed path, or fall back to defaults
/// when the default file is absent.
fn load_config(path: &str) -> Result<Config> {
    let explicit = (path != DEFAULT_CONFIG_FILE).then(|| Path::new(path));
    Config::load_from(explicit)
}

fn first_summary(cli: &Cli) -> Result<SampleSummary> {
    if let Some(text) = &cli.sample {
        let sample = parse_sample(text).context("Failed to parse the first sample")?;
        Ok(sample.summarize())
    } else if let Some(text) = &cli.summary {
        parse_summary(text).context("Failed to parse the first summary")
    } else {
        bail!("a sample or summary is required")
    }
}

fn second_summary(cli: &Cli) -> Result<Option<SampleSummary>> {
    if let Some(text) = &cli.sample2 {
        let sample = parse_sample(text).context("Failed to parse the second sample")?;
        Ok(Some(sample.summarize()))
    } else if let Some(text) = &cli.summary2 {
        Ok(Some(
            parse_summary(text).context("Failed to parse the second summary")?,
        ))
    } else {
        Ok(None)
    }
}
