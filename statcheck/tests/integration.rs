//! Integration tests for statcheck.
//!
//! These exercise the full path the binary takes: free-text input through
//! sample parsing, spec construction, engine evaluation, and rendering.

use statcheck::{
    evaluate, parse_sample, parse_summary, Alternative, CriticalValues, EvalError, TerminalReporter,
    TestFamily, TestSpec,
};

#[test]
fn test_one_sample_from_text_to_result() {
    let sample = parse_sample("10, 12, 9, 11\n10 13 8 12").unwrap();
    let spec =
        TestSpec::one_sample(sample.summarize(), 10.0, 0.05, Alternative::TwoSided).unwrap();

    let result = evaluate(&spec).unwrap();

    assert_eq!(result.family, TestFamily::T);
    assert_eq!(result.degrees_of_freedom, Some(7.0));
    assert!((result.statistic - 1.0491086363278161).abs() < 1e-6);
    assert!((result.p_value - 0.32899331058403436).abs() < 1e-6);
    assert!(!result.reject_null);
}

#[test]
fn test_two_sample_welch_from_text() {
    let first = parse_sample("12 15 14 10 9 11").unwrap();
    let second = parse_sample("8 7 9 6 10 7").unwrap();
    let spec = TestSpec::two_sample(
        first.summarize(),
        second.summarize(),
        0.0,
        0.05,
        Alternative::TwoSided,
    )
    .unwrap();

    let result = evaluate(&spec).unwrap();

    assert_eq!(result.family, TestFamily::T);
    assert!((result.statistic - 3.569784703852378).abs() < 1e-6);
    assert!((result.degrees_of_freedom.unwrap() - 8.471438996881842).abs() < 1e-6);
    assert!((result.p_value - 0.006645140709451436).abs() < 1e-6);
    assert!(result.reject_null);
}

#[test]
fn test_two_sample_z_from_summaries() {
    let first = parse_summary("45,5.0,1.2").unwrap();
    let second = parse_summary("50,5.4,1.5").unwrap();
    let spec = TestSpec::two_sample(first, second, 0.0, 0.05, Alternative::Less).unwrap();

    let result = evaluate(&spec).unwrap();

    assert_eq!(result.family, TestFamily::Z);
    assert_eq!(result.degrees_of_freedom, None);
    assert!((result.statistic - (-1.4414999403128956)).abs() < 1e-6);
    match result.critical_values {
        CriticalValues::OneSided { bound } => {
            assert!((bound + 1.6448536269514724).abs() < 1e-6);
        }
        CriticalValues::TwoSided { .. } => panic!("expected a one-sided region"),
    }
    assert!(!result.reject_null);
}

#[test]
fn test_raw_text_and_summary_triple_agree() {
    let sample = parse_sample("3.1 4.7 2.8 5.2 4.4 3.9 4.1 3.3 4.8 3.6").unwrap();
    let summary = sample.summarize();
    let triple = format!("{},{},{}", summary.n, summary.mean, summary.std_dev);

    let from_text = evaluate(
        &TestSpec::one_sample(summary, 4.0, 0.05, Alternative::TwoSided).unwrap(),
    )
    .unwrap();
    let from_triple = evaluate(
        &TestSpec::one_sample(
            parse_summary(&triple).unwrap(),
            4.0,
            0.05,
            Alternative::TwoSided,
        )
        .unwrap(),
    )
    .unwrap();

    assert!((from_text.statistic - from_triple.statistic).abs() < 1e-9);
    assert!((from_text.p_value - from_triple.p_value).abs() < 1e-9);
    assert_eq!(from_text.reject_null, from_triple.reject_null);
}

#[test]
fn test_identical_two_sample_data_is_degenerate() {
    let first = parse_sample("5 5 5 5").unwrap();
    let second = parse_sample("5 5 5 5").unwrap();
    let spec = TestSpec::two_sample(
        first.summarize(),
        second.summarize(),
        0.0,
        0.05,
        Alternative::TwoSided,
    )
    .unwrap();

    assert_eq!(evaluate(&spec), Err(EvalError::DegenerateVariance));
}

#[test]
fn test_json_output_shape() {
    let spec = TestSpec::one_sample(
        parse_summary("45,5.2,1.0").unwrap(),
        5.0,
        0.05,
        Alternative::TwoSided,
    )
    .unwrap();
    let result = evaluate(&spec).unwrap();

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["family"], "Z");
    assert!(json["degrees_of_freedom"].is_null());
    assert!(json["p_value"].is_number());
    assert!(json["reject_null"].is_boolean());
    assert_eq!(json["hypotheses"]["null"], "H₀: μ = 5");
    assert!(json["rejection_region"].as_str().unwrap().starts_with("Reject H₀ if z"));
}

#[test]
fn test_rendered_report_is_complete() {
    let sample = parse_sample("12 15 14 10 9 11").unwrap();
    let spec =
        TestSpec::one_sample(sample.summarize(), 10.0, 0.05, Alternative::Greater).unwrap();
    let result = evaluate(&spec).unwrap();

    let mut buffer = Vec::new();
    TerminalReporter::without_colors()
        .render(&spec, &result, &mut buffer)
        .unwrap();
    let output = String::from_utf8(buffer).unwrap();

    for section in ["Hypotheses", "Rejection region", "Test statistic", "Conclusion"] {
        assert!(output.contains(section), "missing section: {section}");
    }
}
