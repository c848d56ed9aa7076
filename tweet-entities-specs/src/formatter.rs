//! Rich error formatting for failed cases.

use crate::fixture::ExtractionKind;
use crate::runner::{CaseOutcome, CaseReport};
use std::fmt::Write;
use tweet_entities::Indices;
use unicode_width::UnicodeWidthChar;

/// Format a failed case with its text, the expected entity positions
/// underlined, and both values.
pub fn format_failure(suite_name: &str, case: &CaseReport) -> String {
    let mut output = String::new();

    // Header
    writeln!(output, "\nFAIL: {}: {}", suite_name, case.reference()).unwrap();
    writeln!(output).unwrap();

    // Text with the expected positions underlined
    writeln!(output, "  {}", case.text).unwrap();
    if let Some(carets) = underline(&case.text, &case.expected_indices) {
        writeln!(output, "  {}", carets).unwrap();
    }
    writeln!(output).unwrap();

    match &case.outcome {
        CaseOutcome::Failed { expected, actual } => {
            writeln!(output, "  expected: {}", expected).unwrap();
            writeln!(output, "  actual:   {}", actual).unwrap();
        }
        CaseOutcome::Passed => {
            // Should not happen in format_failure
            writeln!(output, "  (passed)").unwrap();
        }
    }

    if let Some(hint) = generate_hint(case) {
        writeln!(output).unwrap();
        writeln!(output, "  hint: {}", hint).unwrap();
    }

    output
}

/// Format a summary of one suite.
pub fn format_summary(
    suite_name: &str,
    passed: usize,
    failed: usize,
    expected_failures: usize,
    regressions: usize,
) -> String {
    let mut output = String::new();

    let status = if regressions > 0 { "FAIL" } else { "PASS" };

    writeln!(output, "\n{}: {}", status, suite_name).unwrap();
    writeln!(
        output,
        "  {} passed, {} failed ({} expected, {} regressions)",
        passed, failed, expected_failures, regressions
    )
    .unwrap();

    output
}

/// Carets under the characters covered by `indices`, aligned by display
/// width. `None` when there is nothing to underline.
fn underline(text: &str, indices: &[Indices]) -> Option<String> {
    if indices.is_empty() {
        return None;
    }

    let mut line = String::new();
    for (char_idx, c) in text.chars().enumerate() {
        let covered = indices
            .iter()
            .any(|range| range.start <= char_idx && char_idx < range.end);
        let fill = if covered { '^' } else { ' ' };
        line.extend(std::iter::repeat(fill).take(c.width().unwrap_or(0)));
    }

    let line = line.trim_end();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

fn generate_hint(case: &CaseReport) -> Option<String> {
    // Same entities at other positions on non-ASCII text usually means the
    // offsets were counted in bytes or UTF-16 units.
    if !case.text.is_ascii()
        && !case.expected_indices.is_empty()
        && case.expected_indices.len() == case.actual_indices.len()
        && case.expected_indices != case.actual_indices
    {
        return Some(
            "indices differ on a text with multi-byte characters - offsets are counted in characters, not bytes"
                .to_string(),
        );
    }

    if matches!(case.kind, ExtractionKind::Urls | ExtractionKind::UrlsWithIndices)
        && !case.text.contains("://")
    {
        return Some(
            "URLs are only extracted with an explicit http:// or https:// protocol".to_string(),
        );
    }

    None
}
