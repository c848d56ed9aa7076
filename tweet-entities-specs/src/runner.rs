//! Runs suites through the extractor.

use crate::config::HarnessConfig;
use crate::failures::{ExpectedFailures, HarnessResult};
use crate::fixture::{Case, ConformanceSuite, ExtractionKind};
use crate::formatter::format_failure;
use std::fmt::Debug;
use tweet_entities::{Entity, Extractor, Indices};

/// Outcome of a single case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    /// `Debug` renderings of both values.
    Failed { expected: String, actual: String },
}

/// A case together with its outcome.
#[derive(Debug, Clone)]
pub struct CaseReport {
    pub kind: ExtractionKind,
    pub description: String,
    pub text: String,
    /// Positions of the expected entities, for kinds that carry them.
    pub expected_indices: Vec<Indices>,
    /// Positions of the extracted entities, for kinds that carry them.
    pub actual_indices: Vec<Indices>,
    pub outcome: CaseOutcome,
}

impl CaseReport {
    /// The `<kind>/<description>` reference used by expected failures.
    pub fn reference(&self) -> String {
        ExpectedFailures::format_ref(self.kind, &self.description)
    }

    pub fn passed(&self) -> bool {
        self.outcome == CaseOutcome::Passed
    }
}

/// Every case report of one suite, in run order.
#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    pub name: String,
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cases: Vec::new(),
        }
    }

    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|case| case.passed()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|case| !case.passed())
    }

    fn run<T, F, I>(&mut self, kind: ExtractionKind, cases: &[Case<T>], extract: F, indices: I)
    where
        T: PartialEq + Debug,
        F: Fn(&Extractor<'_>) -> T,
        I: Fn(&T) -> Vec<Indices>,
    {
        for case in cases {
            let actual = extract(&Extractor::new(&case.text));
            let outcome = if actual == case.expected {
                tracing::debug!(kind = %kind, description = %case.description, "case passed");
                CaseOutcome::Passed
            } else {
                CaseOutcome::Failed {
                    expected: format!("{:?}", case.expected),
                    actual: format!("{:?}", actual),
                }
            };

            self.cases.push(CaseReport {
                kind,
                description: case.description.clone(),
                text: case.text.clone(),
                expected_indices: indices(&case.expected),
                actual_indices: indices(&actual),
                outcome,
            });
        }
    }
}

fn owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}

fn no_indices<T>(_: &T) -> Vec<Indices> {
    Vec::new()
}

fn entity_indices<E: Entity>(entities: &Vec<E>) -> Vec<Indices> {
    entities.iter().map(Entity::indices).collect()
}

/// Run every case of the configured kinds and compare against expectations.
pub fn run_suite(name: &str, suite: &ConformanceSuite, config: &HarnessConfig) -> SuiteReport {
    let tests = &suite.tests;
    let mut report = SuiteReport::new(name);

    for &kind in &config.kinds {
        match kind {
            ExtractionKind::Mentions => report.run(
                kind,
                &tests.mentions,
                |e| owned(e.mentioned_usernames()),
                no_indices,
            ),
            ExtractionKind::MentionsWithIndices => report.run(
                kind,
                &tests.mentions_with_indices,
                |e| e.mentioned_usernames_with_indices(),
                entity_indices,
            ),
            ExtractionKind::MentionsOrListsWithIndices => report.run(
                kind,
                &tests.mentions_or_lists_with_indices,
                |e| e.mentions_or_lists_with_indices(),
                entity_indices,
            ),
            ExtractionKind::Replies => report.run(
                kind,
                &tests.replies,
                |e| e.replied_username().map(str::to_string),
                no_indices,
            ),
            ExtractionKind::Urls => {
                report.run(kind, &tests.urls, |e| owned(e.urls()), no_indices)
            }
            ExtractionKind::UrlsWithIndices => report.run(
                kind,
                &tests.urls_with_indices,
                |e| e.urls_with_indices(),
                entity_indices,
            ),
            ExtractionKind::Hashtags => {
                report.run(kind, &tests.hashtags, |e| owned(e.hashtags()), no_indices)
            }
            ExtractionKind::HashtagsWithIndices => report.run(
                kind,
                &tests.hashtags_with_indices,
                |e| e.hashtags_with_indices(),
                entity_indices,
            ),
            ExtractionKind::Cashtags => {
                report.run(kind, &tests.cashtags, |e| owned(e.cashtags()), no_indices)
            }
            ExtractionKind::CashtagsWithIndices => report.run(
                kind,
                &tests.cashtags_with_indices,
                |e| e.cashtags_with_indices(),
                entity_indices,
            ),
        }
    }

    tracing::info!(
        suite = name,
        passed = report.passed(),
        failed = report.cases.len() - report.passed(),
        "suite finished"
    );
    report
}

/// Run a suite and classify each failure against the expected failures.
pub fn check_suite(
    name: &str,
    suite: &ConformanceSuite,
    config: &HarnessConfig,
    failures: &ExpectedFailures,
) -> HarnessResult {
    let report = run_suite(name, suite, config);
    let mut result = HarnessResult::new();

    for case in &report.cases {
        if case.passed() {
            result.record_pass();
            continue;
        }

        let reference = case.reference();
        let state = failures.is_expected(name, &reference);
        match failures.get_entry(name, &reference) {
            Some(entry) => tracing::info!(
                suite = name,
                case = %reference,
                state = ?state,
                reason = entry.reason.as_deref().unwrap_or("unspecified"),
                "expected failure"
            ),
            None => tracing::warn!(
                suite = name,
                case = %reference,
                "regression\n{}",
                format_failure(name, case)
            ),
        }
        result.record_failure(state);
    }

    result
}
