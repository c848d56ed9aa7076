#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Conformance harness for tweet-entities.
//!
//! Test cases are defined declaratively in YAML suites, one list of
//! `(description, text, expected)` triples per extraction kind, and run
//! through [`tweet_entities::Extractor`].
//!
//! ## Modules
//!
//! - [`fixture`] - Suite data model and YAML parsing
//! - [`loader`] - Suite file loading
//! - [`config`] - Which extraction kinds to run
//! - [`runner`] - Runs suites and compares results
//! - [`errors`] - Error types for the harness
//! - [`formatter`] - Failure reports with underlined positions
//! - [`failures`] - Expected failures tracking via TOML

pub mod config;
pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

pub use config::HarnessConfig;
pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{parse_suite, Case, ConformanceSuite, ExtractionKind, SuiteTests};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_suites, load_suite};
pub use runner::{check_suite, run_suite, CaseOutcome, CaseReport, SuiteReport};
