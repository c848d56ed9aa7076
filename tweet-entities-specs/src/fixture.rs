//! Conformance suite data model.
//!
//! A suite is a YAML document with one list of cases per extraction kind:
//!
//! ```yaml
//! tests:
//!   hashtags_with_indices:
//!     - description: "Hashtag after a multi-byte character"
//!       text: "😀 #emoji"
//!       expected: [{ hashtag: "emoji", indices: [2, 8] }]
//! ```
//!
//! Expected values deserialize straight into the extractor's record types.

use crate::errors::SpecResult;
use serde::{Deserialize, Serialize};
use tweet_entities::{CashtagEntity, HashtagEntity, MentionEntity, MentionOrListEntity, UrlEntity};

/// One parsed YAML suite.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConformanceSuite {
    pub tests: SuiteTests,
}

/// The cases of a suite, grouped by extraction kind. Kinds a suite does not
/// mention are empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteTests {
    #[serde(default)]
    pub mentions: Vec<Case<Vec<String>>>,
    #[serde(default)]
    pub mentions_with_indices: Vec<Case<Vec<MentionEntity>>>,
    #[serde(default)]
    pub mentions_or_lists_with_indices: Vec<Case<Vec<MentionOrListEntity>>>,
    #[serde(default)]
    pub replies: Vec<Case<Option<String>>>,
    #[serde(default)]
    pub urls: Vec<Case<Vec<String>>>,
    #[serde(default)]
    pub urls_with_indices: Vec<Case<Vec<UrlEntity>>>,
    #[serde(default)]
    pub hashtags: Vec<Case<Vec<String>>>,
    #[serde(default)]
    pub hashtags_with_indices: Vec<Case<Vec<HashtagEntity>>>,
    #[serde(default)]
    pub cashtags: Vec<Case<Vec<String>>>,
    #[serde(default)]
    pub cashtags_with_indices: Vec<Case<Vec<CashtagEntity>>>,
}

impl SuiteTests {
    /// Number of cases of one kind.
    pub fn count(&self, kind: ExtractionKind) -> usize {
        match kind {
            ExtractionKind::Mentions => self.mentions.len(),
            ExtractionKind::MentionsWithIndices => self.mentions_with_indices.len(),
            ExtractionKind::MentionsOrListsWithIndices => self.mentions_or_lists_with_indices.len(),
            ExtractionKind::Replies => self.replies.len(),
            ExtractionKind::Urls => self.urls.len(),
            ExtractionKind::UrlsWithIndices => self.urls_with_indices.len(),
            ExtractionKind::Hashtags => self.hashtags.len(),
            ExtractionKind::HashtagsWithIndices => self.hashtags_with_indices.len(),
            ExtractionKind::Cashtags => self.cashtags.len(),
            ExtractionKind::CashtagsWithIndices => self.cashtags_with_indices.len(),
        }
    }

    /// Number of cases across all kinds.
    pub fn len(&self) -> usize {
        ExtractionKind::ALL.iter().map(|&kind| self.count(kind)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single `(description, text, expected)` triple.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Case<T> {
    pub description: String,
    pub text: String,
    pub expected: T,
}

/// The extraction operation a list of cases exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionKind {
    Mentions,
    MentionsWithIndices,
    MentionsOrListsWithIndices,
    Replies,
    Urls,
    UrlsWithIndices,
    Hashtags,
    HashtagsWithIndices,
    Cashtags,
    CashtagsWithIndices,
}

impl ExtractionKind {
    pub const ALL: [ExtractionKind; 10] = [
        ExtractionKind::Mentions,
        ExtractionKind::MentionsWithIndices,
        ExtractionKind::MentionsOrListsWithIndices,
        ExtractionKind::Replies,
        ExtractionKind::Urls,
        ExtractionKind::UrlsWithIndices,
        ExtractionKind::Hashtags,
        ExtractionKind::HashtagsWithIndices,
        ExtractionKind::Cashtags,
        ExtractionKind::CashtagsWithIndices,
    ];

    /// The key used for this kind in suites and configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            ExtractionKind::Mentions => "mentions",
            ExtractionKind::MentionsWithIndices => "mentions_with_indices",
            ExtractionKind::MentionsOrListsWithIndices => "mentions_or_lists_with_indices",
            ExtractionKind::Replies => "replies",
            ExtractionKind::Urls => "urls",
            ExtractionKind::UrlsWithIndices => "urls_with_indices",
            ExtractionKind::Hashtags => "hashtags",
            ExtractionKind::HashtagsWithIndices => "hashtags_with_indices",
            ExtractionKind::Cashtags => "cashtags",
            ExtractionKind::CashtagsWithIndices => "cashtags_with_indices",
        }
    }

    /// Whether cases of this kind carry entity positions.
    pub fn has_indices(self) -> bool {
        self.as_str().ends_with("_with_indices")
    }
}

impl std::fmt::Display for ExtractionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a suite from YAML text.
pub fn parse_suite(content: &str) -> SpecResult<ConformanceSuite> {
    Ok(serde_yaml::from_str(content)?)
}
