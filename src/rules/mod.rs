//! The pattern rule set.
//!
//! A [`RuleSet`] maps every [`RuleName`] to a compiled [`Rule`]. The set is
//! built once, on first use, and shared read-only by every extraction.

mod classes;
mod patterns;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Named capture groups used across all rules.
///
/// Rules address their captures through this enum instead of by position, so
/// reordering groups inside a pattern cannot silently shift which substring
/// is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Leading context consumed in front of the entity.
    Before,
    /// The entity marker (`#`, `$`, `@` and their full-width forms).
    Marker,
    Hashtag,
    Cashtag,
    Url,
    Protocol,
    Domain,
    Port,
    Path,
    Query,
    ScreenName,
    ListSlug,
}

impl Group {
    /// The capture group name used inside patterns.
    pub fn name(self) -> &'static str {
        match self {
            Group::Before => "before",
            Group::Marker => "marker",
            Group::Hashtag => "hashtag",
            Group::Cashtag => "cashtag",
            Group::Url => "url",
            Group::Protocol => "protocol",
            Group::Domain => "domain",
            Group::Port => "port",
            Group::Path => "path",
            Group::Query => "query",
            Group::ScreenName => "screen_name",
            Group::ListSlug => "list_slug",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    ValidHashtag,
    ValidCashtag,
    ValidUrl,
    ValidMentionsOrLists,
    ValidReply,
    EndMentionMatch,
}

impl RuleName {
    pub const ALL: [RuleName; 6] = [
        RuleName::ValidHashtag,
        RuleName::ValidCashtag,
        RuleName::ValidUrl,
        RuleName::ValidMentionsOrLists,
        RuleName::ValidReply,
        RuleName::EndMentionMatch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleName::ValidHashtag => "valid_hashtag",
            RuleName::ValidCashtag => "valid_cashtag",
            RuleName::ValidUrl => "valid_url",
            RuleName::ValidMentionsOrLists => "valid_mentions_or_lists",
            RuleName::ValidReply => "valid_reply",
            RuleName::EndMentionMatch => "end_mention_match",
        }
    }
}

impl std::fmt::Display for RuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A condition on the text following a raw match.
///
/// These stand in for zero-width look-ahead assertions, which the `regex`
/// crate does not support. The scanner checks them after each raw match and,
/// on failure, either narrows the match (as a backtracking engine would) or
/// retries one character further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookahead {
    /// No condition.
    None,
    /// The cashtag must be followed by the end of the text, whitespace or
    /// ASCII punctuation.
    CashtagEnd,
    /// The TLD closing the `domain` group must not be followed by an ASCII
    /// letter or digit.
    TopLevelDomainEnd,
}

/// A compiled rule and the metadata the engine needs to report its matches.
#[derive(Debug)]
pub struct Rule {
    name: RuleName,
    regex: Regex,
    groups: &'static [Group],
    fields: &'static [Group],
    tweak: usize,
    lookahead: Lookahead,
}

impl Rule {
    fn compile(
        name: RuleName,
        pattern: String,
        case_insensitive: bool,
        groups: &'static [Group],
        fields: &'static [Group],
        tweak: usize,
        lookahead: Lookahead,
    ) -> Self {
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(case_insensitive)
            .size_limit(1 << 25)
            .build()
            .unwrap_or_else(|err| panic!("invalid {} pattern: {}", name, err));

        debug_assert!(
            groups
                .iter()
                .all(|group| regex.capture_names().flatten().any(|n| n == group.name())),
            "{} does not declare every group in its table",
            name
        );
        debug_assert!(
            fields.iter().all(|field| groups.contains(field)),
            "{} reports a field it does not capture",
            name
        );
        debug_assert!(tweak <= 1);

        Rule {
            name,
            regex,
            groups,
            fields,
            tweak,
            lookahead,
        }
    }

    pub fn name(&self) -> RuleName {
        self.name
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Every named group the pattern declares.
    pub fn groups(&self) -> &'static [Group] {
        self.groups
    }

    /// The groups reported as the entity's semantic fields, in order.
    pub fn fields(&self) -> &'static [Group] {
        self.fields
    }

    /// Characters consumed by the pattern between the leading context and
    /// the fields (the entity marker), added back to the reported end offset.
    pub fn tweak(&self) -> usize {
        self.tweak
    }

    pub fn lookahead(&self) -> Lookahead {
        self.lookahead
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// The immutable table of every extraction rule.
#[derive(Debug)]
pub struct RuleSet {
    hashtag: Rule,
    cashtag: Rule,
    url: Rule,
    mentions_or_lists: Rule,
    reply: Rule,
    end_mention: Rule,
}

impl RuleSet {
    fn build() -> Self {
        use Group::*;

        tracing::debug!("compiling extraction rules");

        RuleSet {
            hashtag: Rule::compile(
                RuleName::ValidHashtag,
                patterns::valid_hashtag(),
                true,
                &[Before, Marker, Hashtag],
                &[Hashtag],
                1,
                Lookahead::None,
            ),
            cashtag: Rule::compile(
                RuleName::ValidCashtag,
                patterns::valid_cashtag(),
                false,
                &[Before, Marker, Cashtag],
                &[Cashtag],
                1,
                Lookahead::CashtagEnd,
            ),
            url: Rule::compile(
                RuleName::ValidUrl,
                patterns::valid_url(),
                true,
                &[Before, Url, Protocol, Domain, Port, Path, Query],
                &[Url],
                0,
                Lookahead::TopLevelDomainEnd,
            ),
            mentions_or_lists: Rule::compile(
                RuleName::ValidMentionsOrLists,
                patterns::valid_mentions_or_lists(),
                true,
                &[Before, Marker, ScreenName, ListSlug],
                &[ScreenName, ListSlug],
                1,
                Lookahead::None,
            ),
            reply: Rule::compile(
                RuleName::ValidReply,
                patterns::valid_reply(),
                true,
                &[Before, Marker, ScreenName],
                &[ScreenName],
                1,
                Lookahead::None,
            ),
            end_mention: Rule::compile(
                RuleName::EndMentionMatch,
                patterns::end_mention_match(),
                true,
                &[],
                &[],
                0,
                Lookahead::None,
            ),
        }
    }

    pub fn get(&self, name: RuleName) -> &Rule {
        match name {
            RuleName::ValidHashtag => &self.hashtag,
            RuleName::ValidCashtag => &self.cashtag,
            RuleName::ValidUrl => &self.url,
            RuleName::ValidMentionsOrLists => &self.mentions_or_lists,
            RuleName::ValidReply => &self.reply,
            RuleName::EndMentionMatch => &self.end_mention,
        }
    }
}

static RULES: Lazy<RuleSet> = Lazy::new(RuleSet::build);

/// The process-wide rule set, compiled on first access.
pub fn rules() -> &'static RuleSet {
    &RULES
}
