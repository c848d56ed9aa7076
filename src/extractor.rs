use crate::entity::{
    CashtagEntity, HashtagEntity, MentionEntity, MentionOrListEntity, UrlEntity,
};
use crate::offsets::rule_indices;
use crate::rules::{rules, Group, Rule, RuleName};
use crate::scan::{RawMatch, Scan};
use serde::Serialize;

/// Extracts entities from one text.
///
/// Every operation is independent of the others and returns slices borrowed
/// from the text or freshly built records. No operation fails: a text without
/// entities yields empty collections.
///
/// ```
/// use tweet_entities::Extractor;
///
/// let extractor = Extractor::new("Hello @gulcin, check #münchen!");
/// assert_eq!(extractor.mentioned_usernames(), vec!["gulcin"]);
/// assert_eq!(extractor.hashtags(), vec!["münchen"]);
///
/// let hashtag = &extractor.hashtags_with_indices()[0];
/// assert_eq!((hashtag.indices.start, hashtag.indices.end), (21, 29));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'t> {
    text: &'t str,
}

impl<'t> Extractor<'t> {
    pub fn new(text: &'t str) -> Self {
        Extractor { text }
    }

    pub fn text(&self) -> &'t str {
        self.text
    }

    fn scan(&self, name: RuleName) -> (&'static Rule, Scan<'static, 't>) {
        let rule = rules().get(name);
        (rule, Scan::new(rule, self.text))
    }

    fn captures(&self, name: RuleName, group: Group) -> Vec<&'t str> {
        let (_, scan) = self.scan(name);
        scan.map(|raw| raw.get(group)).collect()
    }

    /// Mention candidates that are standalone mentions: no list slug, and not
    /// followed by something that makes them part of a longer token.
    fn mentions(&self) -> impl Iterator<Item = RawMatch<'t>> {
        let (_, scan) = self.scan(RuleName::ValidMentionsOrLists);
        scan.filter(is_standalone_mention)
    }

    /// Hashtag bodies, without their `#`.
    pub fn hashtags(&self) -> Vec<&'t str> {
        self.captures(RuleName::ValidHashtag, Group::Hashtag)
    }

    /// Ticker symbols, without their `$`.
    pub fn cashtags(&self) -> Vec<&'t str> {
        self.captures(RuleName::ValidCashtag, Group::Cashtag)
    }

    /// URLs with an explicit `http://` or `https://` protocol.
    ///
    /// Bare domains such as `example.com` are not extracted.
    pub fn urls(&self) -> Vec<&'t str> {
        self.captures(RuleName::ValidUrl, Group::Url)
    }

    /// Usernames mentioned anywhere in the text, without their `@`.
    ///
    /// List references (`@user/list`) are skipped, as are candidates directly
    /// followed by another at sign, an accented Latin letter or `://`.
    pub fn mentioned_usernames(&self) -> Vec<&'t str> {
        self.mentions()
            .map(|raw| raw.get(Group::ScreenName))
            .collect()
    }

    /// The username the text replies to: a mention at the very start, after
    /// optional whitespace. `None` when the text does not open with one,
    /// where a string-typed API would return `""`.
    ///
    /// Unlike [`mentioned_usernames`](Self::mentioned_usernames) the text
    /// after the username is not checked, so `@alice@bob` replies to `alice`.
    pub fn replied_username(&self) -> Option<&'t str> {
        let (_, mut scan) = self.scan(RuleName::ValidReply);
        scan.next().map(|raw| raw.get(Group::ScreenName))
    }

    pub fn hashtags_with_indices(&self) -> Vec<HashtagEntity> {
        let (rule, scan) = self.scan(RuleName::ValidHashtag);
        scan.map(|raw| HashtagEntity {
            hashtag: raw.get(Group::Hashtag).to_string(),
            indices: rule_indices(rule, &raw),
        })
        .collect()
    }

    pub fn cashtags_with_indices(&self) -> Vec<CashtagEntity> {
        let (rule, scan) = self.scan(RuleName::ValidCashtag);
        scan.map(|raw| CashtagEntity {
            cashtag: raw.get(Group::Cashtag).to_string(),
            indices: rule_indices(rule, &raw),
        })
        .collect()
    }

    pub fn urls_with_indices(&self) -> Vec<UrlEntity> {
        let (rule, scan) = self.scan(RuleName::ValidUrl);
        scan.map(|raw| UrlEntity {
            url: raw.get(Group::Url).to_string(),
            indices: rule_indices(rule, &raw),
        })
        .collect()
    }

    /// [`mentioned_usernames`](Self::mentioned_usernames) with positions.
    /// The indices cover the `@` and the username.
    pub fn mentioned_usernames_with_indices(&self) -> Vec<MentionEntity> {
        let rule = rules().get(RuleName::ValidMentionsOrLists);
        self.mentions()
            .map(|raw| MentionEntity {
                screen_name: raw.get(Group::ScreenName).to_string(),
                indices: rule_indices(rule, &raw),
            })
            .collect()
    }

    /// Every mention candidate, with its list slug when there is one.
    ///
    /// Unlike [`mentioned_usernames`](Self::mentioned_usernames) nothing is
    /// filtered out: `@user/list` is reported with `list_slug: "/list"`, and
    /// `@foo@bar` still reports `foo`.
    pub fn mentions_or_lists_with_indices(&self) -> Vec<MentionOrListEntity> {
        let (rule, scan) = self.scan(RuleName::ValidMentionsOrLists);
        scan.map(|raw| MentionOrListEntity {
            screen_name: raw.get(Group::ScreenName).to_string(),
            list_slug: raw.get(Group::ListSlug).to_string(),
            indices: rule_indices(rule, &raw),
        })
        .collect()
    }

    /// Runs the hashtag, URL, mention and reply extractions.
    pub fn extract(&self) -> Extraction<'t> {
        Extraction {
            hashtags: self.hashtags(),
            urls: self.urls(),
            mentions: self.mentioned_usernames(),
            reply_to: self.replied_username(),
            hashtags_with_indices: self.hashtags_with_indices(),
            urls_with_indices: self.urls_with_indices(),
            mentions_with_indices: self.mentioned_usernames_with_indices(),
        }
    }
}

fn is_standalone_mention(raw: &RawMatch<'_>) -> bool {
    let screen_name = raw.get(Group::ScreenName);

    if !raw.get(Group::ListSlug).is_empty() {
        tracing::trace!(screen_name, reason = "list_slug", "mention rejected");
        return false;
    }
    if rules().get(RuleName::EndMentionMatch).is_match(raw.rest()) {
        tracing::trace!(screen_name, reason = "end_mention_match", "mention rejected");
        return false;
    }
    true
}

/// The combined result of [`Extractor::extract`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction<'t> {
    pub hashtags: Vec<&'t str>,
    pub urls: Vec<&'t str>,
    pub mentions: Vec<&'t str>,
    pub reply_to: Option<&'t str>,
    pub hashtags_with_indices: Vec<HashtagEntity>,
    pub urls_with_indices: Vec<UrlEntity>,
    pub mentions_with_indices: Vec<MentionEntity>,
}

/// Shorthand for `Extractor::new(text).extract()`.
pub fn extract(text: &str) -> Extraction<'_> {
    Extractor::new(text).extract()
}
