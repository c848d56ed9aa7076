//! Properties that hold for every input text.

use crate::{extract, Entity, Extractor, Indices};
use proptest::prelude::*;

/// Fragments that combine into texts dense with entities, near-misses and
/// multi-byte characters.
const FRAGMENTS: &[&str] = &[
    " ",
    "\u{3000}",
    ",",
    ".",
    ":",
    "/",
    "x",
    "RT",
    "#tag",
    "＃全角",
    "#münchen",
    "#123",
    "$AAPL",
    "$ZZZ.B",
    "$aapl",
    "@user",
    "＠user",
    "@gülçin",
    "@list/members",
    "email@foo",
    "http://example.com",
    "https://t.co/abc",
    "http://a.co.uk/wiki/(x)?q=1",
    "example.com",
    "日本語",
    "Grüße",
    "😀",
    "à",
];

fn arb_tweet() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..16).prop_map(|parts| parts.concat())
}

fn char_slice(text: &str, indices: Indices) -> String {
    text.chars().skip(indices.start).take(indices.len()).collect()
}

fn assert_ordered_and_disjoint<E: Entity>(entities: &[E]) {
    for pair in entities.windows(2) {
        assert!(
            pair[0].indices().end <= pair[1].indices().start,
            "{:?} and {:?} overlap or are out of order",
            pair[0],
            pair[1]
        );
    }
}

/// Checks that every entity's indices lie within the text and that slicing
/// them reproduces one of `markers` followed by the entity text.
fn assert_slices<E: Entity>(text: &str, entities: &[E], markers: &[char]) {
    let len = text.chars().count();
    for entity in entities {
        let indices = entity.indices();
        assert!(indices.start <= indices.end && indices.end <= len, "{:?}", entity);

        let slice = char_slice(text, indices);
        if markers.is_empty() {
            assert_eq!(slice, entity.text());
        } else {
            let mut chars = slice.chars();
            let marker = chars.next();
            assert!(
                marker.map_or(false, |m| markers.contains(&m)),
                "{:?} does not start with a marker",
                slice
            );
            assert_eq!(chars.as_str(), entity.text());
        }
    }
}

fn check_all(text: &str) {
    let extractor = Extractor::new(text);

    let hashtags = extractor.hashtags_with_indices();
    assert_slices(text, &hashtags, &['#', '\u{FF03}']);
    assert_ordered_and_disjoint(&hashtags);

    let cashtags = extractor.cashtags_with_indices();
    assert_slices(text, &cashtags, &['$']);
    assert_ordered_and_disjoint(&cashtags);

    let urls = extractor.urls_with_indices();
    assert_slices(text, &urls, &[]);
    assert_ordered_and_disjoint(&urls);

    let mentions = extractor.mentioned_usernames_with_indices();
    assert_slices(text, &mentions, &['@', '\u{FF20}']);
    assert_ordered_and_disjoint(&mentions);

    let candidates = extractor.mentions_or_lists_with_indices();
    assert_slices(text, &candidates, &['@', '\u{FF20}']);
    assert_ordered_and_disjoint(&candidates);

    let _ = extractor.replied_username();
}

proptest! {
    #[test]
    fn extraction_is_total(text in any::<String>()) {
        check_all(&text);
    }

    #[test]
    fn indices_reproduce_entities(text in arb_tweet()) {
        check_all(&text);
    }

    #[test]
    fn plain_and_indexed_results_agree(text in arb_tweet()) {
        let extractor = Extractor::new(&text);

        let hashtags: Vec<String> = extractor.hashtags_with_indices().into_iter().map(|e| e.hashtag).collect();
        prop_assert_eq!(extractor.hashtags(), hashtags);

        let cashtags: Vec<String> = extractor.cashtags_with_indices().into_iter().map(|e| e.cashtag).collect();
        prop_assert_eq!(extractor.cashtags(), cashtags);

        let urls: Vec<String> = extractor.urls_with_indices().into_iter().map(|e| e.url).collect();
        prop_assert_eq!(extractor.urls(), urls);

        let mentions: Vec<String> = extractor
            .mentioned_usernames_with_indices()
            .into_iter()
            .map(|e| e.screen_name)
            .collect();
        prop_assert_eq!(extractor.mentioned_usernames(), mentions);
    }

    #[test]
    fn mentions_are_a_subset_of_candidates(text in arb_tweet()) {
        let extractor = Extractor::new(&text);
        let candidates = extractor.mentions_or_lists_with_indices();
        for mention in extractor.mentioned_usernames_with_indices() {
            prop_assert!(candidates
                .iter()
                .any(|c| c.indices == mention.indices && c.screen_name == mention.screen_name && !c.is_list()));
        }
    }

    #[test]
    fn aggregate_matches_single_operations(text in arb_tweet()) {
        let extractor = Extractor::new(&text);
        let extraction = extract(&text);

        prop_assert_eq!(&extraction.hashtags, &extractor.hashtags());
        prop_assert_eq!(&extraction.urls, &extractor.urls());
        prop_assert_eq!(&extraction.mentions, &extractor.mentioned_usernames());
        prop_assert_eq!(extraction.reply_to, extractor.replied_username());
        prop_assert_eq!(&extraction.hashtags_with_indices, &extractor.hashtags_with_indices());
        prop_assert_eq!(&extraction.urls_with_indices, &extractor.urls_with_indices());
        prop_assert_eq!(&extraction.mentions_with_indices, &extractor.mentioned_usernames_with_indices());
    }
}

#[test]
fn test_empty_text() {
    let extraction = extract("");
    assert!(extraction.hashtags.is_empty());
    assert!(extraction.urls.is_empty());
    assert!(extraction.mentions.is_empty());
    assert_eq!(extraction.reply_to, None);
}

#[test]
fn test_extraction_serializes_with_field_names() {
    let extraction = extract("@alice #rust http://example.com");
    let json = serde_json::to_value(&extraction).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "hashtags": ["rust"],
            "urls": ["http://example.com"],
            "mentions": ["alice"],
            "reply_to": "alice",
            "hashtags_with_indices": [{"hashtag": "rust", "indices": [7, 12]}],
            "urls_with_indices": [{"url": "http://example.com", "indices": [13, 31]}],
            "mentions_with_indices": [{"screen_name": "alice", "indices": [0, 6]}],
        })
    );
}
