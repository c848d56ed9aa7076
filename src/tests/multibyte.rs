//! Offsets around multi-byte text.
//!
//! Every entity here sits after, or contains, characters that take more than
//! one byte in UTF-8. The snapshots draw the reported indices under the text,
//! so a byte/character mix-up shows up as a misplaced underline.

use crate::{EntityDisplay, Extractor, Indices};

#[test]
fn test_mention_and_hashtag_after_latin_text() {
    super::init_tracing();
    let text = "Hello @gulcin, check #münchen!";
    let extractor = Extractor::new(text);

    let display = EntityDisplay::new(text)
        .with(&extractor.mentioned_usernames_with_indices())
        .with(&extractor.hashtags_with_indices());

    insta::assert_snapshot!(display, @r###"
    Hello @gulcin, check #münchen!
          ╰─────╯Mention("gulcin")
                         ╰──────╯Hashtag("münchen")
    "###);
}

#[test]
fn test_mention_after_two_byte_characters() {
    let text = "Grüße @gulcin!";
    let mentions = Extractor::new(text).mentioned_usernames_with_indices();
    assert_eq!(mentions[0].indices, Indices::new(6, 13));

    insta::assert_snapshot!(EntityDisplay::new(text).with(&mentions), @r###"
    Grüße @gulcin!
          ╰─────╯Mention("gulcin")
    "###);
}

#[test]
fn test_mention_after_wide_characters() {
    let text = "日本語 @tanaka";
    let mentions = Extractor::new(text).mentioned_usernames_with_indices();
    assert_eq!(mentions[0].indices, Indices::new(4, 11));

    insta::assert_snapshot!(EntityDisplay::new(text).with(&mentions), @r###"
    日本語 @tanaka
           ╰─────╯Mention("tanaka")
    "###);
}

#[test]
fn test_accented_username_keeps_only_ascii_prefix() {
    let text = "Grüße @gülçin";
    let extractor = Extractor::new(text);
    assert!(extractor.mentioned_usernames().is_empty());

    insta::assert_snapshot!(
        EntityDisplay::new(text).with(&extractor.mentions_or_lists_with_indices()),
        @r###"
    Grüße @gülçin
          ╰╯MentionOrList("g")
    "###
    );
}

#[test]
fn test_url_followed_by_wide_characters() {
    let text = "日本 http://example.com日本語";
    let urls = Extractor::new(text).urls_with_indices();
    assert_eq!(urls[0].indices, Indices::new(3, 21));

    insta::assert_snapshot!(EntityDisplay::new(text).with(&urls), @r###"
    日本 http://example.com日本語
         ╰────────────────╯Url("http://example.com")
    "###);
}

#[test]
fn test_url_with_accented_path() {
    let text = "Grüße http://example.com/ü";
    let urls = Extractor::new(text).urls_with_indices();
    assert_eq!(urls[0].url, "http://example.com/ü");
    assert_eq!(urls[0].indices, Indices::new(6, 26));
}

#[test]
fn test_katakana_hashtag() {
    let text = "日本語 #ハッシュ";
    let hashtags = Extractor::new(text).hashtags_with_indices();
    assert_eq!(hashtags[0].indices, Indices::new(4, 9));

    insta::assert_snapshot!(EntityDisplay::new(text).with(&hashtags), @r###"
    日本語 #ハッシュ
           ╰───────╯Hashtag("ハッシュ")
    "###);
}

#[test]
fn test_hashtag_after_astral_character() {
    // One character, four bytes in UTF-8, two UTF-16 code units.
    let hashtags = Extractor::new("😀 #emoji").hashtags_with_indices();
    assert_eq!(hashtags[0].hashtag, "emoji");
    assert_eq!(hashtags[0].indices, Indices::new(2, 8));
}

#[test]
fn test_cashtag_after_two_byte_characters() {
    let cashtags = Extractor::new("Grüße $AAPL").cashtags_with_indices();
    assert_eq!(cashtags[0].indices, Indices::new(6, 11));
}

#[test]
fn test_extracted_text_is_not_normalized() {
    let extractor = Extractor::new("#MÜNCHEN @GuLcIn");
    assert_eq!(extractor.hashtags(), vec!["MÜNCHEN"]);
    assert_eq!(extractor.mentioned_usernames(), vec!["GuLcIn"]);
}
