use crate::Extractor;

fn reply(text: &str) -> Option<&str> {
    Extractor::new(text).replied_username()
}

#[test]
fn test_reply_at_start() {
    assert_eq!(reply("@alice hello"), Some("alice"));
    assert_eq!(reply("@username reply"), Some("username"));
    assert_eq!(reply("＠username reply"), Some("username"));
}

#[test]
fn test_reply_after_leading_whitespace() {
    assert_eq!(reply("  @username reply"), Some("username"));
    assert_eq!(reply("\u{3000}@username reply"), Some("username"));
    assert_eq!(reply("\n\t@username"), Some("username"));
}

#[test]
fn test_reply_must_be_first() {
    assert_eq!(reply("hello @alice"), None);
    assert_eq!(reply("reply @username"), None);
    assert_eq!(reply(".@username"), None);
}

#[test]
fn test_reply_ignores_trailing_context() {
    assert_eq!(reply("@alice@bob hi"), Some("alice"));
    assert_eq!(reply("@gülçin hi"), Some("g"));
    assert_eq!(reply("@username: hi"), Some("username"));
}

#[test]
fn test_reply_target_need_not_be_a_mention() {
    let extractor = Extractor::new("@alice@bob hi");
    assert_eq!(extractor.replied_username(), Some("alice"));
    assert!(extractor.mentioned_usernames().is_empty());
}

#[test]
fn test_no_reply_in_empty_text() {
    assert_eq!(reply(""), None);
    assert_eq!(reply("   "), None);
}
