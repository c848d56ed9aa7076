use crate::{Extractor, Indices, UrlEntity};

fn urls(text: &str) -> Vec<&str> {
    Extractor::new(text).urls()
}

#[test]
fn test_balanced_parentheses_in_path() {
    assert_eq!(
        urls("see http://en.wikipedia.org/wiki/Primer_(film)"),
        vec!["http://en.wikipedia.org/wiki/Primer_(film)"]
    );
}

#[test]
fn test_trailing_period_is_not_part_of_url() {
    assert_eq!(urls("http://example.com/foo."), vec!["http://example.com/foo"]);
    assert_eq!(
        Extractor::new("Visit https://www.twitter.com.").urls_with_indices(),
        vec![UrlEntity {
            url: "https://www.twitter.com".to_string(),
            indices: Indices::new(6, 29),
        }]
    );
}

#[test]
fn test_protocol_is_required() {
    assert!(urls("example.com").is_empty());
    assert!(urls("www.example.com/path").is_empty());
}

#[test]
fn test_protocol_must_not_continue_a_word() {
    assert!(urls("xhttp://example.com").is_empty());
}

#[test]
fn test_port_and_query() {
    assert_eq!(
        urls("http://example.com:8080/x and http://example.com/path?a=b&c=d."),
        vec!["http://example.com:8080/x", "http://example.com/path?a=b&c=d"]
    );
}

#[test]
fn test_top_level_domain_must_end_the_host() {
    assert!(urls("http://twitter.community").is_empty());
    assert_eq!(urls("http://t.co/abc"), vec!["http://t.co/abc"]);
    assert_eq!(urls("http://example.co.uk"), vec!["http://example.co.uk"]);
}

#[test]
fn test_url_inside_parentheses() {
    assert_eq!(urls("(http://example.com)"), vec!["http://example.com"]);
}

#[test]
fn test_url_indices_exclude_leading_context() {
    assert_eq!(
        Extractor::new("http://a.com and https://b.org").urls_with_indices(),
        vec![
            UrlEntity {
                url: "http://a.com".to_string(),
                indices: Indices::new(0, 12),
            },
            UrlEntity {
                url: "https://b.org".to_string(),
                indices: Indices::new(17, 30),
            },
        ]
    );
}

#[test]
fn test_host_backs_off_when_a_sentence_follows() {
    assert_eq!(
        urls("Go to http://example.com.Then see"),
        vec!["http://example.com"]
    );
    assert_eq!(urls("http://example.com.mysite"), vec!["http://example.com"]);
    assert_eq!(
        Extractor::new("see http://www.google.com.Instead").urls_with_indices(),
        vec![UrlEntity {
            url: "http://www.google.com".to_string(),
            indices: Indices::new(4, 25),
        }]
    );
}
