//! Composition of the character class vocabulary into one pattern per rule.
//!
//! Every pattern binds its captures by name. The group names are the ones
//! returned by [`Group::name`](super::Group::name); the rule table checks that
//! they line up.
//!
//! None of these patterns contains a look-around assertion: the `regex` crate
//! guarantees linear-time matching and does not support them. Conditions on
//! the text *following* a match are checked by
//! [`Lookahead`](super::Lookahead) after the raw match instead.

use super::classes::*;

/// Letters that may appear anywhere in a hashtag body, besides ASCII.
fn hashtag_letters() -> String {
    format!(
        "{}{}{}",
        LATIN_ACCENTS, NON_LATIN_HASHTAG_CHARS, CJ_HASHTAG_CHARACTERS
    )
}

pub(crate) fn valid_hashtag() -> String {
    let letters = hashtag_letters();
    let alpha = format!("[a-z_{}]", letters);
    let alphanumeric = format!("[a-z0-9_{}]", letters);

    format!(
        "(?P<before>^|[^&a-z0-9_{letters}])(?P<marker>[{hash}])(?P<hashtag>{alnum}*{alpha}{alnum}*)",
        letters = letters,
        hash = HASH_SIGNS,
        alnum = alphanumeric,
        alpha = alpha,
    )
}

pub(crate) fn valid_cashtag() -> String {
    format!(
        r"(?P<before>^|[{spaces}])(?P<marker>\$)(?P<cashtag>[A-Z]{{1,6}}(?:\.[A-Z]{{1,2}})?)",
        spaces = SPACES,
    )
}

/// Leading context of a mention: a character that cannot continue a
/// username, the start of the text, or a retweet prefix (`RT @`, `RT:@`).
fn mention_preceding_chars() -> String {
    format!(
        r"(?P<before>[^a-zA-Z0-9_!#$%&*{at}/]|^|(?:^|[^a-z0-9_+~.\-])RT:?)",
        at = AT_SIGNS,
    )
}

pub(crate) fn valid_mentions_or_lists() -> String {
    format!(
        r"{before}(?P<marker>[{at}])(?P<screen_name>[a-z0-9_]{{1,20}})(?P<list_slug>/[a-z][a-z0-9_\-]{{0,24}})?",
        before = mention_preceding_chars(),
        at = AT_SIGNS,
    )
}

pub(crate) fn valid_reply() -> String {
    format!(
        r"^(?P<before>[{spaces}]*)(?P<marker>[{at}])(?P<screen_name>[a-z0-9_]{{1,20}})",
        spaces = SPACES,
        at = AT_SIGNS,
    )
}

pub(crate) fn end_mention_match() -> String {
    format!(
        r"\A(?:[{at}]|[{accents}]|://)",
        at = AT_SIGNS,
        accents = LATIN_ACCENTS,
    )
}

fn alternation(words: &[&str]) -> String {
    format!("(?:{})", words.join("|"))
}

/// A host name made of optional subdomains, a domain label and a TLD.
fn valid_domain() -> String {
    let chars = format!(
        "[^[:punct:][:space:][:blank:][:cntrl:]{}{}]",
        INVALID_CHARACTERS, SPACES
    );
    let subdomain = format!(r"(?:(?:{c}(?:[_\-]|{c})*)?{c}\.)", c = chars);
    let domain_name = format!(r"(?:(?:{c}(?:-|{c})*)?{c}\.)", c = chars);
    let punycode = "(?:xn--[0-9a-z]+)";

    format!(
        "(?:{sub}*{name}(?:{generic}|{country}|{puny}))",
        sub = subdomain,
        name = domain_name,
        generic = alternation(GENERIC_TLDS),
        country = alternation(COUNTRY_TLDS),
        puny = punycode,
    )
}

/// One path segment run. Balanced parentheses are allowed for Wikipedia style
/// paths (`/wiki/Primer_(film)`) and IIS sessions (`/S(dfd346)/`).
fn valid_url_path() -> String {
    let general = format!("[{}{}]", URL_PATH_CHARS, LATIN_ACCENTS);
    let balanced_parens = format!(r"\({}+\)", general);
    let ending = format!(
        "(?:[{}{}]|(?:{}))",
        URL_PATH_ENDING_CHARS, LATIN_ACCENTS, balanced_parens
    );

    format!(
        "(?:(?:{g}*(?:{b}{g}*)*{e})|(?:@{g}+/))",
        g = general,
        b = balanced_parens,
        e = ending,
    )
}

pub(crate) fn valid_url() -> String {
    let preceding = format!(
        r#"(?P<before>[^\-/"'!=A-Z0-9_{at}.{invalid}]|^)"#,
        at = AT_SIGNS,
        invalid = INVALID_CHARACTERS,
    );

    format!(
        concat!(
            "{before}",
            "(?P<url>",
            "(?P<protocol>https?://)",
            "(?P<domain>{domain})",
            "(?::(?P<port>[0-9]+))?",
            "(?P<path>/{path}*)?",
            r"(?P<query>\?[{query}]*[{query_end}])?",
            ")",
        ),
        before = preceding,
        domain = valid_domain(),
        path = valid_url_path(),
        query = URL_QUERY_CHARS,
        query_end = URL_QUERY_ENDING_CHARS,
    )
}
