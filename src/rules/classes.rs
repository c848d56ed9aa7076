//! Character class vocabulary shared by the extraction rules.
//!
//! Every constant here is the *body* of a bracketed character class, without
//! the surrounding `[` `]`, so that classes can be concatenated when the rules
//! in [`super::patterns`] are composed.

/// Unicode whitespace.
///
/// ```text
/// 0x0009-0x000D  <control> tab, line feed, ..., carriage return
/// 0x0020         SPACE
/// 0x0085         NEXT LINE
/// 0x00A0         NO-BREAK SPACE
/// 0x1680         OGHAM SPACE MARK
/// 0x180E         MONGOLIAN VOWEL SEPARATOR
/// 0x2000-0x200A  EN QUAD..HAIR SPACE
/// 0x2028         LINE SEPARATOR
/// 0x2029         PARAGRAPH SEPARATOR
/// 0x202F         NARROW NO-BREAK SPACE
/// 0x205F         MEDIUM MATHEMATICAL SPACE
/// 0x3000         IDEOGRAPHIC SPACE
/// ```
pub(crate) const SPACES: &str = concat!(
    r"\x{0009}-\x{000D}\x{0020}\x{0085}\x{00A0}\x{1680}\x{180E}",
    r"\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}",
);

/// Directional overrides, byte order mark and the two noncharacters that never
/// belong inside an entity.
pub(crate) const INVALID_CHARACTERS: &str = r"\x{202A}-\x{202E}\x{FEFF}\x{FFFE}\x{FFFF}";

pub(crate) const AT_SIGNS: &str = r"@\x{FF20}";

pub(crate) const HASH_SIGNS: &str = r"#\x{FF03}";

/// Latin letters with diacritics.
///
/// Excludes 0x00D7 (multiplication sign) and 0x00F7 (division sign).
pub(crate) const LATIN_ACCENTS: &str = concat!(
    r"\x{00C0}-\x{00D6}\x{00D8}-\x{00F6}\x{00F8}-\x{00FF}",
    r"\x{0100}-\x{024F}\x{0253}-\x{0254}\x{0256}-\x{0257}",
    r"\x{0259}\x{025B}\x{0263}\x{0268}\x{026F}\x{0272}\x{0289}\x{028B}\x{02BB}",
    r"\x{1E00}-\x{1EFF}",
);

/// Cyrillic, Hebrew, Arabic, Thai and Hangul letters accepted inside hashtags.
pub(crate) const NON_LATIN_HASHTAG_CHARS: &str = concat!(
    // Cyrillic, Cyrillic Supplement, Extended-A, Extended-B
    r"\x{0400}-\x{04FF}\x{0500}-\x{0527}\x{2DE0}-\x{2DFF}\x{A640}-\x{A69F}",
    // Hebrew and Hebrew presentation forms
    r"\x{0591}-\x{05BF}\x{05C1}-\x{05C2}\x{05C4}-\x{05C5}\x{05C7}\x{05D0}-\x{05EA}\x{05F0}-\x{05F4}",
    r"\x{FB12}-\x{FB28}\x{FB2A}-\x{FB36}\x{FB38}-\x{FB3C}\x{FB3E}\x{FB40}-\x{FB41}",
    r"\x{FB43}-\x{FB44}\x{FB46}-\x{FB4F}",
    // Arabic, Arabic Supplement, Extended-A and presentation forms
    r"\x{0610}-\x{061A}\x{0620}-\x{065F}\x{066E}-\x{06D3}\x{06DC}\x{06DE}-\x{06E8}",
    r"\x{06EA}-\x{06EF}\x{06FA}-\x{06FC}\x{06FF}\x{0750}-\x{077F}\x{08A0}\x{08A2}-\x{08AC}",
    r"\x{08E4}-\x{08FE}\x{FB50}-\x{FBB1}\x{FBD3}-\x{FD3D}\x{FD50}-\x{FD8F}\x{FD92}-\x{FDC7}",
    r"\x{FDF0}-\x{FDFB}\x{FE70}-\x{FE74}\x{FE76}-\x{FEFC}\x{200C}",
    // Thai
    r"\x{0E01}-\x{0E3A}\x{0E40}-\x{0E4E}",
    // Hangul Jamo, compatibility Jamo, syllables and half-width forms
    r"\x{1100}-\x{11FF}\x{3130}-\x{3185}\x{A960}-\x{A97F}\x{AC00}-\x{D7AF}\x{D7B0}-\x{D7FF}",
    r"\x{FFA1}-\x{FFDC}",
);

/// Japanese kana, full-width Latin and CJK ideographs accepted inside hashtags.
pub(crate) const CJ_HASHTAG_CHARACTERS: &str = concat!(
    // Katakana (full-width and half-width)
    r"\x{30A1}-\x{30FA}\x{30FC}-\x{30FE}\x{FF66}-\x{FF9F}",
    // Latin (full-width)
    r"\x{FF10}-\x{FF19}\x{FF21}-\x{FF3A}\x{FF41}-\x{FF5A}",
    // Hiragana
    r"\x{3041}-\x{3096}\x{3099}-\x{309E}",
    // Kanji: extension A, unified, iteration marks
    r"\x{3400}-\x{4DBF}\x{4E00}-\x{9FFF}\x{3003}\x{3005}\x{303B}",
    // Kanji: extensions B, C, D and compatibility supplement
    r"\x{20000}-\x{2A6DF}\x{2A700}-\x{2B73F}\x{2B740}-\x{2B81F}\x{2F800}-\x{2FA1F}",
);

/// Generic top-level domains.
pub(crate) const GENERIC_TLDS: &[&str] = &[
    "aero", "asia", "biz", "cat", "com", "coop", "edu", "gov", "info", "int", "jobs", "mil",
    "mobi", "museum", "name", "net", "org", "pro", "tel", "travel", "xxx",
];

/// Country-code top-level domains.
pub(crate) const COUNTRY_TLDS: &[&str] = &[
    "ac", "ad", "ae", "af", "ag", "ai", "al", "am", "an", "ao", "aq", "ar", "as", "at", "au",
    "aw", "ax", "az", "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi", "bj", "bm", "bn", "bo",
    "br", "bs", "bt", "bv", "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch", "ci", "ck",
    "cl", "cm", "cn", "co", "cr", "cs", "cu", "cv", "cx", "cy", "cz", "dd", "de", "dj", "dk",
    "dm", "do", "dz", "ec", "ee", "eg", "eh", "er", "es", "et", "eu", "fi", "fj", "fk", "fm",
    "fo", "fr", "ga", "gb", "gd", "ge", "gf", "gg", "gh", "gi", "gl", "gm", "gn", "gp", "gq",
    "gr", "gs", "gt", "gu", "gw", "gy", "hk", "hm", "hn", "hr", "ht", "hu", "id", "ie", "il",
    "im", "in", "io", "iq", "ir", "is", "it", "je", "jm", "jo", "jp", "ke", "kg", "kh", "ki",
    "km", "kn", "kp", "kr", "kw", "ky", "kz", "la", "lb", "lc", "li", "lk", "lr", "ls", "lt",
    "lu", "lv", "ly", "ma", "mc", "md", "me", "mg", "mh", "mk", "ml", "mm", "mn", "mo", "mp",
    "mq", "mr", "ms", "mt", "mu", "mv", "mw", "mx", "my", "mz", "na", "nc", "ne", "nf", "ng",
    "ni", "nl", "no", "np", "nr", "nu", "nz", "om", "pa", "pe", "pf", "pg", "ph", "pk", "pl",
    "pm", "pn", "pr", "ps", "pt", "pw", "py", "qa", "re", "ro", "rs", "ru", "rw", "sa", "sb",
    "sc", "sd", "se", "sg", "sh", "si", "sj", "sk", "sl", "sm", "sn", "so", "sr", "ss", "st",
    "su", "sv", "sy", "sz", "tc", "td", "tf", "tg", "th", "tj", "tk", "tl", "tm", "tn", "to",
    "tp", "tr", "tt", "tv", "tw", "tz", "ua", "ug", "uk", "us", "uy", "uz", "va", "vc", "ve",
    "vg", "vi", "vn", "vu", "wf", "ws", "ye", "yt", "za", "zm", "zw",
];

/// Characters allowed anywhere in a URL path.
pub(crate) const URL_PATH_CHARS: &str = r"a-z0-9!*;:=+,.$/%#\[\]\-_~&|@";

/// Characters a URL path may end on, so `/foo.` does not swallow the period.
pub(crate) const URL_PATH_ENDING_CHARS: &str = r"a-z0-9=_#/+\-";

pub(crate) const URL_QUERY_CHARS: &str = r"a-z0-9!?*'();:&=+$/%#\[\]\-_.,~|@";

pub(crate) const URL_QUERY_ENDING_CHARS: &str = r"a-z0-9_&=#/";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tld_lists_are_lowercase_ascii() {
        for tld in GENERIC_TLDS.iter().chain(COUNTRY_TLDS) {
            assert!(
                tld.bytes().all(|b| b.is_ascii_lowercase()),
                "unexpected TLD {:?}",
                tld
            );
        }
    }

    #[test]
    fn test_country_tlds_have_two_letters() {
        // A two-letter code can never be a prefix of another one, so the
        // alternation order inside the TLD group only matters for generic TLDs.
        assert!(COUNTRY_TLDS.iter().all(|tld| tld.len() == 2));
    }
}
