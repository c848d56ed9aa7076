//! Conversion of byte-based match positions into character offsets.
//!
//! The `regex` crate reports positions as byte offsets into UTF-8, which only
//! agree with character offsets for ASCII input. Indices are instead
//! recomputed from decoded character counts:
//!
//! ```text
//! start = chars(text[..before]) + chars(before)
//! end   = start + sum(chars(field) for field in fields) + tweak
//! ```
//!
//! `tweak` re-adds the one-character marker (`#`, `$`, `@`, ...) that sits
//! between the leading context and the fields.

use crate::entity::Indices;
use crate::rules::{Group, Rule};
use crate::scan::RawMatch;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Character offsets of `raw`, reporting `fields` and adding `tweak`.
pub(crate) fn fix_indices(raw: &RawMatch<'_>, fields: &[Group], tweak: usize) -> Indices {
    let text = raw.text();
    let before = raw.span(Group::Before).unwrap_or(raw.start()..raw.start());

    let start = char_len(&text[..before.start]) + char_len(&text[before]);
    let length: usize = fields.iter().map(|&field| char_len(raw.get(field))).sum();
    let indices = Indices::new(start, start + length + tweak);

    debug_assert!(
        indices.end <= char_len(text),
        "indices {:?} overrun a text of {} characters",
        indices,
        char_len(text)
    );
    indices
}

/// [`fix_indices`] with the fields and tweak of `rule`.
pub(crate) fn rule_indices(rule: &Rule, raw: &RawMatch<'_>) -> Indices {
    fix_indices(raw, rule.fields(), rule.tweak())
}
