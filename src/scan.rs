//! Iterating a rule over a text.
//!
//! [`Scan`] yields the successive non-overlapping [`RawMatch`]es of one rule,
//! left to right, after checking the rule's [`Lookahead`]. Positions in a raw
//! match are byte offsets into the text; [`crate::offsets`] turns them into
//! character offsets.

use crate::rules::{Group, Lookahead, Rule};
use regex::Captures;
use std::ops::Range;

/// The captured byte ranges of one match of a rule.
#[derive(Debug, Clone)]
pub(crate) struct RawMatch<'t> {
    text: &'t str,
    /// Participating groups with their byte ranges. Optional groups that did
    /// not participate are absent.
    spans: Vec<(Group, Range<usize>)>,
    /// Byte offset where the consumed part of the match ends.
    end: usize,
}

impl<'t> RawMatch<'t> {
    fn from_captures(rule: &Rule, text: &'t str, caps: &Captures<'t>) -> Self {
        let spans = rule
            .groups()
            .iter()
            .filter_map(|&group| caps.name(group.name()).map(|m| (group, m.range())))
            .collect();
        let end = caps.get(0).map_or(0, |m| m.end());

        RawMatch { text, spans, end }
    }

    pub(crate) fn text(&self) -> &'t str {
        self.text
    }

    pub(crate) fn span(&self, group: Group) -> Option<Range<usize>> {
        self.spans
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, range)| range.clone())
    }

    /// The captured substring, or `""` when the group did not participate.
    pub(crate) fn get(&self, group: Group) -> &'t str {
        self.span(group).map_or("", |range| &self.text[range])
    }

    /// Byte offset of the leading context, where the whole match starts.
    pub(crate) fn start(&self) -> usize {
        self.span(Group::Before).map_or(self.end, |range| range.start)
    }

    pub(crate) fn end(&self) -> usize {
        self.end
    }

    /// Everything after the match.
    pub(crate) fn rest(&self) -> &'t str {
        &self.text[self.end..]
    }

    /// Shrink a group to `len` bytes; the match then ends with that group.
    fn truncate(&mut self, group: Group, len: usize) {
        if let Some((_, range)) = self.spans.iter_mut().find(|(g, _)| *g == group) {
            range.end = range.start + len;
            self.end = range.end;
        }
    }
}

impl Lookahead {
    /// Check the condition against the text following `raw`, narrowing the
    /// match when a shorter alternative satisfies it.
    fn admit<'t>(self, rule: &Rule, raw: &mut RawMatch<'t>) -> bool {
        match self {
            Lookahead::None => true,
            Lookahead::CashtagEnd => {
                if is_cashtag_boundary(raw.rest()) {
                    return true;
                }
                // Drop the `.X` ticker class; the period is itself a boundary.
                let cashtag = raw.get(Group::Cashtag);
                match cashtag.find('.') {
                    Some(dot) => {
                        raw.truncate(Group::Cashtag, dot);
                        true
                    }
                    None => false,
                }
            }
            Lookahead::TopLevelDomainEnd => {
                if ends_at_tld_boundary(raw) {
                    return true;
                }
                match shorter_host(rule, raw) {
                    Some(shorter) => {
                        *raw = shorter;
                        true
                    }
                    None => false,
                }
            }
        }
    }
}

fn ends_at_tld_boundary(raw: &RawMatch<'_>) -> bool {
    match raw.span(Group::Domain) {
        Some(domain) => !raw.text()[domain.end..]
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_alphanumeric()),
        None => false,
    }
}

/// Retry `raw` from the same start with the text cut one character short of
/// its host, until a host ends at a TLD boundary of the full text.
///
/// The character after a shortened host is part of the longer one, so it can
/// never open a port, path or query. The cut therefore does not change what
/// follows the host.
fn shorter_host<'t>(rule: &Rule, raw: &RawMatch<'t>) -> Option<RawMatch<'t>> {
    let text = raw.text();
    let start = raw.start();
    let mut limit = raw.span(Group::Domain)?.end;

    loop {
        limit = prev_char_boundary(text, limit)?;
        let caps = rule.regex().captures_at(&text[..limit], start)?;
        let shorter = RawMatch::from_captures(rule, text, &caps);
        if shorter.start() != start {
            return None;
        }
        if ends_at_tld_boundary(&shorter) {
            return Some(shorter);
        }
        limit = shorter.span(Group::Domain)?.end;
    }
}

fn is_cashtag_boundary(rest: &str) -> bool {
    match rest.chars().next() {
        None => true,
        Some(c) => c.is_whitespace() || c.is_ascii_punctuation(),
    }
}

/// Successive matches of one rule over a text.
pub(crate) struct Scan<'r, 't> {
    rule: &'r Rule,
    text: &'t str,
    pos: usize,
}

impl<'r, 't> Scan<'r, 't> {
    pub(crate) fn new(rule: &'r Rule, text: &'t str) -> Self {
        Scan { rule, text, pos: 0 }
    }
}

impl<'r, 't> Iterator for Scan<'r, 't> {
    type Item = RawMatch<'t>;

    fn next(&mut self) -> Option<RawMatch<'t>> {
        while self.pos <= self.text.len() {
            let caps = self.rule.regex().captures_at(self.text, self.pos)?;
            let mut raw = RawMatch::from_captures(self.rule, self.text, &caps);

            if self.rule.lookahead().admit(self.rule, &mut raw) {
                // Every rule consumes at least its marker.
                debug_assert!(raw.end() > self.pos);
                self.pos = raw.end();
                return Some(raw);
            }

            let start = raw.start();
            tracing::trace!(rule = %self.rule.name(), offset = start, "look-ahead rejected match");
            self.pos = next_char_boundary(self.text, start);
        }
        None
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> Option<usize> {
    text[..pos].char_indices().next_back().map(|(i, _)| i)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| pos + c.len_utf8())
}
