//! # Highlight Ranges
//!
//! Locates substrings of lesson text worth visually emphasizing, driven by
//! hint strings from the backend (turn summaries, narration sentences).
//!
//! Two-tier strategy: first try to find each hint's sentences literally in
//! the text (case-insensitive); if nothing matches at all, fall back to the
//! text's own leading sentences so the reader always gets *some* emphasis.
//! Misses are normal, not errors — fewer (possibly zero) ranges come back.

/// Visual tone tag attached to a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
}

/// A half-open byte-offset span into a source text, plus its tone.
/// Ephemeral — recomputed per request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightRange {
    pub start: usize,
    pub end: usize,
    pub tone: Tone,
}

/// Tunable knobs for [`compute_highlight_ranges`]. The defaults match what
/// the reading overlay uses.
#[derive(Debug, Clone, Copy)]
pub struct HighlightOptions {
    /// Hard cap on how many ranges come back.
    pub max_highlights: usize,
    /// Segments longer than this get bisected before matching.
    pub preferred_length: usize,
    /// Tone applied to hint-matched ranges.
    pub tone: Tone,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            max_highlights: 4,
            preferred_length: 140,
            tone: Tone::Info,
        }
    }
}

/// Whole sentences shorter than this are too trivial to highlight.
const MIN_SEGMENT_LEN: usize = 18;
/// Halves of a bisected long sentence need a bit more substance.
const MIN_HALF_LEN: usize = 24;

/// Locates one snippet in `text` case-insensitively and returns a single
/// tagged range, or `None` if absent. Building block for
/// [`compute_highlight_ranges`], and used standalone to pin a highlight to a
/// phrase the backend explicitly called out.
///
/// The search runs over lowercased copies, but the returned offsets always
/// index the unmodified source: matches found in the lowered text are walked
/// back to source positions, since lowercasing can change byte lengths
/// (İ gains a combining dot).
pub fn find_snippet_range(text: &str, snippet: &str, tone: Tone) -> Option<HighlightRange> {
    let snippet = snippet.trim();
    if text.is_empty() || snippet.is_empty() {
        return None;
    }
    let lowered_text = text.to_lowercase();
    let lowered_snippet = snippet.to_lowercase();
    let found = lowered_text.find(&lowered_snippet)?;
    let (start, end) = source_span(text, found, found + lowered_snippet.len())?;
    let end = end.min(text.len());
    if start >= end {
        return None;
    }
    Some(HighlightRange { start, end, tone })
}

/// Maps a byte span of `text.to_lowercase()` back to a byte span of `text`.
/// Returns `None` when a span edge falls inside one character's lowercase
/// expansion, in which case the match is treated as a miss.
fn source_span(text: &str, lowered_start: usize, lowered_end: usize) -> Option<(usize, usize)> {
    let mut lowered_pos = 0;
    let mut start = None;
    for (pos, c) in text.char_indices() {
        if lowered_pos == lowered_start && start.is_none() {
            start = Some(pos);
        }
        lowered_pos += c.to_lowercase().map(char::len_utf8).sum::<usize>();
        if lowered_pos >= lowered_end {
            return match start {
                Some(s) if lowered_pos == lowered_end => Some((s, pos + c.len_utf8())),
                _ => None,
            };
        }
    }
    None
}

/// Computes up to `max_highlights` non-duplicate ranges to emphasize in
/// `text`, guided by `hints`.
///
/// Hints are processed in order, sentence by sentence. Sentences longer than
/// `preferred_length` are bisected at the whitespace nearest their midpoint
/// and each half is matched independently. Candidates that don't literally
/// occur in `text` are skipped. If no hint produces a match, the text's own
/// sentences are used instead, with the first tagged [`Tone::Success`] as
/// the primary takeaway.
///
/// Every returned range satisfies `0 <= start < end <= text.len()`, and no
/// two ranges share the same `(start, end)` pair.
pub fn compute_highlight_ranges<S: AsRef<str>>(
    text: &str,
    hints: &[S],
    options: &HighlightOptions,
) -> Vec<HighlightRange> {
    if text.is_empty() || options.max_highlights == 0 {
        return Vec::new();
    }

    let mut ranges: Vec<HighlightRange> = Vec::new();

    for hint in hints {
        let hint = hint.as_ref();
        if hint.trim().is_empty() {
            continue;
        }
        for (_, segment) in split_sentences(hint) {
            if ranges.len() >= options.max_highlights {
                break;
            }
            for candidate in candidates_for(segment, options.preferred_length) {
                if ranges.len() >= options.max_highlights {
                    break;
                }
                let Some(range) = find_snippet_range(text, candidate, options.tone) else {
                    continue;
                };
                if ranges
                    .iter()
                    .any(|r| r.start == range.start && r.end == range.end)
                {
                    continue;
                }
                ranges.push(range);
            }
        }
    }

    if ranges.is_empty() {
        // Every hint missed. Emphasize the text's own leading sentences so
        // the reader still gets an anchor; the first is the takeaway.
        for (i, (start, segment)) in split_sentences(text)
            .into_iter()
            .filter(|(_, s)| s.len() >= MIN_SEGMENT_LEN)
            .take(options.max_highlights)
            .enumerate()
        {
            let tone = if i == 0 { Tone::Success } else { Tone::Info };
            let end = (start + segment.len()).min(text.len());
            ranges.push(HighlightRange { start, end, tone });
        }
    }

    ranges
}

/// Candidate substrings for one sentence segment: the segment itself when it
/// fits `preferred_length`, or its two halves when it doesn't. Fragments
/// below the minimum lengths are dropped.
fn candidates_for(segment: &str, preferred_length: usize) -> Vec<&str> {
    let mut out = Vec::new();
    if segment.len() > preferred_length {
        let (left, right) = bisect(segment);
        for half in [left.trim(), right.trim()] {
            if half.len() >= MIN_HALF_LEN {
                out.push(half);
            }
        }
    } else if segment.len() >= MIN_SEGMENT_LEN {
        out.push(segment);
    }
    out
}

/// Splits an over-long segment in two at the nearest space at or before its
/// midpoint (searching backward); exactly at the midpoint when no space
/// exists in the first half.
fn bisect(segment: &str) -> (&str, &str) {
    let mut mid = segment.len() / 2;
    while mid > 0 && !segment.is_char_boundary(mid) {
        mid -= 1;
    }
    let bytes = segment.as_bytes();
    let split_at = (0..=mid).rev().find(|&i| bytes[i] == b' ').unwrap_or(mid);
    segment.split_at(split_at)
}

/// Splits `text` into sentence-like segments. A boundary falls after `.`,
/// `!`, or `?` when the next character is whitespace (lookahead; the
/// delimiter stays with its segment). Returns `(byte offset, trimmed
/// segment)` pairs with empty segments dropped.
fn split_sentences(text: &str) -> Vec<(usize, &str)> {
    let mut segments = Vec::new();
    let mut seg_start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?')
            && chars.peek().is_some_and(|&(_, next)| next.is_whitespace())
        {
            let seg_end = i + c.len_utf8();
            push_trimmed(&mut segments, text, seg_start, seg_end);
            seg_start = seg_end;
        }
    }
    push_trimmed(&mut segments, text, seg_start, text.len());

    segments
}

fn push_trimmed<'a>(out: &mut Vec<(usize, &'a str)>, text: &'a str, start: usize, end: usize) {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = raw.len() - raw.trim_start().len();
    out.push((start + lead, trimmed));
}
