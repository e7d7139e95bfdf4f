//! Small text helpers shared by the extraction pipeline.

use crate::catalog::Pattern;

/// Drops everything that is not an ASCII digit and parses the rest.
///
/// Empty or overflowing input yields `0`.
#[must_use]
pub fn parse_int(s: &str) -> u32 {
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Turns the raw title region into display form.
///
/// Separators become single spaces; repeated spaces are kept.
#[must_use]
pub fn clean_title(s: &str) -> String {
    s.replace(['.', '_', '-'], " ").trim_matches(' ').to_string()
}

/// Splits a season match such as `S01-S03` into `(start, end)`.
///
/// `end` is `0` when the match holds a single season.
#[must_use]
pub fn split_seasons(s: &str) -> (u32, u32) {
    let mut parts = s.split('-');
    let start = parts.next().map(parse_int).unwrap_or(0);
    let end = parts.next().map(parse_int).unwrap_or(0);
    (start, end)
}

/// Splits an episode match such as `E01-E03` or `Episode 5` into its
/// non-empty number tokens.
///
/// The word "episode" is removed first; `.`, `-`, `ep`, `e` and `x` separate
/// tokens, all case-insensitive.
#[must_use]
pub fn split_episodes(s: &str) -> Vec<String> {
    let cleaned = remove_ignore_ascii_case(s, "episode");
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = cleaned.chars().peekable();

    while let Some(c) = chars.next() {
        match c.to_ascii_lowercase() {
            '.' | '-' | 'x' => flush(&mut current, &mut tokens),
            'e' => {
                if chars.peek().is_some_and(|n| n.eq_ignore_ascii_case(&'p')) {
                    chars.next();
                }
                flush(&mut current, &mut tokens);
            }
            _ => current.push(c),
        }
    }
    flush(&mut current, &mut tokens);

    tokens
}

fn flush(current: &mut String, tokens: &mut Vec<String>) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}

fn remove_ignore_ascii_case(haystack: &str, needle: &str) -> String {
    // ASCII lower-casing keeps byte offsets, so positions map back 1:1.
    let lowered = haystack.to_ascii_lowercase();
    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;
    for (pos, _) in lowered.match_indices(needle) {
        out.push_str(&haystack[last..pos]);
        last = pos + needle.len();
    }
    out.push_str(&haystack[last..]);
    out
}

/// Cleans a release-group match: drops the leading hyphen and any embedded
/// container token (`-GRP.mkv` becomes `GRP`).
#[must_use]
pub fn strip_group(matched: &str, container: &Pattern) -> String {
    container.strip(&matched.replacen('-', "", 1))
}
