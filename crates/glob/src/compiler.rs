//! Translation of one glob pattern into regex source text.
//!
//! The dialect is the EditorConfig one: `?`, `*`, `**`, bracket classes,
//! brace alternation (nesting allowed), `{N..M}` numeric ranges, and
//! backslash escapes. Numeric ranges are not expressible as plain regex
//! text, so the translator emits a signed-integer capture for each and
//! reports the bounds out-of-band for the caller to enforce after a match.

use std::collections::HashSet;

use crate::globset::RangePair;

/// Appends regex source for `glob` to `src`; bounds for each `{N..M}` in the
/// pattern are appended to `ranges` in the order their capture groups appear.
///
/// Every group emitted for any other construct is non-capturing, so range
/// `k` (0-based) always pairs with capture group `k + 1`.
pub(crate) fn append_regex_src(glob: &str, src: &mut String, ranges: &mut Vec<RangePair>) {
    let chars: Vec<char> = glob.chars().collect();
    let paired = braces_paired(&chars);

    // Positions whose character must be emitted as an escaped literal once
    // the scan reaches them: the closing brace of a literal {single} group.
    let mut force_literal: HashSet<usize> = HashSet::new();

    let mut in_bracket = false;
    let mut brace_level = 0usize;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if force_literal.contains(&i) {
            push_literal(src, c);
            i += 1;
            continue;
        }

        match c {
            '\\' => {
                if i + 1 < chars.len() {
                    push_literal(src, chars[i + 1]);
                    i += 1;
                } else {
                    // Trailing backslash escapes nothing; treat it as itself.
                    src.push_str(r"\\");
                }
            }
            '?' => src.push_str("[^/]"),
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    src.push_str(".*");
                    i += 1;
                } else {
                    src.push_str("[^/]*");
                }
            }
            '[' => {
                if in_bracket {
                    src.push_str(r"\[");
                } else if let Some(close) = bracket_with_slash(&chars, i) {
                    // A class containing an unescaped `/` has no class
                    // meaning; the whole group is literal text.
                    src.push('\\');
                    let end = close.unwrap_or(chars.len());
                    for &ch in &chars[i..end] {
                        src.push(ch);
                    }
                    match close {
                        Some(p) => {
                            src.push_str(r"\]");
                            i = p;
                        }
                        None => i = chars.len(),
                    }
                } else {
                    in_bracket = true;
                    if chars.get(i + 1) == Some(&'!') {
                        src.push_str("[^");
                        i += 1;
                    } else {
                        src.push('[');
                    }
                }
            }
            ']' => {
                if in_bracket {
                    in_bracket = false;
                    src.push(']');
                } else {
                    src.push_str(r"\]");
                }
            }
            '-' => {
                if in_bracket {
                    src.push('-');
                } else {
                    src.push_str(r"\-");
                }
            }
            '{' => {
                if !paired {
                    src.push_str(r"\{");
                } else if let Some(close) = single_brace_group(&chars, i) {
                    let body: String = chars[i..=close].iter().collect();
                    if let Some((lo, hi)) = parse_numeric_range(&body) {
                        ranges.push((lo, hi));
                        src.push_str(r"([+-]?\d+)");
                        i = close;
                    } else {
                        // {single}: keep the body, escape both braces.
                        src.push_str(r"\{");
                        force_literal.insert(close);
                    }
                } else {
                    brace_level += 1;
                    src.push_str("(?:");
                }
            }
            '}' => {
                if !paired {
                    src.push_str(r"\}");
                } else {
                    brace_level = brace_level.saturating_sub(1);
                    src.push(')');
                }
            }
            ',' => {
                if brace_level > 0 {
                    src.push('|');
                } else {
                    src.push_str(r"\,");
                }
            }
            '/' => {
                // /**/ matches a single separator or any nonempty subpath.
                if chars[i..].starts_with(&['/', '*', '*', '/']) {
                    src.push_str(r"(?:\/|\/.*\/)");
                    i += 3;
                } else {
                    src.push_str(r"\/");
                }
            }
            _ => push_literal(src, c),
        }

        i += 1;
    }
}

/// Emits `c` so the regex engine reads it as a literal character. Only
/// ASCII punctuation can carry regex meaning; everything else passes
/// through bare.
fn push_literal(src: &mut String, c: char) {
    if c.is_ascii_punctuation() {
        src.push('\\');
        src.push(c);
    } else {
        src.push(c);
    }
}

/// Whether `{`/`}` counts balance, scanning left to right past escapes.
/// An excess of `}` at any prefix also counts as unpaired.
fn braces_paired(chars: &[char]) -> bool {
    let mut left = 0u32;
    let mut right = 0u32;
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '\\' && i + 1 < chars.len() {
            i += 2;
            continue;
        }
        match chars[i] {
            '{' => left += 1,
            '}' => right += 1,
            _ => {}
        }
        if right > left {
            return false;
        }
        i += 1;
    }
    left == right
}

/// For a `[` at `open`, reports whether the class body holds an unescaped
/// `/` before its closing bracket. `Some(close)` carries the position of the
/// first `]` at or after `open` (`None` inside when the bracket never
/// closes); `None` overall means the group is a genuine character class.
fn bracket_with_slash(chars: &[char], open: usize) -> Option<Option<usize>> {
    let mut has_slash = false;
    let mut i = open;
    while i < chars.len() && chars[i] != ']' {
        if chars[i] == '\\' && i + 1 < chars.len() {
            i += 2;
            continue;
        }
        if chars[i] == '/' {
            has_slash = true;
            break;
        }
        i += 1;
    }
    if !has_slash {
        return None;
    }
    Some(chars[open..].iter().position(|&c| c == ']').map(|p| p + open))
}

/// For a `{` at `open` in a paired-brace pattern, returns the position of
/// the matching `}` when the group contains no top-level unescaped `,`
/// (a "{single}" group); `None` means ordinary alternation.
fn single_brace_group(chars: &[char], open: usize) -> Option<usize> {
    let mut i = open + 1;
    while i < chars.len() && chars[i] != '}' {
        if chars[i] == '\\' && i + 1 < chars.len() {
            i += 2;
            continue;
        }
        if chars[i] == ',' {
            return None;
        }
        i += 1;
    }
    if i < chars.len() {
        Some(i)
    } else {
        None
    }
}

/// Parses `{N..M}` with signed integer endpoints; anything else is `None`.
fn parse_numeric_range(body: &str) -> Option<RangePair> {
    let inner = body.strip_prefix('{')?.strip_suffix('}')?;
    let (lo, hi) = inner.split_once("..")?;
    Some((parse_signed_int(lo)?, parse_signed_int(hi)?))
}

fn parse_signed_int(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
