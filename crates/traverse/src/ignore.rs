use glob::{GlobError, Matcher};

/// Adds the patterns of an ignore file to `matcher`, each anchored at
/// `anchor_dir`.
///
/// Lines are independent, `\n`-terminated (a trailing `\r` is tolerated),
/// and trimmed of surrounding whitespace. Empty lines and lines whose first
/// character is `#` are comments; an unescaped `#` elsewhere ends the
/// pattern at that point. A leading `!` on a surviving pattern inverts its
/// polarity as usual.
///
/// ```
/// use glob::Matcher;
/// use traverse::add_ignore_lines;
///
/// let mut ignores = Matcher::new();
/// add_ignore_lines(&mut ignores, b"# build products\n*.o\n!keep.o\n", "/src")?;
/// ignores.finalize()?;
///
/// assert!(ignores.contains("/src/main.o")?);
/// assert!(!ignores.contains("/src/keep.o")?);
/// # Ok::<(), glob::GlobError>(())
/// ```
///
/// # Errors
///
/// Propagates [`GlobError`] from the matcher; content that parses to no
/// patterns at all is fine.
pub fn add_ignore_lines(
    matcher: &mut Matcher,
    contents: &[u8],
    anchor_dir: &str,
) -> Result<(), GlobError> {
    let text = String::from_utf8_lossy(contents);
    for line in text.split('\n') {
        let mut pattern = line.trim();
        if pattern.is_empty() || pattern.starts_with('#') {
            continue;
        }
        if let Some(cut) = find_unescaped_hash(pattern) {
            pattern = pattern[..cut].trim_end();
        }
        matcher.add_glob_at(pattern, anchor_dir)?;
    }
    Ok(())
}

/// Position of the first `#` not preceded by a backslash, past position 0.
fn find_unescaped_hash(pattern: &str) -> Option<usize> {
    let bytes = pattern.as_bytes();
    (1..bytes.len()).find(|&idx| bytes[idx] == b'#' && bytes[idx - 1] != b'\\')
}
