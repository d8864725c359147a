//! UTF-8 text utilities for surface editing.
//!
//! Offsets handed around by the editing layer are byte offsets that always sit
//! on a `char` boundary. These helpers keep them there.

use std::borrow::Cow;

/// Pull `index` into `0..=s.len()` and back onto the start of the char it
/// points into.
///
/// # Examples
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 2), 1); // mid '€' -> start of '€'
/// assert_eq!(clamp_to_char_boundary(s, 4), 4); // 'b'
/// assert_eq!(clamp_to_char_boundary(s, 100), 5); // beyond end -> len
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Start of the char before `i` (0 at the start).
///
/// ```
/// use input_core::prev_cursor_boundary;
///
/// assert_eq!(prev_cursor_boundary("a€b", 4), 1);
/// assert_eq!(prev_cursor_boundary("a€b", 0), 0);
/// ```
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[..i].chars().next_back().map_or(0, |c| i - c.len_utf8())
}

/// End of the char at `i` (`s.len()` at the end).
///
/// ```
/// use input_core::next_cursor_boundary;
///
/// assert_eq!(next_cursor_boundary("a€b", 1), 4);
/// assert_eq!(next_cursor_boundary("a€b", 5), 5);
/// ```
pub fn next_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[i..].chars().next().map_or(s.len(), |c| i + c.len_utf8())
}

/// Replace `text[start..end]` with `insertion`.
///
/// Offsets are clamped onto char boundaries first, so the call never panics.
/// For in-range offsets the result length is
/// `text.len() - (end - start) + insertion.len()`.
///
/// ```
/// use input_core::splice_text;
///
/// assert_eq!(splice_text("hi ", 3, 3, "world"), "hi world");
/// assert_eq!(splice_text("hello", 4, 5, ""), "hell");
/// ```
pub fn splice_text(text: &str, start: usize, end: usize, insertion: &str) -> String {
    let a = clamp_to_char_boundary(text, start.min(end));
    let b = clamp_to_char_boundary(text, start.max(end));

    let mut out = String::with_capacity(text.len() - (b - a) + insertion.len());
    out.push_str(&text[..a]);
    out.push_str(insertion);
    out.push_str(&text[b..]);
    out
}

/// Number of `char`s in `s`; the unit `max_length` is expressed in.
#[inline]
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Keep the first `max_chars` characters of `s`.
///
/// Returns `Cow::Borrowed` when nothing has to go.
pub fn truncate_chars(s: &str, max_chars: usize) -> Cow<'_, str> {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(s[..cut].to_string()),
        None => Cow::Borrowed(s),
    }
}

/// Drop CR and LF, as a single-line `<input>` does with inserted text.
///
/// ```
/// use input_core::filter_single_line;
///
/// assert_eq!(filter_single_line("hello\nworld"), "helloworld");
/// assert_eq!(filter_single_line("a\r\nb"), "ab");
/// ```
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    const BREAKS: [char; 2] = ['\r', '\n'];
    if s.contains(BREAKS) {
        Cow::Owned(s.replace(BREAKS, ""))
    } else {
        Cow::Borrowed(s)
    }
}

/// CRLF and lone CR become LF. Borrows when there is no CR.
///
/// ```
/// use input_core::normalize_newlines;
///
/// assert_eq!(normalize_newlines("hello\r\nworld"), "hello\nworld");
/// assert_eq!(normalize_newlines("hello\rworld"), "hello\nworld");
/// ```
pub fn normalize_newlines(s: &str) -> Cow<'_, str> {
    if s.contains('\r') {
        Cow::Owned(s.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(s)
    }
}

/// Number of visual lines a value occupies (at least one, even when empty).
pub fn line_count(s: &str) -> usize {
    s.split('\n').count().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_next_cursor_basic() {
        let s = "a€b";
        assert_eq!(prev_cursor_boundary(s, 5), 4);
        assert_eq!(prev_cursor_boundary(s, 4), 1);
        assert_eq!(prev_cursor_boundary(s, 1), 0);
        assert_eq!(prev_cursor_boundary(s, 0), 0);

        assert_eq!(next_cursor_boundary(s, 0), 1);
        assert_eq!(next_cursor_boundary(s, 1), 4);
        assert_eq!(next_cursor_boundary(s, 4), 5);
        assert_eq!(next_cursor_boundary(s, 5), 5);
    }

    #[test]
    fn splice_length_matches_removed_and_inserted() {
        let cases: &[(&str, usize, usize, &str)] = &[
            ("hello", 0, 0, "x"),
            ("hello", 1, 4, ""),
            ("hello", 5, 5, " world"),
            ("", 0, 0, ""),
            ("abc", 0, 3, "xyz!"),
        ];
        for &(text, s, e, r) in cases {
            let out = splice_text(text, s, e, r);
            assert_eq!(out.len(), text.len() - (e - s) + r.len(), "{text:?} {s}..{e} {r:?}");
        }
    }

    #[test]
    fn splice_clamps_out_of_range_offsets() {
        assert_eq!(splice_text("ab", 5, 9, "x"), "abx");
        assert_eq!(splice_text("ab", 2, 0, ""), "");
        // Offsets inside '€' snap back to its start.
        assert_eq!(splice_text("a€b", 2, 4, ""), "ab");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("abcdef", 5), "abcde");
        assert_eq!(truncate_chars("€€€", 2), "€€");
        assert!(matches!(truncate_chars("abc", 3), Cow::Borrowed("abc")));
        assert_eq!(char_count("a€b"), 3);
    }

    #[test]
    fn newline_helpers() {
        assert_eq!(filter_single_line("\n\r"), "");
        assert_eq!(normalize_newlines("a\r\nb\rc\nd"), "a\nb\nc\nd");
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("a\nb\n"), 3);
    }
}
