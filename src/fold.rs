//! ASCII folding engine.
//!
//! Maps non-ASCII Latin-derived characters (accented letters, ligatures,
//! circled/fullwidth/sub- and superscript variants, typographic punctuation)
//! to their closest plain-ASCII equivalents using the compiled-in
//! [`FOLD_TABLE`](data::FOLD_TABLE).
//!
//! * ASCII is always the identity.
//! * Unmapped non-ASCII characters pass through unchanged.
//! * Replacements are 1..=[`MAX_FOLD_LEN`] ASCII bytes, so the output can grow
//!   (`ß` → `ss`, `ﬄ` → `ffl`, `⑽` → `(10)`).
//! * Every replacement is ASCII, therefore folding is idempotent.
pub mod data;

use data::FOLD_TABLE;
use std::borrow::Cow;
use std::iter::FusedIterator;
use std::str::Chars;

/// Longest replacement in the table, in bytes (== chars, replacements are ASCII).
pub const MAX_FOLD_LEN: usize = 4;

/// Replacement for a single character, or `None` if it passes through unchanged.
#[inline(always)]
pub fn fold_char(c: char) -> Option<&'static str> {
    if c.is_ascii() {
        return None;
    }
    FOLD_TABLE.get(&c).copied()
}

/// `true` if at least one character of `text` has a table entry.
#[inline]
pub fn needs_folding(text: &str) -> bool {
    !text.is_ascii() && text.chars().any(|c| fold_char(c).is_some())
}

/// Exact byte length of the folded form of `text`.
#[inline]
pub fn folded_len(text: &str) -> usize {
    if text.is_ascii() {
        return text.len();
    }
    text.chars()
        .map(|c| fold_char(c).map_or(c.len_utf8(), str::len))
        .sum()
}

/// Fold `text`, borrowing when nothing has to change.
pub fn fold_to_ascii(text: &str) -> Cow<'_, str> {
    if !needs_folding(text) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(folded_len(text));
    fold_into(text, &mut out);
    Cow::Owned(out)
}

/// Append the folded form of `text` to `out`.
///
/// Returns `true` if any character was replaced. `out` is not cleared, which
/// lets callers keep one buffer alive across many tokens.
pub fn fold_into(text: &str, out: &mut String) -> bool {
    if text.is_ascii() {
        out.push_str(text);
        return false;
    }

    let mut changed = false;
    // Copy unmapped runs as slices rather than char by char.
    let mut run_start = 0;
    for (i, c) in text.char_indices() {
        if let Some(replacement) = fold_char(c) {
            out.push_str(&text[run_start..i]);
            out.push_str(replacement);
            run_start = i + c.len_utf8();
            changed = true;
        }
    }
    out.push_str(&text[run_start..]);
    changed
}

/// Lazy, allocation-free folding iterator.
///
/// ```
/// use asciifold::fold::FoldChars;
///
/// let folded: String = FoldChars::new("ﬁsh").collect();
/// assert_eq!(folded, "fish");
/// ```
#[derive(Debug, Clone)]
pub struct FoldChars<'a> {
    chars: Chars<'a>,
    pending: &'static str,
}

impl<'a> FoldChars<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            pending: "",
        }
    }
}

impl<'a> Iterator for FoldChars<'a> {
    type Item = char;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        // Replacements are ASCII: one byte is one char.
        if let Some(&b) = self.pending.as_bytes().first() {
            self.pending = &self.pending[1..];
            return Some(b as char);
        }
        let c = self.chars.next()?;
        match fold_char(c) {
            Some(replacement) => {
                self.pending = &replacement[1..];
                Some(replacement.as_bytes()[0] as char)
            }
            None => Some(c),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.chars.size_hint();
        let pending = self.pending.len();
        (
            lo + pending,
            hi.and_then(|h| h.checked_mul(MAX_FOLD_LEN))
                .and_then(|h| h.checked_add(pending)),
        )
    }
}

impl<'a> FusedIterator for FoldChars<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn test_ascii_is_identity() {
        for b in 0u8..0x80 {
            assert_eq!(fold_char(b as char), None);
        }
        let input = "Hello, World! 0123456789 ~";
        assert!(matches!(fold_to_ascii(input), Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn test_unmapped_non_ascii_passes_through() {
        assert_eq!(fold_char('中'), None);
        assert_eq!(fold_char('ж'), None);
        assert!(!needs_folding("日本語"));
        assert!(matches!(fold_to_ascii("日本語"), Cow::Borrowed("日本語")));
    }

    #[test]
    fn test_sharp_s_and_ligatures() {
        assert_eq!(fold_char('ß'), Some("ss"));
        assert_eq!(fold_char('ẞ'), Some("SS"));
        assert_eq!(fold_char('Ĳ'), Some("IJ"));
        assert_eq!(fold_char('ĳ'), Some("ij"));
        assert_eq!(fold_char('ﬁ'), Some("fi"));
        assert_eq!(fold_char('ﬄ'), Some("ffl"));
        assert_eq!(fold_char('Æ'), Some("AE"));
        assert_eq!(fold_char('œ'), Some("oe"));
    }

    #[test]
    fn test_dz_digraphs_keep_case_pattern() {
        assert_eq!(fold_char('\u{01C4}'), Some("DZ"));
        assert_eq!(fold_char('\u{01C5}'), Some("Dz"));
        assert_eq!(fold_char('\u{01C6}'), Some("dz"));
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(fold_char('①'), Some("1"));
        assert_eq!(fold_char('₂'), Some("2"));
        assert_eq!(fold_char('³'), Some("3"));
        assert_eq!(fold_char('９'), Some("9"));
        assert_eq!(fold_char('⒈'), Some("1."));
        assert_eq!(fold_char('⑽'), Some("(10)"));
        assert_eq!(fold_char('⑳'), Some("20"));
    }

    #[test]
    fn test_typographic_punctuation() {
        assert_eq!(fold_to_ascii("“quoted” ‘single’"), "\"quoted\" 'single'");
        assert_eq!(fold_to_ascii("a–b—c"), "a-b-c");
        assert_eq!(fold_to_ascii("［x］＋｛y｝"), "[x]+{y}");
        assert_eq!(fold_char('＼'), Some("\\"));
        assert_eq!(fold_char('⁇'), Some("??"));
    }

    #[test]
    fn test_fold_to_ascii_growth() {
        let folded = fold_to_ascii("ﬁsh");
        assert!(matches!(folded, Cow::Owned(_)));
        assert_eq!(folded, "fish");
        // One ligature char expands to two.
        assert_eq!("ﬁsh".chars().count(), 3);
        assert_eq!(folded.chars().count(), "ﬁsh".chars().count() + 1);
    }

    #[test]
    fn test_folded_len_is_exact() {
        for input in ["", "plain", "café", "Straße", "⑽ ﬄ ẞ", "中文 é"] {
            assert_eq!(folded_len(input), fold_to_ascii(input).len(), "{input}");
        }
    }

    #[test]
    fn test_fold_into_appends_and_reports_change() {
        let mut out = String::from(">");
        assert!(fold_into("clés", &mut out));
        assert_eq!(out, ">cles");
        assert!(!fold_into(" 中", &mut out));
        assert_eq!(out, ">cles 中");
    }

    #[test]
    fn test_fold_chars_matches_fold_to_ascii() {
        for input in ["", "END", "Des mot clés", "ﬁsh ⑽ ß", "Ǆemal Ǉ"] {
            let lazy: String = FoldChars::new(input).collect();
            assert_eq!(lazy, fold_to_ascii(input));
        }
    }

    #[test]
    fn test_fold_chars_size_hint_bounds() {
        let iter = FoldChars::new("⑽");
        let (lo, hi) = iter.size_hint();
        let n = iter.count();
        assert!(lo <= n && n <= hi.unwrap());
    }

    #[test]
    fn test_table_replacements_are_short_ascii() {
        for (&c, &replacement) in data::FOLD_TABLE.entries() {
            assert!(!c.is_ascii(), "ASCII key {c:?} in fold table");
            assert!(replacement.is_ascii(), "{c:?} folds to non-ASCII");
            assert!((1..=MAX_FOLD_LEN).contains(&replacement.len()), "{c:?}");
        }
        assert_eq!(data::FOLD_TABLE.len(), 1242);
    }

    #[test]
    fn test_many_to_one() {
        let capital_a = data::FOLD_TABLE
            .values()
            .filter(|&&replacement| replacement == "A")
            .count();
        assert_eq!(capital_a, 34);
    }
}
