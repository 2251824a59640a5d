use crate::line_ending::LineEnding;

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum CharCategory {
  /// Space or tab.
  Indent,
  Eol,
  /// Whitespace that neither indents nor ends a line, such as U+00A0 or
  /// U+FEFF.
  Whitespace,
  Word,
}

pub fn categorize_char(ch: char) -> CharCategory {
  match ch {
    c if char_is_indent(c) => CharCategory::Indent,
    c if char_is_line_ending(c) => CharCategory::Eol,
    '\u{000B}' | '\u{000C}' | '\u{00A0}' | '\u{1680}' | '\u{2028}' | '\u{2029}'
    | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}' => CharCategory::Whitespace,
    // En Quad through Hair Space.
    c if ('\u{2000}'..='\u{200A}').contains(&c) => CharCategory::Whitespace,
    _ => CharCategory::Word,
  }
}

#[inline]
pub fn char_is_line_ending(ch: char) -> bool {
  LineEnding::from_char(ch).is_some()
}

/// Whitespace as understood by the trimming and stripping helpers.
///
/// This includes U+FEFF (byte order mark) and excludes U+0085 (next line),
/// which differs from [`char::is_whitespace`].
#[inline]
pub fn char_is_whitespace(ch: char) -> bool {
  categorize_char(ch) != CharCategory::Word
}

/// `text` with leading and trailing [`char_is_whitespace`] chars removed.
#[inline]
pub fn trim_whitespace(text: &str) -> &str {
  text.trim_matches(char_is_whitespace)
}

/// Characters that make up an indentation run.
#[inline]
pub fn char_is_indent(ch: char) -> bool {
  matches!(ch, ' ' | '\t')
}

/// Characters that terminate a word: space, tab, `\n` and `\r`.
///
/// Other Unicode whitespace (e.g. U+00A0) is deliberately part of a word.
#[inline]
pub fn char_is_word_delimiter(ch: char) -> bool {
  matches!(
    categorize_char(ch),
    CharCategory::Indent | CharCategory::Eol
  )
}

/// A char is "lower" when lower-casing it yields exactly itself.
///
/// Digits, punctuation and other caseless chars are trivially lower. Chars
/// whose lowercase mapping expands to several chars are not.
#[inline]
pub fn char_is_lower(ch: char) -> bool {
  let mut lower = ch.to_lowercase();
  lower.next() == Some(ch) && lower.next().is_none()
}

/// Converts a char index into a byte index, clamping to the end of `text`.
#[inline]
pub fn char_to_byte_idx(text: &str, char_idx: usize) -> usize {
  text
    .char_indices()
    .nth(char_idx)
    .map(|(byte_idx, _)| byte_idx)
    .unwrap_or(text.len())
}
