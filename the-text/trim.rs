use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex_automata::meta::Regex;
use the_text_core::chars::{
  char_to_byte_idx,
  trim_whitespace,
};

const ELLIPSIS: &str = "...";

/// A line break, any whitespace (line breaks included), then another line
/// break. The class mirrors `char_is_whitespace`: U+FEFF is in, U+0085 is
/// out.
fn blank_lines_regex() -> &'static Regex {
  static REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::builder()
      .build(
        r"\n[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]*\n",
      )
      .expect("blank lines regex should compile")
  });

  &REGEX
}

/// Deletes every run of blank lines together with the line breaks around
/// it.
///
/// The surrounding line breaks go too, so the lines on either side are
/// joined: `"a\n\n  \nb"` becomes `"ab"`.
pub fn trim_blank_lines(text: &str) -> String {
  let mut res = String::with_capacity(text.len());
  let mut pos = 0;
  for mat in blank_lines_regex().find_iter(text) {
    res.push_str(&text[pos..mat.start()]);
    pos = mat.end();
  }
  res.push_str(&text[pos..]);
  res
}

/// Truncates `text` to `length` chars followed by `"..."`, or returns it
/// untouched when it already fits.
pub fn ellipsize(text: &str, length: usize) -> Cow<'_, str> {
  let end = char_to_byte_idx(text, length);
  if end == text.len() {
    Cow::Borrowed(text)
  } else {
    Cow::Owned(format!("{}{ELLIPSIS}", &text[..end]))
  }
}

/// Everything before the first `.`, or all of `text`.
pub fn trim_to_sentence(text: &str) -> &str {
  text.split_once('.').map_or(text, |(sentence, _)| sentence)
}

/// Splits on single spaces, drops whitespace-only pieces and rejoins with
/// one space.
///
/// Tabs and newlines inside a piece are left alone.
pub fn trim_and_normalize(text: &str) -> String {
  text
    .split(' ')
    .filter(|piece| !trim_whitespace(piece).is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}
