/// The line endings recognised by the text primitives.
///
/// Only `\n` splits lines. `\r` is tracked so that scanners treat a stray
/// carriage return as a word delimiter.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum LineEnding {
  /// U+000A -- LineFeed
  LF,

  /// U+000D -- CarriageReturn
  CR,
}

impl LineEnding {
  #[inline]
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::LF => "\u{000A}",
      Self::CR => "\u{000D}",
    }
  }

  #[inline]
  pub const fn from_char(ch: char) -> Option<LineEnding> {
    match ch {
      '\u{000A}' => Some(LineEnding::LF),
      '\u{000D}' => Some(LineEnding::CR),
      _ => None,
    }
  }
}

/// The separator lines are split on and joined with.
pub const LINE_SEPARATOR: LineEnding = LineEnding::LF;

/// Splits `text` into lines on `\n`.
///
/// Unlike [`str::lines`] this keeps a trailing empty line and does not
/// strip `\r`, so `split_lines("a\n")` yields `["a", ""]` and an empty
/// string yields a single empty line.
#[inline]
pub fn split_lines(text: &str) -> std::str::Split<'_, &'static str> {
  text.split(LINE_SEPARATOR.as_str())
}

/// Char offset of the first `\n`, or the char length of `text` if there
/// is none.
pub fn first_line_break_char_index(text: &str) -> usize {
  let separator = LINE_SEPARATOR.as_str();
  match text.find(separator) {
    Some(byte_idx) => text[..byte_idx].chars().count(),
    None => text.chars().count(),
  }
}

#[cfg(test)]
mod line_ending_tests {
  use super::*;

  #[test]
  fn char_to_line_ending() {
    assert_eq!(LineEnding::from_char('\n'), Some(LineEnding::LF));
    assert_eq!(LineEnding::from_char('\r'), Some(LineEnding::CR));
    assert_eq!(LineEnding::from_char('\u{000B}'), None);
    assert_eq!(LineEnding::from_char('a'), None);
  }

  #[test]
  fn line_ending_strs() {
    assert_eq!(LineEnding::LF.as_str(), "\n");
    assert_eq!(LineEnding::CR.as_str(), "\r");
  }

  #[test]
  fn split_keeps_empty_lines() {
    assert_eq!(split_lines("").collect::<Vec<_>>(), vec![""]);
    assert_eq!(split_lines("a\n").collect::<Vec<_>>(), vec!["a", ""]);
    assert_eq!(
      split_lines("a\r\nb").collect::<Vec<_>>(),
      vec!["a\r", "b"]
    );
  }

  #[test]
  fn first_line_break() {
    assert_eq!(first_line_break_char_index("hello\nworld"), 5);
    assert_eq!(first_line_break_char_index("héllo\nworld"), 5);
    assert_eq!(first_line_break_char_index("no break"), 8);
    assert_eq!(first_line_break_char_index(""), 0);
    assert_eq!(first_line_break_char_index("\n"), 0);
  }
}
