use serde::{
  Deserialize,
  Serialize,
};
use the_text_core::{
  chars::char_is_word_delimiter,
  line_ending::{
    LINE_SEPARATOR,
    first_line_break_char_index,
    split_lines,
  },
};

pub const DEFAULT_LINE_NUMBER_SEPARATOR: &str = ":";

const SPACE_MARKER: &str = "[␣]";
const TAB_MARKER: &str = "[→]";
const CARRIAGE_RETURN_MARKER: &str = "[↵]";
const NEW_LINE_MARKER: &str = "[n]";

/// Prefixes every line with its 1-based number, `separator` and a space.
///
/// ```
/// use the_text::add_line_numbers;
///
/// assert_eq!(add_line_numbers("Hello\nWorld", ":"), "1: Hello\n2: World");
/// assert_eq!(add_line_numbers("One\nTwo", " |"), "1 | One\n2 | Two");
/// ```
pub fn add_line_numbers(text: &str, separator: &str) -> String {
  if text.is_empty() {
    return String::new();
  }

  split_lines(text)
    .enumerate()
    .map(|(idx, line)| format!("{}{separator} {line}", idx + 1))
    .collect::<Vec<_>>()
    .join(LINE_SEPARATOR.as_str())
}

/// Hard-wraps `text` every `length` chars, ignoring word boundaries and
/// existing line breaks.
pub fn wrap_text(text: &str, length: usize) -> String {
  if length == 0 {
    return text.to_owned();
  }

  let mut res = String::with_capacity(text.len() + text.len() / length);
  for (idx, ch) in text.chars().enumerate() {
    if idx > 0 && idx % length == 0 {
      res.push_str(LINE_SEPARATOR.as_str());
    }
    res.push(ch);
  }
  res
}

/// The first `range` lines of `text`.
pub fn extract_lines(text: &str, range: usize) -> String {
  split_lines(text)
    .take(range)
    .collect::<Vec<_>>()
    .join(LINE_SEPARATOR.as_str())
}

/// Lines `start..=end` of `text` (0-based).
///
/// A negative `start` is clamped to the first line. A negative or
/// out-of-range `end` selects through the last line. An empty vector is
/// returned when the clamped `start` lies past the clamped `end`.
pub fn extract_line_range(text: &str, start: isize, end: isize) -> Vec<&str> {
  let lines: Vec<&str> = split_lines(text).collect();
  // `split` always yields at least one line.
  let last = lines.len() - 1;

  let start = usize::try_from(start).unwrap_or(0);
  let end = match usize::try_from(end) {
    Ok(end) if end <= last => end,
    _ => last,
  };
  if start > end {
    return Vec::new();
  }

  lines[start..=end].to_vec()
}

/// Replaces spaces, tabs and carriage returns with visible markers.
pub fn visualize_whitespace(text: &str) -> String {
  let mut res = String::with_capacity(text.len());
  for ch in text.chars() {
    match ch {
      ' ' => res.push_str(SPACE_MARKER),
      '\t' => res.push_str(TAB_MARKER),
      '\r' => res.push_str(CARRIAGE_RETURN_MARKER),
      _ => res.push(ch),
    }
  }
  res
}

/// Appends a `[n]` marker after every `\n`, keeping the line break.
pub fn visualize_new_line(text: &str) -> String {
  let separator = LINE_SEPARATOR.as_str();
  text.replace(separator, &format!("{separator}{NEW_LINE_MARKER}"))
}

pub fn visualize_tab(text: &str) -> String {
  text.replace('\t', TAB_MARKER)
}

/// Char offset of the first `\n`, or the char length of `text`.
#[inline]
pub fn get_new_line_index(text: &str) -> usize {
  first_line_break_char_index(text)
}

fn count_words(line: &str) -> usize {
  line
    .split(char_is_word_delimiter)
    .filter(|word| !word.is_empty())
    .count()
}

pub fn count_words_per_line(text: &str) -> Vec<usize> {
  split_lines(text).map(count_words).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineOrder {
  #[default]
  Alphabetical,
  ReverseAlphabetical,
  /// Ascending number of words, ties keep their order.
  WordCount,
  /// Ascending number of chars, ties keep their order.
  Length,
}

pub fn sort_lines(text: &str, order: LineOrder) -> String {
  let mut lines: Vec<&str> = split_lines(text).collect();
  match order {
    LineOrder::Alphabetical => lines.sort(),
    LineOrder::ReverseAlphabetical => lines.sort_by(|a, b| b.cmp(a)),
    LineOrder::WordCount => lines.sort_by_key(|line| count_words(line)),
    LineOrder::Length => lines.sort_by_key(|line| line.chars().count()),
  }
  lines.join(LINE_SEPARATOR.as_str())
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_add_line_numbers() {
    assert_eq!(add_line_numbers("Hello\nWorld", ":"), "1: Hello\n2: World");
    assert_eq!(
      add_line_numbers("Hello\nWorld", DEFAULT_LINE_NUMBER_SEPARATOR),
      "1: Hello\n2: World"
    );
    assert_eq!(add_line_numbers("Hello\nWorld", " ->"), "1 -> Hello\n2 -> World");
    assert_eq!(add_line_numbers("", ":"), "");
    assert_eq!(add_line_numbers("single", ":"), "1: single");
    assert_eq!(add_line_numbers("a\n", ":"), "1: a\n2: ");
  }

  #[test]
  fn test_wrap_text() {
    assert_eq!(
      wrap_text("This is a wrapped text example", 10),
      "This is a \nwrapped te\nxt example"
    );
    assert_eq!(wrap_text("abcde", 2), "ab\ncd\ne");
    assert_eq!(wrap_text("abcd", 4), "abcd");
    assert_eq!(wrap_text("ab", 0), "ab");
    assert_eq!(wrap_text("", 3), "");
    assert_eq!(wrap_text("héllo", 2), "hé\nll\no");
  }

  #[test]
  fn test_extract_lines() {
    let text = "one\ntwo\nthree";
    assert_eq!(extract_lines(text, 2), "one\ntwo");
    assert_eq!(extract_lines(text, 10), text);
    assert_eq!(extract_lines(text, 0), "");
  }

  #[test]
  fn test_extract_line_range() {
    let text = "Line 1\nLine 2\nLine 3\nLine 4\nLine 5";
    assert_eq!(extract_line_range(text, 1, 3), vec!["Line 2", "Line 3", "Line 4"]);
    assert_eq!(extract_line_range(text, -5, 0), vec!["Line 1"]);
    assert_eq!(extract_line_range(text, 3, 100), vec!["Line 4", "Line 5"]);
    assert_eq!(extract_line_range(text, 3, -1), vec!["Line 4", "Line 5"]);
    assert_eq!(extract_line_range(text, 4, 2), Vec::<&str>::new());
    assert_eq!(extract_line_range(text, 9, 9), Vec::<&str>::new());
    assert_eq!(extract_line_range("", 0, 0), vec![""]);
  }

  #[test]
  fn test_visualize() {
    assert_eq!(visualize_whitespace("a b\tc\rd\n"), "a[␣]b[→]c[↵]d\n");
    assert_eq!(visualize_new_line("a\nb\n"), "a\n[n]b\n[n]");
    assert_eq!(visualize_new_line("ab"), "ab");
    assert_eq!(visualize_tab("\ta b\t"), "[→]a b[→]");
  }

  #[test]
  fn test_get_new_line_index() {
    assert_eq!(get_new_line_index("Hello\nWorld"), 5);
    assert_eq!(get_new_line_index("Hello"), 5);
    assert_eq!(get_new_line_index(""), 0);
  }

  #[test]
  fn test_count_words_per_line() {
    assert_eq!(count_words_per_line("one two\n\n three\tfour five "), vec![2, 0, 3]);
    assert_eq!(count_words_per_line(""), vec![0]);
  }

  #[test]
  fn test_sort_lines() {
    let text = "pear\napple\nfig tree\nbanana";
    assert_eq!(
      sort_lines(text, LineOrder::Alphabetical),
      "apple\nbanana\nfig tree\npear"
    );
    assert_eq!(
      sort_lines(text, LineOrder::ReverseAlphabetical),
      "pear\nfig tree\nbanana\napple"
    );
    assert_eq!(
      sort_lines(text, LineOrder::WordCount),
      "pear\napple\nbanana\nfig tree"
    );
    assert_eq!(
      sort_lines(text, LineOrder::Length),
      "pear\napple\nbanana\nfig tree"
    );
  }

  quickcheck::quickcheck! {
    fn wrapped_lines_fit(text: String, length: u8) -> bool {
      let length = usize::from(length % 16) + 1;
      if text.contains('\n') {
        return true;
      }
      let wrapped = wrap_text(&text, length);
      wrapped.replace('\n', "") == text
        && wrapped.split('\n').all(|line| line.chars().count() <= length)
    }
  }
}
